//! Speedtrace host core contracts.
//!
//! This crate contains the capability traits the operators run against
//! and the portable host data structures (node graphs, actions,
//! f-curves, keyframes) used without coupling to a concrete host
//! application. [`memory`] provides the in-memory backend used by tests
//! and offline tooling.

pub mod graph;
pub mod hub;
pub mod memory;

pub use graph::{Action, FCurve, Interpolation, Keyframe, NodeGraph, NodeId, ValueNode};
pub use hub::{FrameChangeHub, FrameObserver, SubscriptionId};
pub use memory::{Document, MemoryHost};

use speedtrace_common::SpeedtraceResult;
use speedtrace_series_model::FrameNumber;

/// Timeline and active-object access.
pub trait SceneHost {
    /// Inclusive frame range of the timeline.
    fn frame_range(&self) -> (FrameNumber, FrameNumber);

    /// Timeline frame rate.
    fn fps(&self) -> f64;

    /// Current frame of the timeline.
    fn current_frame(&self) -> FrameNumber;

    /// Seek the timeline to `frame` and sample the active object's
    /// planar position. `MissingSelection` when no object is active.
    fn position_at(&mut self, frame: FrameNumber) -> SpeedtraceResult<(f64, f64)>;
}

/// Named text blocks owned by the host document.
pub trait TextStore {
    /// Write a block, creating it if absent and clearing it otherwise.
    fn write_text(&mut self, name: &str, contents: &str);

    /// Read a block's contents if it exists.
    fn read_text(&self, name: &str) -> Option<&str>;
}

/// Access to the node graphs keyframes can be written into.
pub trait GraphHost {
    /// Shader graph of the active object's active material.
    /// `MissingSelection` when there is none.
    fn shader_graph(&mut self) -> SpeedtraceResult<&mut NodeGraph>;

    /// Node graph of the active object's geometry-nodes modifier.
    /// `MissingSelection` when there is none.
    fn geometry_graph(&mut self) -> SpeedtraceResult<&mut NodeGraph>;
}

/// The singleton on-screen overlay text object.
pub trait OverlayHost {
    /// Create the overlay object if it does not exist yet.
    fn ensure_overlay(&mut self);

    /// Replace the overlay's displayed text.
    fn set_overlay_body(&mut self, body: &str);

    /// Record a keyframe of the current overlay text at `frame`.
    fn keyframe_overlay_body(&mut self, frame: FrameNumber);

    /// Current overlay text, if the overlay exists.
    fn overlay_body(&self) -> Option<&str>;
}
