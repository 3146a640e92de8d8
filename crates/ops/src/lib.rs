//! Speedtrace Operators
//!
//! The user-facing passes, each one linear walk over a frame range or a
//! parsed series:
//! - **Capture:** Sample the active object's speed into a text block
//! - **Transfer:** Drive a value-node curve in a shader or
//!   geometry-node graph from a parsed series
//! - **Overlay:** Display the per-frame speed on a text object,
//!   keyframed on every frame change
//!
//! Operators run against the capability traits in `speedtrace-host-core`
//! and never touch a concrete host directly.

pub mod capture;
pub mod overlay;
pub mod transfer;

pub use capture::capture_speed;
pub use overlay::display_speed_overlay;
pub use transfer::{transfer_to_geometry_graph, transfer_to_shader_graph, TransferReport};
