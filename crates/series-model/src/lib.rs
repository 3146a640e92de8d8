//! Speedtrace Series Model
//!
//! Defines the core data contracts for speed series:
//! - **Records:** Per-step speed measurements over a frame range
//! - **Codec:** The `frameStart,frameEnd,speed` line interchange format
//! - **Lookup:** Frame-indexed speed resolution for overlay display
//! - **Motion:** Keyed planar position traces for offline sampling
//!
//! The serialized line format is the sole interchange between the
//! sampler and every consumer; consumers re-parse it rather than
//! sharing structured data.

pub mod lookup;
pub mod motion;
pub mod record;

pub use lookup::*;
pub use motion::*;
pub use record::*;

/// Frame index on the host timeline. Signed: hosts allow negative frames.
pub type FrameNumber = i64;
