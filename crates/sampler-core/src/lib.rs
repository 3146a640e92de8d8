//! Speedtrace Sampler Core
//!
//! The measurement passes:
//! - **Sampling:** Walk a frame range at a stride and derive per-step
//!   planar speeds from consecutive positions
//! - **Smoothing:** Centered moving average over a sampled series
//!
//! This crate is pure computation — no I/O, no host coupling beyond the
//! [`PositionSource`] seam. All inputs are data; all outputs are data.

pub mod sampler;
pub mod smoothing;

pub use sampler::{sample_speeds, PositionSource, SamplePlan, SPEED_SCALE};
pub use smoothing::moving_average;
