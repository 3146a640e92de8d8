//! Keyed planar motion traces.
//!
//! A motion trace is the offline stand-in for a live scene: planar
//! object positions keyed at frames, stored as JSONL (one JSON object
//! per line, `#`-prefixed comment lines skipped). Position lookup uses
//! step/hold semantics: a frame between keys takes the last keyed value
//! at or before it, and frames before the first key hold the first
//! keyed value.

use serde::{Deserialize, Serialize};

use crate::FrameNumber;

/// A planar position keyed at a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Frame the position is keyed at.
    #[serde(rename = "f")]
    pub frame: FrameNumber,

    /// Planar X position in native length units.
    pub x: f64,

    /// Planar Y position in native length units.
    pub y: f64,
}

/// An ordered set of keyed positions for one object.
#[derive(Debug, Clone, Default)]
pub struct MotionTrace {
    samples: Vec<MotionSample>,
}

impl MotionTrace {
    /// Build a trace, sorting samples by frame.
    pub fn new(mut samples: Vec<MotionSample>) -> Self {
        samples.sort_by_key(|s| s.frame);
        Self { samples }
    }

    /// Parse a trace from JSONL content (one JSON object per line).
    pub fn parse(jsonl: &str) -> Result<Self, serde_json::Error> {
        let samples = jsonl
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(serde_json::from_str)
            .collect::<Result<Vec<MotionSample>, _>>()?;
        Ok(Self::new(samples))
    }

    /// Serialize the trace to JSONL.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut output = String::new();
        for sample in &self.samples {
            output.push_str(&serde_json::to_string(sample)?);
            output.push('\n');
        }
        Ok(output)
    }

    /// Position at a frame with step/hold lookup; `None` for an empty trace.
    pub fn position_at(&self, frame: FrameNumber) -> Option<(f64, f64)> {
        let first = self.samples.first()?;
        if frame <= first.frame {
            return Some((first.x, first.y));
        }

        let idx = match self.samples.binary_search_by_key(&frame, |s| s.frame) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let sample = &self.samples[idx];
        Some((sample.x, sample.y))
    }

    /// Frame span covered by the keys, `None` when empty.
    pub fn frame_range(&self) -> Option<(FrameNumber, FrameNumber)> {
        Some((self.samples.first()?.frame, self.samples.last()?.frame))
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
