//! Frame-indexed speed lookup for overlay display.

use std::collections::HashMap;

use crate::{FrameNumber, SpeedRecord};

/// Frame → speed mapping built once from a parsed series.
///
/// Each record is expanded over its inclusive `[frame_start, frame_end]`
/// range. Ranges are expected non-overlapping; when they do overlap,
/// later records win.
#[derive(Debug, Clone, Default)]
pub struct FrameSpeedLookup {
    map: HashMap<FrameNumber, i64>,
}

impl FrameSpeedLookup {
    pub fn from_records(records: &[SpeedRecord]) -> Self {
        let mut map = HashMap::new();
        for record in records {
            for frame in record.frame_start..=record.frame_end {
                map.insert(frame, record.speed);
            }
        }
        Self { map }
    }

    /// Speed at a frame, defaulting to 0 outside any record range.
    pub fn speed_at(&self, frame: FrameNumber) -> i64 {
        self.map.get(&frame).copied().unwrap_or(0)
    }

    /// Number of frames covered by the mapping.
    pub fn covered_frames(&self) -> usize {
        self.map.len()
    }
}
