//! The speed sampling pass.

use speedtrace_common::{SpeedtraceError, SpeedtraceResult};
use speedtrace_series_model::{FrameNumber, SpeedRecord};

/// Conversion from the host's native length unit to the display unit
/// (centi-units) expected by every downstream consumer. Part of the
/// sampling contract: `speed = round((distance / elapsed) * SPEED_SCALE)`.
pub const SPEED_SCALE: f64 = 100.0;

/// Supplies an object's planar position at a frame.
///
/// Takes `&mut self` because live hosts seek their current frame to
/// sample a position; the sampler drives that seek sequentially and
/// synchronously, one frame at a time.
pub trait PositionSource {
    fn position_at(&mut self, frame: FrameNumber) -> SpeedtraceResult<(f64, f64)>;
}

impl<F> PositionSource for F
where
    F: FnMut(FrameNumber) -> SpeedtraceResult<(f64, f64)>,
{
    fn position_at(&mut self, frame: FrameNumber) -> SpeedtraceResult<(f64, f64)> {
        self(frame)
    }
}

/// A validated sampling run over an inclusive frame range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePlan {
    /// First sampled frame (inclusive).
    pub start: FrameNumber,

    /// Last candidate frame (inclusive).
    pub end: FrameNumber,

    /// Stride between sampled frames, at least 1.
    pub interval: u32,

    /// Timeline frame rate, strictly positive.
    pub fps: f64,
}

impl SamplePlan {
    /// Validate a plan. Rejects a non-positive frame rate and a range
    /// that yields no samples at all (`end < start`). `start == end` is
    /// accepted and produces zero records (one sample, no prior
    /// position to diff against).
    pub fn new(
        start: FrameNumber,
        end: FrameNumber,
        interval: u32,
        fps: f64,
    ) -> SpeedtraceResult<Self> {
        if !(fps > 0.0) {
            return Err(SpeedtraceError::InvalidFrameRate { fps });
        }
        if end < start {
            return Err(SpeedtraceError::EmptyRange { start, end });
        }
        Ok(Self {
            start,
            end,
            interval: interval.max(1),
            fps,
        })
    }

    /// Number of records the plan will emit: `floor((end - start) / interval)`.
    pub fn record_count(&self) -> usize {
        ((self.end - self.start) / self.interval as i64) as usize
    }
}

/// Sample per-step speeds over a frame range.
///
/// For each frame `f` in `start, start + interval, ...` up to `end`,
/// fetch the position; once a previous position exists, derive the
/// planar distance between the two samples, the elapsed time
/// `interval / fps`, and emit `(f - interval, f, speed)` with
/// `speed = round((distance / elapsed) * SPEED_SCALE)`. The first
/// sampled frame emits nothing.
pub fn sample_speeds(
    plan: &SamplePlan,
    source: &mut impl PositionSource,
) -> SpeedtraceResult<Vec<SpeedRecord>> {
    let interval = plan.interval as i64;
    let elapsed = plan.interval as f64 / plan.fps;

    let mut records = Vec::with_capacity(plan.record_count());
    let mut prev: Option<(f64, f64)> = None;

    let mut frame = plan.start;
    while frame <= plan.end {
        let (x, y) = source.position_at(frame)?;

        if let Some((px, py)) = prev {
            let dx = x - px;
            let dy = y - py;
            let distance = (dx * dx + dy * dy).sqrt();
            let speed = ((distance / elapsed) * SPEED_SCALE).round() as i64;
            records.push(SpeedRecord::new(frame - interval, frame, speed));
        }

        prev = Some((x, y));
        frame += interval;
    }

    tracing::debug!(
        start = plan.start,
        end = plan.end,
        interval = plan.interval,
        records = records.len(),
        "sampled speed series"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Constant-velocity source: +100 native units on x per frame.
    fn constant_velocity(frame: FrameNumber) -> SpeedtraceResult<(f64, f64)> {
        Ok((frame as f64 * 100.0, 0.0))
    }

    #[test]
    fn test_worked_example() {
        // start=0, end=4, interval=1, fps=24, +100 units on x per frame:
        // distance=100 per step, elapsed=1/24 s,
        // speed=round(100 / (1/24) * 100) = 240000 for every record.
        let plan = SamplePlan::new(0, 4, 1, 24.0).unwrap();
        let records = sample_speeds(&plan, &mut constant_velocity).unwrap();

        assert_eq!(records.len(), 4);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.frame_start, i as i64);
            assert_eq!(record.frame_end, i as i64 + 1);
            assert_eq!(record.speed, 240000);
        }
    }

    #[test]
    fn test_constant_velocity_speed_is_interval_invariant() {
        let fps = 24.0;
        let mut speeds = Vec::new();
        for interval in [1u32, 2, 4] {
            let plan = SamplePlan::new(0, 8, interval, fps).unwrap();
            let records = sample_speeds(&plan, &mut constant_velocity).unwrap();
            assert!(!records.is_empty());
            assert!(records.iter().all(|r| r.speed == records[0].speed));
            speeds.push(records[0].speed);
        }
        // Longer strides cover proportionally more distance in
        // proportionally more time; the derived speed is unchanged.
        assert_eq!(speeds[0], speeds[1]);
        assert_eq!(speeds[1], speeds[2]);
    }

    #[test]
    fn test_records_are_contiguous_at_stride() {
        let plan = SamplePlan::new(10, 22, 3, 30.0).unwrap();
        let records = sample_speeds(&plan, &mut constant_velocity).unwrap();
        assert_eq!(records.len(), 4);
        for pair in records.windows(2) {
            assert_eq!(pair[0].frame_end, pair[1].frame_start);
        }
        assert_eq!(records[0].frame_start, 10);
        assert_eq!(records.last().unwrap().frame_end, 22);
    }

    #[test]
    fn test_planar_distance_uses_both_axes() {
        // 3-4-5 triangle per frame: distance 5 per step.
        let mut source = |frame: FrameNumber| -> SpeedtraceResult<(f64, f64)> {
            Ok((frame as f64 * 3.0, frame as f64 * 4.0))
        };
        let plan = SamplePlan::new(0, 1, 1, 25.0).unwrap();
        let records = sample_speeds(&plan, &mut source).unwrap();
        // 5 units / (1/25 s) * 100 = 12500
        assert_eq!(records[0].speed, 12500);
    }

    #[test]
    fn test_single_frame_range_yields_no_records() {
        let plan = SamplePlan::new(7, 7, 1, 24.0).unwrap();
        let records = sample_speeds(&plan, &mut constant_velocity).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = SamplePlan::new(5, 4, 1, 24.0).unwrap_err();
        assert!(matches!(
            err,
            speedtrace_common::SpeedtraceError::EmptyRange { start: 5, end: 4 }
        ));
    }

    #[test]
    fn test_non_positive_fps_is_rejected() {
        assert!(matches!(
            SamplePlan::new(0, 10, 1, 0.0).unwrap_err(),
            speedtrace_common::SpeedtraceError::InvalidFrameRate { .. }
        ));
        assert!(matches!(
            SamplePlan::new(0, 10, 1, -24.0).unwrap_err(),
            speedtrace_common::SpeedtraceError::InvalidFrameRate { .. }
        ));
    }

    #[test]
    fn test_source_error_propagates() {
        let mut source =
            |_: FrameNumber| -> SpeedtraceResult<(f64, f64)> {
                Err(speedtrace_common::SpeedtraceError::missing_selection(
                    "no active object",
                ))
            };
        let plan = SamplePlan::new(0, 4, 1, 24.0).unwrap();
        assert!(sample_speeds(&plan, &mut source).is_err());
    }

    proptest! {
        #[test]
        fn prop_record_count_matches_plan(
            start in -500i64..500,
            span in 0i64..200,
            interval in 1u32..16,
            fps in 1.0f64..120.0,
        ) {
            let plan = SamplePlan::new(start, start + span, interval, fps).unwrap();
            let records = sample_speeds(&plan, &mut constant_velocity).unwrap();
            prop_assert_eq!(records.len(), plan.record_count());
            prop_assert_eq!(records.len() as i64, span / interval as i64);
        }
    }
}
