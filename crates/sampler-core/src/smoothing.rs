//! Centered moving-average smoothing over a sampled series.

use speedtrace_series_model::SpeedRecord;

/// Replace each record's speed with the mean of a centered window of
/// `window` records, rounded to the nearest integer.
///
/// The window is clamped to the available record bounds: near the edges
/// it shrinks asymmetrically rather than wrapping or padding. Record
/// count and frame boundaries are preserved; only speeds change. A
/// window of 1 is a no-op.
pub fn moving_average(records: &[SpeedRecord], window: u32) -> Vec<SpeedRecord> {
    let window = window.max(1) as usize;
    if records.is_empty() || window == 1 {
        return records.to_vec();
    }

    let half = window / 2;
    let mut smoothed = Vec::with_capacity(records.len());

    for i in 0..records.len() {
        let start = i.saturating_sub(half);
        let end = (i + half + 1).min(records.len());

        let sum: i64 = records[start..end].iter().map(|r| r.speed).sum();
        let mean = sum as f64 / (end - start) as f64;

        smoothed.push(SpeedRecord::new(
            records[i].frame_start,
            records[i].frame_end,
            mean.round() as i64,
        ));
    }

    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(speeds: &[i64]) -> Vec<SpeedRecord> {
        speeds
            .iter()
            .enumerate()
            .map(|(i, &s)| SpeedRecord::new(i as i64, i as i64 + 1, s))
            .collect()
    }

    #[test]
    fn test_window_three_shrinks_at_edges() {
        // [10,20,30,40] with a centered window of 3:
        // edge windows shrink to the available neighbors.
        let smoothed = moving_average(&series(&[10, 20, 30, 40]), 3);
        let speeds: Vec<i64> = smoothed.iter().map(|r| r.speed).collect();
        assert_eq!(speeds, vec![15, 20, 30, 35]);
    }

    #[test]
    fn test_window_one_is_noop() {
        let input = series(&[5, 90, 12, 41]);
        assert_eq!(moving_average(&input, 1), input);
    }

    #[test]
    fn test_frame_boundaries_and_count_preserved() {
        let input = series(&[100, 0, 100, 0, 100]);
        let smoothed = moving_average(&input, 5);
        assert_eq!(smoothed.len(), input.len());
        for (raw, out) in input.iter().zip(&smoothed) {
            assert_eq!(raw.frame_start, out.frame_start);
            assert_eq!(raw.frame_end, out.frame_end);
        }
    }

    #[test]
    fn test_window_wider_than_series_averages_everything() {
        let smoothed = moving_average(&series(&[10, 20, 30]), 99);
        // Every window clamps to the full series: mean = 20.
        assert!(smoothed.iter().all(|r| r.speed == 20));
    }

    #[test]
    fn test_mean_rounds_to_nearest() {
        // Window covering [10, 15] has mean 12.5, rounding away from zero.
        let smoothed = moving_average(&series(&[10, 15]), 3);
        assert_eq!(smoothed[0].speed, 13);
        assert_eq!(smoothed[1].speed, 13);
    }

    #[test]
    fn test_constant_series_is_fixed_point() {
        let input = series(&[42, 42, 42, 42, 42, 42]);
        assert_eq!(moving_average(&input, 3), input);
    }

    #[test]
    fn test_empty_series() {
        assert!(moving_average(&[], 3).is_empty());
    }
}
