//! Speed records and the serialized series line format.
//!
//! A series is stored as newline-terminated `frameStart,frameEnd,speed`
//! lines with no header and no escaping. Every downstream consumer
//! re-parses this text; the parser is strict and reports the offending
//! 1-based line number on failure.

use serde::{Deserialize, Serialize};
use speedtrace_common::{SpeedtraceError, SpeedtraceResult};

use crate::FrameNumber;

/// One measured step: the speed observed between two sampled frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedRecord {
    /// First frame of the step (inclusive).
    pub frame_start: FrameNumber,

    /// Last frame of the step (inclusive); `frame_start + interval`.
    pub frame_end: FrameNumber,

    /// Speed over the step, rounded to the display unit.
    pub speed: i64,
}

impl SpeedRecord {
    pub fn new(frame_start: FrameNumber, frame_end: FrameNumber, speed: i64) -> Self {
        Self {
            frame_start,
            frame_end,
            speed,
        }
    }

    /// Render this record as one interchange line (no trailing newline).
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.frame_start, self.frame_end, self.speed)
    }
}

/// Serialize records to the interchange format, one line per record.
pub fn serialize_series(records: &[SpeedRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.to_line());
        output.push('\n');
    }
    output
}

/// Parse serialized series text back into records.
///
/// Empty lines are skipped. Each remaining line must split into exactly
/// three comma-separated integer fields; anything else is a
/// `MalformedSeries` error carrying the 1-based line number. Records are
/// returned in file order — the parser does not re-sort, downstream
/// consumers assume the input is already ascending.
pub fn parse_series(text: &str) -> SpeedtraceResult<Vec<SpeedRecord>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(SpeedtraceError::malformed(
                index + 1,
                format!("expected 3 comma-separated fields, got {}", fields.len()),
            ));
        }

        let parse_field = |name: &str, raw: &str| -> SpeedtraceResult<i64> {
            raw.trim().parse::<i64>().map_err(|e| {
                SpeedtraceError::malformed(index + 1, format!("{name} '{raw}' is not an integer: {e}"))
            })
        };

        records.push(SpeedRecord {
            frame_start: parse_field("frame start", fields[0])?,
            frame_end: parse_field("frame end", fields[1])?,
            speed: parse_field("speed", fields[2])?,
        });
    }

    Ok(records)
}

/// Summary statistics over a parsed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub min_speed: i64,
    pub max_speed: i64,
    pub frame_start: FrameNumber,
    pub frame_end: FrameNumber,
}

impl SeriesStats {
    /// Compute stats over a non-empty series; `None` when empty.
    pub fn from_records(records: &[SpeedRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut stats = Self {
            count: records.len(),
            min_speed: first.speed,
            max_speed: first.speed,
            frame_start: first.frame_start,
            frame_end: first.frame_end,
        };
        for record in records {
            stats.min_speed = stats.min_speed.min(record.speed);
            stats.max_speed = stats.max_speed.max(record.speed);
            stats.frame_start = stats.frame_start.min(record.frame_start);
            stats.frame_end = stats.frame_end.max(record.frame_end);
        }
        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_line_roundtrip() {
        let record = SpeedRecord::new(3, 4, 240000);
        let parsed = parse_series(&format!("{}\n", record.to_line())).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn test_serialize_format_matches_interchange_contract() {
        let records = vec![SpeedRecord::new(0, 1, 240000), SpeedRecord::new(1, 2, 120)];
        assert_eq!(serialize_series(&records), "0,1,240000\n1,2,120\n");
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let parsed = parse_series("0,1,10\n\n1,2,20\n").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_preserves_file_order() {
        // The reader does not re-sort; descending input stays descending.
        let parsed = parse_series("5,6,30\n0,1,10\n").unwrap();
        assert_eq!(parsed[0].frame_start, 5);
        assert_eq!(parsed[1].frame_start, 0);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = parse_series("0,1\n").unwrap_err();
        match err {
            speedtrace_common::SpeedtraceError::MalformedSeries { line, .. } => {
                assert_eq!(line, 1)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_field_with_line_number() {
        let err = parse_series("0,1,10\n1,two,20\n").unwrap_err();
        match err {
            speedtrace_common::SpeedtraceError::MalformedSeries { line, .. } => {
                assert_eq!(line, 2)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_frames_parse() {
        let parsed = parse_series("-5,-4,100\n").unwrap();
        assert_eq!(parsed[0], SpeedRecord::new(-5, -4, 100));
    }

    #[test]
    fn test_stats() {
        let records = vec![
            SpeedRecord::new(0, 1, 10),
            SpeedRecord::new(1, 2, 40),
            SpeedRecord::new(2, 3, 25),
        ];
        let stats = SeriesStats::from_records(&records).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min_speed, 10);
        assert_eq!(stats.max_speed, 40);
        assert_eq!(stats.frame_start, 0);
        assert_eq!(stats.frame_end, 3);

        assert!(SeriesStats::from_records(&[]).is_none());
    }

    proptest! {
        #[test]
        fn prop_series_roundtrip(
            records in proptest::collection::vec(
                (-10_000i64..10_000, 1i64..100, 0i64..1_000_000)
                    .prop_map(|(start, step, speed)| SpeedRecord::new(start, start + step, speed)),
                0..64,
            )
        ) {
            let text = serialize_series(&records);
            let parsed = parse_series(&text).unwrap();
            prop_assert_eq!(parsed, records);
        }
    }
}
