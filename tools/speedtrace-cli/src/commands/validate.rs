//! Strict-parse a series file and report problems.

use std::path::PathBuf;

use speedtrace_common::SpeedtraceError;
use speedtrace_series_model::parse_series;

pub fn run(series: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&series)
        .map_err(|_| anyhow::anyhow!("Series file not found: {}", series.display()))?;

    println!("Validating series: {}", series.display());

    match parse_series(&content) {
        Ok(records) => {
            let mut warnings = 0usize;
            for pair in records.windows(2) {
                if pair[1].frame_start != pair[0].frame_end {
                    println!(
                        "  Warning: records {} and {} are not contiguous ({} != {})",
                        pair[0].to_line(),
                        pair[1].to_line(),
                        pair[0].frame_end,
                        pair[1].frame_start
                    );
                    warnings += 1;
                }
            }
            println!("  Records: {}", records.len());
            if warnings == 0 {
                println!("\nSeries is valid.");
            } else {
                println!("\n{warnings} contiguity warning(s). Series parses but looks gappy.");
            }
            Ok(())
        }
        Err(SpeedtraceError::MalformedSeries { line, message }) => {
            println!("  Line {line}: {message}");
            anyhow::bail!("Series is malformed")
        }
        Err(e) => Err(e.into()),
    }
}
