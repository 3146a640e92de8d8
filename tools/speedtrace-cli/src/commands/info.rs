//! Show statistics for a series file.

use std::path::PathBuf;

use speedtrace_series_model::{parse_series, SeriesStats};

pub fn run(series: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&series)
        .map_err(|_| anyhow::anyhow!("Series file not found: {}", series.display()))?;
    let records = parse_series(&content)?;

    println!("Series: {}", series.display());
    match SeriesStats::from_records(&records) {
        Some(stats) => {
            println!("  Records: {}", stats.count);
            println!("  Frames: [{}, {}]", stats.frame_start, stats.frame_end);
            println!("  Lowest speed: {}", stats.min_speed);
            println!("  Highest speed: {}", stats.max_speed);
        }
        None => println!("  Records: 0 (empty series)"),
    }

    Ok(())
}
