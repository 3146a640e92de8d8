//! Smooth an existing series file with a centered moving average.

use std::path::PathBuf;

use speedtrace_sampler_core::moving_average;
use speedtrace_series_model::{parse_series, serialize_series};

pub fn run(series: PathBuf, window: u32, output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&series)
        .map_err(|_| anyhow::anyhow!("Series file not found: {}", series.display()))?;
    let records = parse_series(&content)?;

    println!("Smoothing series: {}", series.display());
    println!("  Records: {}", records.len());

    let smoothed = moving_average(&records, window);
    let output = output.unwrap_or(series);
    std::fs::write(&output, serialize_series(&smoothed))?;

    println!("  Window: {}", window.max(1));
    println!("\nSmoothed series written to: {}", output.display());

    Ok(())
}
