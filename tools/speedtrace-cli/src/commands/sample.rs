//! Sample a motion trace into a speed series file.

use std::path::PathBuf;

use speedtrace_sampler_core::{moving_average, sample_speeds, SamplePlan};
use speedtrace_series_model::{serialize_series, MotionTrace};

#[allow(clippy::too_many_arguments)]
pub fn run(
    trace_path: PathBuf,
    output: PathBuf,
    fps: f64,
    interval: u32,
    start: Option<i64>,
    end: Option<i64>,
    average: Option<u32>,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&trace_path)
        .map_err(|_| anyhow::anyhow!("Trace file not found: {}", trace_path.display()))?;
    let trace = MotionTrace::parse(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse motion trace: {e}"))?;

    println!("Sampling trace: {}", trace_path.display());
    println!("  Keys: {}", trace.len());

    let (first, last) = trace
        .frame_range()
        .ok_or_else(|| anyhow::anyhow!("Motion trace has no keys"))?;
    let start = start.unwrap_or(first);
    let end = end.unwrap_or(last);

    let plan = SamplePlan::new(start, end, interval, fps)?;
    let mut source = |frame: i64| -> speedtrace_common::SpeedtraceResult<(f64, f64)> {
        Ok(trace.position_at(frame).unwrap_or((0.0, 0.0)))
    };
    let mut records = sample_speeds(&plan, &mut source)?;
    println!(
        "  Sampled {} records over [{start}, {end}] at stride {interval}",
        records.len()
    );

    if let Some(window) = average {
        records = moving_average(&records, window);
        println!("  Smoothed with window {}", window.max(1));
    }

    std::fs::write(&output, serialize_series(&records))?;
    println!("\nSeries written to: {}", output.display());

    Ok(())
}
