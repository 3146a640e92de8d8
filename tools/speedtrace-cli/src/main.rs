//! Speedtrace CLI — offline tooling for speed series files.
//!
//! Usage:
//!   speedtrace sample <TRACE>      Sample a motion trace into a series
//!   speedtrace smooth <SERIES>     Smooth a series with a moving average
//!   speedtrace info <SERIES>       Show series statistics
//!   speedtrace validate <SERIES>   Strict-parse a series and report errors

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "speedtrace",
    about = "Per-frame speed extraction for keyed planar motion",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a motion trace (JSONL) into a speed series
    Sample {
        /// Path to the motion trace file
        trace: PathBuf,

        /// Output series file
        #[arg(short, long, default_value = "speed_data.txt")]
        output: PathBuf,

        /// Frame rate of the timeline
        #[arg(long, default_value = "24")]
        fps: f64,

        /// Stride between sampled frames
        #[arg(long, default_value = "1")]
        interval: u32,

        /// First frame (defaults to the trace's first key)
        #[arg(long)]
        start: Option<i64>,

        /// Last frame (defaults to the trace's last key)
        #[arg(long)]
        end: Option<i64>,

        /// Smooth with a centered moving average of this window
        #[arg(long)]
        average: Option<u32>,
    },

    /// Smooth an existing series with a centered moving average
    Smooth {
        /// Path to the series file
        series: PathBuf,

        /// Window width
        #[arg(short, long, default_value = "5")]
        window: u32,

        /// Output file (defaults to rewriting in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show statistics for a series file
    Info {
        /// Path to the series file
        series: PathBuf,
    },

    /// Strict-parse a series file and report problems
    Validate {
        /// Path to the series file
        series: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // App config supplies the logging defaults; --verbose overrides the level.
    let mut config = speedtrace_common::config::AppConfig::load();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    speedtrace_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Sample {
            trace,
            output,
            fps,
            interval,
            start,
            end,
            average,
        } => commands::sample::run(trace, output, fps, interval, start, end, average),
        Commands::Smooth {
            series,
            window,
            output,
        } => commands::smooth::run(series, window, output),
        Commands::Info { series } => commands::info::run(series),
        Commands::Validate { series } => commands::validate::run(series),
    }
}
