//! Error types shared across Speedtrace crates.

/// Top-level error type for Speedtrace operations.
#[derive(Debug, thiserror::Error)]
pub enum SpeedtraceError {
    /// No active object, material, or node-graph modifier to operate on.
    #[error("Missing selection: {message}")]
    MissingSelection { message: String },

    /// The named speed series text block does not exist.
    #[error("No speed series named '{name}' found")]
    MissingDataSeries { name: String },

    /// A serialized series line failed to parse.
    #[error("Malformed series at line {line}: {message}")]
    MalformedSeries { line: usize, message: String },

    /// Frame rate must be strictly positive to derive elapsed time.
    #[error("Invalid frame rate: {fps} (must be > 0)")]
    InvalidFrameRate { fps: f64 },

    /// The frame range yields no samples at all.
    #[error("Frame range [{start}, {end}] yields no samples")]
    EmptyRange { start: i64, end: i64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SpeedtraceError.
pub type SpeedtraceResult<T> = Result<T, SpeedtraceError>;

impl SpeedtraceError {
    pub fn missing_selection(msg: impl Into<String>) -> Self {
        Self::MissingSelection {
            message: msg.into(),
        }
    }

    pub fn missing_series(name: impl Into<String>) -> Self {
        Self::MissingDataSeries { name: name.into() }
    }

    pub fn malformed(line: usize, msg: impl Into<String>) -> Self {
        Self::MalformedSeries {
            line,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
