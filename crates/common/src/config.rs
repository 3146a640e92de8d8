//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default sampling settings.
    pub sample: SampleConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// User-chosen options for a sampling run and its consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Name of the text block holding the serialized speed series.
    pub series_name: String,

    /// Smooth the sampled speeds with a centered moving average.
    pub apply_averaging: bool,

    /// Moving-average window width (minimum 1).
    pub averaging_window: u32,

    /// Sample at a stride larger than one frame.
    pub use_interval: bool,

    /// Stride between sampled frames (minimum 1).
    pub interval: u32,

    /// Text displayed before the speed value on the overlay.
    pub text_before: String,

    /// Text displayed after the speed value on the overlay.
    pub text_after: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "speedtrace=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sample: SampleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            series_name: "speed_data".to_string(),
            apply_averaging: false,
            averaging_window: 5,
            use_interval: false,
            interval: 1,
            text_before: String::new(),
            text_after: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl SampleConfig {
    /// Stride actually used by a sampling run.
    ///
    /// The interval only applies when `use_interval` is set, and is
    /// clamped to the documented minimum of one frame.
    pub fn effective_interval(&self) -> u32 {
        if self.use_interval {
            self.interval.max(1)
        } else {
            1
        }
    }

    /// Window width actually used when averaging (minimum 1).
    pub fn effective_window(&self) -> u32 {
        self.averaging_window.max(1)
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from `path`. A missing, unreadable, or malformed
    /// file falls back to defaults; read and parse failures are warned
    /// about rather than escalated.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("speedtrace").join("config.json")
}
