//! Logging and tracing initialization.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// When `LoggingConfig.file` is set, output is appended to that file
/// with ANSI colors off; if the file cannot be opened, logging falls
/// back to stderr after a note. Without a file target, output goes to
/// the default writer, structured as JSON when `json` is set.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_writer = config.file.as_deref().and_then(open_log_file);

    match (file_writer, config.json) {
        (Some(writer), true) => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (Some(writer), false) => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (None, true) => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
        (None, false) => {
            let subscriber = fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber).ok();
        }
    }
}

/// Open the log file for appending, creating parent directories as
/// needed. `None` (with a note on stderr) when it cannot be opened.
fn open_log_file(path: &Path) -> Option<Mutex<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(Mutex::new(file)),
        Err(e) => {
            eprintln!("speedtrace: cannot open log file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_created_and_appended() {
        let path = std::env::temp_dir().join("speedtrace-logging-open-test.log");
        let _ = std::fs::remove_file(&path);

        assert!(open_log_file(&path).is_some());
        assert!(path.exists());

        // Append mode: reopening must not truncate existing content.
        std::fs::write(&path, "existing\n").unwrap();
        {
            use std::io::Write;
            let writer = open_log_file(&path).unwrap();
            writer.lock().unwrap().write_all(b"more\n").unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing\n"));
        assert!(content.ends_with("more\n"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_init_logging_honors_file_target() {
        let path = std::env::temp_dir().join("speedtrace-logging-init-test.log");
        let _ = std::fs::remove_file(&path);

        init_logging(&LoggingConfig {
            level: "info".to_string(),
            json: false,
            file: Some(path.clone()),
        });
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unopenable_log_file_falls_back() {
        // A directory path cannot be opened as a file.
        assert!(open_log_file(&std::env::temp_dir()).is_none());
    }
}
