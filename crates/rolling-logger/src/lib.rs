//! Rolling Logger
//!
//! Installs a tracing subscriber that writes to stderr and to a daily
//! rolling log file in `log_dir`. File writes go through a non-blocking
//! worker; keep the returned guard alive for the life of the process so
//! buffered lines are flushed on exit.
//! `log` records are bridged into tracing by the subscriber.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Number of daily files kept on disk
pub const MAX_LOG_FILES: usize = 7;

/// Daily appender producing `<app_name>.<YYYY-MM-DD>.log`, pruned to `MAX_LOG_FILES`
pub fn build_appender(log_dir: &Path, app_name: &str) -> Result<RollingFileAppender, String> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| format!("Failed to create log dir {}: {}", log_dir.display(), e))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))
}

/// Initialize logging into `log_dir`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(log_dir: &Path, app_name: &str) -> Result<WorkerGuard, String> {
    let appender = build_appender(log_dir, app_name)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(std::io::stderr.and(file_writer))
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::info!(log_dir = %log_dir.display(), "rolling logger ready");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn log_files(dir: &Path, prefix: &str) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| name.starts_with(&format!("{}.", prefix)) && name.ends_with(".log"))
            .collect()
    }

    #[test]
    fn test_appender_writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut appender = build_appender(dir.path(), "Board").unwrap();

        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let files = log_files(dir.path(), "Board");
        assert_eq!(files.len(), 1);
        // Board.YYYY-MM-DD.log
        assert_eq!(files[0].len(), "Board.".len() + 10 + ".log".len());
        let content = std::fs::read_to_string(dir.path().join(&files[0])).unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn test_appender_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        build_appender(&log_dir, "Board").unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_init_logger_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let first = init_logger(dir.path(), "Board");
        let second = init_logger(dir.path(), "Board");
        assert!(first.is_ok());
        assert!(second.is_err());
    }
}
