//! Logging Infrastructure
//!
//! `tracing-subscriber` with an env filter, writing to stderr or to a
//! daily-rolling file. Stdout stays reserved for the terminal station.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "price-checker";

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. File output is used only when
/// `log_dir` exists.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(appender) = log_dir.and_then(file_appender) {
        subscriber.with_ansi(false).with_writer(appender).init();
        return;
    }

    subscriber.with_writer(std::io::stderr).init();
}

/// Filter directive covering the station crates at `log_level`
pub fn default_filter(log_level: Option<&str>) -> String {
    let level = log_level.unwrap_or("info");
    format!("price_checker={level},off_client={level}")
}

/// Daily-rolling appender in `dir`, or `None` when the directory is missing
pub fn file_appender(dir: &str) -> Option<RollingFileAppender> {
    let log_path = Path::new(dir);
    if !log_path.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX))
}
