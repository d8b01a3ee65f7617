//! File-based diagnostic logging.
//!
//! The TUI owns the terminal, so log output goes to a file under the
//! platform data directory instead of stdout. The filter defaults to `info`
//! and can be adjusted through `RUST_LOG`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::tui::AppError;

/// Initializes the global tracing subscriber, writing to
/// `<data_dir>/jobform/jobform.log`.
///
/// The returned guard must stay alive for the duration of the program so
/// buffered log lines are flushed on exit.
pub fn init() -> Result<WorkerGuard, AppError> {
    let dir = default_log_dir()?;
    fs::create_dir_all(&dir)?;
    let file_appender = tracing_appender::rolling::never(dir, "jobform.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Returns the log directory under the platform data dir.
fn default_log_dir() -> Result<PathBuf, AppError> {
    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?;
    Ok(data_dir.join("jobform"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_is_app_scoped() {
        if let Ok(dir) = default_log_dir() {
            assert!(dir.ends_with("jobform"));
        }
    }
}
