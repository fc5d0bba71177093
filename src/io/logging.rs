use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;

/// Directory for log files: `<data dir>/donut/logs`
pub fn logs_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("donut").join("logs"))
}

/// Initialize file-based logging for the TUI.
///
/// The terminal belongs to the UI, so logs go to a daily rolling file
/// (`donut.log.<date>` under [`logs_dir`]). The level comes from `RUST_LOG`
/// and defaults to `info`. Returns `None` when no log directory is usable;
/// the app runs without logging in that case. Keep the guard alive for the
/// whole session or buffered lines are lost.
pub fn init_file_logging() -> Option<WorkerGuard> {
    let logs_dir = logs_dir()?;
    if fs::create_dir_all(&logs_dir).is_err() {
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "donut.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    installed.then_some(guard)
}
