//! File-based logging.
//!
//! While a screen session is active the terminal belongs to the renderer,
//! so diagnostics go to ${LYRSYNC_HOME}/logs/lyrsync.log instead of
//! stdout/stderr. Filtering follows RUST_LOG with an `info` default.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber with a file writer.
///
/// Returns a guard that must stay alive for the lifetime of the process;
/// dropping it flushes buffered log lines. Callers may treat failure as
/// non-fatal: playback works without logs.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(logs_dir, "lyrsync.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
