//! File logging setup.
//!
//! The TUI owns the terminal, so logs only go to a file, and only when one
//! is requested.

use color_eyre::eyre::{eyre, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a subscriber that writes to `path`.
///
/// Returns a `WorkerGuard` that must be kept alive until exit so buffered
/// lines are flushed.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("log file path '{}' has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))?;

    Ok(guard)
}
