//! Tracing/logging initialization.
//!
//! JSON lines with timestamps go to stdout and, when a log directory is
//! configured, to a daily-rotated file in that directory.

use std::path::{Path, PathBuf};

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{Builder as RollingBuilder, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "sapgate";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Default to `debug` instead of `info` when `RUST_LOG` is unset.
    pub debug: bool,
    /// Directory for rotated log files; `None` logs to stdout only.
    pub log_dir: Option<PathBuf>,
}

/// Keeps the background file writer alive; drop it last so buffered lines
/// are flushed.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LogGuard {
    file: Option<WorkerGuard>,
}

impl LogGuard {
    pub fn writes_to_file(&self) -> bool {
        self.file.is_some()
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times: once a subscriber is installed, later calls
/// return an empty guard without opening a file writer.
pub fn init(config: &LogConfig) -> LogGuard {
    if ::tracing::dispatcher::has_been_set() {
        return LogGuard::default();
    }

    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_writer, file_error) = match config.log_dir.as_deref().map(file_writer) {
        None => (None, None),
        Some(Ok(writer)) => (Some(writer), None),
        Some(Err(e)) => (None, Some(e)),
    };
    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_timer(fmt::time::SystemTime)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::SystemTime)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some(e) = file_error {
        ::tracing::warn!("file logging disabled, console only: {e:#}");
    }

    LogGuard { file: guard }
}

fn file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("cannot create log dir {}: {e}", dir.display()))?;

    let appender = RollingBuilder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?;

    Ok(tracing_appender::non_blocking(appender))
}
