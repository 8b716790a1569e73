//! File logging through `tracing`.
//!
//! The terminal belongs to the grid while it runs, so events go to
//! `hubgrid.log` in the data directory instead of stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_NAME: &str = "hubgrid.log";
/// Filter variable checked before `RUST_LOG`.
pub const LOG_FILTER_ENV: &str = "HUBGRID_LOG";
const DEFAULT_FILTER: &str = "info";

/// Keeps the background writer alive. Dropping it flushes the log file.
pub struct LoggingGuard {
	_file_guard: WorkerGuard,
	path: PathBuf,
}

impl LoggingGuard {
	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// Install the global subscriber writing to `dir/hubgrid.log`.
///
/// Fails if the directory cannot be created or a subscriber is already set.
pub fn init(dir: &Path) -> Result<LoggingGuard> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
	let (writer, file_guard) = tracing_appender::non_blocking(appender);

	let file_layer = fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.with_level(true)
		.with_thread_names(true);

	tracing_subscriber::registry()
		.with(env_filter())
		.with(file_layer)
		.try_init()
		.context("a global tracing subscriber is already installed")?;

	let path = dir.join(LOG_FILE_NAME);
	tracing::info!(log_path = %path.display(), "logging initialized");

	Ok(LoggingGuard {
		_file_guard: file_guard,
		path,
	})
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_FILTER_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
