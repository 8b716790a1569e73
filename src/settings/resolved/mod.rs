use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use hubgrid::GridConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where the default catalogue is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueLocation {
	File(PathBuf),
	Url(String),
}

impl fmt::Display for CatalogueLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Url(url) => f.write_str(url),
		}
	}
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub catalogue: CatalogueLocation,
	pub catalogue_limit: usize,
	pub page_size: usize,
	pub ai_endpoint: Option<String>,
	pub ai_timeout: Duration,
	pub grid: GridConfig,
	pub theme: String,
	pub initial_query: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
