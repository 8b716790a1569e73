use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::CatalogueLocation;

const DEFAULT_LIMIT: usize = 100;
const DEFAULT_PAGE_SIZE: usize = 20;

/// `[catalogue]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogueSection {
	pub(super) path: Option<PathBuf>,
	pub(super) url: Option<String>,
	pub(super) limit: Option<usize>,
	pub(super) page_size: Option<usize>,
}

pub(super) struct CatalogueSettings {
	pub(super) location: CatalogueLocation,
	pub(super) limit: usize,
	pub(super) page_size: usize,
}

impl CatalogueSection {
	/// A location given on the command line replaces both configured ones.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalogue.clone() {
			self.path = Some(path);
			self.url = None;
		}
		if let Some(url) = cli.catalogue_url.clone() {
			self.url = Some(url);
			self.path = None;
		}
		if let Some(limit) = cli.limit {
			self.limit = Some(limit);
		}
		if let Some(page_size) = cli.page_size {
			self.page_size = Some(page_size);
		}
	}

	pub(super) fn resolve(&self) -> Result<CatalogueSettings> {
		let location = match (&self.path, &self.url) {
			(Some(path), None) => CatalogueLocation::File(path.clone()),
			(None, Some(url)) => CatalogueLocation::Url(url.trim().to_string()),
			(Some(_), Some(_)) => {
				bail!("both catalogue.path and catalogue.url are set; keep only one")
			}
			(None, None) => bail!(
				"no catalogue configured: pass --catalogue PATH or --catalogue-url URL, \
				 or set catalogue.path in config.toml"
			),
		};

		Ok(CatalogueSettings {
			location,
			limit: self.limit.unwrap_or(DEFAULT_LIMIT),
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
		})
	}
}
