use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalogue;
mod engine;
mod ui;

use catalogue::CatalogueSection;
use engine::{AiSection, GridSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalogue: CatalogueSection,
	ai: AiSection,
	grid: GridSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalogue.apply_cli_overrides(cli);
		self.ai.apply_cli_overrides(cli);
		self.grid.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.detect_sources(cli);

		let catalogue = self.catalogue.resolve()?;
		let ai = self.ai.resolve();
		let ui = self.ui.resolve();

		let config = ResolvedConfig {
			catalogue: catalogue.location,
			catalogue_limit: catalogue.limit,
			page_size: catalogue.page_size,
			ai_endpoint: ai.endpoint,
			ai_timeout: ai.timeout,
			grid: self.grid.resolve(),
			theme: ui.theme,
			initial_query: ui.initial_query,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}

	fn detect_sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		sources.record(
			"catalogue.url",
			detect_source(
				cli.catalogue_url.is_some(),
				self.catalogue.url.is_some(),
				"HUBGRID__CATALOGUE__URL",
				"--catalogue-url",
			),
		);
		sources.record(
			"catalogue.limit",
			detect_source(
				cli.limit.is_some(),
				self.catalogue.limit.is_some(),
				"HUBGRID__CATALOGUE__LIMIT",
				"--limit",
			),
		);
		sources.record(
			"catalogue.page_size",
			detect_source(
				cli.page_size.is_some(),
				self.catalogue.page_size.is_some(),
				"HUBGRID__CATALOGUE__PAGE_SIZE",
				"--page-size",
			),
		);
		sources.record(
			"ai.endpoint",
			detect_source(
				cli.ai_endpoint.is_some(),
				self.ai.endpoint.is_some(),
				"HUBGRID__AI__ENDPOINT",
				"--ai-endpoint",
			),
		);
		sources.record(
			"ai.timeout_secs",
			detect_source(
				cli.ai_timeout.is_some(),
				self.ai.timeout_secs.is_some(),
				"HUBGRID__AI__TIMEOUT_SECS",
				"--ai-timeout",
			),
		);
		sources.record(
			"grid.min_slots",
			detect_source(
				cli.min_slots.is_some(),
				self.grid.min_slots.is_some(),
				"HUBGRID__GRID__MIN_SLOTS",
				"--min-slots",
			),
		);
		sources.record(
			"ui.theme",
			detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HUBGRID__UI__THEME",
				"--theme",
			),
		);
		sources
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	None
}

#[cfg(test)]
mod tests;
