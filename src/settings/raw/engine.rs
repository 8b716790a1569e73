use std::time::Duration;

use serde::Deserialize;

use hubgrid::GridConfig;

use crate::cli::CliArgs;

const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

/// `[ai]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct AiSection {
	pub(super) endpoint: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct AiSettings {
	pub(super) endpoint: Option<String>,
	pub(super) timeout: Duration,
}

impl AiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.ai_endpoint.clone() {
			self.endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.ai_timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn resolve(&self) -> AiSettings {
		AiSettings {
			endpoint: self
				.endpoint
				.as_deref()
				.map(str::trim)
				.filter(|endpoint| !endpoint.is_empty())
				.map(str::to_string),
			timeout: Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS)),
		}
	}
}

/// `[grid]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct GridSection {
	pub(super) min_slots: Option<usize>,
	pub(super) extra_rows: Option<usize>,
}

impl GridSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(min_slots) = cli.min_slots {
			self.min_slots = Some(min_slots);
		}
	}

	pub(super) fn resolve(&self) -> GridConfig {
		let defaults = GridConfig::default();
		GridConfig {
			min_slots: self.min_slots.unwrap_or(defaults.min_slots),
			extra_rows: self.extra_rows.unwrap_or(defaults.extra_rows),
		}
	}
}
