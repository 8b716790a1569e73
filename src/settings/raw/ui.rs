use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct UiSettings {
	pub(super) theme: String,
	pub(super) initial_query: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn resolve(&self) -> UiSettings {
		UiSettings {
			theme: self
				.theme
				.clone()
				.unwrap_or_else(|| hubgrid::tui::theme::default_name().to_string()),
			initial_query: self.initial_query.clone().unwrap_or_default(),
		}
	}
}
