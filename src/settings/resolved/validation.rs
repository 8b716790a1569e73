use hubgrid::tui::theme;

use super::{CatalogueLocation, ConfigError, ConfigSources, ResolvedConfig};

/// Upper bounds that keep a packed grid well inside `u16` rows.
const MAX_MIN_SLOTS: usize = 10_000;
const MAX_EXTRA_ROWS: usize = 100;

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if let CatalogueLocation::Url(url) = &config.catalogue {
		check_http_url("catalogue.url", url, sources)?;
	}

	if config.catalogue_limit == 0 {
		return Err(ConfigError::invalid(
			"catalogue.limit",
			"0",
			sources.source_for("catalogue.limit"),
			"must be greater than zero",
		));
	}

	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"catalogue.page_size",
			"0",
			sources.source_for("catalogue.page_size"),
			"must be greater than zero",
		));
	}

	if let Some(endpoint) = &config.ai_endpoint {
		check_http_url("ai.endpoint", endpoint, sources)?;
	}

	if config.ai_timeout.is_zero() {
		return Err(ConfigError::invalid(
			"ai.timeout_secs",
			"0",
			sources.source_for("ai.timeout_secs"),
			"must be at least one second",
		));
	}

	if config.grid.min_slots == 0 {
		return Err(ConfigError::invalid(
			"grid.min_slots",
			"0",
			sources.source_for("grid.min_slots"),
			"must be at least 1",
		));
	}

	if config.grid.min_slots > MAX_MIN_SLOTS {
		return Err(ConfigError::invalid(
			"grid.min_slots",
			config.grid.min_slots.to_string(),
			sources.source_for("grid.min_slots"),
			format!("must be at most {MAX_MIN_SLOTS}"),
		));
	}

	if config.grid.extra_rows > MAX_EXTRA_ROWS {
		return Err(ConfigError::invalid(
			"grid.extra_rows",
			config.grid.extra_rows.to_string(),
			sources.source_for("grid.extra_rows"),
			format!("must be at most {MAX_EXTRA_ROWS}"),
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for("ui.theme"),
			format!("expected one of: {}", theme::names().join(", ")),
		));
	}

	Ok(())
}

fn check_http_url(key: &'static str, url: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	if url.starts_with("http://") || url.starts_with("https://") {
		return Ok(());
	}
	Err(ConfigError::invalid(
		key,
		url,
		sources.source_for(key),
		"must be an http:// or https:// URL",
	))
}
