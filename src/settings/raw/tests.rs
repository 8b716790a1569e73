use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::CatalogueLocation;

#[test]
fn cli_overrides_take_precedence() {
	let mut config = RawConfig::default();
	config.catalogue.url = Some("https://hub.example/api".into());
	config.ui.theme = Some("dark".into());
	config.grid.min_slots = Some(80);

	let cli = CliArgs::parse_from([
		"hubgrid",
		"--catalogue",
		"solutions.json",
		"--theme",
		"light",
		"--query",
		"voice",
		"--min-slots",
		"120",
		"--ai-endpoint",
		"https://hub.example/ai",
		"--ai-timeout",
		"5",
	]);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.catalogue.path, Some(PathBuf::from("solutions.json")));
	assert_eq!(config.catalogue.url, None);
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("voice"));
	assert_eq!(config.grid.min_slots, Some(120));
	assert_eq!(config.ai.endpoint.as_deref(), Some("https://hub.example/ai"));
	assert_eq!(config.ai.timeout_secs, Some(5));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["hubgrid", "--catalogue", "solutions.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).expect("resolves");
	assert_eq!(
		resolved.catalogue,
		CatalogueLocation::File(PathBuf::from("solutions.json"))
	);
	assert_eq!(resolved.catalogue_limit, 100);
	assert_eq!(resolved.page_size, 20);
	assert_eq!(resolved.ai_endpoint, None);
	assert_eq!(resolved.ai_timeout, Duration::from_secs(30));
	assert_eq!(resolved.grid.min_slots, 60);
	assert_eq!(resolved.grid.extra_rows, 3);
	assert_eq!(resolved.theme, "dark");
	assert_eq!(resolved.initial_query, "");
}

#[test]
fn resolve_requires_exactly_one_catalogue_location() {
	let cli = CliArgs::parse_from(["hubgrid"]);
	let err = RawConfig::default().resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("no catalogue configured"));

	let mut config = RawConfig::default();
	config.catalogue.path = Some("a.json".into());
	config.catalogue.url = Some("https://hub.example/api".into());
	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("keep only one"));
}

#[test]
fn validation_errors_name_the_cli_flag() {
	let cli = CliArgs::parse_from(["hubgrid", "--catalogue", "a.json", "--page-size", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("catalogue.page_size"));
	assert!(message.contains("--page-size"));
}
