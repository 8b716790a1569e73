use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use hubgrid::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("hubgrid {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// Command-line arguments accepted by the `hubgrid` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hubgrid",
	version,
	long_version = long_version(),
	about = "Relevance-ranked solution grid with AI search fallback",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HUBGRID_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "PATH",
		conflicts_with = "catalogue_url",
		help = "Load the catalogue from a JSON file"
	)]
	pub(crate) catalogue: Option<PathBuf>,
	#[arg(
		long = "catalogue-url",
		value_name = "URL",
		help = "Load the catalogue from a paginated HTTP endpoint"
	)]
	pub(crate) catalogue_url: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Maximum number of catalogue items to load (default: 100)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Catalogue items requested per page (default: 20)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "ai-endpoint",
		value_name = "URL",
		help = "AI search endpoint (default: AI search disabled)"
	)]
	pub(crate) ai_endpoint: Option<String>,
	#[arg(
		long = "ai-timeout",
		value_name = "SECS",
		help = "AI search request timeout in seconds (default: 30)"
	)]
	pub(crate) ai_timeout: Option<u64>,
	#[arg(
		long = "min-slots",
		value_name = "NUM",
		help = "Lower bound on the number of grid slots (default: 60)"
	)]
	pub(crate) min_slots: Option<usize>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Print one slot assignment for the query instead of opening the grid"
	)]
	pub(crate) headless: bool,
	#[arg(
		long,
		value_name = "PX",
		default_value_t = 1280.0,
		requires = "headless",
		help = "Viewport width in pixels for headless mode"
	)]
	pub(crate) width: f64,
	#[arg(
		long,
		value_name = "PX",
		default_value_t = 720.0,
		requires = "headless",
		help = "Viewport height in pixels for headless mode"
	)]
	pub(crate) height: f64,
	#[arg(
		long,
		requires = "headless",
		help = "In headless mode, submit the query to AI search and wait for the reply"
	)]
	pub(crate) submit: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print headless results"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn output_format_parses_variants() {
		let args = CliArgs::parse_from(["hubgrid", "--output", "json"]);
		assert_eq!(args.output, OutputFormat::Json);

		let args = CliArgs::parse_from(["hubgrid"]);
		assert_eq!(args.output, OutputFormat::Plain);
	}

	#[test]
	fn catalogue_sources_conflict() {
		let result = CliArgs::try_parse_from([
			"hubgrid",
			"--catalogue",
			"a.json",
			"--catalogue-url",
			"https://hub.example/api",
		]);
		assert!(result.is_err());
	}

	#[test]
	fn viewport_flags_require_headless() {
		assert!(CliArgs::try_parse_from(["hubgrid", "--width", "600"]).is_err());

		let args = CliArgs::try_parse_from([
			"hubgrid", "--headless", "--width", "600", "--height", "1200",
		])
		.expect("headless args parse");
		assert!(args.headless);
		assert_eq!((args.width, args.height), (600.0, 1200.0));
	}

	#[test]
	fn config_flag_is_repeatable() {
		let args = CliArgs::parse_from(["hubgrid", "-c", "a.toml", "--config", "b.toml"]);
		assert_eq!(args.config.len(), 2);
	}

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}
}
