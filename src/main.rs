mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use hubgrid::{Viewport, app_dirs, logging};
use settings::ResolvedConfig;
use workflow::HubWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hubgrid::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let _log_guard = init_logging();

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.headless {
		run_headless(&cli, resolved)
	} else {
		HubWorkflow::from_config(resolved)?.run_interactive()
	}
}

/// Logging is best effort: a read-only data directory must not stop the grid.
fn init_logging() -> Option<logging::LoggingGuard> {
	let dir = app_dirs::get_data_dir().ok()?;
	match logging::init(&dir) {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("hubgrid: logging disabled: {err:#}");
			None
		}
	}
}

/// Lay the grid out once and print it in the chosen format.
fn run_headless(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let viewport = Viewport::new(cli.width, cli.height);
	let report = HubWorkflow::from_config(settings)?.run_headless(viewport, cli.submit)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
