use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use hubgrid::catalogue::{CatalogueSource, HttpCatalogue, JsonFileCatalogue, load_catalogue};
use hubgrid::tui::{GridApp, theme};
use hubgrid::{DisabledAiClient, HttpAiClient, HubController, HubState, Item, Viewport};

use crate::cli::HeadlessReport;
use crate::settings::{CatalogueLocation, ResolvedConfig};

/// Timeout for fetching the catalogue over HTTP.
const CATALOGUE_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the engine from resolved configuration and runs it.
pub(crate) struct HubWorkflow {
	controller: HubController,
	theme: String,
	ai_timeout: Duration,
}

impl HubWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let items = fetch_catalogue(&config)?;

		let state = HubState::new(config.grid);
		let mut controller = match &config.ai_endpoint {
			Some(endpoint) => {
				HubController::new(state, HttpAiClient::new(endpoint.clone(), config.ai_timeout))
			}
			None => HubController::new(state, DisabledAiClient),
		};
		controller.load_catalogue(items);
		tracing::info!(
			session_id = controller.state().session_id(),
			ai_enabled = config.ai_endpoint.is_some(),
			"engine ready"
		);
		if !config.initial_query.is_empty() {
			controller.set_query(config.initial_query.clone());
		}

		Ok(Self {
			controller,
			theme: config.theme,
			ai_timeout: config.ai_timeout,
		})
	}

	/// Open the interactive grid on the current terminal.
	pub(crate) fn run_interactive(self) -> Result<()> {
		let theme = theme::by_name(&self.theme)
			.ok_or_else(|| anyhow!("unknown theme '{}'", self.theme))?;
		let mut app = GridApp::new(self.controller);
		app.set_theme(theme);
		app.run()
	}

	/// Lay the grid out once for `viewport`, optionally after an AI search.
	pub(crate) fn run_headless(mut self, viewport: Viewport, submit: bool) -> Result<HeadlessReport> {
		self.controller.resize(viewport);
		if submit {
			self.controller.submit_query();
			// Leave headroom over the client timeout for the worker hand-off.
			let wait = self.ai_timeout + Duration::from_secs(1);
			if !self.controller.wait_for_ai(wait) {
				tracing::warn!("AI search did not answer within {wait:?}");
			}
		}
		Ok(HeadlessReport::capture(&mut self.controller))
	}
}

fn fetch_catalogue(config: &ResolvedConfig) -> Result<Vec<Item>> {
	let source: Box<dyn CatalogueSource> = match &config.catalogue {
		CatalogueLocation::File(path) => Box::new(
			JsonFileCatalogue::open(path)
				.with_context(|| format!("failed to open catalogue {}", path.display()))?,
		),
		CatalogueLocation::Url(url) => Box::new(HttpCatalogue::new(url.clone(), CATALOGUE_TIMEOUT)),
	};
	load_catalogue(source.as_ref(), config.catalogue_limit, config.page_size)
		.with_context(|| format!("failed to load catalogue from {}", config.catalogue))
}
