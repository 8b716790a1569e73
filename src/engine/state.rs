use std::collections::HashSet;
use std::mem;

use tracing::{debug, info};
use uuid::Uuid;

use super::event::{HubEffect, HubEvent, Notice, RequestToken};
use crate::ai::{AiError, AiSearchRequest, AiSearchResponse};
use crate::layout::{GridConfig, RESERVED_INDEX, SlotAssignment, Viewport, allocate, total_slots};
use crate::ranking::{ScoredItem, rank};
use crate::types::{Item, Query, SearchMode};

const NO_LOCAL_MATCH_HINT: &str = "No exact match. Press Enter to try AI search";
const AI_LOADING_HINT: &str = "Searching with AI...";
const AI_RESULT_HINT: &str = "AI results. Esc clears the search";
const AI_EMPTY_HINT: &str = "No AI results. Try other words or press Esc";

/// Mode-specific data. Request tokens live inside the AI phases, so a phase
/// change is all it takes to make an outstanding response stale.
#[derive(Debug, Clone, PartialEq)]
enum Phase {
	Idle,
	LocalMatch {
		matches: Vec<ScoredItem>,
	},
	NoLocalMatch,
	AiLoading {
		token: RequestToken,
		/// The phase whose grid stays visible while the request runs.
		showing: Box<Phase>,
	},
	AiResult {
		token: RequestToken,
		results: Vec<Item>,
	},
	AiEmpty {
		token: RequestToken,
	},
}

impl Phase {
	fn mode(&self) -> SearchMode {
		match self {
			Self::Idle => SearchMode::Idle,
			Self::LocalMatch { .. } => SearchMode::LocalMatch,
			Self::NoLocalMatch => SearchMode::NoLocalMatch,
			Self::AiLoading { .. } => SearchMode::AiLoading,
			Self::AiResult { .. } => SearchMode::AiResult,
			Self::AiEmpty { .. } => SearchMode::AiEmpty,
		}
	}

	fn token(&self) -> Option<RequestToken> {
		match self {
			Self::AiLoading { token, .. } | Self::AiResult { token, .. } | Self::AiEmpty { token } => {
				Some(*token)
			}
			_ => None,
		}
	}

	fn best_match_id(&self) -> Option<&str> {
		match self {
			Self::LocalMatch { matches } => matches.first().map(|best| best.item.id.as_str()),
			_ => None,
		}
	}
}

/// The whole search experience as a value.
///
/// The catalogue loaded at startup is kept in `saved_catalogue` for the
/// lifetime of the state; AI results never overwrite it, which is what makes
/// clearing a search or recovering from a failed one a plain phase change.
#[derive(Debug, Clone, PartialEq)]
pub struct HubState {
	saved_catalogue: Vec<Item>,
	query: Query,
	phase: Phase,
	grid: GridConfig,
	viewport: Viewport,
	total_slots: usize,
	session_id: String,
	last_token: u64,
}

impl Default for HubState {
	fn default() -> Self {
		Self::new(GridConfig::default())
	}
}

/// Functional form of [`HubState::handle`].
#[must_use]
pub fn reduce(mut state: HubState, event: HubEvent) -> (HubState, Vec<HubEffect>) {
	let effects = state.handle(event);
	(state, effects)
}

impl HubState {
	#[must_use]
	pub fn new(grid: GridConfig) -> Self {
		let viewport = Viewport::default();
		Self {
			saved_catalogue: Vec::new(),
			query: Query::default(),
			phase: Phase::Idle,
			grid,
			viewport,
			total_slots: total_slots(viewport, &grid),
			session_id: Uuid::new_v4().to_string(),
			last_token: 0,
		}
	}

	/// Replace the generated session id sent with AI requests.
	#[must_use]
	pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
		self.session_id = session_id.into();
		self
	}

	/// Apply `event` and return the effects the host must carry out.
	pub fn handle(&mut self, event: HubEvent) -> Vec<HubEffect> {
		let before = self.mode();
		let effects = match event {
			HubEvent::CatalogueLoaded(items) => self.on_catalogue_loaded(items),
			HubEvent::QueryChanged(text) => self.on_query_changed(text),
			HubEvent::QuerySubmitted => self.on_query_submitted(),
			HubEvent::AiResponded { token, outcome } => self.on_ai_responded(token, outcome),
			HubEvent::Resized(viewport) => self.on_resized(viewport),
		};
		let after = self.mode();
		if before != after {
			debug!(from = before.id(), to = after.id(), "search mode changed");
		}
		effects
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.phase.mode()
	}

	#[must_use]
	pub fn query(&self) -> &Query {
		&self.query
	}

	/// The default catalogue, regardless of what the grid currently shows.
	#[must_use]
	pub fn catalogue(&self) -> &[Item] {
		&self.saved_catalogue
	}

	/// Local matches of the current query, best first.
	#[must_use]
	pub fn matches(&self) -> &[ScoredItem] {
		match &self.phase {
			Phase::LocalMatch { matches } => matches,
			_ => &[],
		}
	}

	/// Token of the AI request the current phase belongs to.
	#[must_use]
	pub fn current_token(&self) -> Option<RequestToken> {
		self.phase.token()
	}

	#[must_use]
	pub fn session_id(&self) -> &str {
		&self.session_id
	}

	#[must_use]
	pub fn total_slots(&self) -> usize {
		self.total_slots
	}

	#[must_use]
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Text shown next to the search control for the current mode.
	#[must_use]
	pub fn hint(&self) -> Option<&'static str> {
		match self.phase {
			Phase::Idle | Phase::LocalMatch { .. } => None,
			Phase::NoLocalMatch => Some(NO_LOCAL_MATCH_HINT),
			Phase::AiLoading { .. } => Some(AI_LOADING_HINT),
			Phase::AiResult { .. } => Some(AI_RESULT_HINT),
			Phase::AiEmpty { .. } => Some(AI_EMPTY_HINT),
		}
	}

	/// Compute the slot assignment for the current state.
	#[must_use]
	pub fn assignment(&self) -> SlotAssignment {
		allocate(self.source_items(&self.phase), self.total_slots, RESERVED_INDEX)
	}

	/// Items feeding the allocator for `phase`, in placement order.
	fn source_items<'a>(&'a self, phase: &'a Phase) -> Vec<&'a Item> {
		match phase {
			Phase::Idle | Phase::NoLocalMatch => self.saved_catalogue.iter().collect(),
			Phase::LocalMatch { matches } => {
				let matched: HashSet<&str> =
					matches.iter().map(|scored| scored.item.id.as_str()).collect();
				matches
					.iter()
					.map(|scored| &scored.item)
					.chain(
						self.saved_catalogue
							.iter()
							.filter(|item| !matched.contains(item.id.as_str())),
					)
					.collect()
			}
			Phase::AiLoading { showing, .. } => self.source_items(showing),
			Phase::AiResult { results, .. } => results.iter().collect(),
			Phase::AiEmpty { .. } => Vec::new(),
		}
	}

	fn on_catalogue_loaded(&mut self, items: Vec<Item>) -> Vec<HubEffect> {
		info!(items = items.len(), "catalogue loaded");
		self.saved_catalogue = items;
		match self.phase {
			Phase::LocalMatch { .. } | Phase::NoLocalMatch => self.apply_local_ranking(),
			_ => Vec::new(),
		}
	}

	fn on_query_changed(&mut self, text: String) -> Vec<HubEffect> {
		self.query = Query::parse(text);
		if self.query.is_empty() {
			if let Some(token) = self.phase.token() {
				debug!(%token, "query cleared, abandoning AI search");
			}
			self.phase = Phase::Idle;
			return Vec::new();
		}
		self.apply_local_ranking()
	}

	fn apply_local_ranking(&mut self) -> Vec<HubEffect> {
		let previous_best = self.phase.best_match_id().map(str::to_owned);
		let matches = rank(&self.query, &self.saved_catalogue);
		self.phase = if matches.is_empty() {
			Phase::NoLocalMatch
		} else {
			Phase::LocalMatch { matches }
		};

		match self.phase.best_match_id() {
			Some(best) if previous_best.as_deref() != Some(best) => {
				vec![HubEffect::ScrollToReservedSlot]
			}
			_ => Vec::new(),
		}
	}

	fn on_query_submitted(&mut self) -> Vec<HubEffect> {
		if self.query.is_empty() {
			return Vec::new();
		}

		self.last_token += 1;
		let token = RequestToken::new(self.last_token);
		let showing = match mem::replace(&mut self.phase, Phase::Idle) {
			Phase::AiLoading { showing, .. } => showing,
			other => Box::new(other),
		};
		self.phase = Phase::AiLoading { token, showing };

		let request = AiSearchRequest {
			query: self.query.raw().trim().to_string(),
			session_id: self.session_id.clone(),
		};
		debug!(%token, query = %request.query, "issuing AI search");
		vec![HubEffect::IssueAiSearch { token, request }]
	}

	fn on_ai_responded(
		&mut self,
		token: RequestToken,
		outcome: Result<AiSearchResponse, AiError>,
	) -> Vec<HubEffect> {
		let awaiting = matches!(self.phase, Phase::AiLoading { token: current, .. } if current == token);
		if !awaiting {
			debug!(%token, current = ?self.phase.token(), "discarding stale AI response");
			return Vec::new();
		}

		let failure = match outcome {
			Ok(response) if response.success => {
				let results = response.into_cards();
				if results.is_empty() {
					self.phase = Phase::AiEmpty { token };
					return vec![HubEffect::Notify(Notice::NoAiResults)];
				}
				info!(%token, results = results.len(), "showing AI results");
				self.phase = Phase::AiResult { token, results };
				return vec![HubEffect::ScrollToReservedSlot];
			}
			Ok(response) => response
				.error
				.unwrap_or_else(|| "the search service reported a failure".to_string()),
			Err(err) => err.to_string(),
		};

		// Fall back to the untouched catalogue rather than a partial grid.
		self.phase = Phase::Idle;
		vec![HubEffect::Notify(Notice::AiFailed { message: failure })]
	}

	fn on_resized(&mut self, viewport: Viewport) -> Vec<HubEffect> {
		self.viewport = viewport;
		self.total_slots = total_slots(viewport, &self.grid);
		Vec::new()
	}
}

#[cfg(test)]
mod tests;
