use serde::Serialize;

/// The data source currently feeding the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
	/// Empty query, default catalogue in catalogue order.
	#[default]
	Idle,
	/// Local ranking found at least one match.
	LocalMatch,
	/// Local ranking found nothing; the catalogue stays on screen.
	NoLocalMatch,
	/// An AI search request is outstanding.
	AiLoading,
	/// The grid shows AI search results only.
	AiResult,
	/// The AI search returned no usable cards.
	AiEmpty,
}

impl SearchMode {
	/// Stable identifier used in logs and machine-readable output.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::LocalMatch => "local_match",
			Self::NoLocalMatch => "no_local_match",
			Self::AiLoading => "ai_loading",
			Self::AiResult => "ai_result",
			Self::AiEmpty => "ai_empty",
		}
	}

	#[must_use]
	pub fn is_ai(self) -> bool {
		matches!(self, Self::AiLoading | Self::AiResult | Self::AiEmpty)
	}
}
