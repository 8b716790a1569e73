use std::fmt;

use crate::ai::{AiError, AiSearchRequest, AiSearchResponse};
use crate::layout::Viewport;
use crate::types::Item;

/// Identifies one AI search request. Tokens only ever increase, so the
/// engine can tell the current request from stale ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
	#[must_use]
	pub const fn new(value: u64) -> Self {
		Self(value)
	}

	#[must_use]
	pub const fn value(self) -> u64 {
		self.0
	}
}

impl fmt::Display for RequestToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Inputs to the search state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum HubEvent {
	/// The default catalogue finished loading (or was reloaded).
	CatalogueLoaded(Vec<Item>),
	/// The raw query text changed.
	QueryChanged(String),
	/// The user explicitly asked for an AI search of the current query.
	QuerySubmitted,
	AiResponded {
		token: RequestToken,
		outcome: Result<AiSearchResponse, AiError>,
	},
	Resized(Viewport),
}

/// Side effects requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEffect {
	IssueAiSearch {
		token: RequestToken,
		request: AiSearchRequest,
	},
	/// Bring the reserved search slot into view.
	ScrollToReservedSlot,
	Notify(Notice),
}

/// Toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	NoAiResults,
	AiFailed { message: String },
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoAiResults => f.write_str("AI search found no matching solutions"),
			Self::AiFailed { message } => {
				write!(f, "AI search is unavailable, showing all solutions ({message})")
			}
		}
	}
}
