use serde::Deserialize;

use super::CatalogueError;
use crate::types::Item;

/// Accepted catalogue document shapes: a bare array, or an object wrapping
/// the array under `items`, `solutions` or `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
	List(Vec<Item>),
	Wrapped {
		#[serde(alias = "solutions", alias = "data")]
		items: Vec<Item>,
		#[serde(default, alias = "hasMore")]
		has_more: Option<bool>,
	},
}

/// Parsed catalogue document.
pub(super) struct ParsedPayload {
	pub(super) items: Vec<Item>,
	/// Pagination hint from the document itself, when it carries one.
	pub(super) has_more: Option<bool>,
}

pub(super) fn parse(text: &str, origin: &str) -> Result<ParsedPayload, CatalogueError> {
	let payload: Payload = serde_json::from_str(text).map_err(|source| CatalogueError::Parse {
		origin: origin.to_string(),
		source,
	})?;

	Ok(match payload {
		Payload::List(items) => ParsedPayload {
			items,
			has_more: None,
		},
		Payload::Wrapped { items, has_more } => ParsedPayload { items, has_more },
	})
}
