use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Item;

/// Body sent to the AI search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchRequest {
	pub query: String,
	pub session_id: String,
}

/// Envelope returned by the AI search backend.
///
/// Every field is optional on the wire; a missing `success` reads as a
/// failed request and missing cards read as "no results".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchResponse {
	#[serde(default)]
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<AiSearchData>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchData {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub solution_cards: Option<Vec<Item>>,
	#[serde(default)]
	pub context: AiSearchContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchContext {
	#[serde(default)]
	pub solutions_found: u64,
	/// Backend-specific context the engine does not interpret.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl AiSearchResponse {
	/// A successful response carrying `cards`.
	#[must_use]
	pub fn with_cards(cards: Vec<Item>) -> Self {
		let solutions_found = cards.len() as u64;
		Self {
			success: true,
			data: Some(AiSearchData {
				solution_cards: Some(cards),
				context: AiSearchContext {
					solutions_found,
					extra: Map::new(),
				},
			}),
			error: None,
		}
	}

	#[must_use]
	pub fn failure(message: impl Into<String>) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(message.into()),
		}
	}

	/// Consume the response, returning its cards (empty when absent).
	#[must_use]
	pub fn into_cards(self) -> Vec<Item> {
		self.data
			.and_then(|data| data.solution_cards)
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_uses_camel_case_keys() {
		let request = AiSearchRequest {
			query: "chatbot".into(),
			session_id: "s-1".into(),
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(value["sessionId"], "s-1");
		assert_eq!(value["query"], "chatbot");
	}

	#[test]
	fn decodes_backend_envelope() {
		let body = r#"{
			"success": true,
			"data": {
				"solutionCards": [
					{"id": "a", "title": "Chatbot", "description": "Talks"},
					{"id": 7, "title": "Voice", "description": "Listens", "category": "Audio"}
				],
				"context": {"solutionsFound": 2, "intent": "support"}
			}
		}"#;
		let response: AiSearchResponse = serde_json::from_str(body).unwrap();
		assert!(response.success);
		let data = response.data.clone().unwrap();
		assert_eq!(data.context.solutions_found, 2);
		assert_eq!(data.context.extra["intent"], "support");
		let cards = response.into_cards();
		assert_eq!(cards.len(), 2);
		assert_eq!(cards[1].id, "7");
	}

	#[test]
	fn missing_pieces_read_as_empty_or_failed() {
		let response: AiSearchResponse = serde_json::from_str("{}").unwrap();
		assert!(!response.success);
		assert!(response.into_cards().is_empty());

		let response: AiSearchResponse =
			serde_json::from_str(r#"{"success": true, "data": {}}"#).unwrap();
		assert!(response.success);
		assert!(response.into_cards().is_empty());
	}
}
