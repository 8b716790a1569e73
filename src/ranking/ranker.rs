use serde::Serialize;

use super::scorer::{is_match, score};
use crate::types::{Item, Query};

/// An item paired with the score it earned for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredItem {
	pub item: Item,
	pub score: u32,
}

/// Score every candidate, drop non-matches and order by descending score.
///
/// The sort is stable, so equal scores keep their catalogue order.
#[must_use]
pub fn rank(query: &Query, items: &[Item]) -> Vec<ScoredItem> {
	if query.is_empty() {
		return Vec::new();
	}

	let mut matches: Vec<ScoredItem> = items
		.iter()
		.filter_map(|item| {
			let score = score(query, item);
			is_match(score).then(|| ScoredItem {
				item: item.clone(),
				score,
			})
		})
		.collect();
	matches.sort_by(|a, b| b.score.cmp(&a.score));
	matches
}
