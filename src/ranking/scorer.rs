use crate::types::{Item, Query};

pub const EXACT_TITLE_SCORE: u32 = 1000;
pub const TITLE_CONTAINS_QUERY_SCORE: u32 = 500;
pub const ALL_TERMS_IN_TITLE_SCORE: u32 = 300;
pub const TERM_IN_TITLE_SCORE: u32 = 100;
pub const TERM_IN_DESCRIPTION_SCORE: u32 = 50;
pub const TERM_IN_CATEGORY_SCORE: u32 = 75;

/// Scores below this are not matches. A lone category hit (75) stays under it.
pub const MIN_MATCH_SCORE: u32 = 100;

/// Compute the relevance of `item` for `query`.
///
/// The whole-query title rules short-circuit in order (exact, substring, all
/// terms in title). Otherwise every term contributes independently for hits
/// in the title, description and category.
#[must_use]
pub fn score(query: &Query, item: &Item) -> u32 {
	if query.is_empty() {
		return 0;
	}

	let title = item.title.to_lowercase();
	let needle = query.normalized();
	if title == needle {
		return EXACT_TITLE_SCORE;
	}
	if title.contains(needle) {
		return TITLE_CONTAINS_QUERY_SCORE;
	}

	let terms = query.terms();
	if terms.iter().all(|term| title.contains(term.as_str())) {
		return ALL_TERMS_IN_TITLE_SCORE;
	}

	let description = item.description.to_lowercase();
	let category = item.category.as_deref().map(str::to_lowercase);
	terms
		.iter()
		.map(|term| {
			let term = term.as_str();
			let mut total = 0;
			if title.contains(term) {
				total += TERM_IN_TITLE_SCORE;
			}
			if description.contains(term) {
				total += TERM_IN_DESCRIPTION_SCORE;
			}
			if category.as_deref().is_some_and(|category| category.contains(term)) {
				total += TERM_IN_CATEGORY_SCORE;
			}
			total
		})
		.sum()
}

#[must_use]
pub fn is_match(score: u32) -> bool {
	score >= MIN_MATCH_SCORE
}
