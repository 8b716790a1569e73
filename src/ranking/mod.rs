//! Deterministic, client-local relevance scoring.
//!
//! Scoring is plain case-folded substring matching over whitespace-split
//! terms. The score constants are product tuning values; altering them
//! changes which items count as relevant at all.

mod ranker;
mod scorer;

pub use ranker::{ScoredItem, rank};
pub use scorer::{
	ALL_TERMS_IN_TITLE_SCORE, EXACT_TITLE_SCORE, MIN_MATCH_SCORE, TERM_IN_CATEGORY_SCORE,
	TERM_IN_DESCRIPTION_SCORE, TERM_IN_TITLE_SCORE, TITLE_CONTAINS_QUERY_SCORE, is_match, score,
};
