/// A search query derived from raw user input.
///
/// The normalized form is trimmed and lower-cased; terms are the
/// whitespace-separated pieces of the normalized form. Both are derived from
/// the raw text, so a `Query` is rebuilt on every edit rather than mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	raw: String,
	normalized: String,
	terms: Vec<String>,
}

impl Query {
	#[must_use]
	pub fn parse(raw: impl Into<String>) -> Self {
		let raw = raw.into();
		let normalized = raw.trim().to_lowercase();
		let terms = normalized.split_whitespace().map(str::to_owned).collect();
		Self {
			raw,
			normalized,
			terms,
		}
	}

	/// The text exactly as typed.
	#[must_use]
	pub fn raw(&self) -> &str {
		&self.raw
	}

	#[must_use]
	pub fn normalized(&self) -> &str {
		&self.normalized
	}

	#[must_use]
	pub fn terms(&self) -> &[String] {
		&self.terms
	}

	/// True when the query carries no searchable term.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}
}
