use serde::{Deserialize, Serialize};

/// Widest footprint an item may claim, in columns of the 12-column grid.
pub const MAX_ITEM_COLS: u16 = 4;
/// Tallest footprint an item may claim, in grid rows.
pub const MAX_ITEM_ROWS: u16 = 4;

const DEFAULT_COLS: u16 = 2;
const DEFAULT_ROWS: u16 = 1;

/// A solution card that can occupy a grid slot.
///
/// Identity is `id`; the text fields are opaque display strings that only the
/// scorer looks at. `cols` and `rows` are the footprint in grid units and are
/// clamped on construction, so every `Item` in the engine has a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
	pub id: String,
	pub title: String,
	pub description: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	pub cols: u16,
	pub rows: u16,
}

impl Item {
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			description: description.into(),
			category: None,
			cols: DEFAULT_COLS,
			rows: DEFAULT_ROWS,
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = normalize_category(Some(category.into()));
		self
	}

	#[must_use]
	pub fn with_footprint(mut self, cols: u16, rows: u16) -> Self {
		self.cols = clamp_cols(cols);
		self.rows = clamp_rows(rows);
		self
	}
}

/// Wire shape accepted from the catalogue service and the AI backend.
#[derive(Deserialize)]
struct RawItem {
	#[serde(alias = "_id")]
	id: RawId,
	#[serde(default, alias = "name")]
	title: String,
	#[serde(default)]
	description: String,
	#[serde(default)]
	category: Option<String>,
	#[serde(default)]
	cols: Option<u16>,
	#[serde(default)]
	rows: Option<u16>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Text(String),
	Number(i64),
}

impl From<RawItem> for Item {
	fn from(raw: RawItem) -> Self {
		let id = match raw.id {
			RawId::Text(text) => text,
			RawId::Number(number) => number.to_string(),
		};
		Self {
			id,
			title: raw.title,
			description: raw.description,
			category: normalize_category(raw.category),
			cols: clamp_cols(raw.cols.unwrap_or(DEFAULT_COLS)),
			rows: clamp_rows(raw.rows.unwrap_or(DEFAULT_ROWS)),
		}
	}
}

fn clamp_cols(cols: u16) -> u16 {
	cols.clamp(1, MAX_ITEM_COLS)
}

fn clamp_rows(rows: u16) -> u16 {
	rows.clamp(1, MAX_ITEM_ROWS)
}

fn normalize_category(category: Option<String>) -> Option<String> {
	category.filter(|value| !value.trim().is_empty())
}

/// Synthetic content that keeps the grid free of visual holes.
///
/// The id and footprint are pure functions of the slot index, so the same
/// slot always renders the same filler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerItem {
	pub id: String,
	pub slot: usize,
	pub cols: u16,
	pub rows: u16,
}

/// What a single grid slot holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotContent {
	/// The reserved slot hosting the search control.
	Search,
	Item(Item),
	Filler(FillerItem),
}

impl SlotContent {
	/// Return the real item in this slot, if any.
	#[must_use]
	pub fn item(&self) -> Option<&Item> {
		match self {
			Self::Item(item) => Some(item),
			_ => None,
		}
	}

	#[must_use]
	pub fn is_filler(&self) -> bool {
		matches!(self, Self::Filler(_))
	}
}
