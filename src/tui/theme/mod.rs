//! Colour themes for the terminal grid.

mod dark;
mod light;

use ratatui::style::Style;

pub use dark::DARK;
pub use light::LIGHT;

const DEFAULT_THEME: &str = dark::NAME;

/// Styles used by the grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Card titles.
	pub header: Style,
	/// Card borders.
	pub border: Style,
	/// Borders of filler cells.
	pub filler: Style,
	/// The search prompt and its border.
	pub prompt: Style,
	/// Descriptions, hints and other muted text.
	pub empty: Style,
	/// The best match border.
	pub highlight: Style,
	/// Status line notices.
	pub notice: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn filler_style(&self) -> Style {
		self.filler
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn notice_style(&self) -> Style {
		self.notice
	}
}

impl Default for Theme {
	fn default() -> Self {
		DARK
	}
}

/// Names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	vec![dark::NAME, light::NAME]
}

/// Look up a bundled theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	match normalized.as_str() {
		dark::NAME | "default" => Some(DARK),
		light::NAME => Some(LIGHT),
		_ => None,
	}
}

#[must_use]
pub fn default_name() -> &'static str {
	DEFAULT_THEME
}
