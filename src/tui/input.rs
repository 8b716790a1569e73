use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line query editor hosted in the reserved slot.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current text of the query line.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed a key to the editor. Returns true when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	/// Drop the current text. Returns true when there was anything to drop.
	pub fn clear(&mut self) -> bool {
		if self.is_empty() {
			return false;
		}
		self.textarea = TextArea::default();
		self.textarea.set_cursor_line_style(Style::default());
		true
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn set_placeholder(&mut self, text: &str, style: Style) {
		self.textarea.set_placeholder_text(text.to_owned());
		self.textarea.set_placeholder_style(style);
	}

	pub(crate) fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}
