use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use throbber_widgets_tui::ThrobberState;

use super::grid::{self, GridPlan};
use super::input::QueryInput;
use super::theme::Theme;
use crate::engine::HubController;
use crate::layout::Viewport;
use crate::types::SearchMode;

/// Interactive front-end over a [`HubController`].
pub struct GridApp<'a> {
	pub(crate) controller: HubController,
	pub(crate) input: QueryInput<'a>,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	/// First visible grid row.
	pub(crate) scroll: u16,
	/// Grid rows that fit in the last drawn frame.
	pub(crate) visible_rows: u16,
	pub(crate) plan: GridPlan,
	pub(crate) notice: Option<String>,
}

impl<'a> GridApp<'a> {
	pub fn new(controller: HubController) -> Self {
		let initial_query = controller.state().query().raw().to_owned();
		let mut app = Self {
			controller,
			input: QueryInput::new(initial_query),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			scroll: 0,
			visible_rows: 0,
			plan: GridPlan::default(),
			notice: None,
		};
		app.sync();
		app
	}

	/// Set the active theme for the app.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	#[must_use]
	pub fn controller(&self) -> &HubController {
		&self.controller
	}

	#[must_use]
	pub fn query_text(&self) -> &str {
		self.input.text()
	}

	#[must_use]
	pub fn scroll(&self) -> u16 {
		self.scroll
	}

	#[must_use]
	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	/// Terminal was resized to `columns` x `rows` cells.
	pub fn resize(&mut self, columns: u16, rows: u16) {
		self.controller.resize(Viewport::from_terminal(columns, rows));
		self.sync();
	}

	/// Handle a key press. Returns true when the user asked to leave.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(true);
		}
		match key.code {
			KeyCode::Esc => {
				if !self.input.clear() {
					return Ok(true);
				}
				self.query_edited();
			}
			KeyCode::Enter => {
				self.controller.submit_query();
			}
			KeyCode::Up => self.scroll_by(-1),
			KeyCode::Down => self.scroll_by(1),
			KeyCode::PageUp => self.scroll_by(-i32::from(self.page_rows())),
			KeyCode::PageDown => self.scroll_by(i32::from(self.page_rows())),
			_ => {
				if self.input.input(key) {
					self.query_edited();
				}
			}
		}
		self.sync();
		Ok(false)
	}

	/// Apply pending AI replies and collect engine signals.
	pub fn tick(&mut self) {
		if self.controller.pump_ai_replies() > 0 {
			self.sync();
		}
		if self.controller.mode() == SearchMode::AiLoading {
			self.throbber_state.calc_next();
		}
	}

	fn query_edited(&mut self) {
		self.notice = None;
		self.controller.set_query(self.input.text().to_owned());
	}

	fn sync(&mut self) {
		self.plan = grid::pack(&self.controller.assignment());
		if self.controller.take_scroll_request() {
			self.scroll_to_reserved();
		}
		while let Some(notice) = self.controller.take_notice() {
			tracing::info!(%notice, "engine notice");
			self.notice = Some(notice.to_string());
		}
		self.clamp_scroll();
	}

	fn scroll_to_reserved(&mut self) {
		let reserved = self.controller.assignment().reserved_index();
		let Some(search) = self.plan.slot(reserved) else {
			return;
		};
		let visible_end = self.scroll.saturating_add(self.visible_rows.max(1));
		if search.row < self.scroll || search.bottom() > visible_end {
			self.scroll = search.row;
		}
	}

	fn page_rows(&self) -> u16 {
		self.visible_rows.saturating_sub(1).max(1)
	}

	fn scroll_by(&mut self, delta: i32) {
		let next = i32::from(self.scroll).saturating_add(delta).max(0);
		self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
		self.clamp_scroll();
	}

	pub(crate) fn max_scroll(&self) -> u16 {
		self.plan.rows.saturating_sub(self.visible_rows.max(1))
	}

	pub(crate) fn clamp_scroll(&mut self) {
		self.scroll = self.scroll.min(self.max_scroll());
	}
}
