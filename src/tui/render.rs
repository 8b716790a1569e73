use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::app::GridApp;
use super::grid::PlacedSlot;
use crate::layout::GRID_COLUMNS;
use crate::types::{FillerItem, Item, SearchMode, SlotContent};

/// Terminal lines per grid row.
pub const ROW_HEIGHT: u16 = 4;

const SEARCH_TITLE: &str = " Search solutions ";
const PLACEHOLDER: &str = "Type to filter, Enter to ask the AI";

impl GridApp<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(1), Constraint::Length(1)])
			.split(frame.area());
		let grid_area = layout[0];

		self.visible_rows = grid_area.height.div_ceil(ROW_HEIGHT).max(1);
		self.clamp_scroll();

		let assignment = self.controller.assignment();
		let best_match = self
			.controller
			.state()
			.matches()
			.first()
			.map(|scored| scored.item.id.clone());

		let placed_slots = self.plan.placed.clone();
		for placed in &placed_slots {
			let Some(rect) = slot_rect(grid_area, placed, self.scroll) else {
				continue;
			};
			match assignment.get(placed.index) {
				Some(SlotContent::Search) => self.render_search(frame, rect),
				Some(SlotContent::Item(item)) => {
					let is_best = best_match.as_deref() == Some(item.id.as_str());
					self.render_item(frame, rect, item, is_best);
				}
				Some(SlotContent::Filler(filler)) => self.render_filler(frame, rect, filler),
				None => {}
			}
		}

		self.render_status(frame, layout[1]);
	}

	fn render_item(&self, frame: &mut Frame, area: Rect, item: &Item, is_best: bool) {
		let border = if is_best {
			self.theme.highlight_style()
		} else {
			self.theme.border_style()
		};
		let block = Block::bordered()
			.border_style(border)
			.title(Span::styled(item.title.as_str(), self.theme.header_style()));
		let mut lines = Vec::with_capacity(2);
		if let Some(category) = &item.category {
			lines.push(Line::styled(category.as_str(), self.theme.prompt_style()));
		}
		lines.push(Line::styled(item.description.as_str(), self.theme.empty_style()));
		let body = Paragraph::new(lines)
			.block(block)
			.wrap(Wrap { trim: true });
		frame.render_widget(body, area);
	}

	fn render_filler(&self, frame: &mut Frame, area: Rect, _filler: &FillerItem) {
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.filler_style());
		frame.render_widget(block, area);
	}

	fn render_search(&mut self, frame: &mut Frame, area: Rect) {
		let block = Block::bordered()
			.border_type(BorderType::Thick)
			.border_style(self.theme.prompt_style())
			.title(Span::styled(SEARCH_TITLE, self.theme.prompt_style()));
		let inner = block.inner(area);
		frame.render_widget(block, area);
		if inner.height == 0 || inner.width == 0 {
			return;
		}

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(0)])
			.split(inner);

		self.input.set_style(self.theme.header_style());
		self.input.set_placeholder(PLACEHOLDER, self.theme.empty_style());
		frame.render_widget(self.input.widget(), rows[0]);

		let mut hint = Line::default();
		if self.controller.mode() == SearchMode::AiLoading {
			let muted = self.theme.empty_style();
			let spinner = Throbber::default().style(muted).throbber_style(muted);
			hint.spans.push(spinner.to_symbol_span(&self.throbber_state));
		}
		if let Some(text) = self.controller.state().hint() {
			hint.spans.push(Span::styled(text, self.theme.empty_style()));
		}
		if !hint.spans.is_empty() {
			frame.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), rows[1]);
		}
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let state = self.controller.state();
		let mut line = Line::from(vec![
			Span::styled(format!(" {} ", state.mode().id()), self.theme.prompt_style()),
			Span::styled(
				format!("{} solutions", state.catalogue().len()),
				self.theme.empty_style(),
			),
		]);
		if !state.matches().is_empty() {
			line.spans.push(Span::styled(
				format!(", {} matching", state.matches().len()),
				self.theme.empty_style(),
			));
		}
		let summary_width = u16::try_from(line.width()).unwrap_or(area.width);
		frame.render_widget(Paragraph::new(line), area);

		let Some(notice) = &self.notice else {
			return;
		};
		// Right-aligned, never over the summary.
		let notice_width = u16::try_from(notice.width()).unwrap_or(u16::MAX);
		let width = notice_width.min(area.width.saturating_sub(summary_width.saturating_add(2)));
		if width == 0 {
			return;
		}
		let notice_area = Rect::new(area.right() - width, area.y, width, 1);
		frame.render_widget(
			Paragraph::new(Span::styled(notice.as_str(), self.theme.notice_style())),
			notice_area,
		);
	}
}

/// Screen rectangle of `placed`, clipped to `area`, or `None` when it is
/// scrolled out of view.
pub(crate) fn slot_rect(area: Rect, placed: &PlacedSlot, scroll: u16) -> Option<Rect> {
	if placed.bottom() <= scroll {
		return None;
	}
	let left = column_x(area, placed.col);
	let right = column_x(area, placed.col + placed.cols);
	let top = i32::from(placed.row) - i32::from(scroll);
	let y = i32::from(area.y) + top * i32::from(ROW_HEIGHT);
	let height = i32::from(placed.rows) * i32::from(ROW_HEIGHT);

	let y_start = y.max(i32::from(area.y));
	let y_end = (y + height).min(i32::from(area.bottom()));
	if y_end <= y_start || right <= left {
		return None;
	}
	Some(Rect::new(
		left,
		u16::try_from(y_start).ok()?,
		right - left,
		u16::try_from(y_end - y_start).ok()?,
	))
}

fn column_x(area: Rect, col: u16) -> u16 {
	let offset = u32::from(area.width) * u32::from(col) / u32::from(GRID_COLUMNS);
	area.x + u16::try_from(offset).unwrap_or(area.width)
}
