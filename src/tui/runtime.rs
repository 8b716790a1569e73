//! Terminal event loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::app::GridApp;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl GridApp<'_> {
	/// Take over the terminal and run until the user quits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
		terminal.clear()?;
		let size = terminal.size()?;
		self.resize(size.width, size.height);

		loop {
			self.tick();
			terminal.draw(|frame| self.draw(frame))?;

			if event::poll(POLL_INTERVAL)? {
				match event::read()? {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key)? {
							break;
						}
					}
					Event::Resize(width, height) => self.resize(width, height),
					_ => {}
				}
			}
		}
		Ok(())
	}
}
