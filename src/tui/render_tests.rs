use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::GridApp;
use crate::ai::{AiError, AiSearchRequest, AiSearchResponse, DisabledAiClient};
use crate::engine::{HubController, HubState};
use crate::layout::GridConfig;
use crate::types::Item;

fn catalogue() -> Vec<Item> {
	vec![
		Item::new("voice", "Voice Assistant", "Talk to your data"),
		Item::new("ocr", "Document OCR", "Extract text from scans").with_category("Vision"),
		Item::new("widget", "Chat Widget", "Embeddable support chat"),
	]
}

fn app_with(controller: HubController) -> GridApp<'static> {
	let mut app = GridApp::new(controller);
	app.resize(120, 40);
	app
}

fn render(app: &mut GridApp<'_>) -> String {
	let backend = TestBackend::new(120, 40);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn type_text(app: &mut GridApp<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
			.expect("key handled");
	}
}

#[test]
fn idle_grid_shows_search_control_and_catalogue() {
	let mut controller = HubController::new(HubState::new(GridConfig::default()), DisabledAiClient);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);

	let screen = render(&mut app);
	assert!(screen.contains("Search solutions"));
	assert!(screen.contains("Voice Assistant"));
	assert!(screen.contains("Document OCR"));
	assert!(screen.contains("idle"));
	assert!(screen.contains("3 solutions"));
}

#[test]
fn search_control_is_on_the_first_screen_row() {
	let mut controller = HubController::new(HubState::new(GridConfig::default()), DisabledAiClient);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);

	let screen = render(&mut app);
	let first_line = screen.lines().next().expect("first line");
	assert!(first_line.contains("Search solutions"));
}

#[test]
fn no_local_match_shows_hint() {
	let mut controller = HubController::new(HubState::new(GridConfig::default()), DisabledAiClient);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);
	type_text(&mut app, "quantum");

	let hint = app.controller().state().hint().expect("hint in no-match mode");
	let screen = render(&mut app);
	assert!(screen.contains("quantum"));
	assert!(screen.contains("no_local_match"));
	let prefix: String = hint.chars().take(12).collect();
	assert!(screen.contains(&prefix), "hint {hint:?} missing from\n{screen}");
}

#[test]
fn local_match_reports_match_count() {
	let mut controller = HubController::new(HubState::new(GridConfig::default()), DisabledAiClient);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);
	type_text(&mut app, "ocr");

	let screen = render(&mut app);
	assert!(screen.contains("local_match"));
	assert!(screen.contains("1 matching"));
}

#[test]
fn ai_failure_notice_lands_in_status_line() {
	let mut controller = HubController::new(HubState::new(GridConfig::default()), DisabledAiClient);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);
	type_text(&mut app, "quantum");
	app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.expect("key handled");
	assert!(app.controller.wait_for_ai(Duration::from_secs(5)));
	app.tick();
	app.resize(120, 40);

	let notice = app.notice().expect("failure notice").to_owned();
	let screen = render(&mut app);
	let status = screen.lines().last().expect("status line");
	let prefix: String = notice.chars().take(20).collect();
	assert!(status.contains(&prefix), "status {status:?} lacks {notice:?}");
}

#[test]
fn ai_results_are_drawn_in_place_of_the_catalogue() {
	let client = |_: &AiSearchRequest| -> Result<AiSearchResponse, AiError> {
		Ok(AiSearchResponse::with_cards(vec![Item::new(
			"ai-1",
			"Quantum Planner",
			"Suggested by the assistant",
		)]))
	};
	let mut controller = HubController::new(HubState::new(GridConfig::default()), client);
	controller.load_catalogue(catalogue());
	let mut app = app_with(controller);
	type_text(&mut app, "quantum");
	app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.expect("key handled");
	assert!(app.controller.wait_for_ai(Duration::from_secs(5)));
	app.resize(120, 40);

	let screen = render(&mut app);
	assert!(screen.contains("Quantum Planner"));
	assert!(!screen.contains("Voice Assistant"));
	assert!(screen.contains("ai_result"));
}
