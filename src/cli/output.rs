use anyhow::Result;
use serde::Serialize;

use hubgrid::{HubController, SearchMode, SlotAssignment, SlotContent};

/// Snapshot of the engine printed by headless runs.
#[derive(Debug, Serialize)]
pub(crate) struct HeadlessReport {
	pub(crate) query: String,
	pub(crate) mode: SearchMode,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) hint: Option<&'static str>,
	pub(crate) notices: Vec<String>,
	pub(crate) assignment: SlotAssignment,
}

impl HeadlessReport {
	/// Capture the controller state, draining any pending notices.
	pub(crate) fn capture(controller: &mut HubController) -> Self {
		let notices = std::iter::from_fn(|| controller.take_notice())
			.map(|notice| notice.to_string())
			.collect();
		let state = controller.state();
		Self {
			query: state.query().raw().to_string(),
			mode: state.mode(),
			hint: state.hint(),
			notices,
			assignment: state.assignment(),
		}
	}
}

/// Print a plain-text listing of the slot assignment.
pub(crate) fn print_plain(report: &HeadlessReport) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &HeadlessReport) -> String {
	let mut lines = vec![format!(
		"mode: {}  query: '{}'  slots: {}",
		report.mode.id(),
		report.query,
		report.assignment.total_slots()
	)];
	if let Some(hint) = report.hint {
		lines.push(format!("hint: {hint}"));
	}
	for notice in &report.notices {
		lines.push(format!("notice: {notice}"));
	}
	for (index, content) in report.assignment.iter() {
		let line = match content {
			SlotContent::Search => format!("{index:>4}  [search]"),
			SlotContent::Item(item) => {
				format!("{index:>4}  {:<24} {}", item.id, item.title)
			}
			SlotContent::Filler(filler) => {
				format!("{index:>4}  ({}x{} filler)", filler.cols, filler.rows)
			}
		};
		lines.push(line);
	}
	let mut out = lines.join("\n");
	out.push('\n');
	out
}

/// Format the report as a JSON string.
pub(crate) fn format_report_json(report: &HeadlessReport) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &HeadlessReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
