use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Catalogue: {}", config.catalogue);
	let _ = writeln!(out, "  Catalogue limit: {}", config.catalogue_limit);
	let _ = writeln!(out, "  Page size: {}", config.page_size);
	let _ = writeln!(
		out,
		"  AI endpoint: {}",
		config.ai_endpoint.as_deref().unwrap_or("(disabled)")
	);
	let _ = writeln!(out, "  AI timeout: {}s", config.ai_timeout.as_secs());
	let _ = writeln!(out, "  Minimum slots: {}", config.grid.min_slots);
	let _ = writeln!(out, "  Extra rows: {}", config.grid.extra_rows);
	let _ = writeln!(out, "  UI theme: {}", config.theme);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}
