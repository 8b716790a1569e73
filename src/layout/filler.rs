use crate::types::FillerItem;

/// Repeating `(cols, rows)` footprints for filler slots.
///
/// The average width stays near the 2.5 columns the viewport estimate
/// assumes.
pub const FILLER_PATTERN: [(u16, u16); 8] = [
	(2, 1),
	(3, 1),
	(2, 2),
	(3, 1),
	(2, 1),
	(4, 1),
	(2, 1),
	(3, 2),
];

#[must_use]
pub fn filler_footprint(slot: usize) -> (u16, u16) {
	FILLER_PATTERN[slot % FILLER_PATTERN.len()]
}

#[must_use]
pub fn filler_for_slot(slot: usize) -> FillerItem {
	let (cols, rows) = filler_footprint(slot);
	FillerItem {
		id: format!("filler-{slot}"),
		slot,
		cols,
		rows,
	}
}
