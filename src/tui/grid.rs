//! Dense packing of a slot assignment onto the 12-column grid.
//!
//! Slots are placed in index order, each at the first free position that
//! fits its footprint, scanning rows top to bottom and columns left to
//! right. Later small slots back-fill holes left by earlier wide ones, which
//! is what keeps the rendered grid free of gaps.
//!
//! Packing runs in `usize` rows. A slot that would extend beyond the last
//! row a `u16` can address is left unplaced, together with every slot
//! after it.

use crate::layout::{GRID_COLUMNS, SlotAssignment};
use crate::types::{MAX_ITEM_ROWS, SlotContent};

/// Footprint of the search control in grid units.
pub const SEARCH_FOOTPRINT: (u16, u16) = (4, 2);

/// Where a slot ended up on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSlot {
	pub index: usize,
	pub col: u16,
	pub row: u16,
	pub cols: u16,
	pub rows: u16,
}

impl PlacedSlot {
	#[must_use]
	pub fn bottom(&self) -> u16 {
		self.row.saturating_add(self.rows)
	}
}

/// Result of packing: every slot with its position, plus the row count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridPlan {
	pub placed: Vec<PlacedSlot>,
	pub rows: u16,
}

impl GridPlan {
	/// Position of the slot with the given index.
	#[must_use]
	pub fn slot(&self, index: usize) -> Option<&PlacedSlot> {
		self.placed.iter().find(|placed| placed.index == index)
	}
}

#[must_use]
pub fn footprint(content: &SlotContent) -> (u16, u16) {
	let (cols, rows) = match content {
		SlotContent::Search => SEARCH_FOOTPRINT,
		SlotContent::Item(item) => (item.cols, item.rows),
		SlotContent::Filler(filler) => (filler.cols, filler.rows),
	};
	(cols.clamp(1, GRID_COLUMNS), rows.clamp(1, MAX_ITEM_ROWS))
}

#[must_use]
pub fn pack(assignment: &SlotAssignment) -> GridPlan {
	let mut occupancy = Occupancy::default();
	let mut plan = GridPlan::default();
	for (index, content) in assignment.iter() {
		let (cols, rows) = footprint(content);
		let (col, row) = occupancy.first_fit(cols, rows);
		let Some(row) = u16::try_from(row)
			.ok()
			.filter(|row| row.checked_add(rows).is_some())
		else {
			tracing::warn!(index, "grid row limit reached; remaining slots are not placed");
			break;
		};
		occupancy.fill(col, usize::from(row), cols, rows);
		let placed = PlacedSlot {
			index,
			col,
			row,
			cols,
			rows,
		};
		plan.rows = plan.rows.max(placed.bottom());
		plan.placed.push(placed);
	}
	plan
}

#[derive(Default)]
struct Occupancy {
	rows: Vec<[bool; GRID_COLUMNS as usize]>,
	/// Every row above this one is full.
	open_row: usize,
}

impl Occupancy {
	fn first_fit(&self, cols: u16, rows: u16) -> (u16, usize) {
		let mut row = self.open_row;
		loop {
			for col in 0..=(GRID_COLUMNS - cols) {
				if self.is_free(col, row, cols, rows) {
					return (col, row);
				}
			}
			row += 1;
		}
	}

	fn is_free(&self, col: u16, row: usize, cols: u16, rows: u16) -> bool {
		(row..row + usize::from(rows)).all(|r| {
			self.rows.get(r).is_none_or(|cells| {
				cells[usize::from(col)..usize::from(col + cols)]
					.iter()
					.all(|taken| !taken)
			})
		})
	}

	fn fill(&mut self, col: u16, row: usize, cols: u16, rows: u16) {
		let needed = row + usize::from(rows);
		if self.rows.len() < needed {
			self.rows.resize(needed, [false; GRID_COLUMNS as usize]);
		}
		for cells in &mut self.rows[row..needed] {
			for taken in &mut cells[usize::from(col)..usize::from(col + cols)] {
				*taken = true;
			}
		}
		while self
			.rows
			.get(self.open_row)
			.is_some_and(|cells| cells.iter().all(|taken| *taken))
		{
			self.open_row += 1;
		}
	}
}
