/// Columns in the dense layout grid.
pub const GRID_COLUMNS: u16 = 12;
/// Assumed average item width, in grid columns, when estimating a row.
pub const AVERAGE_ITEM_COLUMNS: f64 = 2.5;
/// The viewport is assumed to show this many nominal rows.
pub const NOMINAL_VISIBLE_ROWS: f64 = 6.0;
pub const MIN_ITEMS_PER_ROW: usize = 4;

const DEFAULT_MIN_SLOTS: usize = 60;
const DEFAULT_EXTRA_ROWS: usize = 3;

/// Nominal terminal cell size used to express a terminal in pixels.
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

/// Visible area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	#[must_use]
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Approximate a terminal of `columns` × `rows` cells in pixels.
	#[must_use]
	pub fn from_terminal(columns: u16, rows: u16) -> Self {
		Self {
			width: f64::from(columns) * CELL_WIDTH_PX,
			height: f64::from(rows) * CELL_HEIGHT_PX,
		}
	}

	fn is_measurable(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

/// Tunable parts of the slot estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
	/// Lower bound on the slot count, also used for unmeasurable viewports.
	pub min_slots: usize,
	/// Rows added below the visible area as a scroll buffer.
	pub extra_rows: usize,
}

impl Default for GridConfig {
	fn default() -> Self {
		Self {
			min_slots: DEFAULT_MIN_SLOTS,
			extra_rows: DEFAULT_EXTRA_ROWS,
		}
	}
}

/// Estimate how many slots fill `viewport`, plus `extra_rows` rows below it.
#[must_use]
pub fn total_slots(viewport: Viewport, grid: &GridConfig) -> usize {
	if !viewport.is_measurable() {
		return grid.min_slots;
	}

	let Viewport { width, height } = viewport;
	let nominal_row_height = height / NOMINAL_VISIBLE_ROWS;
	let rows_needed = (height / nominal_row_height).ceil() as usize + grid.extra_rows;

	let column_width = width / f64::from(GRID_COLUMNS);
	let items_per_row =
		((width / (AVERAGE_ITEM_COLUMNS * column_width)).floor() as usize).max(MIN_ITEMS_PER_ROW);

	(rows_needed * items_per_row).max(grid.min_slots)
}
