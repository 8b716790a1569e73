//! Grid sizing and proximity-ordered slot allocation.

mod allocator;
mod assignment;
mod distance;
mod filler;
mod viewport;

pub use allocator::allocate;
pub use assignment::SlotAssignment;
pub use distance::{RESERVED_INDEX, proximity_order, slot_distance};
pub use filler::{FILLER_PATTERN, filler_footprint, filler_for_slot};
pub use viewport::{
	AVERAGE_ITEM_COLUMNS, GRID_COLUMNS, GridConfig, MIN_ITEMS_PER_ROW, NOMINAL_VISIBLE_ROWS,
	Viewport, total_slots,
};
