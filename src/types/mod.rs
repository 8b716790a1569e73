//! Types shared across the ranking, layout and engine pipelines.

mod item;
mod mode;
mod query;

pub use item::{FillerItem, Item, MAX_ITEM_COLS, MAX_ITEM_ROWS, SlotContent};
pub use mode::SearchMode;
pub use query::Query;
