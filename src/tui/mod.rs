//! Terminal front-end: the reserved search slot, the packed solution grid
//! and a status line for engine notices.

mod app;
pub mod grid;
pub mod input;
mod render;
mod runtime;
pub mod theme;

#[cfg(test)]
mod render_tests;

pub use app::GridApp;
pub use grid::{GridPlan, PlacedSlot, SEARCH_FOOTPRINT, pack};
pub use input::QueryInput;
pub use render::ROW_HEIGHT;
pub use theme::Theme;
