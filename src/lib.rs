//! Relevance-ranked grid placement for the Solutions Hub.
//!
//! The engine keeps a query-driven search control at a fixed slot of a
//! dense grid and lays solution cards out around it, nearest first. Local
//! substring ranking handles typed queries; submitted queries with no local
//! match fall through to an AI search backend on a worker thread.
//!
//! The root re-exports the types an embedder needs to drive the engine
//! without the terminal front-end.

pub mod ai;
pub mod app_dirs;
pub mod catalogue;
pub mod engine;
pub mod layout;
pub mod logging;
pub mod ranking;
pub mod tui;
pub mod types;

pub use ai::{AiError, AiSearchClient, DisabledAiClient, HttpAiClient};
pub use catalogue::{CatalogueError, CatalogueSource, load_catalogue};
pub use engine::{HubController, HubEffect, HubEvent, HubState, Notice, RequestToken};
pub use layout::{GridConfig, SlotAssignment, Viewport};
pub use ranking::{ScoredItem, rank, score};
pub use types::{FillerItem, Item, Query, SearchMode, SlotContent};
