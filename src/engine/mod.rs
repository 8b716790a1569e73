//! Search mode state machine and its effect runner.
//!
//! [`HubState`] is a pure reducer: events go in, effects come out, and every
//! derived value (slot assignment, mode, hint) is recomputed from the state
//! on demand. [`HubController`] owns a state plus the AI worker and carries
//! out the effects the reducer asks for.

mod controller;
mod event;
mod state;

pub use controller::HubController;
pub use event::{HubEffect, HubEvent, Notice, RequestToken};
pub use state::{HubState, reduce};
