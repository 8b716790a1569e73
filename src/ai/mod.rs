//! AI search collaborator: wire contract, clients and the background worker.
//!
//! The backend is consumed only through [`AiSearchClient`]. Requests run on a
//! worker thread so the UI loop never blocks on the network; replies carry
//! the request token they answer so stale ones can be discarded by the
//! engine.

mod client;
mod contract;
pub(crate) mod worker;

pub use client::{AiError, AiSearchClient, DisabledAiClient, HttpAiClient};
pub use contract::{AiSearchContext, AiSearchData, AiSearchRequest, AiSearchResponse};
pub use worker::AiReply;
