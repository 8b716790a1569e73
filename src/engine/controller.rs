use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::event::{HubEffect, HubEvent, Notice};
use super::state::HubState;
use crate::ai::AiSearchClient;
use crate::ai::worker::{self, AiReply, AiWorker};
use crate::layout::{SlotAssignment, Viewport};
use crate::types::{Item, SearchMode};

/// Runs a [`HubState`] against a live AI worker.
///
/// The controller is the single owner of the state. It applies events,
/// forwards AI requests to the worker, and buffers the scroll signal and
/// notices until the host collects them.
pub struct HubController {
	state: HubState,
	ai: AiWorker,
	scroll_requested: bool,
	notices: VecDeque<Notice>,
}

impl HubController {
	pub fn new<C: AiSearchClient>(state: HubState, client: C) -> Self {
		Self {
			state,
			ai: worker::spawn(client),
			scroll_requested: false,
			notices: VecDeque::new(),
		}
	}

	/// Apply `event` and carry out the resulting effects.
	pub fn dispatch(&mut self, event: HubEvent) {
		for effect in self.state.handle(event) {
			self.run_effect(effect);
		}
	}

	fn run_effect(&mut self, effect: HubEffect) {
		match effect {
			HubEffect::IssueAiSearch { token, request } => self.ai.submit(token, request),
			HubEffect::ScrollToReservedSlot => self.scroll_requested = true,
			HubEffect::Notify(notice) => self.notices.push_back(notice),
		}
	}

	pub fn load_catalogue(&mut self, items: Vec<Item>) {
		self.dispatch(HubEvent::CatalogueLoaded(items));
	}

	pub fn set_query(&mut self, text: impl Into<String>) {
		self.dispatch(HubEvent::QueryChanged(text.into()));
	}

	pub fn submit_query(&mut self) {
		self.dispatch(HubEvent::QuerySubmitted);
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.dispatch(HubEvent::Resized(viewport));
	}

	/// Apply every AI reply that has arrived. Returns how many were drained.
	pub fn pump_ai_replies(&mut self) -> usize {
		let mut drained = 0;
		while let Some(reply) = self.ai.try_recv() {
			self.apply_reply(reply);
			drained += 1;
		}
		drained
	}

	/// Block until the AI request of the current phase is answered or
	/// `timeout` elapses. Replies to older requests are applied (and
	/// discarded by the state) along the way.
	pub fn wait_for_ai(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.state.mode() == SearchMode::AiLoading {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.ai.recv_timeout(remaining) {
				Some(reply) => self.apply_reply(reply),
				None => return false,
			}
		}
		true
	}

	fn apply_reply(&mut self, reply: AiReply) {
		let AiReply { token, outcome } = reply;
		self.dispatch(HubEvent::AiResponded { token, outcome });
	}

	/// True once after the engine asked for the search slot to be shown.
	pub fn take_scroll_request(&mut self) -> bool {
		std::mem::take(&mut self.scroll_requested)
	}

	pub fn take_notice(&mut self) -> Option<Notice> {
		self.notices.pop_front()
	}

	#[must_use]
	pub fn state(&self) -> &HubState {
		&self.state
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.state.mode()
	}

	#[must_use]
	pub fn assignment(&self) -> SlotAssignment {
		self.state.assignment()
	}
}
