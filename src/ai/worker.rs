use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::client::{AiError, AiSearchClient};
use super::contract::{AiSearchRequest, AiSearchResponse};
use crate::engine::RequestToken;

const WORKER_STOPPED: &str = "AI worker stopped";

pub(crate) enum AiCommand {
	Search {
		token: RequestToken,
		request: AiSearchRequest,
	},
	Shutdown,
}

/// A finished AI search, tagged with the token of the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct AiReply {
	pub token: RequestToken,
	pub outcome: Result<AiSearchResponse, AiError>,
}

/// Handle to the background AI search thread.
pub(crate) struct AiWorker {
	command_tx: Sender<AiCommand>,
	reply_rx: Receiver<AiReply>,
	/// Answers requests locally when the worker thread is gone.
	fallback_tx: Sender<AiReply>,
	latest_token: Arc<AtomicU64>,
}

/// Launches the AI worker thread and returns its handle.
pub(crate) fn spawn<C: AiSearchClient>(client: C) -> AiWorker {
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();
	let fallback_tx = reply_tx.clone();
	let latest_token = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_token);

	thread::spawn(move || worker_loop(&client, command_rx, reply_tx, thread_latest));

	AiWorker {
		command_tx,
		reply_rx,
		fallback_tx,
		latest_token,
	}
}

fn worker_loop<C: AiSearchClient>(
	client: &C,
	command_rx: Receiver<AiCommand>,
	reply_tx: Sender<AiReply>,
	latest_token: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, &reply_tx, &latest_token, command) {
			break;
		}
	}
}

fn handle_command<C: AiSearchClient>(
	client: &C,
	reply_tx: &Sender<AiReply>,
	latest_token: &AtomicU64,
	command: AiCommand,
) -> bool {
	match command {
		AiCommand::Search { token, request } => {
			// Queued behind a newer submission; nobody will look at the answer.
			if latest_token.load(AtomicOrdering::Acquire) > token.value() {
				debug!(%token, "skipping superseded AI search");
				return true;
			}

			let outcome = client.search(&request);
			match &outcome {
				Ok(response) => info!(
					%token,
					success = response.success,
					"AI search answered"
				),
				Err(err) => warn!(%token, error = %err, "AI search failed"),
			}
			reply_tx.send(AiReply { token, outcome }).is_ok()
		}
		AiCommand::Shutdown => false,
	}
}

impl AiWorker {
	/// Queue a request. Earlier requests that have not started yet are
	/// skipped; one already in flight runs to completion.
	///
	/// If the worker thread has stopped, the request fails right away with a
	/// transport error so the caller still receives a reply for `token`.
	pub(crate) fn submit(&self, token: RequestToken, request: AiSearchRequest) {
		self.latest_token
			.fetch_max(token.value(), AtomicOrdering::AcqRel);
		if self
			.command_tx
			.send(AiCommand::Search { token, request })
			.is_err()
		{
			warn!(%token, "AI worker stopped; failing request");
			let _ = self.fallback_tx.send(AiReply {
				token,
				outcome: Err(AiError::Transport(WORKER_STOPPED.into())),
			});
		}
	}

	pub(crate) fn try_recv(&self) -> Option<AiReply> {
		match self.reply_rx.try_recv() {
			Ok(reply) => Some(reply),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	pub(crate) fn recv_timeout(&self, timeout: Duration) -> Option<AiReply> {
		match self.reply_rx.recv_timeout(timeout) {
			Ok(reply) => Some(reply),
			Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
		}
	}
}

impl Drop for AiWorker {
	fn drop(&mut self) {
		let _ = self.command_tx.send(AiCommand::Shutdown);
	}
}
