use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use ureq::Agent;

use super::contract::{AiSearchRequest, AiSearchResponse};

/// Failure to obtain a usable response from the AI backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
	#[error("AI search is not configured")]
	Disabled,
	#[error("AI search request failed: {0}")]
	Transport(String),
	#[error("AI search returned HTTP status {0}")]
	Status(u16),
	#[error("AI search response could not be decoded: {0}")]
	Decode(String),
}

/// Executes one AI search request. Implementations may block; they are only
/// ever called from the AI worker thread.
pub trait AiSearchClient: Send + 'static {
	fn search(&self, request: &AiSearchRequest) -> Result<AiSearchResponse, AiError>;
}

impl<F> AiSearchClient for F
where
	F: Fn(&AiSearchRequest) -> Result<AiSearchResponse, AiError> + Send + 'static,
{
	fn search(&self, request: &AiSearchRequest) -> Result<AiSearchResponse, AiError> {
		self(request)
	}
}

/// Client used when no backend endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAiClient;

impl AiSearchClient for DisabledAiClient {
	fn search(&self, _request: &AiSearchRequest) -> Result<AiSearchResponse, AiError> {
		Err(AiError::Disabled)
	}
}

/// JSON-over-HTTP client for the AI search endpoint.
#[derive(Debug, Clone)]
pub struct HttpAiClient {
	agent: Agent,
	endpoint: String,
}

impl HttpAiClient {
	#[must_use]
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
		let agent: Agent = Agent::config_builder()
			.timeout_global(Some(timeout))
			.http_status_as_error(false)
			.build()
			.into();
		Self {
			agent,
			endpoint: endpoint.into(),
		}
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl AiSearchClient for HttpAiClient {
	fn search(&self, request: &AiSearchRequest) -> Result<AiSearchResponse, AiError> {
		debug!(endpoint = %self.endpoint, query = %request.query, "sending AI search request");

		let response = self
			.agent
			.post(&self.endpoint)
			.header("Accept", "application/json")
			.send_json(request)
			.map_err(|err| AiError::Transport(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(AiError::Status(status.as_u16()));
		}

		response
			.into_body()
			.read_json::<AiSearchResponse>()
			.map_err(|err| AiError::Decode(err.to_string()))
	}
}
