use std::time::Duration;

use ureq::Agent;

use super::payload;
use super::{CatalogueError, CataloguePage, CatalogueSource};

/// Catalogue served by the marketplace REST endpoint
/// (`GET <url>?page=<n>&limit=<size>`).
#[derive(Debug, Clone)]
pub struct HttpCatalogue {
	agent: Agent,
	url: String,
}

impl HttpCatalogue {
	#[must_use]
	pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
		let agent: Agent = Agent::config_builder()
			.timeout_global(Some(timeout))
			.build()
			.into();
		Self {
			agent,
			url: url.into(),
		}
	}

	fn http_error(&self, err: impl ToString) -> CatalogueError {
		CatalogueError::Http {
			url: self.url.clone(),
			message: err.to_string(),
		}
	}
}

impl CatalogueSource for HttpCatalogue {
	fn fetch_page(&self, page: usize, page_size: usize) -> Result<CataloguePage, CatalogueError> {
		let body = self
			.agent
			.get(&self.url)
			.query("page", page.to_string())
			.query("limit", page_size.to_string())
			.header("Accept", "application/json")
			.call()
			.map_err(|err| self.http_error(err))?
			.into_body()
			.read_to_string()
			.map_err(|err| self.http_error(err))?;

		let parsed = payload::parse(&body, &self.url)?;
		// Without an explicit flag, a full page suggests there is another.
		let has_more = parsed
			.has_more
			.unwrap_or(parsed.items.len() >= page_size);
		Ok(CataloguePage {
			items: parsed.items,
			has_more,
		})
	}

	fn describe(&self) -> String {
		self.url.clone()
	}
}
