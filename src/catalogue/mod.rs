//! Default catalogue loading.
//!
//! The catalogue is fetched page by page once at startup and handed to the
//! engine as its Idle source set. Sources only need to know how to return
//! one page; [`load_catalogue`] drives the pagination.

mod file;
mod http;
mod payload;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::types::Item;

pub use file::JsonFileCatalogue;
pub use http::HttpCatalogue;

/// Errors raised while fetching the default catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
	#[error("failed to read catalogue file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse catalogue from {origin}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("catalogue request to {url} failed: {message}")]
	Http { url: String, message: String },
	#[error("catalogue page size must be greater than zero")]
	InvalidPageSize,
}

/// One page of catalogue items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CataloguePage {
	pub items: Vec<Item>,
	pub has_more: bool,
}

/// A paginated supplier of default catalogue items.
pub trait CatalogueSource {
	/// Fetch 1-based `page` holding at most `page_size` items.
	fn fetch_page(&self, page: usize, page_size: usize) -> Result<CataloguePage, CatalogueError>;

	/// Human readable origin used in logs and error messages.
	fn describe(&self) -> String;
}

/// Pull pages from `source` until `limit` items are collected or the source
/// runs out.
pub fn load_catalogue(
	source: &dyn CatalogueSource,
	limit: usize,
	page_size: usize,
) -> Result<Vec<Item>, CatalogueError> {
	if page_size == 0 {
		return Err(CatalogueError::InvalidPageSize);
	}

	let mut items = Vec::new();
	let mut page = 1;
	while items.len() < limit {
		let fetched = source.fetch_page(page, page_size)?;
		debug!(page, items = fetched.items.len(), has_more = fetched.has_more, "fetched catalogue page");
		let exhausted = !fetched.has_more || fetched.items.is_empty();
		items.extend(fetched.items);
		if exhausted {
			break;
		}
		page += 1;
	}
	items.truncate(limit);

	info!(source = %source.describe(), items = items.len(), "catalogue ready");
	Ok(items)
}
