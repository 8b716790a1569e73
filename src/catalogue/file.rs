use std::fs;
use std::path::{Path, PathBuf};

use super::payload;
use super::{CatalogueError, CataloguePage, CatalogueSource};
use crate::types::Item;

/// Catalogue backed by a JSON document on disk.
///
/// The document is read once when opened; pages are slices of it.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogue {
	path: PathBuf,
	items: Vec<Item>,
}

impl JsonFileCatalogue {
	pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
		let path = path.as_ref().to_path_buf();
		let text = fs::read_to_string(&path).map_err(|source| CatalogueError::Io {
			path: path.clone(),
			source,
		})?;
		let parsed = payload::parse(&text, &path.display().to_string())?;
		Ok(Self {
			path,
			items: parsed.items,
		})
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl CatalogueSource for JsonFileCatalogue {
	fn fetch_page(&self, page: usize, page_size: usize) -> Result<CataloguePage, CatalogueError> {
		let start = page.saturating_sub(1).saturating_mul(page_size);
		let end = start.saturating_add(page_size).min(self.items.len());
		let items = self.items.get(start..end).unwrap_or_default().to_vec();
		Ok(CataloguePage {
			items,
			has_more: end < self.items.len(),
		})
	}

	fn describe(&self) -> String {
		self.path.display().to_string()
	}
}
