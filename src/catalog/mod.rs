//! Category catalog
//!
//! Provides the embedded catalog compiled into the binary and loading of
//! custom catalog files. A catalog is immutable once built.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT, RawCategory};

use crate::core::{Category, CategoryError, Tag};
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for catalogs that cannot be built
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no categories")]
    Empty,
    #[error("category id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("line {line}: {source}")]
    InvalidCategory {
        line: usize,
        #[source]
        source: CategoryError,
    },
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The full, read-only list of categories available to sessions
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from categories
    ///
    /// The pinned count is not checked here; selecting a session reports it.
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` for no categories and
    /// `CatalogError::DuplicateId` when two categories share an id.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        for category in &categories {
            if !seen.insert(category.id()) {
                return Err(CatalogError::DuplicateId(category.id().to_string()));
            }
        }

        Ok(Self { categories })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    /// Returns an error only if the embedded table is invalid.
    ///
    /// # Examples
    /// ```
    /// use quartet::catalog::Catalog;
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// assert_eq!(catalog.pinned().count(), 1);
    /// ```
    pub fn builtin() -> Result<Self, CatalogError> {
        let categories = BUILTIN
            .iter()
            .map(category_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// All categories in catalog order
    #[inline]
    #[must_use]
    pub fn list_all(&self) -> &[Category] {
        &self.categories
    }

    /// Categories flagged as pinned (a valid catalog has exactly one)
    pub fn pinned(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_pinned())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn category_from_raw(raw: &RawCategory) -> Result<Category, CategoryError> {
    let tag: Tag = raw.tag.parse()?;
    let category = Category::new(raw.id, raw.name, raw.words, tag)?.with_weight(raw.weight);
    Ok(if raw.pinned { category.pinned() } else { category })
}
