//! Session selection errors

use thiserror::Error;

/// Error type for catalogs that cannot produce a session
///
/// Both catalog variants are fatal: retrying with the same catalog fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("catalog must pin exactly one category, found {pinned}")]
    Configuration { pinned: usize },
    #[error("session needs {requested} categories but the catalog has only {available}")]
    InsufficientCategories { requested: usize, available: usize },
    #[error("session size must be at least 1")]
    InvalidSessionSize,
}
