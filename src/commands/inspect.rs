//! Catalog inspection command
//!
//! Lists the catalog and checks that it can produce sessions of a given size.

use crate::catalog::Catalog;
use crate::core::Category;
use crate::puzzle::{SelectError, select};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;

/// Result of inspecting a catalog
pub struct CatalogReport<'a> {
    pub categories: &'a [Category],
    pub pinned: Vec<&'a str>,
    pub session_size: usize,
    pub session_check: Result<(), SelectError>,
    /// Words owned by more than one category, with the owning ids
    pub shared_words: Vec<(&'a str, Vec<&'a str>)>,
}

impl CatalogReport<'_> {
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.session_check.is_ok()
    }
}

/// Inspect a catalog for a given session size
#[must_use]
pub fn inspect_catalog(catalog: &Catalog, session_size: usize) -> CatalogReport<'_> {
    // The draw itself is irrelevant; only whether one is possible
    let session_check = select(catalog, session_size, &mut StdRng::seed_from_u64(0)).map(|_| ());

    let mut owners: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for category in catalog.list_all() {
        for word in category.words() {
            owners.entry(word.as_str()).or_default().push(category.id());
        }
    }
    let mut shared_words: Vec<(&str, Vec<&str>)> =
        owners.into_iter().filter(|(_, ids)| ids.len() > 1).collect();
    shared_words.sort_unstable_by_key(|(word, _)| *word);

    CatalogReport {
        categories: catalog.list_all(),
        pinned: catalog.pinned().map(Category::id).collect(),
        session_size,
        session_check,
        shared_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::parse_catalog;

    #[test]
    fn builtin_is_playable() {
        let catalog = Catalog::builtin().unwrap();
        let report = inspect_catalog(&catalog, 4);

        assert!(report.is_playable());
        assert_eq!(report.pinned, vec!["anniversary"]);
        assert_eq!(report.categories.len(), 8);
        assert!(report.shared_words.is_empty());
    }

    #[test]
    fn oversized_session_not_playable() {
        let catalog = Catalog::builtin().unwrap();
        let report = inspect_catalog(&catalog, 9);

        assert_eq!(
            report.session_check,
            Err(SelectError::InsufficientCategories {
                requested: 9,
                available: 8
            })
        );
    }

    #[test]
    fn missing_pin_reported() {
        let catalog = parse_catalog("a | A | red | 1 | W, X, Y, Z\nb | B | blue | 1 | P, Q, R, S").unwrap();
        let report = inspect_catalog(&catalog, 2);

        assert!(report.pinned.is_empty());
        assert_eq!(report.session_check, Err(SelectError::Configuration { pinned: 0 }));
    }

    #[test]
    fn shared_words_listed() {
        let catalog = parse_catalog(
            "a | A | red | 1 | W, X, Y, Z | pinned\nb | B | blue | 1 | X, Q, R, W",
        )
        .unwrap();
        let report = inspect_catalog(&catalog, 2);

        assert!(report.is_playable());
        assert_eq!(
            report.shared_words,
            vec![("W", vec!["a", "b"]), ("X", vec!["a", "b"])]
        );
    }
}
