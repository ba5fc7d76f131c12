//! Selectable word tiles

use super::{Category, Tag};
use std::fmt;

/// A word on the board, tagged with the category that owns it
///
/// Tiles borrow from the catalog, so they are cheap to copy and reshuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    word: &'a str,
    category: &'a Category,
}

impl<'a> Tile<'a> {
    #[must_use]
    pub const fn new(word: &'a str, category: &'a Category) -> Self {
        Self { word, category }
    }

    /// All four tiles of a category, in catalog order
    pub fn all_of(category: &'a Category) -> impl Iterator<Item = Self> + 'a {
        category.words().iter().map(move |w| Self::new(w, category))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &'a str {
        self.word
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> &'a Category {
        self.category
    }

    #[inline]
    #[must_use]
    pub fn category_id(&self) -> &'a str {
        self.category.id()
    }

    #[inline]
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.category.tag()
    }
}

impl fmt::Display for Tile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word)
    }
}
