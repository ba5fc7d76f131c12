//! Puzzle category representation
//!
//! A Category is one correct answer of the puzzle: a named group of exactly four words.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of words in every category (and in every guess)
pub const WORDS_PER_CATEGORY: usize = 4;

/// Display tag of a category
///
/// Purely informational for the engine; front ends map it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Yellow,
    Green,
    Blue,
    Purple,
    Red,
    Pink,
    Teal,
    Violet,
}

impl Tag {
    /// All tags in catalog order
    pub const ALL: [Self; 8] = [
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Red,
        Self::Pink,
        Self::Teal,
        Self::Violet,
    ];

    /// Lowercase name as written in catalog files
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Teal => "teal",
            Self::Violet => "violet",
        }
    }
}

impl FromStr for Tag {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == lowered)
            .ok_or_else(|| CategoryError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for invalid categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("category id must not be empty")]
    EmptyId,
    #[error("category '{0}' has an empty name")]
    EmptyName(String),
    #[error("category '{id}' must have exactly {WORDS_PER_CATEGORY} words, got {count}")]
    WrongWordCount { id: String, count: usize },
    #[error("category '{id}' contains an empty word")]
    EmptyWord { id: String },
    #[error("category '{id}' repeats the word '{word}'")]
    DuplicateWord { id: String, word: String },
    #[error("unknown tag '{0}'")]
    UnknownTag(String),
}

/// A puzzle group: id, display name, four distinct words and a display tag
///
/// Exactly one category of a catalog is expected to be pinned; the selector
/// always puts it into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    name: String,
    words: [String; WORDS_PER_CATEGORY],
    tag: Tag,
    pinned: bool,
    weight: u8,
}

impl Category {
    /// Create a new unpinned category with weight 0
    ///
    /// # Errors
    /// Returns `CategoryError` if:
    /// - The id or name is empty
    /// - There are not exactly four words
    /// - A word is empty or repeated
    ///
    /// # Examples
    /// ```
    /// use quartet::core::{Category, Tag};
    ///
    /// let psych = Category::new("psych", "PSYCH TV SHOW", ["SHAWN", "GUS", "LASSIE", "JULES"], Tag::Blue).unwrap();
    /// assert!(psych.contains("GUS"));
    ///
    /// assert!(Category::new("short", "SHORT", ["A", "B", "C"], Tag::Red).is_err());
    /// ```
    pub fn new<I, W>(
        id: impl Into<String>,
        name: impl Into<String>,
        words: I,
        tag: Tag,
    ) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(CategoryError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(CategoryError::EmptyName(id));
        }

        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(CategoryError::EmptyWord { id });
        }
        for (i, word) in words.iter().enumerate() {
            if words[..i].contains(word) {
                return Err(CategoryError::DuplicateWord {
                    id,
                    word: word.clone(),
                });
            }
        }

        let count = words.len();
        let words: [String; WORDS_PER_CATEGORY] = words
            .try_into()
            .map_err(|_| CategoryError::WrongWordCount { id: id.clone(), count })?;

        Ok(Self {
            id,
            name,
            words,
            tag,
            pinned: false,
            weight: 0,
        })
    }

    /// Mark this category as the pinned one
    #[must_use]
    pub const fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Set the informational comparison weight
    #[must_use]
    pub const fn with_weight(mut self, weight: u8) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The four words in catalog order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &[String; WORDS_PER_CATEGORY] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Informational weight; never consulted by game logic
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u8 {
        self.weight
    }

    /// Check if the category owns a word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.words.join(", "))
    }
}
