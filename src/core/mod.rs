//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types: categories and the tiles
//! derived from them. Nothing here touches randomness or terminal I/O.

mod category;
mod tile;

pub use category::{Category, CategoryError, Tag, WORDS_PER_CATEGORY};
pub use tile::Tile;
