//! Catalog loading utilities
//!
//! Parses the line format shared with `data/categories.txt`:
//!
//! ```text
//! # comment
//! id | NAME | tag | weight | WORD, WORD, WORD, WORD [| pinned]
//! ```

use super::{Catalog, CatalogError};
use crate::core::{Category, Tag};
use std::fs;
use std::path::Path;

/// Load a catalog from a file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or any parse and
/// validation error from [`parse_catalog`].
///
/// # Examples
/// ```no_run
/// use quartet::catalog::loader::load_from_file;
///
/// let catalog = load_from_file("data/categories.txt").unwrap();
/// println!("Loaded {} categories", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&content)?;
    tracing::debug!(path = %path.display(), categories = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse catalog text into a validated catalog
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in
/// errors are 1-based.
///
/// # Errors
///
/// Returns `CatalogError::Malformed` for lines with the wrong shape,
/// `CatalogError::InvalidCategory` for lines that fail category validation,
/// and the catalog-level errors of [`Catalog::new`].
///
/// # Examples
/// ```
/// use quartet::catalog::loader::parse_catalog;
///
/// let catalog = parse_catalog("psych | PSYCH | blue | 3 | SHAWN, GUS, LASSIE, JULES | pinned").unwrap();
/// assert_eq!(catalog.list_all()[0].id(), "psych");
/// ```
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let categories = content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::new(categories)
}

fn parse_line(line_no: usize, line: &str) -> Result<Category, CatalogError> {
    let malformed = |reason: String| CatalogError::Malformed {
        line: line_no,
        reason,
    };
    let invalid = |source| CatalogError::InvalidCategory {
        line: line_no,
        source,
    };

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [id, name, tag, weight, words, rest @ ..] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected at least 5 '|'-separated fields, got {}",
            fields.len()
        )));
    };

    let pinned = match rest {
        [] => false,
        ["pinned"] => true,
        [flag] => return Err(malformed(format!("unknown flag '{flag}'"))),
        _ => return Err(malformed(format!("too many fields ({})", fields.len()))),
    };

    let tag: Tag = tag.parse().map_err(invalid)?;
    let weight: u8 = weight
        .parse()
        .map_err(|e| malformed(format!("invalid weight '{weight}': {e}")))?;

    let category = Category::new(*id, *name, words.split(',').map(str::trim), tag)
        .map_err(invalid)?
        .with_weight(weight);

    Ok(if pinned { category.pinned() } else { category })
}
