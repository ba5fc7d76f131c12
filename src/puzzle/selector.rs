//! Session category selection

use super::SelectError;
use crate::catalog::Catalog;
use crate::core::Category;
use rand::Rng;
use rand::seq::SliceRandom;

/// The categories active for one play-through
///
/// The pinned category always comes first; the rest are in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session<'a> {
    categories: Vec<&'a Category>,
}

impl<'a> Session<'a> {
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[&'a Category] {
        &self.categories
    }

    /// The pinned category of this session
    #[must_use]
    pub fn pinned(&self) -> &'a Category {
        self.categories[0]
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id() == id)
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

/// Select a session: the pinned category plus `session_size - 1` others
///
/// The non-pinned categories are drawn uniformly without replacement.
///
/// # Errors
/// Returns `SelectError` if:
/// - `session_size` is 0
/// - The catalog does not pin exactly one category
/// - The catalog has fewer than `session_size` categories
///
/// # Examples
/// ```
/// use quartet::catalog::Catalog;
/// use quartet::puzzle::select;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let catalog = Catalog::builtin().unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let session = select(&catalog, 4, &mut rng).unwrap();
///
/// assert_eq!(session.len(), 4);
/// assert!(session.pinned().is_pinned());
/// ```
pub fn select<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    session_size: usize,
    rng: &mut R,
) -> Result<Session<'a>, SelectError> {
    if session_size == 0 {
        return Err(SelectError::InvalidSessionSize);
    }

    let (pinned, mut others): (Vec<&Category>, Vec<&Category>) =
        catalog.list_all().iter().partition(|c| c.is_pinned());

    let [pinned] = pinned.as_slice() else {
        return Err(SelectError::Configuration {
            pinned: pinned.len(),
        });
    };

    if catalog.len() < session_size {
        return Err(SelectError::InsufficientCategories {
            requested: session_size,
            available: catalog.len(),
        });
    }

    others.shuffle(rng);
    others.truncate(session_size - 1);

    let mut categories = Vec::with_capacity(session_size);
    categories.push(*pinned);
    categories.extend(others);

    Ok(Session { categories })
}
