//! Guess validation

use crate::core::{Category, WORDS_PER_CATEGORY};
use rustc_hash::FxHashSet;

/// Find the category whose word set equals the selection exactly
///
/// Returns `None` unless the selection holds exactly four distinct words
/// that are all owned by one category.
///
/// # Examples
/// ```
/// use quartet::catalog::Catalog;
/// use quartet::puzzle::matches;
///
/// let catalog = Catalog::builtin().unwrap();
/// let hit = matches(&["GUS", "JULES", "SHAWN", "LASSIE"], catalog.list_all());
/// assert_eq!(hit.map(|c| c.id()), Some("psych"));
///
/// assert!(matches(&["GUS", "JULES", "SHAWN", "BURR"], catalog.list_all()).is_none());
/// ```
pub fn matches<'a, S, I>(selection: &[S], categories: I) -> Option<&'a Category>
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Category>,
{
    let selected: FxHashSet<&str> = selection.iter().map(|s| s.as_ref()).collect();
    if selected.len() != WORDS_PER_CATEGORY {
        return None;
    }

    categories
        .into_iter()
        .find(|category| category.words().iter().all(|w| selected.contains(w.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("a", "A", ["A1", "A2", "A3", "A4"], Tag::Red).unwrap(),
            Category::new("b", "B", ["B1", "B2", "B3", "B4"], Tag::Blue).unwrap(),
        ]
    }

    #[test]
    fn exact_match_in_any_order() {
        let cats = categories();
        let hit = matches(&["A3", "A1", "A4", "A2"], &cats);
        assert_eq!(hit.map(Category::id), Some("a"));
    }

    #[test]
    fn mixed_selection_does_not_match() {
        let cats = categories();
        assert!(matches(&["A1", "A2", "A3", "B1"], &cats).is_none());
    }

    #[test]
    fn short_selection_never_matches() {
        let cats = categories();
        assert!(matches(&["A1", "A2", "A3"], &cats).is_none());
        assert!(matches::<&str, _>(&[], &cats).is_none());
    }

    #[test]
    fn repeated_word_does_not_count_twice() {
        let cats = categories();
        assert!(matches(&["A1", "A1", "A2", "A3"], &cats).is_none());
    }

    #[test]
    fn unknown_words_do_not_match() {
        let cats = categories();
        assert!(matches(&["X", "Y", "Z", "W"], &cats).is_none());
    }

    #[test]
    fn owned_strings_accepted() {
        let cats = categories();
        let selection: Vec<String> = ["B1", "B2", "B3", "B4"].map(String::from).to_vec();
        assert_eq!(matches(&selection, &cats).map(Category::id), Some("b"));
    }

    #[test]
    fn searches_only_given_categories() {
        let cats = categories();
        assert!(matches(&["B1", "B2", "B3", "B4"], &cats[..1]).is_none());
    }
}
