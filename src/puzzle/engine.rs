//! Puzzle engine
//!
//! Owns the state of one play-through and applies commands to it. Every
//! command is a synchronous, atomic transition; invalid commands are inert.

use super::selector::{Session, select};
use super::shuffler::shuffle;
use super::validator::matches;
use super::SelectError;
use crate::catalog::Catalog;
use crate::core::{Category, Tile, WORDS_PER_CATEGORY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Mistakes after which front ends lock tile selection
///
/// The engine itself keeps accepting guesses past this point.
pub const MISTAKE_LIMIT: usize = 4;

/// Number of categories in a session unless configured otherwise
pub const DEFAULT_SESSION_SIZE: usize = 4;

/// What a submitted guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome<'a> {
    /// The selection was exactly this category's words
    Solved(&'a Category),
    /// Four words that do not form a category
    Mistake,
    /// Fewer than four words selected; nothing changed
    Ignored,
}

/// Read-only view of the engine state for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'s> {
    pub session: &'s Session<'s>,
    pub tiles: &'s [Tile<'s>],
    pub selected: &'s [&'s str],
    pub solved: &'s [&'s Category],
    pub mistakes: usize,
    pub shake_active: bool,
    pub confetti_active: bool,
    pub complete: bool,
}

impl Snapshot<'_> {
    /// Exactly four words are selected
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.len() == WORDS_PER_CATEGORY
    }

    /// The mistake limit has been reached
    #[inline]
    #[must_use]
    pub const fn locked(&self) -> bool {
        self.mistakes >= MISTAKE_LIMIT
    }

    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.contains(&word)
    }

    #[must_use]
    pub const fn remaining_mistakes(&self) -> usize {
        MISTAKE_LIMIT.saturating_sub(self.mistakes)
    }

    #[must_use]
    pub fn is_solved(&self, id: &str) -> bool {
        self.solved.iter().any(|c| c.id() == id)
    }
}

/// The puzzle state machine
///
/// Generic over the random source so sessions can be replayed from a seed.
pub struct Puzzle<'a, R: Rng = StdRng> {
    catalog: &'a Catalog,
    rng: R,
    session: Session<'a>,
    tiles: Vec<Tile<'a>>,
    selected: Vec<&'a str>,
    solved: Vec<&'a Category>,
    mistakes: usize,
    shake_active: bool,
    confetti_active: bool,
    complete: bool,
}

impl<'a> Puzzle<'a, StdRng> {
    /// Create a puzzle whose sessions are reproducible from `seed`
    ///
    /// # Errors
    /// Returns `SelectError` if the catalog cannot produce a session.
    ///
    /// # Examples
    /// ```
    /// use quartet::catalog::Catalog;
    /// use quartet::puzzle::{Puzzle, GuessOutcome};
    ///
    /// let catalog = Catalog::builtin().unwrap();
    /// let mut puzzle = Puzzle::seeded(&catalog, 4, 7).unwrap();
    ///
    /// for word in ["STEAK", "LOVE", "😏", "LOBSTER"] {
    ///     puzzle.toggle_word(word);
    /// }
    /// assert!(matches!(puzzle.submit_guess(), GuessOutcome::Solved(_)));
    /// assert_eq!(puzzle.snapshot().tiles.len(), 12);
    /// ```
    pub fn seeded(catalog: &'a Catalog, session_size: usize, seed: u64) -> Result<Self, SelectError> {
        Self::new(catalog, session_size, StdRng::seed_from_u64(seed))
    }

    /// Create a puzzle seeded from the operating system
    ///
    /// # Errors
    /// Returns `SelectError` if the catalog cannot produce a session.
    pub fn from_os_rng(catalog: &'a Catalog, session_size: usize) -> Result<Self, SelectError> {
        Self::new(catalog, session_size, StdRng::from_os_rng())
    }
}

impl<'a, R: Rng> Puzzle<'a, R> {
    /// Start a session drawn from `catalog` using `rng`
    ///
    /// # Errors
    /// Returns `SelectError` if the catalog cannot produce a session.
    pub fn new(catalog: &'a Catalog, session_size: usize, mut rng: R) -> Result<Self, SelectError> {
        let session = select(catalog, session_size, &mut rng)?;
        let tiles = shuffle(session.categories().iter().copied(), &mut rng);
        log_session(&session);

        Ok(Self {
            catalog,
            rng,
            session,
            tiles,
            selected: Vec::with_capacity(WORDS_PER_CATEGORY),
            solved: Vec::new(),
            mistakes: 0,
            shake_active: false,
            confetti_active: false,
            complete: false,
        })
    }

    /// Select or deselect a word on the board
    ///
    /// Words not on the board and a fifth selection are ignored.
    pub fn toggle_word(&mut self, word: &str) {
        let Some(word) = self.tiles.iter().map(Tile::word).find(|w| *w == word) else {
            trace!(word, "toggle ignored: word not on board");
            return;
        };

        if let Some(pos) = self.selected.iter().position(|w| *w == word) {
            self.selected.remove(pos);
            trace!(word, selected = self.selected.len(), "deselected");
        } else if self.selected.len() < WORDS_PER_CATEGORY {
            self.selected.push(word);
            trace!(word, selected = self.selected.len(), "selected");
        } else {
            trace!(word, "toggle ignored: selection full");
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Reorder the remaining tiles; membership and selection are unchanged
    pub fn shuffle(&mut self) {
        let unsolved: Vec<&'a Category> = self.unsolved().collect();
        self.tiles = shuffle(unsolved, &mut self.rng);
        debug!(tiles = self.tiles.len(), "shuffled board");
    }

    /// Check the current four-word selection against the session
    ///
    /// With fewer than four words selected this is a no-op. The mistake limit
    /// is not enforced here.
    pub fn submit_guess(&mut self) -> GuessOutcome<'a> {
        if !self.can_submit() {
            trace!(selected = self.selected.len(), "submit ignored");
            return GuessOutcome::Ignored;
        }

        // A solved category's words may still be on the board through other categories
        match matches(&self.selected, self.unsolved()) {
            Some(category) => {
                self.solve(category);
                GuessOutcome::Solved(category)
            }
            None => {
                self.mistake();
                GuessOutcome::Mistake
            }
        }
    }

    /// Session categories not yet solved, in session order
    fn unsolved(&self) -> impl Iterator<Item = &'a Category> + '_ {
        self.session
            .categories()
            .iter()
            .copied()
            .filter(move |c| !self.solved.iter().any(|s| s.id() == c.id()))
    }

    fn solve(&mut self, category: &'a Category) {
        self.solved.push(category);
        self.selected.clear();
        self.tiles.retain(|t| t.category_id() != category.id());
        self.confetti_active = true;
        self.complete = self.solved.len() == self.session.len();

        debug!(
            category = category.id(),
            solved = self.solved.len(),
            complete = self.complete,
            "category solved"
        );
        if self.complete {
            info!(mistakes = self.mistakes, "puzzle complete");
        }
    }

    fn mistake(&mut self) {
        debug!(guess = ?self.selected, "guess did not match any category");
        self.mistakes += 1;
        self.selected.clear();
        self.shake_active = true;

        if self.mistakes == MISTAKE_LIMIT {
            info!(mistakes = self.mistakes, "mistake limit reached");
        }
    }

    pub fn dismiss_shake(&mut self) {
        self.shake_active = false;
    }

    pub fn dismiss_confetti(&mut self) {
        self.confetti_active = false;
    }

    /// Draw a fresh session and clear all progress
    ///
    /// # Errors
    /// Returns `SelectError` if the catalog cannot produce a session of this
    /// size; the current state is left untouched in that case.
    pub fn reset(&mut self, session_size: usize) -> Result<(), SelectError> {
        let session = select(self.catalog, session_size, &mut self.rng)?;
        self.tiles = shuffle(session.categories().iter().copied(), &mut self.rng);
        log_session(&session);

        self.session = session;
        self.selected.clear();
        self.solved.clear();
        self.mistakes = 0;
        self.shake_active = false;
        self.confetti_active = false;
        self.complete = false;
        Ok(())
    }

    /// Current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            session: &self.session,
            tiles: &self.tiles,
            selected: &self.selected,
            solved: &self.solved,
            mistakes: self.mistakes,
            shake_active: self.shake_active,
            confetti_active: self.confetti_active,
            complete: self.complete,
        }
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session<'a> {
        &self.session
    }

    /// Tiles still on the board, in display order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile<'a>] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.len() == WORDS_PER_CATEGORY
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> usize {
        self.mistakes
    }
}

fn log_session(session: &Session<'_>) {
    let ids: Vec<&str> = session.categories().iter().map(|c| c.id()).collect();
    info!(categories = ?ids, "new session");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;
    use rand::seq::IndexedRandom;

    fn test_catalog() -> Catalog {
        let cat = |id: &str, words: [&str; 4]| Category::new(id, id.to_uppercase(), words, Tag::Green).unwrap();
        Catalog::new(vec![
            cat("pinned", ["A", "B", "C", "D"]).pinned(),
            cat("e", ["E1", "E2", "E3", "E4"]),
            cat("f", ["F1", "F2", "F3", "F4"]),
            cat("g", ["G1", "G2", "G3", "G4"]),
            cat("h", ["H1", "H2", "H3", "H4"]),
        ])
        .unwrap()
    }

    fn words_of<'a>(puzzle: &Puzzle<'a>, index: usize) -> [&'a str; 4] {
        let category = puzzle.session().categories()[index];
        let w = category.words();
        [w[0].as_str(), w[1].as_str(), w[2].as_str(), w[3].as_str()]
    }

    fn guess<'a>(puzzle: &mut Puzzle<'a>, words: [&str; 4]) -> GuessOutcome<'a> {
        for word in words {
            puzzle.toggle_word(word);
        }
        puzzle.submit_guess()
    }

    fn on_board(puzzle: &Puzzle, word: &str) -> bool {
        puzzle.snapshot().tiles.iter().any(|t| t.word() == word)
    }

    #[test]
    fn new_puzzle_deals_full_board() {
        let catalog = test_catalog();
        let puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        let snap = puzzle.snapshot();

        assert_eq!(snap.session.len(), 4);
        assert_eq!(snap.tiles.len(), 16);
        assert!(snap.selected.is_empty());
        assert!(snap.solved.is_empty());
        assert_eq!(snap.mistakes, 0);
        assert!(!snap.shake_active && !snap.confetti_active && !snap.complete);
        assert!(on_board(&puzzle, "A"));
    }

    #[test]
    fn toggle_twice_deselects() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        puzzle.toggle_word("A");
        assert_eq!(puzzle.snapshot().selected, &["A"]);
        puzzle.toggle_word("A");
        assert!(puzzle.snapshot().selected.is_empty());
    }

    #[test]
    fn fifth_selection_is_ignored() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        let other = words_of(&puzzle, 1);

        for word in ["A", "B", "C", "D", other[0]] {
            puzzle.toggle_word(word);
        }

        let snap = puzzle.snapshot();
        assert_eq!(snap.selected, &["A", "B", "C", "D"]);
        assert!(snap.can_submit());
    }

    #[test]
    fn toggling_unknown_word_is_inert() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        puzzle.toggle_word("NOT A TILE");
        assert!(puzzle.snapshot().selected.is_empty());
    }

    #[test]
    fn exact_guess_solves_category() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        let outcome = guess(&mut puzzle, ["A", "B", "C", "D"]);

        assert!(matches!(outcome, GuessOutcome::Solved(c) if c.id() == "pinned"));
        let snap = puzzle.snapshot();
        assert_eq!(snap.solved.len(), 1);
        assert_eq!(snap.solved[0].id(), "pinned");
        assert_eq!(snap.tiles.len(), 12);
        for word in ["A", "B", "C", "D"] {
            assert!(!on_board(&puzzle, word));
        }
        assert!(snap.selected.is_empty());
        assert!(snap.confetti_active);
        assert!(!snap.complete);
        assert_eq!(snap.mistakes, 0);
    }

    #[test]
    fn mixed_guess_is_a_mistake() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        let other = words_of(&puzzle, 1);

        let outcome = guess(&mut puzzle, ["A", "B", other[0], other[1]]);

        assert_eq!(outcome, GuessOutcome::Mistake);
        let snap = puzzle.snapshot();
        assert_eq!(snap.mistakes, 1);
        assert!(snap.selected.is_empty());
        assert!(snap.shake_active);
        assert!(snap.solved.is_empty());
        assert_eq!(snap.tiles.len(), 16);
    }

    #[test]
    fn short_selection_submit_is_ignored() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        puzzle.toggle_word("A");
        puzzle.toggle_word("B");
        assert_eq!(puzzle.submit_guess(), GuessOutcome::Ignored);

        let snap = puzzle.snapshot();
        assert_eq!(snap.mistakes, 0);
        assert_eq!(snap.selected.len(), 2);
        assert!(!snap.shake_active);
    }

    #[test]
    fn solved_words_cannot_be_selected() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        guess(&mut puzzle, ["A", "B", "C", "D"]);
        puzzle.toggle_word("A");
        assert!(puzzle.snapshot().selected.is_empty());
    }

    #[test]
    fn clear_selection_empties() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();

        puzzle.toggle_word("A");
        puzzle.toggle_word("C");
        puzzle.clear_selection();
        assert!(puzzle.snapshot().selected.is_empty());
    }

    #[test]
    fn shuffle_keeps_membership_and_selection() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        guess(&mut puzzle, ["A", "B", "C", "D"]);
        let other = words_of(&puzzle, 1);
        puzzle.toggle_word(other[2]);

        let mut before: Vec<&str> = puzzle.tiles().iter().map(Tile::word).collect();
        puzzle.shuffle();
        let mut after: Vec<&str> = puzzle.tiles().iter().map(Tile::word).collect();

        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
        assert_eq!(after.len(), 12);
        assert_eq!(puzzle.snapshot().selected, &[other[2]]);
    }

    #[test]
    fn selection_never_exceeds_four() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let all_words: Vec<&str> = catalog
            .list_all()
            .iter()
            .flat_map(|c| c.words().iter().map(String::as_str))
            .chain(["NOPE"])
            .collect();

        for step in 0..500 {
            let word = *all_words.choose(&mut rng).unwrap();
            puzzle.toggle_word(word);
            if step % 37 == 0 {
                puzzle.submit_guess();
            }

            let snap = puzzle.snapshot();
            assert!(snap.selected.len() <= 4);
            for selected in snap.selected {
                assert!(snap.tiles.iter().any(|t| t.word() == *selected));
            }
        }
    }

    #[test]
    fn solved_and_mistakes_only_grow() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(23);
        let (mut last_solved, mut last_mistakes) = (0, 0);

        for _ in 0..300 {
            let board: Vec<&str> = puzzle.tiles().iter().map(Tile::word).collect();
            if board.is_empty() {
                break;
            }
            for word in board.choose_multiple(&mut rng, 4) {
                puzzle.toggle_word(word);
            }
            puzzle.submit_guess();

            let snap = puzzle.snapshot();
            assert!(snap.solved.len() >= last_solved);
            assert!(snap.mistakes >= last_mistakes);
            assert_eq!(snap.tiles.len(), 16 - 4 * snap.solved.len());
            assert_eq!(snap.complete, snap.solved.len() == 4);
            last_solved = snap.solved.len();
            last_mistakes = snap.mistakes;
        }
    }

    #[test]
    fn completes_despite_lockout() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 9).unwrap();
        let first = words_of(&puzzle, 1);
        let second = words_of(&puzzle, 2);

        for _ in 0..5 {
            let outcome = guess(&mut puzzle, [first[0], first[1], second[0], second[1]]);
            assert_eq!(outcome, GuessOutcome::Mistake);
        }
        assert!(puzzle.snapshot().locked());
        assert_eq!(puzzle.mistakes(), 5);

        for index in 0..4 {
            let words = words_of(&puzzle, index);
            assert!(matches!(guess(&mut puzzle, words), GuessOutcome::Solved(_)));
        }

        let snap = puzzle.snapshot();
        assert!(snap.complete);
        assert!(puzzle.is_complete());
        assert!(snap.tiles.is_empty());
        assert_eq!(snap.mistakes, 5);
        assert_eq!(snap.remaining_mistakes(), 0);
        assert!(snap.is_solved("pinned"));
    }

    #[test]
    fn dismissals_clear_flags() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        let other = words_of(&puzzle, 1);

        guess(&mut puzzle, ["A", "B", other[0], other[1]]);
        guess(&mut puzzle, ["A", "B", "C", "D"]);
        assert!(puzzle.snapshot().shake_active);
        assert!(puzzle.snapshot().confetti_active);

        puzzle.dismiss_shake();
        assert!(!puzzle.snapshot().shake_active);
        assert!(puzzle.snapshot().confetti_active);

        puzzle.dismiss_confetti();
        puzzle.dismiss_confetti();
        assert!(!puzzle.snapshot().confetti_active);
    }

    #[test]
    fn reset_clears_progress() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        let other = words_of(&puzzle, 1);

        guess(&mut puzzle, ["A", "B", other[0], other[1]]);
        guess(&mut puzzle, ["A", "B", "C", "D"]);
        puzzle.toggle_word(other[0]);

        puzzle.reset(3).unwrap();

        let snap = puzzle.snapshot();
        assert!(snap.selected.is_empty());
        assert!(snap.solved.is_empty());
        assert_eq!(snap.mistakes, 0);
        assert!(!snap.shake_active && !snap.confetti_active && !snap.complete);
        assert_eq!(snap.session.len(), 3);
        assert_eq!(snap.session.pinned().id(), "pinned");
        assert_eq!(snap.tiles.len(), 12);
    }

    #[test]
    fn failed_reset_keeps_state() {
        let catalog = test_catalog();
        let mut puzzle = Puzzle::seeded(&catalog, 4, 1).unwrap();
        guess(&mut puzzle, ["A", "B", "C", "D"]);

        let err = puzzle.reset(9).unwrap_err();

        assert_eq!(
            err,
            SelectError::InsufficientCategories {
                requested: 9,
                available: 5
            }
        );
        assert_eq!(puzzle.snapshot().solved.len(), 1);
        assert_eq!(puzzle.snapshot().tiles.len(), 12);
    }

    #[test]
    fn construction_propagates_selection_errors() {
        let catalog = test_catalog();
        assert!(matches!(
            Puzzle::seeded(&catalog, 6, 1),
            Err(SelectError::InsufficientCategories { .. })
        ));
    }

    #[test]
    fn same_seed_same_board() {
        let catalog = test_catalog();
        let first = Puzzle::seeded(&catalog, 4, 77).unwrap();
        let second = Puzzle::seeded(&catalog, 4, 77).unwrap();

        assert_eq!(first.snapshot().tiles, second.snapshot().tiles);
    }

    #[test]
    fn shared_word_does_not_block_completion() {
        let catalog = Catalog::new(vec![
            Category::new("p", "P", ["X", "B", "C", "D"], Tag::Red).unwrap().pinned(),
            Category::new("q", "Q", ["X", "F", "G", "H"], Tag::Blue).unwrap(),
        ])
        .unwrap();
        let mut puzzle = Puzzle::seeded(&catalog, 2, 1).unwrap();

        assert!(matches!(guess(&mut puzzle, ["X", "B", "C", "D"]), GuessOutcome::Solved(c) if c.id() == "p"));
        assert!(on_board(&puzzle, "X"));
        assert!(matches!(guess(&mut puzzle, ["X", "F", "G", "H"]), GuessOutcome::Solved(c) if c.id() == "q"));
        assert!(puzzle.is_complete());
    }

    #[test]
    fn solved_category_cannot_be_solved_again() {
        // Every word of p is also in q or r
        let catalog = Catalog::new(vec![
            Category::new("p", "P", ["W", "X", "Y", "Z"], Tag::Red).unwrap().pinned(),
            Category::new("q", "Q", ["W", "X", "Q1", "Q2"], Tag::Blue).unwrap(),
            Category::new("r", "R", ["Y", "Z", "R1", "R2"], Tag::Green).unwrap(),
        ])
        .unwrap();
        let mut puzzle = Puzzle::seeded(&catalog, 3, 5).unwrap();

        assert!(matches!(guess(&mut puzzle, ["W", "X", "Y", "Z"]), GuessOutcome::Solved(c) if c.id() == "p"));
        assert_eq!(puzzle.tiles().len(), 8);

        // Same four words again: p is done, and they form no other group
        assert_eq!(guess(&mut puzzle, ["W", "X", "Y", "Z"]), GuessOutcome::Mistake);
        assert_eq!(guess(&mut puzzle, ["W", "X", "Y", "Z"]), GuessOutcome::Mistake);

        let snap = puzzle.snapshot();
        assert_eq!(snap.solved.len(), 1);
        assert_eq!(snap.mistakes, 2);
        assert!(!snap.complete);
        assert_eq!(snap.tiles.len(), 8);

        assert!(matches!(guess(&mut puzzle, ["W", "X", "Q1", "Q2"]), GuessOutcome::Solved(c) if c.id() == "q"));
        assert!(!puzzle.is_complete());
        assert!(matches!(guess(&mut puzzle, ["Y", "Z", "R1", "R2"]), GuessOutcome::Solved(c) if c.id() == "r"));

        let snap = puzzle.snapshot();
        let mut ids: Vec<&str> = snap.solved.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, ["p", "q", "r"]);
        assert!(snap.complete);
        assert!(snap.tiles.is_empty());
    }

    #[test]
    fn shuffle_after_overlapping_solve_keeps_unsolved_tiles() {
        let catalog = Catalog::new(vec![
            Category::new("p", "P", ["W", "X", "Y", "Z"], Tag::Red).unwrap().pinned(),
            Category::new("q", "Q", ["W", "X", "Q1", "Q2"], Tag::Blue).unwrap(),
            Category::new("r", "R", ["Y", "Z", "R1", "R2"], Tag::Green).unwrap(),
        ])
        .unwrap();
        let mut puzzle = Puzzle::seeded(&catalog, 3, 6).unwrap();
        guess(&mut puzzle, ["W", "X", "Y", "Z"]);

        puzzle.shuffle();

        let snap = puzzle.snapshot();
        assert_eq!(snap.tiles.len(), 8);
        assert!(snap.tiles.iter().all(|t| t.category_id() != "p"));
    }
}
