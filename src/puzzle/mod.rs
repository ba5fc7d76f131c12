//! Puzzle logic
//!
//! Session selection, tile shuffling, guess validation and the engine state
//! machine that ties them together. Randomness is always supplied by the
//! caller as an `R: rand::Rng`, so every piece can be seeded in tests.

mod engine;
mod error;
pub mod selector;
pub mod shuffler;
pub mod validator;

pub use engine::{DEFAULT_SESSION_SIZE, GuessOutcome, MISTAKE_LIMIT, Puzzle, Snapshot};
pub use error::SelectError;
pub use selector::{Session, select};
pub use shuffler::shuffle;
pub use validator::matches;
