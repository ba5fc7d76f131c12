//! Seeded simulation of many games
//!
//! Plays sessions with a random guesser to check that the catalog draws fairly
//! and that every session can be completed.

use crate::catalog::Catalog;
use crate::core::{Tile, WORDS_PER_CATEGORY};
use crate::puzzle::{DEFAULT_SESSION_SIZE, MISTAKE_LIMIT, Puzzle, SelectError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Keeps the guesser's random stream apart from the session's
const GUESSER_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub session_size: usize,
    /// Game `i` is dealt from `seed + i`
    pub seed: u64,
    /// Give up on a game after this many submitted guesses
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 200,
            session_size: DEFAULT_SESSION_SIZE,
            seed: 0,
            max_guesses: 10_000,
            show_progress: false,
        }
    }
}

/// Outcome of a single simulated game
#[derive(Debug, Clone)]
struct GameRecord {
    guesses: usize,
    mistakes: usize,
    completed: bool,
    categories: Vec<String>,
}

/// Aggregated statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub completed: usize,
    pub average_guesses: f64,
    pub average_mistakes: f64,
    pub min_mistakes: usize,
    pub max_mistakes: usize,
    /// Games that reached the mistake limit (and kept playing)
    pub past_limit: usize,
    /// How many sessions each category appeared in
    pub draw_counts: FxHashMap<String, usize>,
    pub duration: Duration,
}

/// Run `config.games` seeded games in parallel
///
/// # Errors
///
/// Returns `SelectError` if the catalog cannot produce sessions of the
/// configured size.
pub fn run_simulation(
    catalog: &Catalog,
    config: &SimulationConfig,
) -> Result<SimulationResult, SelectError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("playing");

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_random_game(catalog, config, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");
    tracing::debug!(games = records.len(), "simulation finished");

    Ok(summarize(&records, start.elapsed()))
}

/// Play one game by guessing random untried combinations of the remaining tiles
fn play_random_game(
    catalog: &Catalog,
    config: &SimulationConfig,
    seed: u64,
) -> Result<GameRecord, SelectError> {
    let mut puzzle = Puzzle::seeded(catalog, config.session_size, seed)?;
    let mut rng = StdRng::seed_from_u64(seed ^ GUESSER_SALT);
    let categories = puzzle
        .session()
        .categories()
        .iter()
        .map(|c| c.id().to_string())
        .collect();

    let mut tried: FxHashSet<Vec<&str>> = FxHashSet::default();
    let mut guesses = 0;
    let mut draws = 0;
    let max_draws = config.max_guesses.saturating_mul(4);

    while !puzzle.is_complete() && guesses < config.max_guesses && draws < max_draws {
        draws += 1;
        let board: Vec<&str> = puzzle.tiles().iter().map(Tile::word).collect();
        let mut pick: Vec<&str> = board
            .choose_multiple(&mut rng, WORDS_PER_CATEGORY)
            .copied()
            .collect();
        pick.sort_unstable();
        if !tried.insert(pick.clone()) {
            continue;
        }

        for word in pick {
            puzzle.toggle_word(word);
        }
        puzzle.submit_guess();
        guesses += 1;

        // No renderer: dismiss cosmetic flags right away
        puzzle.dismiss_shake();
        puzzle.dismiss_confetti();
    }

    Ok(GameRecord {
        guesses,
        mistakes: puzzle.mistakes(),
        completed: puzzle.is_complete(),
        categories,
    })
}

fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let games = records.len();
    let mut draw_counts: FxHashMap<String, usize> = FxHashMap::default();
    for record in records {
        for id in &record.categories {
            *draw_counts.entry(id.clone()).or_insert(0) += 1;
        }
    }

    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();
    let total_mistakes: usize = records.iter().map(|r| r.mistakes).sum();
    let per_game = |total: usize| {
        if games == 0 {
            0.0
        } else {
            total as f64 / games as f64
        }
    };

    SimulationResult {
        games,
        completed: records.iter().filter(|r| r.completed).count(),
        average_guesses: per_game(total_guesses),
        average_mistakes: per_game(total_mistakes),
        min_mistakes: records.iter().map(|r| r.mistakes).min().unwrap_or(0),
        max_mistakes: records.iter().map(|r| r.mistakes).max().unwrap_or(0),
        past_limit: records.iter().filter(|r| r.mistakes >= MISTAKE_LIMIT).count(),
        draw_counts,
        duration,
    }
}
