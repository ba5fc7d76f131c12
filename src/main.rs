//! Quartet - CLI
//!
//! Find-the-group-of-four word puzzle with TUI and text modes, plus catalog
//! inspection and seeded simulation for checking a catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quartet::{
    catalog::{Catalog, loader::load_from_file},
    commands::{SimulationConfig, inspect_catalog, run_simple, run_simulation},
    output::{print_catalog_report, print_simulation_result},
    puzzle::{DEFAULT_SESSION_SIZE, Puzzle},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "quartet",
    about = "Find the groups of four related words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'builtin' (default) or path to a catalog file
    #[arg(short, long, global = true, default_value = "builtin")]
    catalog: String,

    /// Categories per session, including the pinned one
    #[arg(short = 'k', long, global = true, default_value_t = DEFAULT_SESSION_SIZE)]
    session_size: usize,

    /// Seed for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (line-based, no TUI)
    Simple,

    /// List the catalog and check that it can produce sessions
    Catalog,

    /// Play many seeded games with a random guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Give up on a game after this many guesses
        #[arg(long, default_value = "10000")]
        max_guesses: usize,
    },
}

/// Load the catalog based on the -c flag
fn load_catalog(catalog_mode: &str) -> Result<Catalog> {
    match catalog_mode {
        "builtin" => Catalog::builtin().context("built-in catalog is invalid"),
        path => load_from_file(path).with_context(|| format!("cannot load catalog '{path}'")),
    }
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given; otherwise to stderr, except in the TUI
/// where stderr would corrupt the screen.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "quartet=info".into());

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    let stderr_layer =
        (log_file.is_none() && !tui).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let catalog = load_catalog(&cli.catalog)?;
    tracing::debug!(categories = catalog.len(), source = %cli.catalog, "catalog loaded");

    match command {
        Commands::Play => run_play_command(&catalog, cli.session_size, cli.seed),
        Commands::Simple => run_simple_command(&catalog, cli.session_size, cli.seed),
        Commands::Catalog => {
            print_catalog_report(&inspect_catalog(&catalog, cli.session_size));
            Ok(())
        }
        Commands::Simulate { count, max_guesses } => {
            let config = SimulationConfig {
                games: count,
                session_size: cli.session_size,
                seed: cli.seed.unwrap_or(0),
                max_guesses,
                show_progress: true,
            };
            println!("Simulating {count} games of {} categories...", cli.session_size);
            let result = run_simulation(&catalog, &config)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn new_puzzle(catalog: &Catalog, session_size: usize, seed: Option<u64>) -> Result<Puzzle<'_>> {
    let puzzle = match seed {
        Some(seed) => Puzzle::seeded(catalog, session_size, seed),
        None => Puzzle::from_os_rng(catalog, session_size),
    };
    puzzle.context("cannot start a session")
}

fn run_simple_command(catalog: &Catalog, session_size: usize, seed: Option<u64>) -> Result<()> {
    let mut puzzle = new_puzzle(catalog, session_size, seed)?;
    run_simple(&mut puzzle, session_size)
}

fn run_play_command(catalog: &Catalog, session_size: usize, seed: Option<u64>) -> Result<()> {
    use quartet::interactive::{App, run_tui};

    let puzzle = new_puzzle(catalog, session_size, seed)?;
    run_tui(App::new(puzzle, session_size))
}
