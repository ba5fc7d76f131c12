//! TUI application state and logic

use super::reveal;
use super::timers::Timers;
use crate::core::WORDS_PER_CATEGORY;
use crate::puzzle::{GuessOutcome, MISTAKE_LIMIT, Puzzle};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Tiles per board row
pub const COLUMNS: usize = 4;

/// Redraw interval while confetti is falling
const FRAME: Duration = Duration::from_millis(100);

/// Poll timeout when no timer is pending
const IDLE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub puzzle: Puzzle<'a>,
    pub session_size: usize,
    /// Index into the current tiles
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub timers: Timers,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(puzzle: Puzzle<'a>, session_size: usize) -> Self {
        let mut app = Self {
            puzzle,
            session_size,
            cursor: 0,
            messages: Vec::new(),
            timers: Timers::default(),
            should_quit: false,
        };
        app.add_message(
            "Find groups of four words that share something in common.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply a key press at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            // Everything else is inert once the board is cleared
            _ if self.puzzle.is_complete() => {}
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-(COLUMNS as isize)),
            KeyCode::Down => self.move_cursor(COLUMNS as isize),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_at_cursor(),
            KeyCode::Char('s') => self.submit(now),
            KeyCode::Char('r') => {
                self.puzzle.shuffle();
                self.add_message("Shuffled.", MessageStyle::Info);
            }
            KeyCode::Char('c') => self.puzzle.clear_selection(),
            _ => {}
        }
    }

    /// Dismiss flags whose timers ran out
    pub fn tick(&mut self, now: Instant) {
        let expired = self.timers.take_expired(now);
        if expired.shake {
            self.puzzle.dismiss_shake();
        }
        if expired.confetti {
            self.puzzle.dismiss_confetti();
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.puzzle.tiles().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor.saturating_add_signed(delta);
        if target < len {
            self.cursor = target;
        }
    }

    pub fn toggle_at_cursor(&mut self) {
        if self.puzzle.snapshot().locked() {
            self.add_message("Out of mistakes! Press 'n' to start over.", MessageStyle::Error);
            return;
        }
        if let Some(word) = self.puzzle.tiles().get(self.cursor).map(|t| t.word()) {
            self.puzzle.toggle_word(word);
        }
    }

    pub fn submit(&mut self, now: Instant) {
        match self.puzzle.submit_guess() {
            GuessOutcome::Solved(category) => {
                self.timers.start_confetti(now);
                self.add_message(&format!("✨ {}", category.name()), MessageStyle::Success);
                self.clamp_cursor();
                if self.puzzle.is_complete() {
                    self.timers.mark_complete(now);
                }
            }
            GuessOutcome::Mistake => {
                self.timers.start_shake(now);
                let mistakes = self.puzzle.mistakes();
                if mistakes >= MISTAKE_LIMIT {
                    self.add_message(
                        "Out of mistakes! Press 'n' to start over.",
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("Not a group. {mistakes} of {MISTAKE_LIMIT} mistakes used."),
                        MessageStyle::Error,
                    );
                }
            }
            GuessOutcome::Ignored => {
                self.add_message(
                    &format!("Select {WORDS_PER_CATEGORY} words first."),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.puzzle.reset(self.session_size) {
            Ok(()) => {
                self.timers.clear();
                self.cursor = 0;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Cannot start a new game: {e}"), MessageStyle::Error),
        }
    }

    /// Time since completion while the reveal is due
    #[must_use]
    pub fn reveal_elapsed(&self, now: Instant) -> Option<Duration> {
        if reveal::celebration_due(&self.puzzle.snapshot()) {
            self.timers.reveal_elapsed(now)
        } else {
            None
        }
    }

    /// How long the event loop may wait for input before redrawing
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let timeout = self.timers.next_deadline(now).unwrap_or(IDLE);
        if self.puzzle.snapshot().confetti_active {
            timeout.min(FRAME)
        } else {
            timeout
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.puzzle.tiles().len().saturating_sub(1));
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    let restored = restore_terminal(&mut terminal);
    session_result(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// The game's own error wins over a failure to restore the terminal
fn session_result(run: Result<()>, restore: Result<()>) -> Result<()> {
    run.and(restore)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app, Instant::now()))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
