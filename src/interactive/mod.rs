//! Interactive TUI mode
//!
//! Terminal UI using ratatui. The app owns the engine and the cosmetic timers;
//! rendering only reads snapshots.

mod app;
mod rendering;
pub mod reveal;
pub mod timers;

pub use app::{App, Message, MessageStyle, run_tui};
