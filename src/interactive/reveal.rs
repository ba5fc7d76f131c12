//! Post-completion celebration reveal
//!
//! Whether the reveal is due is derived from a snapshot; how much of it is
//! shown is a pure function of the time since completion.

use crate::core::Category;
use crate::puzzle::Snapshot;
use std::time::Duration;

/// Delay after completion at which each reveal step appears
pub const STEP_DELAYS: [Duration; 5] = [
    Duration::from_millis(1000),
    Duration::from_millis(2500),
    Duration::from_millis(4500),
    Duration::from_millis(6500),
    Duration::from_millis(8000),
];

/// One panel of the reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    Headline(String),
    Subtitle(String),
    Panel { title: String, lines: Vec<String> },
    SignOff(String),
    PlayAgain,
}

/// The completion reveal is shown once every category is solved and the pinned one is among them
///
/// Since every session contains the pinned category this is `complete` in practice.
#[must_use]
pub fn celebration_due(snapshot: &Snapshot<'_>) -> bool {
    snapshot.complete && snapshot.is_solved(snapshot.session.pinned().id())
}

/// Number of steps visible `elapsed` after completion (0..=5)
#[must_use]
pub fn visible_steps(elapsed: Duration) -> usize {
    STEP_DELAYS.iter().filter(|delay| elapsed >= **delay).count()
}

/// Time until the next step appears, or `None` once everything is visible
#[must_use]
pub fn until_next_step(elapsed: Duration) -> Option<Duration> {
    STEP_DELAYS
        .iter()
        .find(|delay| elapsed < **delay)
        .map(|delay| *delay - elapsed)
}

/// The scripted reveal for a session, built around its pinned category
#[must_use]
pub fn script(pinned: &Category, mistakes: usize) -> [RevealStep; 5] {
    let subtitle = match mistakes {
        0 => "A perfect game, not a single mistake".to_string(),
        1 => "Solved with just one mistake".to_string(),
        n => format!("Solved with {n} mistakes along the way"),
    };

    [
        RevealStep::Headline("🎉 Congratulations! 🎉".to_string()),
        RevealStep::Subtitle(subtitle),
        RevealStep::Panel {
            title: format!("{} ✨", pinned.name()),
            lines: pinned.words().iter().map(|w| format!("• {w}")).collect(),
        },
        RevealStep::SignOff("Thanks for playing! 🌙✨".to_string()),
        RevealStep::PlayAgain,
    ]
}
