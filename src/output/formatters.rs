//! Formatting utilities for terminal output

use crate::core::Tag;
use colored::{ColoredString, Colorize};

/// Color a label with its category tag
#[must_use]
pub fn paint(text: &str, tag: Tag) -> ColoredString {
    match tag {
        Tag::Yellow => text.black().on_bright_yellow(),
        Tag::Green => text.black().on_bright_green(),
        Tag::Blue => text.black().on_bright_blue(),
        Tag::Purple => text.white().on_purple(),
        Tag::Red => text.white().on_red(),
        Tag::Pink => text.black().on_bright_magenta(),
        Tag::Teal => text.black().on_cyan(),
        Tag::Violet => text.white().on_blue(),
    }
}

/// Hearts for the remaining mistakes, e.g. `♥♥♡♡`
#[must_use]
pub fn hearts(remaining: usize, total: usize) -> String {
    let remaining = remaining.min(total);
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(total - remaining))
}

/// "N mistakes remaining" with correct pluralization
#[must_use]
pub fn mistakes_remaining(remaining: usize) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!("{remaining} mistake{plural} remaining")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_full_and_empty() {
        assert_eq!(hearts(4, 4), "♥♥♥♥");
        assert_eq!(hearts(1, 4), "♥♡♡♡");
        assert_eq!(hearts(0, 4), "♡♡♡♡");
    }

    #[test]
    fn hearts_clamped() {
        assert_eq!(hearts(9, 4), "♥♥♥♥");
    }

    #[test]
    fn mistakes_pluralized() {
        assert_eq!(mistakes_remaining(1), "1 mistake remaining");
        assert_eq!(mistakes_remaining(3), "3 mistakes remaining");
        assert_eq!(mistakes_remaining(0), "0 mistakes remaining");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(2.0, 4.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn paint_keeps_text() {
        colored::control::set_override(false);
        assert_eq!(paint("GUS", Tag::Blue).to_string(), "GUS");
    }
}
