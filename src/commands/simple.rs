//! Simple interactive CLI mode
//!
//! Text-based game without TUI. There is no animation here, so shake and
//! confetti are dismissed as soon as their feedback line is printed.

use crate::core::{Tile, WORDS_PER_CATEGORY};
use crate::interactive::reveal::{self, RevealStep};
use crate::output::formatters::{hearts, mistakes_remaining, paint};
use crate::puzzle::{GuessOutcome, MISTAKE_LIMIT, Puzzle, Snapshot};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand<'i> {
    /// 1-based tile numbers to toggle
    Toggle(Vec<usize>),
    /// A word typed out in full
    Word(&'i str),
    Submit,
    Shuffle,
    Clear,
    New,
    Quit,
    Help,
}

/// Parse one line of input
///
/// Lines made only of numbers (space or comma separated) toggle tiles;
/// known keywords are commands; anything else is taken as a word.
#[must_use]
pub fn parse_command(input: &str) -> TextCommand<'_> {
    let trimmed = input.trim();

    match trimmed.to_lowercase().as_str() {
        "submit" | "s" | "go" => return TextCommand::Submit,
        "shuffle" | "mix" => return TextCommand::Shuffle,
        "clear" | "c" => return TextCommand::Clear,
        "new" | "n" => return TextCommand::New,
        "quit" | "q" | "exit" => return TextCommand::Quit,
        "help" | "h" | "?" | "" => return TextCommand::Help,
        _ => {}
    }

    let numbers: Option<Vec<usize>> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect();

    match numbers {
        Some(indices) => TextCommand::Toggle(indices),
        None => TextCommand::Word(trimmed),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output,
/// or if starting a new game fails.
pub fn run_simple<R: Rng>(puzzle: &mut Puzzle<'_, R>, session_size: usize) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_text(puzzle, session_size, stdin.lock(), &mut stdout)
}

/// Play a text game reading commands from `input` until quit or end of input
///
/// # Errors
///
/// Returns an error on I/O failure or if starting a new game fails.
pub fn play_text<R, I, W>(
    puzzle: &mut Puzzle<'_, R>,
    session_size: usize,
    input: I,
    out: &mut W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    print_intro(out)?;

    loop {
        print_board(&puzzle.snapshot(), out)?;

        if puzzle.is_complete() {
            print_completion(&puzzle.snapshot(), out)?;

            write!(out, "Play again? (yes/no): ")?;
            out.flush()?;
            let Some(answer) = lines.next().transpose()? else {
                return Ok(());
            };
            if matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
                puzzle.reset(session_size)?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match parse_command(&line) {
            TextCommand::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            TextCommand::Help => print_help(out)?,
            TextCommand::New => {
                puzzle.reset(session_size)?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            TextCommand::Shuffle => puzzle.shuffle(),
            TextCommand::Clear => puzzle.clear_selection(),
            TextCommand::Submit => submit(puzzle, out)?,
            TextCommand::Toggle(indices) => {
                if refuse_when_locked(&puzzle.snapshot(), out)? {
                    continue;
                }
                for index in indices {
                    let word = index
                        .checked_sub(1)
                        .and_then(|i| puzzle.tiles().get(i))
                        .map(Tile::word);
                    match word {
                        Some(word) => puzzle.toggle_word(word),
                        None => writeln!(out, "{}", format!("No tile number {index}").red())?,
                    }
                }
            }
            TextCommand::Word(typed) => {
                if refuse_when_locked(&puzzle.snapshot(), out)? {
                    continue;
                }
                let word = puzzle
                    .tiles()
                    .iter()
                    .map(Tile::word)
                    .find(|w| w.to_lowercase() == typed.to_lowercase());
                match word {
                    Some(word) => puzzle.toggle_word(word),
                    None => writeln!(out, "{}", format!("'{typed}' is not on the board").red())?,
                }
            }
        }
    }
}

fn submit<R: Rng, W: Write>(puzzle: &mut Puzzle<'_, R>, out: &mut W) -> io::Result<()> {
    match puzzle.submit_guess() {
        GuessOutcome::Solved(category) => {
            writeln!(
                out,
                "\n✨ {}{}\n",
                "Solved:".green().bold(),
                paint(&format!(" {} ", category.name()), category.tag())
            )?;
            puzzle.dismiss_confetti();
        }
        GuessOutcome::Mistake => {
            let remaining = puzzle.snapshot().remaining_mistakes();
            writeln!(
                out,
                "\n❌ {} {}\n",
                "Not a group.".red().bold(),
                mistakes_remaining(remaining)
            )?;
            puzzle.dismiss_shake();
        }
        GuessOutcome::Ignored => {
            writeln!(out, "Select exactly {WORDS_PER_CATEGORY} words before submitting.")?;
        }
    }
    Ok(())
}

/// Tile selection is disabled once the mistake limit is reached
fn refuse_when_locked<W: Write>(snapshot: &Snapshot<'_>, out: &mut W) -> io::Result<bool> {
    if snapshot.locked() {
        writeln!(
            out,
            "{}",
            "Out of mistakes! Type 'new' to start over.".red().bold()
        )?;
    }
    Ok(snapshot.locked())
}

fn print_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Quartet - Find the Groups of Four             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(out)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Pick four words that belong together, then submit.\n")?;
    writeln!(out, "  - Type tile numbers (e.g. '1 5 7 12') or a word to select/deselect")?;
    writeln!(out, "  - 'submit' (s) to check your four words")?;
    writeln!(out, "  - 'shuffle', 'clear' (c), 'new' (n), 'quit' (q)\n")?;
    Ok(())
}

fn print_board<W: Write>(snapshot: &Snapshot<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Solved {}/{}   {}",
        snapshot.solved.len(),
        snapshot.session.len(),
        hearts(snapshot.remaining_mistakes(), MISTAKE_LIMIT).red()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;

    for category in snapshot.solved {
        writeln!(out, "{}", paint(&format!(" {} ", category.name()), category.tag()).bold())?;
        writeln!(out, "   {}", category.words().join(" · "))?;
    }

    for (row, tiles) in snapshot.tiles.chunks(WORDS_PER_CATEGORY).enumerate() {
        let cells: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, tile)| {
                let number = row * WORDS_PER_CATEGORY + col + 1;
                let cell = format!("{number:>2}. {:<24}", tile.word());
                if snapshot.is_selected(tile.word()) {
                    cell.reversed().bold().to_string()
                } else {
                    cell
                }
            })
            .collect();
        writeln!(out, "{}", cells.join(" "))?;
    }

    if !snapshot.selected.is_empty() {
        writeln!(out, "\nSelected: {}", snapshot.selected.join(", ").bright_blue())?;
    }
    if snapshot.mistakes > 0 {
        writeln!(out, "{}", mistakes_remaining(snapshot.remaining_mistakes()).red())?;
    }
    writeln!(out)
}

fn print_completion<W: Write>(snapshot: &Snapshot<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_magenta())?;
    if reveal::celebration_due(snapshot) {
        for step in reveal::script(snapshot.session.pinned(), snapshot.mistakes) {
            match step {
                RevealStep::Headline(text) => writeln!(out, "  {}", text.bright_green().bold())?,
                RevealStep::Subtitle(text) => writeln!(out, "  {}\n", text.bright_white())?,
                RevealStep::Panel { title, lines } => {
                    writeln!(out, "  {}", title.bright_yellow().bold())?;
                    for line in lines {
                        writeln!(out, "    {line}")?;
                    }
                    writeln!(out)?;
                }
                RevealStep::SignOff(text) => writeln!(out, "  {}", text.bright_magenta().bold())?,
                RevealStep::PlayAgain => {}
            }
        }
    } else {
        writeln!(out, "  {}", "🎊 All groups found! 🎊".bright_green().bold())?;
    }
    writeln!(out, "{}\n", "═".repeat(62).bright_magenta())
}
