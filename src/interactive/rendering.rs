//! TUI rendering with ratatui
//!
//! Board, solved groups and the completion reveal.

use super::app::{App, COLUMNS, MessageStyle};
use super::reveal::{self, RevealStep};
use super::timers::CONFETTI_DURATION;
use crate::core::{Category, Tag};
use crate::output::formatters::hearts;
use crate::puzzle::{MISTAKE_LIMIT, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

const SPARKLES: [&str; 4] = ["✦", "✧", "·", "*"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let area = f.area();
    let snapshot = app.puzzle.snapshot();
    let solved_height = if snapshot.solved.is_empty() {
        0
    } else {
        (snapshot.solved.len() * 2 + 2) as u16
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(solved_height), // Solved groups
            Constraint::Min(8),                // Board
            Constraint::Length(3),             // Selection / progress
            Constraint::Length(7),             // Messages
            Constraint::Length(1),             // Help
        ])
        .split(area);

    render_header(f, &snapshot, chunks[0]);
    if !snapshot.solved.is_empty() {
        render_solved(f, &snapshot, chunks[1]);
    }
    render_board(f, app, &snapshot, chunks[2]);
    render_progress(f, &snapshot, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_help(f, &snapshot, chunks[5]);

    if snapshot.confetti_active
        && let Some(left) = app.timers.confetti_left(now)
    {
        render_confetti(f, CONFETTI_DURATION.saturating_sub(left), chunks[2]);
    }

    if let Some(elapsed) = app.reveal_elapsed(now) {
        render_reveal(f, &snapshot, elapsed, area);
    }
}

/// Terminal color for a category tag
const fn tag_color(tag: Tag) -> Color {
    match tag {
        Tag::Yellow => Color::Yellow,
        Tag::Green => Color::Green,
        Tag::Blue => Color::Blue,
        Tag::Purple => Color::Magenta,
        Tag::Red => Color::Red,
        Tag::Pink => Color::LightMagenta,
        Tag::Teal => Color::Cyan,
        Tag::Violet => Color::LightBlue,
    }
}

fn render_header(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let hearts_style = if snapshot.locked() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🌙 QUARTET - Find groups of four   ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Mistakes: "),
        Span::styled(
            hearts(snapshot.remaining_mistakes(), MISTAKE_LIMIT),
            hearts_style,
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_solved(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let lines: Vec<Line> = snapshot
        .solved
        .iter()
        .flat_map(|category| solved_lines(category))
        .collect();

    let solved = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Solved ").borders(Borders::ALL));
    f.render_widget(solved, area);
}

fn solved_lines(category: &Category) -> [Line<'static>; 2] {
    let style = Style::default()
        .fg(Color::Black)
        .bg(tag_color(category.tag()));
    [
        Line::from(Span::styled(
            format!(" {} ", category.name()),
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!(" {} ", category.words().join(", ")), style)),
    ]
}

fn render_board(f: &mut Frame, app: &App, snapshot: &Snapshot<'_>, area: Rect) {
    let border_style = if snapshot.shake_active {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let title = if snapshot.shake_active {
        " ✗ Not a group "
    } else {
        " Board "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if snapshot.tiles.is_empty() {
        return;
    }

    // Shake nudges the whole grid sideways
    let inner = if snapshot.shake_active && inner.width > 2 {
        Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        }
    } else {
        inner
    };

    let rows = snapshot.tiles.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * COLUMNS + col;
            if let Some(tile) = snapshot.tiles.get(index) {
                render_tile(f, tile.word(), index == app.cursor, snapshot, *cell);
            }
        }
    }
}

fn render_tile(f: &mut Frame, word: &str, focused: bool, snapshot: &Snapshot<'_>, area: Rect) {
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if snapshot.locked() {
        style = style.fg(Color::DarkGray);
    } else if snapshot.is_selected(word) {
        style = style.fg(Color::White).bg(Color::DarkGray);
    }

    let (border_type, border_style) = if focused {
        (BorderType::Double, Style::default().fg(Color::Yellow))
    } else {
        (BorderType::Rounded, Style::default().fg(Color::Gray))
    };

    let tile = Paragraph::new(word.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    f.render_widget(tile, area);
}

fn render_progress(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let total = snapshot.session.len();
    let solved = snapshot.solved.len();
    let percent = if total == 0 {
        0
    } else {
        (solved * 100 / total) as u16
    };

    let selected = if snapshot.selected.is_empty() {
        "nothing selected".to_string()
    } else {
        snapshot.selected.join(", ")
    };
    let submit_hint = if snapshot.can_submit() {
        " | press s to submit"
    } else {
        ""
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent)
        .label(format!(
            "{solved}/{total} groups | {selected}{submit_hint}"
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let help_text = if snapshot.complete || snapshot.locked() {
        "n: New Game | q: Quit"
    } else {
        "←↑↓→: Move | Space: Select | s: Submit | r: Shuffle | c: Clear | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Sparkles drifting down over the board, positioned by animation frame
fn render_confetti(f: &mut Frame, elapsed: Duration, area: Rect) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let frame = (elapsed.as_millis() / 100) as usize;
    let colors = [Color::Yellow, Color::Magenta, Color::Cyan, Color::Green];
    let width = usize::from(area.width - 2);
    let height = usize::from(area.height - 2);

    for i in 0..12 {
        let x = (i * 7 + frame * 3) % width;
        let y = (i * 5 + frame) % height;
        let cell = Rect {
            x: area.x + 1 + x as u16,
            y: area.y + 1 + y as u16,
            width: 1,
            height: 1,
        };
        let sparkle = Paragraph::new(SPARKLES[(i + frame) % SPARKLES.len()])
            .style(Style::default().fg(colors[i % colors.len()]));
        f.render_widget(sparkle, cell);
    }
}

fn render_reveal(f: &mut Frame, snapshot: &Snapshot<'_>, elapsed: Duration, area: Rect) {
    let visible = reveal::visible_steps(elapsed);
    if visible == 0 {
        return;
    }

    let pinned = snapshot.session.pinned();
    let accent = tag_color(pinned.tag());
    let mut lines = Vec::new();
    for step in reveal::script(pinned, snapshot.mistakes).into_iter().take(visible) {
        match step {
            RevealStep::Headline(text) => lines.push(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))),
            RevealStep::Subtitle(text) => {
                lines.push(Line::from(Span::styled(text, Style::default().fg(Color::Gray))));
            }
            RevealStep::Panel { title, lines: words } => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    title,
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )));
                lines.extend(words.into_iter().map(Line::from));
            }
            RevealStep::SignOff(text) => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(text, Style::default().fg(Color::Cyan))));
            }
            RevealStep::PlayAgain => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Press 'n' for a new game or 'q' to quit",
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            }
        }
    }

    let popup = centered(area, 60, lines.len() as u16 + 2);
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(accent)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

/// A rectangle of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
