//! Display functions for command results

use super::formatters::{create_progress_bar, paint};
use crate::commands::{CatalogReport, SimulationResult};
use colored::Colorize;

/// Print a catalog listing with its playability check
pub fn print_catalog_report(report: &CatalogReport<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} categories",
        "CATALOG:".bright_cyan().bold(),
        report.categories.len()
    );
    println!("{}", "═".repeat(60).cyan());

    for category in report.categories {
        let marker = if category.is_pinned() { "📌" } else { "  " };
        println!(
            "\n{marker} {} {}",
            paint(&format!(" {} ", category.name()), category.tag()),
            format!("[{} · {} · weight {}]", category.id(), category.tag(), category.weight())
                .bright_black()
        );
        println!("   {}", category.words().join(", "));
    }

    if !report.shared_words.is_empty() {
        println!("\n🔁 {}", "Shared words:".bright_cyan().bold());
        for (word, owners) in &report.shared_words {
            println!("   {word}: {}", owners.join(", "));
        }
    }

    println!();
    match &report.session_check {
        Ok(()) => println!(
            "{}",
            format!(
                "✅ Playable: sessions of {} categories, pinned '{}'",
                report.session_size,
                report.pinned.join(", ")
            )
            .green()
            .bold()
        ),
        Err(e) => println!("{}", format!("❌ Not playable: {e}").red().bold()),
    }
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", result.games);
    let completed = format!("{}", result.completed);
    println!(
        "   Completed:        {}",
        if result.completed == result.games {
            completed.green()
        } else {
            completed.yellow()
        }
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Average mistakes: {:.2}", result.average_mistakes);
    println!(
        "   Fewest mistakes:  {}",
        format!("{}", result.min_mistakes).green()
    );
    println!(
        "   Most mistakes:    {}",
        format!("{}", result.max_mistakes).yellow()
    );
    println!("   Past the limit:   {}", result.past_limit);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Category draws:".bright_cyan().bold());
    let mut draws: Vec<(&String, &usize)> = result.draw_counts.iter().collect();
    draws.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (id, &count) in draws {
        let pct = if result.games == 0 {
            0.0
        } else {
            count as f64 / result.games as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {id:<14} {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
