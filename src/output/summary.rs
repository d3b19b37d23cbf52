//! Simulation summary printing

use crate::sim::SimStatistics;
use colored::Colorize;

/// Print aggregate simulation statistics
pub fn print_sim_statistics(stats: &SimStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Rounds:".bright_cyan().bold());
    println!("   Played:           {}", stats.rounds);
    println!(
        "   Won:              {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate * 100.0).green()
    );
    if stats.losses > 0 {
        println!("   Lost:             {}", stats.losses.to_string().yellow());
    }
    if stats.invalid > 0 {
        println!(
            "   Aborted invalid:  {}",
            stats.invalid.to_string().red().bold()
        );
    }

    if stats.wins > 0 {
        println!("\n{}", "Guesses (winning rounds):".bright_cyan().bold());
        println!(
            "   Average:          {}",
            format!("{:.2}", stats.average_guesses).bright_yellow().bold()
        );
        println!("   Best case:        {}", stats.min_guesses.to_string().green());
        println!("   Worst case:       {}", stats.max_guesses.to_string().yellow());

        println!("\n{}", "Distribution:".bright_cyan().bold());
        for guess_count in 1..=6 {
            if let Some(&count) = stats.distribution.get(&guess_count) {
                let pct = (count as f64 / stats.wins as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
                );
                println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }

    println!(
        "\n   Time taken:       {:.2}s",
        stats.total_elapsed.as_secs_f64()
    );
    println!();
}
