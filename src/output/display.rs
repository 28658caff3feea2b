//! Display functions for command results

use super::formatters::{distribution_bar, feedback_glyphs};
use crate::commands::{EvaluationStatistics, RankReport, SolveReport};
use colored::Colorize;

/// Print the trace of a single solving session
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "guess {}: {}, result: {}",
            i + 1,
            step.word,
            feedback_glyphs(&step.feedback)
        );

        if verbose {
            println!(
                "  viable candidates: {} → {}",
                step.viable_before, step.viable_after
            );
        }
    }

    println!();
    if report.within_limit() {
        println!(
            "{}",
            format!("Solved in {} guesses", report.guesses())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Solved, but took {} guesses (over the limit)", report.guesses())
                .red()
                .bold()
        );
    }
}

/// Print aggregate statistics from a full-dictionary evaluation
pub fn print_evaluation(stats: &EvaluationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nEvaluated {} puzzles in {:.2} seconds (Average: {:.2} ms)",
        stats.total_words,
        stats.total_time.as_secs_f64(),
        stats.average_ms_per_puzzle()
    );

    if let Some((word, guesses)) = &stats.worst {
        println!(
            "Worst word {} with {} guesses, average guesses {:.3}",
            word.to_uppercase().yellow(),
            guesses,
            stats.average_guesses
        );
    }

    println!("\n{}", "Guess distribution:".bright_cyan().bold());
    let max_count = stats.distribution.iter().max().copied().unwrap_or(0);
    for (index, &count) in stats.distribution.iter().enumerate() {
        let pct = if stats.total_words == 0 {
            0.0
        } else {
            count as f64 / stats.total_words as f64 * 100.0
        };
        let bar = distribution_bar(count, max_count, 40);
        println!(
            "  {} guesses: {} {count:4} ({pct:5.1}%)",
            index + 1,
            bar.green()
        );
    }
    println!("  failures:  {}", stats.failures);

    let rate = format!("{:.2}%", stats.success_rate());
    let colored_rate = if stats.failures == 0 {
        rate.bright_green().bold()
    } else {
        rate.yellow().bold()
    };
    println!("\nSuccess rate: {colored_rate}");
}

/// Print the head of the ranked candidate list
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} (top {} of {}) ",
        "CANDIDATE RANKING".bright_cyan().bold(),
        report.entries.len(),
        report.total
    );
    println!("{}", "═".repeat(60).cyan());

    for entry in &report.entries {
        println!(
            "  {:>4}. {}  {:>10.1}",
            entry.rank,
            entry.word.to_uppercase(),
            entry.score
        );
    }
}
