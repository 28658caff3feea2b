//! Wordle Frequency Solver - CLI
//!
//! Solves individual puzzles or evaluates the solver over a whole
//! dictionary using letter-frequency heuristics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_freq::{
    commands::{run_evaluation, solve_word, top_ranked},
    output::{print_evaluation, print_rank_report, print_solve_report},
    solver::{FrequencyTable, RankedList, ScanPolicy, Solver},
    wordlists::{DEFAULT_DICTIONARY, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_freq",
    about = "Wordle solver and evaluation harness using letter-frequency heuristics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ranked-list scan policy: monotonic (default) or rescan
    #[arg(short, long, global = true, default_value = "monotonic")]
    scan: String,

    /// Path to the dictionary file (newline-delimited 5-letter words)
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_DICTIONARY)]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific target word, printing each guess and its feedback
    Solve {
        /// The target word to solve
        word: String,

        /// Show viable-candidate counts per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Evaluate the solver against every dictionary word (default)
    Evaluate {
        /// Limit number of words to evaluate
        #[arg(short, long)]
        limit: Option<usize>,

        /// Run sessions on a thread pool (aggregates stay deterministic)
        #[arg(short, long)]
        parallel: bool,
    },

    /// Show the top of the ranked candidate list
    Rank {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("failed to load dictionary '{}'", cli.wordlist))?;

    // Built once per process; read-only from here on.
    let table = FrequencyTable::build(&words);
    let ranked = RankedList::rank(&words, &table);

    let policy = ScanPolicy::from_name(&cli.scan);
    let solver = Solver::new(&ranked, policy);

    // Bare invocation runs the full evaluation, matching the original tool.
    let command = cli.command.unwrap_or(Commands::Evaluate {
        limit: None,
        parallel: false,
    });

    match command {
        Commands::Solve { word, verbose } => {
            let report = solve_word(&word, &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_report(&report, verbose);
            Ok(())
        }
        Commands::Evaluate { limit, parallel } => {
            println!(
                "Evaluating {} words with the {:?} scan policy...",
                limit.unwrap_or(words.len()).min(words.len()),
                policy
            );
            let stats = run_evaluation(&solver, &words, limit, parallel, true)?;
            print_evaluation(&stats);
            Ok(())
        }
        Commands::Rank { top } => {
            let report = top_ranked(&ranked, top);
            print_rank_report(&report);
            Ok(())
        }
    }
}
