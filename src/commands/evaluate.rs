//! Full-dictionary evaluation harness
//!
//! Runs a fresh solving session against every dictionary word and aggregates
//! success rate, guess distribution, worst case, and timing. Sessions are
//! fully independent; the optional parallel mode fans them out over a thread
//! pool and merges the per-word results in dictionary order, so aggregates
//! are identical to a sequential run.

use crate::core::Word;
use crate::solver::{SolveError, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of evaluating a single puzzle
#[derive(Debug, Clone)]
pub struct PuzzleResult {
    pub word: String,
    pub guesses: usize,
    pub solved: bool,
    pub duration: Duration,
}

impl PuzzleResult {
    /// A solved puzzle within six guesses counts as a success
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.solved && self.guesses <= 6
    }
}

/// Aggregate statistics from a full evaluation run
#[derive(Debug)]
pub struct EvaluationStatistics {
    pub total_words: usize,
    pub successes: usize,
    pub failures: usize,
    /// Successes bucketed by guess count, index 0 = solved in one
    pub distribution: [usize; 6],
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub worst: Option<(String, usize)>,
    pub total_time: Duration,
    pub results: Vec<PuzzleResult>,
}

impl EvaluationStatistics {
    /// Success rate in percent
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        (self.total_words - self.failures) as f64 / self.total_words as f64 * 100.0
    }

    /// Average wall-clock milliseconds per puzzle
    #[must_use]
    pub fn average_ms_per_puzzle(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.total_time.as_secs_f64() * 1000.0 / self.total_words as f64
    }
}

/// Run the solver against every target word
///
/// A puzzle that exceeds six guesses, or whose session exhausts the ranked
/// list, is a failure; either way its guesses count toward the average, as
/// the reference behavior does. `parallel` distributes sessions over a
/// thread pool without changing any per-session guess sequence.
///
/// # Errors
///
/// Returns `SolveError::InconsistentConstraint` if any session trips the
/// internal-invariant check; that is a bug, not a solvability problem, so
/// the whole batch aborts.
pub fn run_evaluation(
    solver: &Solver,
    targets: &[Word],
    limit: Option<usize>,
    parallel: bool,
    show_progress: bool,
) -> Result<EvaluationStatistics, SolveError> {
    let targets: Vec<&Word> = targets
        .iter()
        .take(limit.unwrap_or(targets.len()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let run_one = |target: &Word| -> Result<PuzzleResult, SolveError> {
        let puzzle_start = Instant::now();
        let result = match solver.solve(target) {
            Ok(outcome) => Ok(PuzzleResult {
                word: target.text().to_string(),
                guesses: outcome.guesses(),
                solved: true,
                duration: puzzle_start.elapsed(),
            }),
            Err(SolveError::NoViableCandidate { attempted }) => Ok(PuzzleResult {
                word: target.text().to_string(),
                guesses: attempted,
                solved: false,
                duration: puzzle_start.elapsed(),
            }),
            Err(fatal) => Err(fatal),
        };
        pb.inc(1);
        result
    };

    let total_start = Instant::now();
    let outcomes: Vec<Result<PuzzleResult, SolveError>> = if parallel {
        targets.par_iter().map(|&target| run_one(target)).collect()
    } else {
        targets.iter().map(|&target| run_one(target)).collect()
    };
    let total_time = total_start.elapsed();

    pb.finish_and_clear();

    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        results.push(outcome?);
    }

    Ok(aggregate(results, total_time))
}

fn aggregate(results: Vec<PuzzleResult>, total_time: Duration) -> EvaluationStatistics {
    let total_words = results.len();
    let mut successes = 0;
    let mut failures = 0;
    let mut distribution = [0usize; 6];
    let mut total_guesses = 0;
    let mut worst: Option<(String, usize)> = None;

    for result in &results {
        total_guesses += result.guesses;

        if result.is_success() {
            successes += 1;
            distribution[result.guesses - 1] += 1;
        } else {
            failures += 1;
        }

        // First maximum in dictionary order wins ties.
        if worst.as_ref().is_none_or(|(_, count)| result.guesses > *count) {
            worst = Some((result.word.clone(), result.guesses));
        }
    }

    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };

    EvaluationStatistics {
        total_words,
        successes,
        failures,
        distribution,
        total_guesses,
        average_guesses,
        worst,
        total_time,
        results,
    }
}
