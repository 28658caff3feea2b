//! Single-word solving command
//!
//! Runs one session against a given target and records the per-guess trace
//! for display.

use crate::core::{Feedback, Word};
use crate::solver::Solver;

/// A single guess step in the solution trace
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub viable_before: usize,
    pub viable_after: usize,
}

/// Result of solving a target word
pub struct SolveReport {
    pub target: String,
    pub steps: Vec<GuessStep>,
}

impl SolveReport {
    /// Number of guesses the session took
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.steps.len()
    }

    /// Whether the session stayed within the standard six-guess limit
    #[must_use]
    pub fn within_limit(&self) -> bool {
        self.steps.len() <= 6
    }
}

/// Solve a specific word, tracing viable-candidate counts per guess
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 lowercase letters)
/// - The ranked candidate list is exhausted before solving
/// - Constraint tracking hits an internal inconsistency
pub fn solve_word(target: &str, solver: &Solver) -> Result<SolveReport, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut session = solver.begin();
    let mut steps: Vec<GuessStep> = Vec::new();

    loop {
        let viable_before = solver.count_viable(&session);

        let guess = solver.next_guess(&mut session).map_err(|e| e.to_string())?;
        let feedback = Feedback::evaluate(&target_word, &guess);

        session
            .record(guess.clone(), &feedback)
            .map_err(|e| e.to_string())?;
        let viable_after = solver.count_viable(&session);

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            viable_before,
            viable_after,
        });

        if feedback.is_solved() {
            return Ok(SolveReport {
                target: target.to_string(),
                steps,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyTable, RankedList, ScanPolicy, Solver};
    use crate::wordlists::loader::words_from_slice;

    fn fixture(texts: &[&str]) -> RankedList {
        let words = words_from_slice(texts);
        let table = FrequencyTable::build(&words);
        RankedList::rank(&words, &table)
    }

    #[test]
    fn solve_exact_opener_takes_one_guess() {
        let ranked = fixture(&["perch", "mangy", "doubt", "slate"]);
        let solver = Solver::new(&ranked, ScanPolicy::Monotonic);

        let report = solve_word("perch", &solver).unwrap();

        assert_eq!(report.guesses(), 1);
        assert!(report.within_limit());
        assert_eq!(report.steps[0].word, "perch");
        assert!(report.steps[0].feedback.is_solved());
    }

    #[test]
    fn solve_records_trace_for_every_guess() {
        let ranked = fixture(&["perch", "mangy", "doubt", "skill", "swill"]);
        let solver = Solver::new(&ranked, ScanPolicy::Monotonic);

        let report = solve_word("skill", &solver).unwrap();

        assert!(report.guesses() >= 4);
        assert_eq!(report.target, "skill");
        for step in &report.steps {
            assert!(step.viable_after <= step.viable_before);
        }
        assert!(report.steps.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let ranked = fixture(&["perch", "mangy", "doubt"]);
        let solver = Solver::new(&ranked, ScanPolicy::Monotonic);

        assert!(solve_word("toolong", &solver).is_err());
        assert!(solve_word("pe4ch", &solver).is_err());
    }

    #[test]
    fn solve_exhausted_dictionary_returns_error() {
        let ranked = fixture(&["perch", "mangy", "doubt"]);
        let solver = Solver::new(&ranked, ScanPolicy::Monotonic);

        let result = solve_word("fuzzy", &solver);
        assert!(result.is_err());
    }
}
