//! Solving algorithms
//!
//! Frequency model, candidate ranking, session constraints, and the guess
//! selection loop.

pub mod constraints;
mod engine;
pub mod frequency;
pub mod strategy;

pub use constraints::{Bounds, Constraints};
pub use engine::{OPENING_GUESSES, Session, SolveOutcome, Solver};
pub use frequency::{FrequencyTable, RankedList, WordScore};
pub use strategy::ScanPolicy;

use std::fmt;

/// Errors a solving session can produce
///
/// `InconsistentConstraint` signals an internal invariant violation (feedback
/// evaluation and constraint tracking disagree) and is fatal.
/// `NoViableCandidate` means the ranked list was exhausted before solving;
/// the evaluation harness records it as a failure without aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    InconsistentConstraint { letter: u8 },
    NoViableCandidate { attempted: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentConstraint { letter } => write!(
                f,
                "occurrence bounds for '{}' crossed (min above max)",
                *letter as char
            ),
            Self::NoViableCandidate { attempted } => write!(
                f,
                "ranked candidate list exhausted after {attempted} guesses"
            ),
        }
    }
}

impl std::error::Error for SolveError {}
