//! Session constraints: position locks and per-letter occurrence bounds
//!
//! Every guess's feedback narrows what the hidden target can be. Two kinds
//! of evidence accumulate across a session:
//!
//! - a position with an exact-match hint locks that slot to the guessed
//!   letter;
//! - for each letter in the guess, the non-absent hint count gives a lower
//!   bound on how many copies the target holds, and any absent hint for the
//!   same letter pins the count exactly.
//!
//! Bounds only ever tighten. A tightening that crosses (min above max) can
//! only come from inconsistent feedback and is reported as a fatal error.

use super::SolveError;
use crate::core::{Feedback, Hint, Word};
use crate::solver::frequency::letter_index;

/// Closed interval for the legal occurrence count of one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

impl Bounds {
    /// The unconstrained interval at session start
    const OPEN: Self = Self { min: 0, max: 5 };

    /// Whether `count` lies inside the interval
    #[inline]
    #[must_use]
    pub const fn contains(self, count: u8) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Accumulated evidence about the target within one solving session
#[derive(Debug, Clone)]
pub struct Constraints {
    bounds: [Bounds; 26],
    locks: [Option<u8>; 5],
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    /// Fresh constraints: every letter may occur 0-5 times, no slot locked
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bounds: [Bounds::OPEN; 26],
            locks: [None; 5],
        }
    }

    /// Current bounds for a letter
    #[inline]
    #[must_use]
    pub const fn bounds_for(&self, letter: u8) -> Bounds {
        self.bounds[letter_index(letter)]
    }

    /// Confirmed letter at a position, if any
    #[inline]
    #[must_use]
    pub const fn lock_at(&self, position: usize) -> Option<u8> {
        self.locks[position]
    }

    /// Fold one guess's feedback into the constraints
    ///
    /// Re-applying the same guess/feedback pair is a no-op: locks are
    /// idempotent and the bound arithmetic reproduces the same interval.
    ///
    /// # Errors
    /// Returns `SolveError::InconsistentConstraint` if a letter's interval
    /// would cross, which means feedback evaluation and tracking disagree.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> Result<(), SolveError> {
        for (position, hint) in feedback.hints().iter().enumerate() {
            if *hint == Hint::Correct {
                self.locks[position] = Some(guess.char_at(position));
            }
        }

        let mut visited = [false; 26];
        for &letter in guess.chars() {
            let idx = letter_index(letter);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let mut good = 0u8;
            let mut bad = 0u8;
            for (position, hint) in feedback.hints().iter().enumerate() {
                if guess.char_at(position) != letter {
                    continue;
                }
                if *hint == Hint::Absent {
                    bad += 1;
                } else {
                    good += 1;
                }
            }

            let bounds = &mut self.bounds[idx];
            bounds.min = bounds.min.max(good);
            if bad > 0 {
                // An absent hint means every copy of the letter in the
                // target was already accounted for: the true count is
                // exactly `good`.
                bounds.max = bounds.max.min(good);
            }

            if bounds.min > bounds.max {
                return Err(SolveError::InconsistentConstraint { letter });
            }
        }

        Ok(())
    }

    /// Test a word against the current locks and bounds
    ///
    /// Pure predicate: a viable word matches every locked position and keeps
    /// every letter count inside its interval.
    #[must_use]
    pub fn is_viable(&self, word: &Word) -> bool {
        for (position, lock) in self.locks.iter().enumerate() {
            if let Some(letter) = lock
                && word.char_at(position) != *letter
            {
                return false;
            }
        }

        let mut counts = [0u8; 26];
        for &letter in word.chars() {
            counts[letter_index(letter)] += 1;
        }

        self.bounds
            .iter()
            .zip(counts)
            .all(|(bounds, count)| bounds.contains(count))
    }
}
