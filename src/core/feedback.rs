//! Guess feedback evaluation and representation
//!
//! Feedback classifies each of a guess's five letters against the hidden
//! target: exact match, present but misplaced, or absent. Duplicate letters
//! follow standard rules: a letter can only be marked correct or misplaced
//! as many times as it occurs in the target.

use super::Word;

/// Per-slot classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Not yet classified; never present in a finished feedback pattern
    Unevaluated,
    /// Letter does not occur in the target (beyond already-accounted copies)
    Absent,
    /// Letter occurs in the target but not at this position
    Misplaced,
    /// Letter matches the target at this position
    Correct,
}

/// Feedback pattern for one guess: five hints, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Hint; 5]);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Implements the exact feedback rules, including proper handling of
    /// duplicate letters:
    /// 1. First pass: mark exact matches and consume those letters from the
    ///    target's per-letter budget.
    /// 2. Second pass, left to right: mark a slot misplaced only while the
    ///    letter's budget has copies remaining, consuming one per mark.
    /// 3. Everything still unmarked is absent.
    ///
    /// Resolving all exact matches before any misplaced marks is what keeps
    /// duplicates honest: guessing "immmm" against "mango" yields exactly one
    /// non-absent 'm'.
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        let mut hints = [Hint::Unevaluated; 5];
        let mut remaining = target.char_counts();

        // First pass: exact matches
        // Allow: Index needed to access guess[i], target[i], and set hints[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == target.chars()[i] {
                hints[i] = Hint::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, left to right
        // Allow: Index needed to access guess[i] and check/set hints[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if hints[i] == Hint::Unevaluated {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    hints[i] = Hint::Misplaced;
                    *count -= 1;
                }
            }
        }

        // Third pass: the rest is absent
        for hint in &mut hints {
            if *hint == Hint::Unevaluated {
                *hint = Hint::Absent;
            }
        }

        Self(hints)
    }

    /// Get the five hints in guess-position order
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; 5] {
        &self.0
    }

    /// Get the hint at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn hint_at(&self, position: usize) -> Hint {
        self.0[position]
    }

    /// Check whether every position is an exact match (puzzle solved)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&hint| hint == Hint::Correct)
    }

    /// Count the hints for a given letter of `guess` that are not absent
    ///
    /// Used by tests to check that feedback never claims more copies of a
    /// letter than the target holds.
    #[must_use]
    pub fn non_absent_count(&self, guess: &Word, letter: u8) -> usize {
        (0..5)
            .filter(|&i| guess.char_at(i) == letter && self.0[i] != Hint::Absent)
            .count()
    }
}
