//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint};

/// Map a hint to its display glyph
///
/// `?` marks an unevaluated slot and should never appear in final output.
#[must_use]
pub const fn hint_glyph(hint: Hint) -> char {
    match hint {
        Hint::Unevaluated => '?',
        Hint::Absent => 'X',
        Hint::Misplaced => '^',
        Hint::Correct => '*',
    }
}

/// Render a feedback pattern as a five-glyph string
#[must_use]
pub fn feedback_glyphs(feedback: &Feedback) -> String {
    feedback.hints().iter().map(|&h| hint_glyph(h)).collect()
}

/// Create a fixed-width bar string for a count relative to a maximum
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width / max).max(usize::from(count > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
