//! Ranked-list scan policies
//!
//! Controls how the solver walks the ranked candidate list from guess four
//! onward.

/// How the ranked candidate list is scanned for the next viable guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    /// Session-local cursor that only advances (original behavior)
    ///
    /// Every word examined is passed permanently, viable or not. A word
    /// before the cursor that becomes viable again can never be re-selected,
    /// which under-explores the candidate space but is preserved because it
    /// shapes the guess-count statistics.
    #[default]
    Monotonic,
    /// Restart the scan from the head of the list each turn
    ///
    /// Words already guessed this session are skipped: a guess whose
    /// feedback carries no absent hint can stay viable under the constraint
    /// model and would otherwise be picked again.
    Rescan,
}

impl ScanPolicy {
    /// Create a policy from a name string
    ///
    /// Supported names: "monotonic", "rescan", "full-rescan".
    /// Defaults to monotonic if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "rescan" | "full-rescan" => Self::Rescan,
            _ => Self::Monotonic,
        }
    }
}
