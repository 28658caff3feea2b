//! Ranking inspection command
//!
//! Shows the head of the precomputed ranked candidate list, the order the
//! solver scans from guess four onward.

use crate::solver::RankedList;

/// One row of the ranking report
pub struct RankEntry {
    pub rank: usize,
    pub word: String,
    pub score: f64,
}

/// Result of a ranking inspection
pub struct RankReport {
    pub total: usize,
    pub entries: Vec<RankEntry>,
}

/// Take the `top` highest-scored words from the ranked list
#[must_use]
pub fn top_ranked(ranked: &RankedList, top: usize) -> RankReport {
    let entries = ranked
        .iter()
        .take(top)
        .enumerate()
        .map(|(index, entry)| RankEntry {
            rank: index + 1,
            word: entry.word.text().to_string(),
            score: entry.score,
        })
        .collect();

    RankReport {
        total: ranked.len(),
        entries,
    }
}
