//! Letter-frequency model and candidate ranking
//!
//! The dictionary is scanned once to count how often each letter occurs
//! overall and at each of the five positions. Every word then gets a score
//! combining positional fit and distinct-letter coverage, and the whole
//! dictionary is materialized as a list sorted by descending score. Both
//! structures are built once per process and read-only afterward.

use crate::core::Word;

/// Weight for a letter's frequency at its exact position
pub const POSITION_WEIGHT: f64 = 0.4;

/// Weight for a letter occurring anywhere, counted once per distinct letter
pub const INCLUSION_WEIGHT: f64 = 2.7;

/// Map a lowercase ASCII letter to its 0-25 index
#[inline]
#[must_use]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Global and per-position letter occurrence counts over a dictionary
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    all: [u32; 26],
    by_position: [[u32; 26]; 5],
}

impl FrequencyTable {
    /// Build the table in a single pass over the dictionary
    #[must_use]
    pub fn build(words: &[Word]) -> Self {
        let mut all = [0u32; 26];
        let mut by_position = [[0u32; 26]; 5];

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                let idx = letter_index(letter);
                all[idx] += 1;
                by_position[position][idx] += 1;
            }
        }

        Self { all, by_position }
    }

    /// How often `letter` occurs anywhere in the dictionary
    #[inline]
    #[must_use]
    pub const fn global(&self, letter: u8) -> u32 {
        self.all[letter_index(letter)]
    }

    /// How often `letter` occurs at `position` across the dictionary
    #[inline]
    #[must_use]
    pub const fn at_position(&self, position: usize, letter: u8) -> u32 {
        self.by_position[position][letter_index(letter)]
    }
}

/// A dictionary word with its heuristic score
#[derive(Debug, Clone)]
pub struct WordScore {
    pub word: Word,
    pub score: f64,
}

/// Score a word against the frequency table
///
/// The positional term rewards letters common at their slot; the inclusion
/// term rewards covering common letters and counts each distinct letter once
/// regardless of repetition, so "perch" outranks "puppy"-style repeats.
#[must_use]
pub fn score(word: &Word, table: &FrequencyTable) -> f64 {
    let mut total = 0.0;
    let mut seen = [false; 26];

    for (position, &letter) in word.chars().iter().enumerate() {
        total += f64::from(table.at_position(position, letter)) * POSITION_WEIGHT;

        let idx = letter_index(letter);
        if !seen[idx] {
            seen[idx] = true;
            total += f64::from(table.global(letter)) * INCLUSION_WEIGHT;
        }
    }

    total
}

/// The dictionary ordered by descending score
///
/// Ties keep original dictionary order: the sort is stable, so ranking the
/// same dictionary always produces the same sequence.
#[derive(Debug, Clone)]
pub struct RankedList(Vec<WordScore>);

impl RankedList {
    /// Rank a dictionary using the given frequency table
    #[must_use]
    pub fn rank(words: &[Word], table: &FrequencyTable) -> Self {
        let mut scored: Vec<WordScore> = words
            .iter()
            .map(|word| WordScore {
                word: word.clone(),
                score: score(word, table),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self(scored)
    }

    /// Number of ranked words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the entry at a rank index (0 = highest score)
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&WordScore> {
        self.0.get(index)
    }

    /// Iterate entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, WordScore> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a WordScore;
    type IntoIter = std::slice::Iter<'a, WordScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
