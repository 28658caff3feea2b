//! Dictionary loading
//!
//! Reads a newline-delimited list of 5-letter lowercase words. Loading is
//! strict: a malformed line fails the whole load with its line number, so
//! bad input surfaces before the solver ever runs.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Malformed { line: usize, source: WordError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dictionary: {err}"),
            Self::Malformed { line, source } => {
                write!(f, "dictionary line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Load a dictionary from a file
///
/// Blank lines are ignored; anything else must parse as a valid word.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Malformed` with the offending line number if a non-blank line
/// is not a valid 5-letter lowercase word.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_dictionary(&content)
}

/// Parse a newline-delimited dictionary from a string
///
/// # Errors
///
/// Returns `LoadError::Malformed` for the first invalid non-blank line.
pub fn parse_dictionary(content: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| LoadError::Malformed {
            line: number + 1,
            source,
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// Fixture helper for in-code word lists.
///
/// # Examples
/// ```
/// use wordle_freq::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["perch", "mangy", "doubt"]);
/// assert_eq!(words.len(), 3);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_valid_dictionary() {
        let words = parse_dictionary("perch\nmangy\ndoubt\n").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "perch");
        assert_eq!(words[2].text(), "doubt");
    }

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_dictionary("perch\n\n  \nmangy\n").unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_rejects_malformed_line_with_number() {
        let result = parse_dictionary("perch\ntoolong\nmangy\n");
        match result {
            Err(LoadError::Malformed { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, WordError::InvalidLength(7));
            }
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_alphabetic() {
        assert!(matches!(
            parse_dictionary("pe4ch\n"),
            Err(LoadError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("no-such-dictionary.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["perch", "mangy", "doubt"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "perch");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["perch", "toolong", "abc", "mangy"]);
        assert_eq!(words.len(), 2);
    }
}
