//! Wordle Frequency Solver
//!
//! An automated solver for the 5-letter word-guessing puzzle, ranking the
//! dictionary by letter-frequency statistics and narrowing candidates with
//! position locks and per-letter occurrence bounds, plus an evaluation
//! harness that measures success rate and guess distribution over a whole
//! dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_freq::core::Word;
//! use wordle_freq::solver::{FrequencyTable, RankedList, ScanPolicy, Solver};
//!
//! let dictionary = vec![
//!     Word::new("perch").unwrap(),
//!     Word::new("mangy").unwrap(),
//!     Word::new("doubt").unwrap(),
//! ];
//!
//! // Built once, shared read-only by every session
//! let table = FrequencyTable::build(&dictionary);
//! let ranked = RankedList::rank(&dictionary, &table);
//!
//! let solver = Solver::new(&ranked, ScanPolicy::Monotonic);
//! let outcome = solver.solve(&Word::new("mangy").unwrap()).unwrap();
//! assert_eq!(outcome.guesses(), 2);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
