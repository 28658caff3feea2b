//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_evaluation, print_rank_report, print_solve_report};
