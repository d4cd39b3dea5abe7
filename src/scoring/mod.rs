//! Candidate ranking by positional letter frequency
//!
//! A candidate set is tabulated into per-position letter probabilities, and each candidate
//! is scored as the product of its own letters' probabilities against that table.

mod frequency;
mod scorer;

pub use frequency::{DEFAULT_WIDTH, FrequencyTable, tabulate, tabulate_with_width};
pub use scorer::{WordScore, score};
