//! Wordle Suggest
//!
//! Filters a word list by the clues gathered so far and ranks the surviving candidates by
//! positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_suggest::solver::{Constraints, Solver};
//! use wordle_suggest::wordlists::words_from_slice;
//!
//! let lexicon = words_from_slice(&["great", "glean", "gleam", "clean"]);
//! let solver = Solver::new(&lexicon);
//!
//! // Green g, e, a; gray r and t
//! let constraints = Constraints::parse("g.ea.", "rt", &[] as &[&str]).unwrap();
//! for suggestion in solver.suggest(&constraints) {
//!     println!("{suggestion}");
//! }
//! ```

// Core domain types
pub mod core;

// Crate error type
pub mod error;

// Candidate filters
pub mod filter;

// Frequency tabulation and scoring
pub mod scoring;

// Suggestion pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
