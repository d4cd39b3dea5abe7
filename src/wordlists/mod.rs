//! Word lists
//!
//! Loads the lexicon the solver filters. The lexicon is read once by the caller and passed
//! explicitly to the solver.

pub mod loader;

pub use loader::{load_from_file, parse_lexicon, words_from_slice};

/// Word list path used when none is given on the command line
pub const DEFAULT_WORDLIST: &str = "5-letter-words.txt";
