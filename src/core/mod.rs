//! Core domain types for the word puzzle
//!
//! This module contains the fundamental domain types: words, letter sets and positional
//! patterns. All types here are pure values with no I/O.

mod letters;
mod pattern;
mod word;

pub use letters::{LetterSet, LetterSetError};
pub use pattern::{Pattern, PatternError, WILDCARD};
pub use word::{Word, WordError};

/// A set of unique candidate words
///
/// Every stage of filtering produces a fresh `Lexicon`; none is mutated once built.
pub type Lexicon = rustc_hash::FxHashSet<Word>;
