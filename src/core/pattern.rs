//! Positional constraint patterns
//!
//! A pattern is a string such as `g.ea.` where each letter fixes the word's letter at that
//! position and each wildcard (`.` or `_`) accepts any letter. The same representation is
//! used for "misplaced" clues, where a fixed letter means "present in the word, but not here".

use super::{LetterSet, Word};
use std::fmt;
use std::str::FromStr;

/// Wildcard accepted by [`Pattern::parse`]; `_` is accepted as an alias.
pub const WILDCARD: char = '.';

/// Error type for unparsable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern {pattern:?} has invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        pattern: String,
        ch: char,
        position: usize,
    },
}

/// A fixed-length sequence of letter-or-wildcard slots
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

impl Pattern {
    /// Parse a pattern string
    ///
    /// Letters are lowercased. Any character other than an ASCII letter, `.` or `_` is an
    /// error. Length is not validated here: a pattern of the wrong length simply never
    /// matches.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidCharacter` for the first offending character.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::parse("g.ea.").unwrap();
    /// assert!(pattern.matches(&Word::new("glean").unwrap()));
    /// assert!(!pattern.matches(&Word::new("clean").unwrap()));
    /// assert!(Pattern::parse("g?ea.").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let slots = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                WILDCARD | '_' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                _ => Err(PatternError::InvalidCharacter {
                    pattern: s.to_string(),
                    ch,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The fixed letter at `position`, or `None` for a wildcard or out-of-range position
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// Distinct fixed letters of the pattern
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Number of slots fixed to `letter`
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.slots.iter().filter(|&&slot| slot == Some(letter)).count()
    }

    /// Full-length match: same length, and every fixed slot equals the word's letter there
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, &letter)| slot.is_none_or(|fixed| fixed == letter))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}
