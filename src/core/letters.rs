//! Position-independent letter sets
//!
//! A `LetterSet` stores which of the 26 lowercase ASCII letters are present as a bitmask.

use std::fmt;
use std::str::FromStr;

/// Error type for letter set strings that contain non-letters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterSetError {
    #[error("letter set may only contain ASCII letters, found {0:?}")]
    InvalidCharacter(char),
}

/// An unordered set of distinct lowercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of letters appearing in `bytes`, ignoring anything that is not `a-z`
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().fold(Self::EMPTY, |set, &b| set.with(b))
    }

    /// Return a copy of this set with `letter` added
    ///
    /// Bytes outside `a-z` leave the set unchanged.
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        if letter.is_ascii_lowercase() {
            Self(self.0 | 1 << (letter - b'a'))
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromStr for LetterSet {
    type Err = LetterSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().try_fold(Self::EMPTY, |set, ch| {
            if ch.is_ascii_alphabetic() {
                Ok(set.with(ch.to_ascii_lowercase() as u8))
            } else {
                Err(LetterSetError::InvalidCharacter(ch))
            }
        })
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_dedups() {
        let set: LetterSet = "RtTr".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(b'r'));
        assert!(set.contains(b't'));
        assert_eq!(set.to_string(), "rt");
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            "ab1".parse::<LetterSet>(),
            Err(LetterSetError::InvalidCharacter('1'))
        );
        assert_eq!("".parse::<LetterSet>(), Ok(LetterSet::EMPTY));
    }

    #[test]
    fn set_algebra() {
        let abc = LetterSet::from_bytes(b"abc");
        let cd = LetterSet::from_bytes(b"cd");

        assert_eq!(abc.union(cd).to_string(), "abcd");
        assert_eq!(abc.intersection(cd).to_string(), "c");
        assert_eq!(abc.difference(cd).to_string(), "ab");
        assert!(LetterSet::from_bytes(b"ba").is_subset(abc));
        assert!(!cd.is_subset(abc));
        assert!(abc.is_disjoint(LetterSet::from_bytes(b"xyz")));
        assert!(LetterSet::EMPTY.is_subset(cd));
    }

    #[test]
    fn from_bytes_skips_wildcards() {
        let set = LetterSet::from_bytes(b"g.ea.");
        assert_eq!(set.to_string(), "aeg");
        assert!(!set.contains(b'.'));
    }
}
