//! Clue constraints for a single query

use crate::core::{LetterSet, Pattern};
use crate::error::Result;

/// Everything known about the hidden word
///
/// - `pattern`: letters at known positions, wildcards elsewhere
/// - `excluded`: letters reported absent
/// - `misplaced`: one pattern per "present, wrong position" clue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub pattern: Pattern,
    pub excluded: LetterSet,
    pub misplaced: Vec<Pattern>,
}

impl Constraints {
    #[must_use]
    pub const fn new(pattern: Pattern, excluded: LetterSet, misplaced: Vec<Pattern>) -> Self {
        Self {
            pattern,
            excluded,
            misplaced,
        }
    }

    /// Parse constraints from their raw string forms
    ///
    /// # Errors
    /// Returns an error if any pattern or the excluded letters contain invalid characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_suggest::solver::Constraints;
    ///
    /// let constraints = Constraints::parse("g.ea.", "rt", &[".r...", "....t"]).unwrap();
    /// assert_eq!(constraints.included().to_string(), "aegrt");
    /// ```
    pub fn parse<S: AsRef<str>>(pattern: &str, excluded: &str, misplaced: &[S]) -> Result<Self> {
        let pattern = Pattern::parse(pattern)?;
        let excluded: LetterSet = excluded.parse()?;
        let misplaced = misplaced
            .iter()
            .map(|p| Pattern::parse(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::new(pattern, excluded, misplaced))
    }

    /// Letters confirmed present: fixed letters of the pattern and of every misplaced clue
    #[must_use]
    pub fn included(&self) -> LetterSet {
        self.misplaced
            .iter()
            .fold(self.pattern.letters(), |acc, p| acc.union(p.letters()))
    }

    /// Excluded letters that are not placed by the pattern
    ///
    /// A placed letter can still be reported absent when it was guessed a second time;
    /// placement wins.
    #[must_use]
    pub fn exclusions(&self) -> LetterSet {
        self.excluded.difference(self.pattern.letters())
    }

    /// Letters both placed by the pattern and reported absent
    #[must_use]
    pub fn repeated(&self) -> LetterSet {
        self.excluded.intersection(self.pattern.letters())
    }
}
