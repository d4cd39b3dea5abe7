//! Suggestion pipeline

use super::Constraints;
use crate::core::{Lexicon, LetterSet, Pattern};
use crate::filter::{discard, exact_counts, exclude, include, search};
use crate::scoring::{WordScore, score};

/// Filter `lexicon` down to the words consistent with every clue in `constraints`
///
/// Stages run in a fixed order: exclusion, repeated-letter counts, inclusion, positional
/// search, then misplaced-letter elimination.
#[must_use]
pub fn candidates(constraints: &Constraints, lexicon: &Lexicon) -> Lexicon {
    log::debug!("lexicon: {} words", lexicon.len());

    let mut remaining = exclude(constraints.exclusions(), lexicon);
    log::debug!(
        "after excluding {:?}: {}",
        constraints.exclusions().to_string(),
        remaining.len()
    );

    if !constraints.repeated().is_empty() {
        remaining = exact_counts(&constraints.pattern, &remaining);
        log::debug!(
            "after matching counts for repeated {:?}: {}",
            constraints.repeated().to_string(),
            remaining.len()
        );
    }

    let remaining = include(constraints.included(), &remaining);
    log::debug!(
        "after including {:?}: {}",
        constraints.included().to_string(),
        remaining.len()
    );

    let remaining = search(&constraints.pattern, &remaining);
    log::debug!("after searching {}: {}", constraints.pattern, remaining.len());

    let remaining = discard(&constraints.misplaced, &remaining);
    log::debug!(
        "after discarding {} misplaced: {}",
        constraints.misplaced.len(),
        remaining.len()
    );

    remaining
}

/// Rank the words of `lexicon` consistent with the clues
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Lexicon, Pattern, Word};
/// use wordle_suggest::solver::suggest;
///
/// let lexicon: Lexicon = ["great", "glean", "gleam", "clean", "grade"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let pattern = Pattern::parse("g.ea.").unwrap();
/// let misplaced = [Pattern::parse("a....").unwrap()];
///
/// let ranked = suggest(&pattern, "rt".parse().unwrap(), &misplaced, &lexicon);
/// let words: Vec<&str> = ranked.iter().map(|s| s.word().text()).collect();
/// assert_eq!(words, ["gleam", "glean"]);
/// ```
#[must_use]
pub fn suggest(
    pattern: &Pattern,
    excluded: LetterSet,
    misplaced: &[Pattern],
    lexicon: &Lexicon,
) -> Vec<WordScore> {
    let constraints = Constraints::new(pattern.clone(), excluded, misplaced.to_vec());
    score(&candidates(&constraints, lexicon))
}

/// Suggestion engine over a borrowed lexicon
///
/// Holds the lexicon loaded by the caller so queries need not pass it each time.
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Candidate words consistent with `constraints`
    #[must_use]
    pub fn candidates(&self, constraints: &Constraints) -> Lexicon {
        candidates(constraints, self.lexicon)
    }

    /// Ranked suggestions for `constraints`
    #[must_use]
    pub fn suggest(&self, constraints: &Constraints) -> Vec<WordScore> {
        score(&self.candidates(constraints))
    }
}
