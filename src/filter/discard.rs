//! Misplaced-letter elimination
//!
//! Each misplaced pattern fixes one letter at a position where it is known *not* to be.
//! Any word matching any of these patterns is inconsistent with the clues and is dropped.

use super::search;
use crate::core::{Lexicon, Pattern};

/// Union of any number of word sets; no sets yields the empty set
#[must_use]
pub fn union<I>(sets: I) -> Lexicon
where
    I: IntoIterator<Item = Lexicon>,
{
    sets.into_iter().fold(Lexicon::default(), |mut acc, set| {
        acc.extend(set);
        acc
    })
}

/// Remove from `lexicon` every word matching at least one of `misplaced`
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Lexicon, Pattern, Word};
/// use wordle_suggest::filter::discard;
///
/// let lexicon: Lexicon = ["great", "glean"].into_iter().map(|w| Word::new(w).unwrap()).collect();
/// let misplaced = [Pattern::parse(".r...").unwrap()];
/// let kept = discard(&misplaced, &lexicon);
/// assert!(kept.contains(&Word::new("glean").unwrap()));
/// assert_eq!(kept.len(), 1);
///
/// assert_eq!(discard(&[], &lexicon), lexicon);
/// ```
#[must_use]
pub fn discard(misplaced: &[Pattern], lexicon: &Lexicon) -> Lexicon {
    let matched = union(misplaced.iter().map(|pattern| search(pattern, lexicon)));
    lexicon.difference(&matched).cloned().collect()
}
