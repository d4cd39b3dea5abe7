//! Position-independent letter filters

use crate::core::{Lexicon, LetterSet, Pattern};

/// Words containing every letter of `letters` at least once, in any position
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Lexicon, Word};
/// use wordle_suggest::filter::include;
///
/// let lexicon: Lexicon = ["abddd", "bbccc"].into_iter().map(|w| Word::new(w).unwrap()).collect();
/// let found = include("a".parse().unwrap(), &lexicon);
/// assert_eq!(found.len(), 1);
/// ```
#[must_use]
pub fn include(letters: LetterSet, lexicon: &Lexicon) -> Lexicon {
    lexicon
        .iter()
        .filter(|word| letters.is_subset(word.letters()))
        .cloned()
        .collect()
}

/// Words containing none of `letters` anywhere
#[must_use]
pub fn exclude(letters: LetterSet, lexicon: &Lexicon) -> Lexicon {
    lexicon
        .iter()
        .filter(|word| letters.is_disjoint(word.letters()))
        .cloned()
        .collect()
}

/// Words whose count of each letter they share with `pattern` equals the pattern's count
///
/// Used when a letter is both placed and reported absent: the extra guessed occurrence was
/// gray, so the word holds exactly as many of that letter as the pattern fixes.
#[must_use]
pub fn exact_counts(pattern: &Pattern, lexicon: &Lexicon) -> Lexicon {
    let placed = pattern.letters();
    lexicon
        .iter()
        .filter(|word| {
            placed
                .intersection(word.letters())
                .iter()
                .all(|letter| word.count_of(letter) == pattern.count_of(letter))
        })
        .cloned()
        .collect()
}
