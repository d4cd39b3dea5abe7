//! Positional pattern matching

use crate::core::{Lexicon, Pattern, Word};

/// Build a reusable predicate that tests words against `pattern`
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Pattern, Word};
/// use wordle_suggest::filter::matches;
///
/// let pattern = Pattern::parse(".b.").unwrap();
/// let is_match = matches(&pattern);
/// assert!(is_match(&Word::new("abc").unwrap()));
/// assert!(!is_match(&Word::new("abcd").unwrap()));
/// ```
pub fn matches(pattern: &Pattern) -> impl Fn(&Word) -> bool + '_ {
    move |word: &Word| pattern.matches(word)
}

/// All words of `lexicon` matching `pattern`
#[must_use]
pub fn search(pattern: &Pattern, lexicon: &Lexicon) -> Lexicon {
    let is_match = matches(pattern);
    lexicon.iter().filter(|&word| is_match(word)).cloned().collect()
}
