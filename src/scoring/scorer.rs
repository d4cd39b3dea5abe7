//! Candidate scoring

use super::{FrequencyTable, tabulate};
use crate::core::{Lexicon, Word};
use std::fmt;

/// A candidate word paired with its frequency score
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    word: Word,
    score: f64,
}

impl WordScore {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }
}

impl fmt::Display for WordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7} {}", self.score, self.word)
    }
}

/// Product of the table's probabilities for each of the word's (position, letter) pairs
fn word_score(word: &Word, table: &FrequencyTable) -> f64 {
    word.chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table.probability(position, letter))
        .product()
}

/// Score every candidate against the candidates' own frequency table
///
/// Results are sorted by descending score. Equal scores are ordered alphabetically so that
/// output is reproducible across runs.
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Lexicon, Word};
/// use wordle_suggest::scoring::score;
///
/// let candidates: Lexicon = ["great", "glean", "gleam", "clean"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let ranked = score(&candidates);
/// assert_eq!(ranked[0].word().text(), "glean");
/// assert_eq!(ranked[0].score(), 0.28125);
/// ```
#[must_use]
pub fn score(candidates: &Lexicon) -> Vec<WordScore> {
    let table = tabulate(candidates);

    let mut scores: Vec<WordScore> = candidates
        .iter()
        .map(|word| WordScore::new(word.clone(), word_score(word, &table)))
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
    });
    scores
}
