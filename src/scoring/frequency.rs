//! Per-position letter frequency tables

use crate::core::{Lexicon, Word};
use rustc_hash::FxHashMap;

/// Table width used for an empty candidate set when no width is supplied
pub const DEFAULT_WIDTH: usize = 5;

/// Fraction of a candidate set having each letter at each position
///
/// For a non-empty candidate set of equal-length words, the probabilities at every
/// position sum to 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    positions: Vec<FxHashMap<u8, f64>>,
}

impl FrequencyTable {
    /// Number of positions in the table
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Letter probabilities at `position`, or `None` past the table's width
    #[must_use]
    pub fn position(&self, position: usize) -> Option<&FxHashMap<u8, f64>> {
        self.positions.get(position)
    }

    /// Probability of `letter` at `position`; 0.0 when never observed there
    #[must_use]
    pub fn probability(&self, position: usize, letter: u8) -> f64 {
        self.position(position)
            .and_then(|freqs| freqs.get(&letter))
            .copied()
            .unwrap_or(0.0)
    }

    /// True when no letter has been observed at any position
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(|freqs| freqs.is_empty())
    }

    /// Letters at `position` sorted by descending probability, then alphabetically
    #[must_use]
    pub fn ranked(&self, position: usize) -> Vec<(u8, f64)> {
        let mut entries: Vec<(u8, f64)> = self
            .position(position)
            .map(|freqs| freqs.iter().map(|(&l, &p)| (l, p)).collect::<Vec<_>>())
            .unwrap_or_default();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Tabulate letter frequencies for `candidates`
///
/// The table is as wide as the longest candidate. An empty set yields a
/// [`DEFAULT_WIDTH`]-wide table with no entries.
///
/// # Examples
/// ```
/// use wordle_suggest::core::{Lexicon, Word};
/// use wordle_suggest::scoring::tabulate;
///
/// let candidates: Lexicon = ["great", "glean", "gleam", "clean"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let table = tabulate(&candidates);
/// assert_eq!(table.probability(0, b'g'), 0.75);
/// assert_eq!(table.probability(2, b'e'), 1.0);
/// ```
#[must_use]
pub fn tabulate(candidates: &Lexicon) -> FrequencyTable {
    tabulate_with_width(candidates, DEFAULT_WIDTH)
}

/// Tabulate letter frequencies, using `default_width` when `candidates` is empty
#[must_use]
pub fn tabulate_with_width(candidates: &Lexicon, default_width: usize) -> FrequencyTable {
    let width = candidates
        .iter()
        .map(Word::len)
        .max()
        .unwrap_or(default_width);

    let mut counts: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); width];
    for word in candidates {
        for (index, &letter) in word.chars().iter().enumerate() {
            *counts[index].entry(letter).or_insert(0) += 1;
        }
    }

    let total = candidates.len() as f64;
    let positions: Vec<FxHashMap<u8, f64>> = counts
        .into_iter()
        .map(|freq| {
            freq.into_iter()
                .map(|(letter, count)| (letter, count as f64 / total))
                .collect::<FxHashMap<_, _>>()
        })
        .collect();

    FrequencyTable { positions }
}
