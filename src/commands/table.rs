//! Frequency table command
//!
//! Tabulates per-position letter frequencies over the candidates consistent with the clues.

use super::SuggestConfig;
use crate::core::{Lexicon, Pattern};
use crate::error::Result;
use crate::scoring::{FrequencyTable, tabulate_with_width};
use crate::solver::Solver;

/// Result of tabulating a candidate set
pub struct TableResult {
    /// Known positions, shown alongside each tabulated position
    pub pattern: Pattern,
    pub total_candidates: usize,
    pub table: FrequencyTable,
}

/// Tabulate the candidates for the clues in `config`
///
/// An empty candidate set yields a table as wide as the pattern, with no entries.
///
/// # Errors
///
/// Returns an error if the clue strings cannot be parsed.
pub fn frequency_table(config: &SuggestConfig, lexicon: &Lexicon) -> Result<TableResult> {
    let constraints = config.constraints()?;
    let candidates = Solver::new(lexicon).candidates(&constraints);
    let table = tabulate_with_width(&candidates, constraints.pattern.len());

    Ok(TableResult {
        pattern: constraints.pattern,
        total_candidates: candidates.len(),
        table,
    })
}
