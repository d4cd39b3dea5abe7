//! Suggestion command
//!
//! Ranks the lexicon words consistent with the given clues.

use crate::core::Lexicon;
use crate::error::Result;
use crate::scoring::WordScore;
use crate::solver::{Constraints, Solver};

/// Raw clue strings as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SuggestConfig {
    pub pattern: String,
    pub excluded: String,
    pub misplaced: Vec<String>,
    /// Maximum number of suggestions to keep; `None` keeps all
    pub limit: Option<usize>,
}

impl SuggestConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>, excluded: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            excluded: excluded.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_misplaced(mut self, misplaced: Vec<String>) -> Self {
        self.misplaced = misplaced;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Parse the clue strings
    ///
    /// # Errors
    /// Returns an error if any clue contains invalid characters.
    pub fn constraints(&self) -> Result<Constraints> {
        Constraints::parse(&self.pattern, &self.excluded, &self.misplaced)
    }
}

/// Result of a suggestion query
pub struct SuggestResult {
    pub constraints: Constraints,
    pub lexicon_size: usize,
    pub total_candidates: usize,
    /// Descending by score, truncated to the configured limit
    pub suggestions: Vec<WordScore>,
}

/// Rank suggestions for the clues in `config`
///
/// # Errors
///
/// Returns an error if the clue strings cannot be parsed.
pub fn suggest_words(config: &SuggestConfig, lexicon: &Lexicon) -> Result<SuggestResult> {
    let constraints = config.constraints()?;
    let solver = Solver::new(lexicon);

    let mut suggestions = solver.suggest(&constraints);
    let total_candidates = suggestions.len();
    if let Some(limit) = config.limit {
        suggestions.truncate(limit);
    }

    Ok(SuggestResult {
        constraints,
        lexicon_size: lexicon.len(),
        total_candidates,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn setup_lexicon() -> Lexicon {
        words_from_slice(&["great", "glean", "gleam", "clean", "grade", "bleak"])
    }

    #[test]
    fn suggest_words_ranks_candidates() {
        let lexicon = setup_lexicon();
        let config = SuggestConfig::new("..ea.", "");

        let result = suggest_words(&config, &lexicon).unwrap();
        assert_eq!(result.lexicon_size, 6);
        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.suggestions.len(), 5);
        assert!(
            result
                .suggestions
                .windows(2)
                .all(|w| w[0].score() >= w[1].score())
        );
    }

    #[test]
    fn limit_truncates_but_keeps_total() {
        let lexicon = setup_lexicon();
        let config = SuggestConfig::new("..ea.", "").with_limit(Some(2));

        let result = suggest_words(&config, &lexicon).unwrap();
        assert_eq!(result.total_candidates, 5);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn misplaced_clues_are_applied() {
        let lexicon = setup_lexicon();
        let config =
            SuggestConfig::new("g.ea.", "").with_misplaced(vec![".r...".into(), "....t".into()]);

        let result = suggest_words(&config, &lexicon).unwrap();
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn invalid_clue_is_error() {
        let lexicon = setup_lexicon();
        let config = SuggestConfig::new("g.e?.", "");
        assert!(suggest_words(&config, &lexicon).is_err());
    }
}
