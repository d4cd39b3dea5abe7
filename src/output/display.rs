//! Display functions for command results
//!
//! Line-oriented output goes through a caller-supplied writer so that a closed pipe surfaces
//! as an `io::Error` instead of a panic.

use super::formatters::{format_score, frequency_bar};
use crate::commands::{SuggestResult, TableResult};
use colored::Colorize;
use std::io::{self, Write};

/// Write ranked suggestions, one `<score> <word>` per line
///
/// # Errors
///
/// Returns any error from `out`, including `BrokenPipe` when the reader goes away.
pub fn print_suggestions<W: Write>(out: &mut W, result: &SuggestResult) -> io::Result<()> {
    for score in &result.suggestions {
        writeln!(out, "{}", format_score(score))?;
    }
    out.flush()
}

/// Print a summary of the query to stderr
pub fn print_summary(result: &SuggestResult) {
    let constraints = &result.constraints;
    eprintln!("{}", "─".repeat(60).cyan());
    eprintln!(
        "Pattern:   {}",
        constraints.pattern.to_string().bright_yellow().bold()
    );
    eprintln!("Excluded:  {}", constraints.excluded.to_string().red());
    if !constraints.misplaced.is_empty() {
        let misplaced: Vec<String> = constraints
            .misplaced
            .iter()
            .map(ToString::to_string)
            .collect();
        eprintln!("Misplaced: {}", misplaced.join(" ").yellow());
    }
    eprintln!(
        "Candidates: {} of {} words",
        result.total_candidates.to_string().green().bold(),
        result.lexicon_size
    );
    if result.suggestions.len() < result.total_candidates {
        eprintln!("Showing top {}", result.suggestions.len());
    }
    eprintln!("{}", "─".repeat(60).cyan());

    if result.total_candidates == 0 {
        eprintln!(
            "{}",
            "No candidates remain! The clues may be inconsistent.".red()
        );
    }
}

/// Write the per-position frequency table of the candidate set
///
/// Positions fixed by the pattern are marked with their known letter.
///
/// # Errors
///
/// Returns any error from `out`, including `BrokenPipe` when the reader goes away.
pub fn print_table<W: Write>(out: &mut W, result: &TableResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} candidates",
        "LETTER FREQUENCIES:".bright_cyan().bold(),
        result.total_candidates
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    for position in 0..result.table.width() {
        let header = match result.pattern.slot(position) {
            Some(letter) => format!("Position {} (known: {})", position + 1, letter as char),
            None => format!("Position {}", position + 1),
        };
        writeln!(out, "\n{}", header.bright_cyan())?;

        for (letter, probability) in result.table.ranked(position) {
            writeln!(
                out,
                "   {} [{}] {probability:.4}",
                (letter as char).to_string().bright_yellow().bold(),
                frequency_bar(probability, 30).green()
            )?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{SuggestConfig, frequency_table, suggest_words};
    use crate::wordlists::words_from_slice;

    /// Writer that fails every write as if the reading end of a pipe had closed
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn candidates() -> crate::core::Lexicon {
        words_from_slice(&["great", "glean", "gleam", "clean"])
    }

    #[test]
    fn suggestions_are_score_word_lines() {
        let config = SuggestConfig::new("..ea.", "");
        let result = suggest_words(&config, &candidates()).unwrap();

        let mut out = Vec::new();
        print_suggestions(&mut out, &result).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "0.2812500 glean",
                "0.1406250 gleam",
                "0.0937500 clean",
                "0.0468750 great",
            ]
        );
    }

    #[test]
    fn closed_pipe_is_an_error_not_a_panic() {
        let config = SuggestConfig::new("..ea.", "");
        let suggestions = suggest_words(&config, &candidates()).unwrap();
        let err = print_suggestions(&mut ClosedPipe, &suggestions).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let table = frequency_table(&config, &candidates()).unwrap();
        let err = print_table(&mut ClosedPipe, &table).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn table_marks_known_positions() {
        let config = SuggestConfig::new("..ea.", "");
        let result = frequency_table(&config, &candidates()).unwrap();

        let mut out = Vec::new();
        print_table(&mut out, &result).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Position 1"));
        assert!(text.contains("Position 3 (known: e)"));
        assert!(text.contains("Position 4 (known: a)"));
        assert!(!text.contains("Position 6"));
    }
}
