//! Formatting utilities for terminal output

use crate::scoring::WordScore;

/// Format a suggestion as `<score to 7 decimal places> <word>`
#[must_use]
pub fn format_score(score: &WordScore) -> String {
    format!("{:.7} {}", score.score(), score.word())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter probability as a bar
#[must_use]
pub fn frequency_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}
