//! Command implementations

pub mod suggest;
pub mod table;

pub use suggest::{SuggestConfig, SuggestResult, suggest_words};
pub use table::{TableResult, frequency_table};
