//! Suggestion orchestration
//!
//! Composes the filters and the scorer into a single query over a lexicon.

mod constraints;
mod engine;

pub use constraints::Constraints;
pub use engine::{Solver, candidates, suggest};
