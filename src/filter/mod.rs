//! Candidate filtering
//!
//! Pure set transformations over a [`Lexicon`](crate::core::Lexicon). Each filter borrows
//! its input and returns a new set; the input is never modified.

mod discard;
mod search;
mod sets;

pub use discard::{discard, union};
pub use search::{matches, search};
pub use sets::{exact_counts, exclude, include};
