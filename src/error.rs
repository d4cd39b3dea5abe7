//! Crate error type

use crate::core::{LetterSetError, PatternError, WordError};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    LetterSet(#[from] LetterSetError),

    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} contains no valid words", path.display())]
    EmptyWordList { path: PathBuf },
}
