//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or in-memory text into a [`Lexicon`].

use crate::core::{Lexicon, Word};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse newline-delimited words
///
/// Lines are trimmed and blank lines skipped. Lines that are not a single ASCII word are
/// skipped with a warning. Duplicates collapse into one entry.
///
/// # Examples
/// ```
/// use wordle_suggest::wordlists::loader::parse_lexicon;
///
/// let lexicon = parse_lexicon("crane\n  slate \n\ncrane\n");
/// assert_eq!(lexicon.len(), 2);
/// ```
#[must_use]
pub fn parse_lexicon(content: &str) -> Lexicon {
    let lexicon: Lexicon = content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Word::new(trimmed)
                .inspect_err(|e| log::warn!("skipping line {}: {trimmed:?}: {e}", index + 1))
                .ok()
        })
        .collect();

    warn_on_mixed_lengths(&lexicon);
    lexicon
}

/// Load words from a file
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or `Error::EmptyWordList` if it contains
/// no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_suggest::wordlists::loader::load_from_file;
///
/// let words = load_from_file("5-letter-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = parse_lexicon(&content);
    if lexicon.is_empty() {
        return Err(Error::EmptyWordList {
            path: path.to_path_buf(),
        });
    }

    log::info!("loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Convert a string slice to a lexicon, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Lexicon {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn warn_on_mixed_lengths(lexicon: &Lexicon) {
    let shortest = lexicon.iter().map(Word::len).min();
    let longest = lexicon.iter().map(Word::len).max();
    if let (Some(min), Some(max)) = (shortest, longest)
        && min != max
    {
        log::warn!("word list mixes lengths {min} to {max}; tabulation uses width {max}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_trims_and_dedups() {
        let lexicon = parse_lexicon("crane\r\n slate\n\n\ncrane\nIRATE\n");
        assert_eq!(lexicon, words_from_slice(&["crane", "slate", "irate"]));
    }

    #[test]
    fn parse_skips_invalid_lines() {
        let lexicon = parse_lexicon("crane\nsl@te\ntwo words\nirate\n");
        assert_eq!(lexicon, words_from_slice(&["crane", "irate"]));
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_lexicon("").is_empty());
        assert!(parse_lexicon("\n  \n").is_empty());
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "b4d", "", "slate"]);
        assert_eq!(words.len(), 2);
        assert!(words.contains(&Word::new("crane").unwrap()));
        assert!(words.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "great\nglean\ngleam\nclean").unwrap();

        let lexicon = load_from_file(file.path()).unwrap();
        assert_eq!(
            lexicon,
            words_from_slice(&["great", "glean", "gleam", "clean"])
        );
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn load_from_blank_file_is_empty_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n\n").unwrap();

        let result = load_from_file(file.path());
        assert!(matches!(result, Err(Error::EmptyWordList { .. })));
    }
}
