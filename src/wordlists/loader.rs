//! Word list loading utilities
//!
//! Turns text files or the embedded list into validated target words.

use crate::core::TargetWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file
///
/// Returns a vector of valid target words, skipping (and logging) any invalid
/// entries. Blank lines are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use assembly_endgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<TargetWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match TargetWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        line = index + 1,
                        entry = trimmed,
                        "skipping word: {e}"
                    );
                    None
                }
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to target words
///
/// # Examples
/// ```
/// use assembly_endgame::wordlists::loader::words_from_slice;
/// use assembly_endgame::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<TargetWord> {
    slice.iter().filter_map(|&s| TargetWord::new(s).ok()).collect()
}
