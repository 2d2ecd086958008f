//! Word suppliers
//!
//! Hand out the target word for each new game.

use crate::core::TargetWord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Source of target words for new games
pub trait WordSupplier {
    /// Produce the word for the next game
    fn next_word(&mut self) -> TargetWord;
}

impl<S: WordSupplier + ?Sized> WordSupplier for Box<S> {
    fn next_word(&mut self) -> TargetWord {
        (**self).next_word()
    }
}

/// Error type for supplier construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierError {
    EmptyWordList,
}

impl fmt::Display for SupplierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for SupplierError {}

/// Picks words uniformly at random from a fixed list
pub struct RandomWordSupplier {
    words: Vec<TargetWord>,
    rng: StdRng,
}

impl RandomWordSupplier {
    /// Create a supplier seeded from the operating system
    ///
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<TargetWord>) -> Result<Self, SupplierError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a supplier with a fixed seed, for reproducible games
    ///
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn with_seed(words: Vec<TargetWord>, seed: u64) -> Result<Self, SupplierError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<TargetWord>, rng: StdRng) -> Result<Self, SupplierError> {
        if words.is_empty() {
            return Err(SupplierError::EmptyWordList);
        }
        Ok(Self { words, rng })
    }
}

impl WordSupplier for RandomWordSupplier {
    fn next_word(&mut self) -> TargetWord {
        // Construction guarantees a non-empty list
        self.words
            .choose(&mut self.rng)
            .unwrap_or(&self.words[0])
            .clone()
    }
}

/// Cycles through a fixed list of words in order
pub struct SequenceSupplier {
    words: Vec<TargetWord>,
    next: usize,
}

impl SequenceSupplier {
    /// # Errors
    /// Returns `SupplierError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<TargetWord>) -> Result<Self, SupplierError> {
        if words.is_empty() {
            return Err(SupplierError::EmptyWordList);
        }
        Ok(Self { words, next: 0 })
    }
}

impl WordSupplier for SequenceSupplier {
    fn next_word(&mut self) -> TargetWord {
        let word = self.words[self.next].clone();
        self.next = (self.next + 1) % self.words.len();
        word
    }
}
