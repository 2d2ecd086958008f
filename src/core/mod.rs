//! Core domain types for the game
//!
//! This module holds the game state engine and the types it works on. Nothing
//! here does I/O or touches randomness; every value is derived from the
//! target word, the guessed letters and the lives budget.

pub mod board;
pub mod engine;
mod guesses;
mod session;
mod word;

pub use engine::{GameOutcome, GuessOutcome};
pub use guesses::GuessedLetters;
pub use session::{Action, GameSession};
pub use word::{ALPHABET, TargetWord, WordError};
