//! Game state engine
//!
//! Pure derivations of game status from the target word, the guessed letters
//! and the lives budget. Nothing here is cached or mutated: every function can
//! be called on every render and always agrees with the others.
//!
//! Two rules worth knowing:
//! - A word is won once each of its distinct letters has been guessed, so a
//!   repeated letter only needs to be guessed once (`css` is won by `c`, `s`).
//! - When a guess set satisfies both the win and the loss condition, the game
//!   counts as won.

use super::{GuessedLetters, TargetWord};

/// Status of a game, derived from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Won and Lost are terminal
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Whether the most recent guess hit the word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuessOutcome {
    None,
    Correct,
    Incorrect,
}

/// Record a guess, returning the new guess set
///
/// Already-guessed letters leave the set unchanged. Letters outside the
/// alphabet are accepted; they can never match the word and simply count as
/// wrong guesses.
#[must_use]
pub fn record_guess(guessed: &GuessedLetters, letter: char) -> GuessedLetters {
    guessed.record(letter)
}

/// Number of guessed letters that do not occur in the word
#[must_use]
pub fn wrong_guess_count(word: &TargetWord, guessed: &GuessedLetters) -> usize {
    guessed.iter().filter(|&letter| !word.has_letter(letter)).count()
}

/// True once every letter of the word has been guessed
///
/// # Examples
/// ```
/// use assembly_endgame::core::{engine, GuessedLetters, TargetWord};
///
/// let word = TargetWord::new("css").unwrap();
/// let guessed: GuessedLetters = ['c', 's'].into_iter().collect();
/// assert!(engine::is_won(&word, &guessed));
/// ```
#[must_use]
pub fn is_won(word: &TargetWord, guessed: &GuessedLetters) -> bool {
    word.chars().all(|letter| guessed.contains(letter))
}

/// True once the wrong guesses reach the lives budget
#[must_use]
pub fn is_lost(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> bool {
    wrong_guess_count(word, guessed) >= budget
}

/// Current status of the game; a win takes precedence over a loss
#[must_use]
pub fn outcome(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> GameOutcome {
    if is_won(word, guessed) {
        GameOutcome::Won
    } else if is_lost(word, guessed, budget) {
        GameOutcome::Lost
    } else {
        GameOutcome::InProgress
    }
}

#[must_use]
pub fn is_game_over(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> bool {
    outcome(word, guessed, budget).is_terminal()
}

/// Whether the most recently recorded letter is in the word
#[must_use]
pub fn last_guess_outcome(word: &TargetWord, guessed: &GuessedLetters) -> GuessOutcome {
    match guessed.last() {
        None => GuessOutcome::None,
        Some(letter) if word.has_letter(letter) => GuessOutcome::Correct,
        Some(_) => GuessOutcome::Incorrect,
    }
}

/// True right after a wrong guess that did not end the game
#[must_use]
pub fn is_in_farewell_state(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> bool {
    outcome(word, guessed, budget) == GameOutcome::InProgress
        && last_guess_outcome(word, guessed) == GuessOutcome::Incorrect
}

/// Index into the lives table of the life that was just lost
///
/// `Some(wrong_guess_count - 1)` in the farewell state, `None` otherwise.
#[must_use]
pub fn farewell_index(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> Option<usize> {
    if is_in_farewell_state(word, guessed, budget) {
        wrong_guess_count(word, guessed).checked_sub(1)
    } else {
        None
    }
}

/// Wrong guesses still allowed before the game is lost
#[must_use]
pub fn attempts_left(word: &TargetWord, guessed: &GuessedLetters, budget: usize) -> usize {
    budget.saturating_sub(wrong_guess_count(word, guessed))
}
