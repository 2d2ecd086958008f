//! One game as an owned value
//!
//! A `GameSession` pairs the target word with the guesses made against it.
//! Sessions are never edited in place: [`GameSession::apply`] consumes the
//! current session and returns the next one.

use super::engine::{self, GameOutcome, GuessOutcome};
use super::{GuessedLetters, TargetWord};

/// Something the player does to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Pick a letter
    Guess(char),
    /// Throw away the current game and start on a fresh word
    NewGame(TargetWord),
}

/// State of a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    word: TargetWord,
    guesses: GuessedLetters,
}

impl GameSession {
    /// Start a game on `word` with no guesses
    #[must_use]
    pub const fn new(word: TargetWord) -> Self {
        Self {
            word,
            guesses: GuessedLetters::new(),
        }
    }

    /// Compute the session that follows `action`
    ///
    /// Guesses are applied even after the game is over; callers gate input
    /// with [`GameSession::accepts_guesses`].
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::{Action, GameOutcome, GameSession, TargetWord};
    ///
    /// let session = GameSession::new(TargetWord::new("go").unwrap())
    ///     .apply(Action::Guess('g'))
    ///     .apply(Action::Guess('o'));
    /// assert_eq!(session.outcome(8), GameOutcome::Won);
    /// ```
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::Guess(letter) => Self {
                guesses: engine::record_guess(&self.guesses, letter),
                word: self.word,
            },
            Action::NewGame(word) => Self::new(word),
        }
    }

    #[must_use]
    pub const fn word(&self) -> &TargetWord {
        &self.word
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessedLetters {
        &self.guesses
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        engine::wrong_guess_count(&self.word, &self.guesses)
    }

    #[must_use]
    pub fn outcome(&self, budget: usize) -> GameOutcome {
        engine::outcome(&self.word, &self.guesses, budget)
    }

    #[must_use]
    pub fn is_over(&self, budget: usize) -> bool {
        engine::is_game_over(&self.word, &self.guesses, budget)
    }

    /// Whether the caller should still forward guesses to this session
    #[must_use]
    pub fn accepts_guesses(&self, budget: usize) -> bool {
        !self.is_over(budget)
    }

    #[must_use]
    pub fn last_guess_outcome(&self) -> GuessOutcome {
        engine::last_guess_outcome(&self.word, &self.guesses)
    }

    #[must_use]
    pub fn is_in_farewell_state(&self, budget: usize) -> bool {
        engine::is_in_farewell_state(&self.word, &self.guesses, budget)
    }

    #[must_use]
    pub fn farewell_index(&self, budget: usize) -> Option<usize> {
        engine::farewell_index(&self.word, &self.guesses, budget)
    }

    #[must_use]
    pub fn attempts_left(&self, budget: usize) -> usize {
        engine::attempts_left(&self.word, &self.guesses, budget)
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guesses.contains(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(text: &str) -> GameSession {
        GameSession::new(TargetWord::new(text).unwrap())
    }

    fn play(session: GameSession, letters: &str) -> GameSession {
        letters
            .chars()
            .fold(session, |s, letter| s.apply(Action::Guess(letter)))
    }

    #[test]
    fn new_session_has_no_guesses() {
        let s = session("rust");
        assert!(s.guesses().is_empty());
        assert_eq!(s.outcome(8), GameOutcome::InProgress);
        assert!(s.accepts_guesses(8));
    }

    #[test]
    fn guesses_accumulate_in_order() {
        let s = play(session("rust"), "rzr");
        assert_eq!(s.guesses().to_string(), "rz");
        assert_eq!(s.wrong_guess_count(), 1);
        assert_eq!(s.farewell_index(8), Some(0));
    }

    #[test]
    fn new_game_replaces_word_and_guesses() {
        let s = play(session("rust"), "rz");
        let next = s.apply(Action::NewGame(TargetWord::new("react").unwrap()));

        assert_eq!(next.word().text(), "react");
        assert!(next.guesses().is_empty());
        assert_eq!(next.last_guess_outcome(), GuessOutcome::None);
    }

    #[test]
    fn finished_session_stops_accepting_guesses() {
        let won = play(session("go"), "go");
        assert!(!won.accepts_guesses(8));

        let lost = play(session("go"), "zx");
        assert!(!lost.accepts_guesses(2));
        assert_eq!(lost.outcome(2), GameOutcome::Lost);
    }

    #[test]
    fn engine_stays_permissive_after_game_over() {
        let lost = play(session("go"), "zx");
        let later = lost.apply(Action::Guess('q'));

        assert_eq!(later.guesses().len(), 3);
        assert_eq!(later.outcome(2), GameOutcome::Lost);
    }

    #[test]
    fn attempts_left_tracks_wrong_guesses() {
        let s = play(session("css"), "xyc");
        assert_eq!(s.attempts_left(8), 6);
        assert!(s.has_guessed('c'));
        assert!(!s.has_guessed('s'));
    }
}
