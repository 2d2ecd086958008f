//! Automated players
//!
//! Guessing strategies and a driver that plays one game to the end.

pub mod strategy;

pub use strategy::{CandidateGuesser, FrequencyGuesser, Guesser, GuesserType, RandomGuesser};

use crate::core::{Action, GameOutcome, GameSession, TargetWord};
use rand::Rng;

/// Result of one automated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub guesses: String,
    pub outcome: GameOutcome,
    pub wrong_guesses: usize,
}

/// Let `guesser` play a full game on `word`
///
/// Stops as soon as the session is over, or if the guesser runs out of letters.
pub fn play_out<G: Guesser, R: Rng + ?Sized>(
    guesser: &G,
    word: TargetWord,
    budget: usize,
    rng: &mut R,
) -> GameRecord {
    let mut session = GameSession::new(word);

    while session.accepts_guesses(budget) {
        let Some(letter) = guesser.next_letter(&session, rng) else {
            break;
        };
        session = session.apply(Action::Guess(letter));
    }

    GameRecord {
        word: session.word().to_string(),
        guesses: session.guesses().to_string(),
        outcome: session.outcome(budget),
        wrong_guesses: session.wrong_guess_count(),
    }
}
