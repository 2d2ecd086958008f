//! Per-render view of a session
//!
//! Everything the screen shows is derived here from the session and the lives
//! budget: letter slots, keyboard key states, which language chips are gone,
//! the status banner and the status announcements.

use super::GameSession;
use super::engine::{GameOutcome, GuessOutcome};

/// One position of the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    pub letter: char,
    /// Shown to the player
    pub revealed: bool,
    /// Revealed only because the game was lost
    pub missed: bool,
}

/// Colouring of an on-screen keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

/// Content of the status area above the chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBanner {
    Empty,
    /// A life was just lost; carries the index of that life in the lives table
    Farewell(usize),
    Won,
    Lost,
}

impl StatusBanner {
    /// Heading and body text for the terminal banners
    #[must_use]
    pub const fn text(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Won => Some(("You win!", "Well done! 🎉")),
            Self::Lost => Some(("Game over!", "You lose! Better start learning Assembly 🥺")),
            Self::Empty | Self::Farewell(_) => None,
        }
    }
}

/// Slots for each letter of the word, repeats included
#[must_use]
pub fn letter_slots(session: &GameSession, budget: usize) -> Vec<LetterSlot> {
    let lost = session.outcome(budget) == GameOutcome::Lost;

    session
        .word()
        .chars()
        .map(|letter| {
            let guessed = session.has_guessed(letter);
            LetterSlot {
                letter,
                revealed: guessed || lost,
                missed: lost && !guessed,
            }
        })
        .collect()
}

#[must_use]
pub fn key_state(session: &GameSession, letter: char) -> KeyState {
    if !session.has_guessed(letter) {
        KeyState::Unused
    } else if session.word().has_letter(letter) {
        KeyState::Correct
    } else {
        KeyState::Wrong
    }
}

/// Whether the chip at `index` of the lives table has been eliminated
#[must_use]
pub fn chip_lost(session: &GameSession, index: usize) -> bool {
    index < session.wrong_guess_count()
}

#[must_use]
pub fn status_banner(session: &GameSession, budget: usize) -> StatusBanner {
    if let Some(index) = session.farewell_index(budget) {
        return StatusBanner::Farewell(index);
    }
    match session.outcome(budget) {
        GameOutcome::Won => StatusBanner::Won,
        GameOutcome::Lost => StatusBanner::Lost,
        GameOutcome::InProgress => StatusBanner::Empty,
    }
}

/// Status line describing the last guess and the remaining attempts
///
/// Returns `None` before the first guess.
#[must_use]
pub fn guess_announcement(session: &GameSession, budget: usize) -> Option<String> {
    let letter = session.guesses().last()?;
    let verdict = match session.last_guess_outcome() {
        GuessOutcome::Correct => format!("Correct! The letter {letter} is in the word."),
        GuessOutcome::Incorrect | GuessOutcome::None => {
            format!("Sorry, the letter {letter} is not in the word.")
        }
    };
    Some(format!(
        "{verdict} You have {} attempts left.",
        session.attempts_left(budget)
    ))
}

/// Spoken form of the word: guessed letters followed by a period, `blank` otherwise
#[must_use]
pub fn word_announcement(session: &GameSession) -> String {
    let slots: Vec<String> = session
        .word()
        .chars()
        .map(|letter| {
            if session.has_guessed(letter) {
                format!("{letter}.")
            } else {
                "blank".to_string()
            }
        })
        .collect();
    format!("Current word: {}", slots.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, TargetWord};

    fn play(text: &str, letters: &str) -> GameSession {
        letters.chars().fold(
            GameSession::new(TargetWord::new(text).unwrap()),
            |s, letter| s.apply(Action::Guess(letter)),
        )
    }

    #[test]
    fn slots_hide_unguessed_letters() {
        let s = play("rust", "ru");
        let revealed: Vec<bool> = letter_slots(&s, 8).iter().map(|slot| slot.revealed).collect();
        assert_eq!(revealed, vec![true, true, false, false]);
        assert!(letter_slots(&s, 8).iter().all(|slot| !slot.missed));
    }

    #[test]
    fn slots_reveal_everything_on_loss() {
        let s = play("go", "gzx");
        let slots = letter_slots(&s, 2);

        assert!(slots.iter().all(|slot| slot.revealed));
        assert!(!slots[0].missed);
        assert!(slots[1].missed);
    }

    #[test]
    fn repeated_letters_share_state() {
        let s = play("css", "s");
        let slots = letter_slots(&s, 8);
        assert!(!slots[0].revealed);
        assert!(slots[1].revealed && slots[2].revealed);
    }

    #[test]
    fn key_states() {
        let s = play("rust", "rz");
        assert_eq!(key_state(&s, 'r'), KeyState::Correct);
        assert_eq!(key_state(&s, 'z'), KeyState::Wrong);
        assert_eq!(key_state(&s, 'a'), KeyState::Unused);
    }

    #[test]
    fn chips_fall_in_table_order() {
        let s = play("rust", "zxq");
        assert!(chip_lost(&s, 0));
        assert!(chip_lost(&s, 2));
        assert!(!chip_lost(&s, 3));
    }

    #[test]
    fn banner_follows_game_state() {
        assert_eq!(status_banner(&play("rust", ""), 8), StatusBanner::Empty);
        assert_eq!(status_banner(&play("rust", "r"), 8), StatusBanner::Empty);
        assert_eq!(status_banner(&play("rust", "rzx"), 8), StatusBanner::Farewell(1));
        assert_eq!(status_banner(&play("go", "og"), 8), StatusBanner::Won);
        assert_eq!(status_banner(&play("go", "zx"), 2), StatusBanner::Lost);
    }

    #[test]
    fn banner_texts() {
        assert_eq!(StatusBanner::Won.text().unwrap().0, "You win!");
        assert_eq!(StatusBanner::Lost.text().unwrap().0, "Game over!");
        assert!(StatusBanner::Farewell(0).text().is_none());
    }

    #[test]
    fn announcement_before_first_guess() {
        assert!(guess_announcement(&play("rust", ""), 8).is_none());
    }

    #[test]
    fn announcement_for_correct_and_wrong_guesses() {
        assert_eq!(
            guess_announcement(&play("rust", "r"), 8).unwrap(),
            "Correct! The letter r is in the word. You have 8 attempts left."
        );
        assert_eq!(
            guess_announcement(&play("rust", "rz"), 8).unwrap(),
            "Sorry, the letter z is not in the word. You have 7 attempts left."
        );
    }

    #[test]
    fn word_announcement_marks_blanks() {
        assert_eq!(
            word_announcement(&play("css", "s")),
            "Current word: blank s. s."
        );
    }
}
