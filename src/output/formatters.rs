//! Formatting utilities for terminal output

use crate::core::board::LetterSlot;

/// Placeholder for a hidden letter
pub const HIDDEN_SLOT: char = '_';

/// Character shown for one slot of the word
#[must_use]
pub fn slot_char(slot: LetterSlot) -> char {
    if slot.revealed {
        slot.letter.to_ascii_uppercase()
    } else {
        HIDDEN_SLOT
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining lives as hearts, lost ones as empty hearts
#[must_use]
pub fn lives_bar(left: usize, budget: usize) -> String {
    let left = left.min(budget);
    format!("{}{}", "♥".repeat(left), "♡".repeat(budget - left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::letter_slots;
    use crate::core::{Action, GameSession, TargetWord};

    fn shown(text: &str, letters: &str, budget: usize) -> String {
        let session = letters.chars().fold(
            GameSession::new(TargetWord::new(text).unwrap()),
            |s, letter| s.apply(Action::Guess(letter)),
        );
        letter_slots(&session, budget).into_iter().map(slot_char).collect()
    }

    #[test]
    fn slot_char_hides_unguessed() {
        assert_eq!(shown("rust", "rt", 8), "R__T");
        assert_eq!(shown("rust", "", 8), "____");
    }

    #[test]
    fn slot_char_reveals_on_loss() {
        assert_eq!(shown("go", "zx", 2), "GO");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn lives_bar_counts() {
        assert_eq!(lives_bar(6, 8), "♥♥♥♥♥♥♡♡");
        assert_eq!(lives_bar(0, 3), "♡♡♡");
        assert_eq!(lives_bar(9, 2), "♥♥");
    }
}
