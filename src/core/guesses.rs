//! Ordered, duplicate-free record of the letters picked so far

use std::fmt;

/// Letters the player has guessed, in the order they were picked
///
/// No letter appears twice. The only way to grow the set is [`GuessedLetters::record`],
/// which returns a new value and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters(Vec<char>);

impl GuessedLetters {
    /// An empty guess set, as at the start of a game
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Return a copy with `letter` appended, or an unchanged copy if it was already guessed
    ///
    /// # Examples
    /// ```
    /// use assembly_endgame::core::GuessedLetters;
    ///
    /// let guesses = GuessedLetters::new().record('a').record('b');
    /// assert_eq!(guesses.record('a'), guesses);
    /// ```
    #[must_use]
    pub fn record(&self, letter: char) -> Self {
        if self.contains(letter) {
            return self.clone();
        }
        let mut letters = self.0.clone();
        letters.push(letter);
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }

    /// The most recently recorded letter
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<char> {
        self.0.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<char> for GuessedLetters {
    /// Builds the set by recording each letter in turn, so duplicates are dropped
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut letters = Vec::new();
        for letter in iter {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        Self(letters)
    }
}

impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_new_letter() {
        let guesses = GuessedLetters::new().record('r').record('z');
        assert_eq!(guesses.to_string(), "rz");
        assert_eq!(guesses.last(), Some('z'));
    }

    #[test]
    fn record_existing_letter_is_noop() {
        let guesses: GuessedLetters = ['a', 'b'].into_iter().collect();
        let again = guesses.record('a');
        assert_eq!(again.to_string(), "ab");
        assert_eq!(again.last(), Some('b'));
    }

    #[test]
    fn record_leaves_original_untouched() {
        let before = GuessedLetters::new().record('a');
        let after = before.record('b');
        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn from_iter_drops_duplicates_keeping_first_position() {
        let guesses: GuessedLetters = "abcab".chars().collect();
        assert_eq!(guesses.to_string(), "abc");
    }

    #[test]
    fn empty_set() {
        let guesses = GuessedLetters::default();
        assert!(guesses.is_empty());
        assert_eq!(guesses.last(), None);
        assert!(!guesses.contains('a'));
    }
}
