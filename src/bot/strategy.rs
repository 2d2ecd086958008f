//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::core::{ALPHABET, GameSession, TargetWord};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// English letters from most to least common
const FREQUENCY_ORDER: [char; 26] = [
    'e', 't', 'a', 'o', 'i', 'n', 's', 'h', 'r', 'd', 'l', 'c', 'u', 'm', 'w', 'f', 'g', 'y', 'p',
    'b', 'v', 'k', 'j', 'x', 'q', 'z',
];

/// A strategy for picking the next letter to guess
pub trait Guesser {
    /// Pick a letter not yet guessed in `session`
    ///
    /// Uses only what a player can see: the revealed slots and the guessed
    /// letters. Returns `None` once every letter of the alphabet is used.
    fn next_letter<R: Rng + ?Sized>(&self, session: &GameSession, rng: &mut R) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum GuesserType {
    /// Fixed English letter frequency order
    Frequency(FrequencyGuesser),
    /// Uniform choice among unused letters
    Random(RandomGuesser),
    /// Dictionary filtering on the revealed pattern (default, best performance)
    Candidate(CandidateGuesser),
}

impl Guesser for GuesserType {
    fn next_letter<R: Rng + ?Sized>(&self, session: &GameSession, rng: &mut R) -> Option<char> {
        match self {
            Self::Frequency(g) => g.next_letter(session, rng),
            Self::Random(g) => g.next_letter(session, rng),
            Self::Candidate(g) => g.next_letter(session, rng),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its name
    ///
    /// Supported names: "frequency", "random", "candidate". Anything else
    /// falls back to the candidate guesser over `dictionary`.
    #[must_use]
    pub fn from_name(name: &str, dictionary: &[TargetWord]) -> Self {
        match name {
            "frequency" => Self::Frequency(FrequencyGuesser),
            "random" => Self::Random(RandomGuesser),
            _ => Self::Candidate(CandidateGuesser::new(dictionary.to_vec())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
            Self::Candidate(_) => "candidate",
        }
    }
}

/// Always picks the most common English letter not yet tried
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, session: &GameSession, _rng: &mut R) -> Option<char> {
        FREQUENCY_ORDER
            .iter()
            .copied()
            .find(|&letter| !session.has_guessed(letter))
    }
}

/// Picks any unused letter at random
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, session: &GameSession, rng: &mut R) -> Option<char> {
        let unused: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|&letter| !session.has_guessed(letter))
            .collect();
        unused.choose(rng).copied()
    }
}

/// Narrows a dictionary to words matching what has been revealed
///
/// Picks the unused letter that appears in the most remaining candidates,
/// falling back to frequency order when no candidate fits.
pub struct CandidateGuesser {
    dictionary: Vec<TargetWord>,
}

impl CandidateGuesser {
    #[must_use]
    pub const fn new(dictionary: Vec<TargetWord>) -> Self {
        Self { dictionary }
    }

    /// Dictionary words consistent with the session's revealed slots
    #[must_use]
    pub fn candidates<'a>(&'a self, session: &GameSession) -> Vec<&'a TargetWord> {
        let pattern: Vec<Option<char>> = session
            .word()
            .chars()
            .map(|letter| session.has_guessed(letter).then_some(letter))
            .collect();

        self.dictionary
            .iter()
            .filter(|candidate| {
                candidate.len() == pattern.len()
                    && candidate.chars().zip(&pattern).all(|(letter, slot)| match slot {
                        Some(revealed) => letter == *revealed,
                        // A guessed letter would have been revealed here
                        None => !session.has_guessed(letter),
                    })
            })
            .collect()
    }
}

impl Guesser for CandidateGuesser {
    fn next_letter<R: Rng + ?Sized>(&self, session: &GameSession, rng: &mut R) -> Option<char> {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for candidate in self.candidates(session) {
            let mut seen = Vec::with_capacity(candidate.len());
            for letter in candidate.chars() {
                if !session.has_guessed(letter) && !seen.contains(&letter) {
                    seen.push(letter);
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        // Highest count wins; ties go to the alphabetically first letter
        let best = counts
            .into_iter()
            .max_by(|(a, count_a), (b, count_b)| count_a.cmp(count_b).then(b.cmp(a)))
            .map(|(letter, _)| letter);

        best.or_else(|| FrequencyGuesser.next_letter(session, rng))
    }
}
