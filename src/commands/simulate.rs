//! Simulate command
//!
//! Lets a bot play many games in parallel and collects statistics.

use crate::bot::{GameRecord, Guesser, play_out};
use crate::core::{GameOutcome, TargetWord};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub games: usize,
    /// Base seed; game `i` uses `seed + i`. Random when `None`.
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_wrong: f64,
    /// Wrong-guess count -> number of games
    pub wrong_distribution: FxHashMap<usize, usize>,
    /// Lost words, alphabetically, without repeats
    pub lost_words: Vec<String>,
    pub budget: usize,
    pub duration: Duration,
}

/// Play `config.games` games with `guesser` on words drawn from `words`
///
/// Returns `None` if `words` is empty.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    words: &[TargetWord],
    budget: usize,
    config: &SimulateConfig,
) -> Option<SimulationResult> {
    if words.is_empty() {
        return None;
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let word = words.choose(&mut rng)?.clone();
            let record = play_out(guesser, word, budget, &mut rng);
            pb.inc(1);
            Some(record)
        })
        .collect();

    pb.finish_with_message("done");

    Some(summarize(&records, budget, start.elapsed()))
}

fn summarize(records: &[GameRecord], budget: usize, duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let won = records
        .iter()
        .filter(|r| r.outcome == GameOutcome::Won)
        .count();
    let lost = total_games - won;

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for record in records {
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let mut lost_words: Vec<String> = records
        .iter()
        .filter(|r| r.outcome == GameOutcome::Lost)
        .map(|r| r.word.clone())
        .collect();
    lost_words.sort();
    lost_words.dedup();

    let total_wrong: usize = records.iter().map(|r| r.wrong_guesses).sum();
    let (win_rate, average_wrong) = if total_games == 0 {
        (0.0, 0.0)
    } else {
        (
            won as f64 / total_games as f64,
            total_wrong as f64 / total_games as f64,
        )
    };

    info!(
        games = total_games,
        won,
        lost,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    SimulationResult {
        total_games,
        won,
        lost,
        win_rate,
        average_wrong,
        wrong_distribution,
        lost_words,
        budget,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::{FrequencyGuesser, GuesserType, RandomGuesser};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(games: usize, seed: u64) -> SimulateConfig {
        SimulateConfig {
            games,
            seed: Some(seed),
            show_progress: false,
        }
    }

    #[test]
    fn simulation_plays_every_game() {
        let words = words_from_slice(&WORDS[..20]);
        let result = run_simulation(&RandomGuesser, &words, 8, &quiet(40, 1)).unwrap();

        assert_eq!(result.total_games, 40);
        assert_eq!(result.won + result.lost, 40);
        assert!((0.0..=1.0).contains(&result.win_rate));
    }

    #[test]
    fn distribution_sums_to_game_count() {
        let words = words_from_slice(&WORDS[..20]);
        let result = run_simulation(&FrequencyGuesser, &words, 8, &quiet(25, 2)).unwrap();

        let sum: usize = result.wrong_distribution.values().sum();
        assert_eq!(sum, result.total_games);
        assert!(result.wrong_distribution.keys().all(|&wrong| wrong <= 8));
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let words = words_from_slice(&WORDS[..30]);
        let first = run_simulation(&RandomGuesser, &words, 8, &quiet(30, 77)).unwrap();
        let second = run_simulation(&RandomGuesser, &words, 8, &quiet(30, 77)).unwrap();

        assert_eq!(first.won, second.won);
        assert_eq!(first.lost_words, second.lost_words);
    }

    #[test]
    fn candidate_guesser_beats_random() {
        let words = words_from_slice(WORDS);
        let candidate = GuesserType::from_name("candidate", &words);
        let config = quiet(200, 9);

        let smart = run_simulation(&candidate, &words, 8, &config).unwrap();
        let random = run_simulation(&RandomGuesser, &words, 8, &config).unwrap();

        assert!(smart.win_rate > random.win_rate);
    }

    #[test]
    fn lost_games_use_full_budget() {
        let words = words_from_slice(&["zzz"]);
        let result = run_simulation(&FrequencyGuesser, &words, 2, &quiet(3, 0)).unwrap();

        assert_eq!(result.lost, 3);
        assert_eq!(result.lost_words, vec!["zzz".to_string()]);
        assert_eq!(result.wrong_distribution.get(&2), Some(&3));
    }

    #[test]
    fn empty_word_list_yields_none() {
        assert!(run_simulation(&RandomGuesser, &[], 8, &quiet(5, 0)).is_none());
    }

    #[test]
    fn zero_games() {
        let words = words_from_slice(&["rust"]);
        let result = run_simulation(&RandomGuesser, &words, 8, &quiet(0, 0)).unwrap();

        assert_eq!(result.total_games, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }
}
