//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::{Action, GameOutcome, GameSession};
use crate::languages::{LivesTable, farewell_text};
use crate::output::write_board;
use crate::wordlists::WordSupplier;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Games played in one run of the simple mode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimpleSummary {
    pub games_played: usize,
    pub games_won: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<S: WordSupplier>(supplier: &mut S, lives: &LivesTable) -> Result<SimpleSummary> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple_with(stdin.lock(), &mut stdout, supplier, lives, &mut rand::rng())
}

/// Run the line-based game against arbitrary input and output
///
/// Each input line is either a letter to guess or a command: `new`, `quit`.
/// After a finished game, an empty line or `new` starts the next one.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_simple_with<I, W, S, R>(
    mut input: I,
    out: &mut W,
    supplier: &mut S,
    lives: &LivesTable,
    rng: &mut R,
) -> Result<SimpleSummary>
where
    I: BufRead,
    W: Write,
    S: WordSupplier,
    R: Rng + ?Sized,
{
    let budget = lives.budget();
    let mut summary = SimpleSummary::default();

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                      Assembly: Endgame                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word within {budget} attempts to keep the programming world safe from Assembly!"
    )?;
    writeln!(out, "Type a letter and press Enter. Commands: 'new', 'quit'\n")?;

    let mut session = GameSession::new(supplier.next_word());
    debug!(length = session.word().len(), "new game");
    write_board(out, &session, lives, None)?;

    loop {
        let prompt = if session.accepts_guesses(budget) {
            "Guess a letter"
        } else {
            "Play again? (Enter for new game, 'quit' to exit)"
        };
        write!(out, "\n{prompt}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let command = line.trim().to_lowercase();

        let finished = !session.accepts_guesses(budget);
        match command.as_str() {
            "quit" | "exit" => break,
            "new" => {}
            "" if finished => {}
            _ => {
                if finished {
                    writeln!(out, "The game is over. Press Enter for a new game.")?;
                } else {
                    session = guess(out, session, &command, lives, rng)?;
                    let outcome = session.outcome(budget);
                    if outcome.is_terminal() {
                        record_result(out, &session, outcome, &mut summary)?;
                    }
                }
                continue;
            }
        }

        session = session.apply(Action::NewGame(supplier.next_word()));
        debug!(length = session.word().len(), "new game");
        writeln!(out, "\n🔄 New game started!")?;
        write_board(out, &session, lives, None)?;
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Won {} of {} games.\n",
        summary.games_won, summary.games_played
    )?;
    Ok(summary)
}

/// Validate one line of input and apply it as a guess
fn guess<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    session: GameSession,
    command: &str,
    lives: &LivesTable,
    rng: &mut R,
) -> io::Result<GameSession> {
    let mut chars = command.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_lowercase() => letter,
        _ => {
            writeln!(out, "{}", "❌ Enter a single letter a-z".red())?;
            return Ok(session);
        }
    };
    if session.has_guessed(letter) {
        writeln!(out, "You already tried '{letter}'.")?;
        return Ok(session);
    }

    let session = session.apply(Action::Guess(letter));
    debug!(%letter, outcome = ?session.last_guess_outcome(), "guess");

    let budget = lives.budget();
    let farewell = session
        .farewell_index(budget)
        .and_then(|index| lives.name(index))
        .map(|name| farewell_text(name, rng));
    write_board(out, &session, lives, farewell.as_deref())?;

    Ok(session)
}

fn record_result<W: Write>(
    out: &mut W,
    session: &GameSession,
    outcome: GameOutcome,
    summary: &mut SimpleSummary,
) -> io::Result<()> {
    summary.games_played += 1;
    if outcome == GameOutcome::Won {
        summary.games_won += 1;
    } else {
        writeln!(
            out,
            "\n  The word was {}.",
            session.word().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    info!(
        ?outcome,
        word = session.word().text(),
        guesses = session.guesses().len(),
        "game over"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::all_farewells;
    use crate::wordlists::SequenceSupplier;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(words: &[&str], input: &str) -> (SimpleSummary, String) {
        colored::control::set_override(false);
        let mut supplier = SequenceSupplier::new(words_from_slice(words)).unwrap();
        let lives = LivesTable::builtin();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);

        let summary = run_simple_with(
            Cursor::new(input.to_string()),
            &mut out,
            &mut supplier,
            &lives,
            &mut rng,
        )
        .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let (summary, text) = run(&["go"], "g\no\nquit\n");

        assert_eq!(summary, SimpleSummary { games_played: 1, games_won: 1 });
        assert!(text.contains("You win!"));
    }

    #[test]
    fn losing_game_reveals_word() {
        let (summary, text) = run(&["go"], "a\nb\nc\nd\ne\nf\nh\ni\n");

        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.games_won, 0);
        assert!(text.contains("Game over!"));
        assert!(text.contains("The word was GO."));
    }

    #[test]
    fn wrong_guess_shows_farewell_for_first_language() {
        let (_, text) = run(&["go"], "z\n");
        assert!(all_farewells("HTML").iter().any(|line| text.contains(line.as_str())));
        assert!(text.contains("7 attempts left"));
    }

    #[test]
    fn invalid_and_repeated_input_is_rejected() {
        let (summary, text) = run(&["go"], "gg\n7\ng\ng\n");

        assert_eq!(summary.games_played, 0);
        assert!(text.contains("Enter a single letter a-z"));
        assert!(text.contains("You already tried 'g'."));
    }

    #[test]
    fn guesses_after_game_over_are_ignored() {
        let (_, text) = run(&["go"], "g\no\nz\n");
        assert!(text.contains("The game is over."));
    }

    #[test]
    fn enter_starts_next_game_after_finish() {
        let (summary, _) = run(&["go", "ox"], "g\no\n\no\nx\n");
        assert_eq!(summary, SimpleSummary { games_played: 2, games_won: 2 });
    }

    #[test]
    fn new_command_restarts_midgame() {
        let (summary, text) = run(&["go", "rust"], "g\nnew\nr\nu\ns\nt\n");

        assert!(text.contains("New game started!"));
        assert_eq!(summary, SimpleSummary { games_played: 1, games_won: 1 });
    }

    #[test]
    fn uppercase_input_is_accepted() {
        let (summary, _) = run(&["go"], "G\nO\n");
        assert_eq!(summary.games_won, 1);
    }
}
