//! Display functions for games and command results

use super::formatters::{create_progress_bar, lives_bar, slot_char};
use crate::commands::SimulationResult;
use crate::core::board::{KeyState, StatusBanner, chip_lost, key_state, letter_slots, status_banner};
use crate::core::{ALPHABET, GameSession};
use crate::languages::LivesTable;
use colored::Colorize;
use std::io::{self, Write};

/// Write the full board for `session` to `out`
///
/// `farewell` is the message for the life just lost, if any.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_board<W: Write>(
    out: &mut W,
    session: &GameSession,
    lives: &LivesTable,
    farewell: Option<&str>,
) -> io::Result<()> {
    let budget = lives.budget();

    // Status
    match status_banner(session, budget) {
        StatusBanner::Farewell(_) => {
            if let Some(text) = farewell {
                writeln!(out, "\n  {}", text.italic().bright_magenta())?;
            }
        }
        banner @ StatusBanner::Won => {
            if let Some((heading, body)) = banner.text() {
                writeln!(out, "\n  {} {}", heading.bright_green().bold(), body.green())?;
            }
        }
        banner @ StatusBanner::Lost => {
            if let Some((heading, body)) = banner.text() {
                writeln!(out, "\n  {} {}", heading.bright_red().bold(), body.red())?;
            }
        }
        StatusBanner::Empty => {}
    }

    // Language chips
    let chips: Vec<String> = lives
        .iter()
        .enumerate()
        .map(|(index, language)| {
            let label = format!(" {} ", language.name);
            if chip_lost(session, index) {
                format!("{}", format!(" 💀{}", label.trim_end()).bright_black().strikethrough())
            } else {
                let (bg, fg) = (language.background, language.foreground);
                format!(
                    "{}",
                    label.on_truecolor(bg.r, bg.g, bg.b).truecolor(fg.r, fg.g, fg.b)
                )
            }
        })
        .collect();
    writeln!(out, "\n  {}", chips.join(" "))?;

    // Word
    let slots: Vec<String> = letter_slots(session, budget)
        .into_iter()
        .map(|slot| {
            let text = slot_char(slot).to_string();
            if slot.missed {
                format!("{}", text.red().bold())
            } else {
                format!("{}", text.bright_white().bold())
            }
        })
        .collect();
    writeln!(out, "\n    {}", slots.join(" "))?;

    // Keyboard
    let keys: Vec<String> = ALPHABET
        .iter()
        .map(|&letter| {
            let text = letter.to_ascii_uppercase().to_string();
            match key_state(session, letter) {
                KeyState::Correct => format!("{}", text.black().on_green()),
                KeyState::Wrong => format!("{}", text.white().on_red()),
                KeyState::Unused => format!("{}", text.bright_white()),
            }
        })
        .collect();
    writeln!(out, "\n  {}", keys.join(" "))?;
    writeln!(
        out,
        "\n  Lives: {} ({} attempts left)",
        lives_bar(session.attempts_left(budget), budget).bright_red(),
        session.attempts_left(budget)
    )?;

    Ok(())
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        strategy.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won:              {}", result.won.to_string().green());
    println!("   Lost:             {}", result.lost.to_string().red());
    println!("   Avg wrong:        {:.2}", result.average_wrong);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Wrong guesses per game:".bright_cyan().bold());
    for wrong in 0..=result.budget {
        if let Some(&count) = result.wrong_distribution.get(&wrong) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {wrong:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Words that beat the bot:".bright_cyan().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   • {}", word.to_uppercase());
        }
        if result.lost_words.len() > 10 {
            println!("   … and {} more", result.lost_words.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, TargetWord};

    fn render(session: &GameSession, farewell: Option<&str>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_board(&mut out, session, &LivesTable::builtin(), farewell).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn play(text: &str, letters: &str) -> GameSession {
        letters.chars().fold(
            GameSession::new(TargetWord::new(text).unwrap()),
            |s, letter| s.apply(Action::Guess(letter)),
        )
    }

    #[test]
    fn board_shows_word_and_lives() {
        let text = render(&play("rust", "r"), None);
        assert!(text.contains("R _ _ _"));
        assert!(text.contains("8 attempts left"));
        assert!(text.contains("Assembly"));
    }

    #[test]
    fn board_shows_farewell() {
        let text = render(&play("rust", "z"), Some("Farewell, HTML"));
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("7 attempts left"));
    }

    #[test]
    fn board_shows_win_banner() {
        let text = render(&play("go", "go"), None);
        assert!(text.contains("You win!"));
    }

    #[test]
    fn board_shows_loss_banner_and_word() {
        let text = render(&play("go", "abcdefhi"), None);
        assert!(text.contains("Game over!"));
        assert!(text.contains("G O"));
    }
}
