//! TUI application state and logic

use crate::core::{Action, GameOutcome, GameSession};
use crate::languages::{LivesTable, farewell_text};
use crate::wordlists::WordSupplier;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub session: GameSession,
    pub lives: LivesTable,
    supplier: Box<dyn WordSupplier>,
    rng: StdRng,
    /// Farewell line for the life lost by the latest guess
    pub farewell: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
}

impl App {
    #[must_use]
    pub fn new(mut supplier: Box<dyn WordSupplier>, lives: LivesTable) -> Self {
        let session = GameSession::new(supplier.next_word());
        debug!(length = session.word().len(), "new game");

        Self {
            session,
            lives,
            supplier,
            rng: StdRng::from_os_rng(),
            farewell: None,
            messages: vec![Message {
                text: "Pick a letter to start guessing.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn budget(&self) -> usize {
        self.lives.budget()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.is_over(self.budget())
    }

    /// Guess `letter`, unless the game is over or the letter was already tried
    pub fn guess(&mut self, letter: char) {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() || self.is_over() {
            return;
        }
        if self.session.has_guessed(letter) {
            self.add_message(
                &format!("You already tried '{}'.", letter.to_ascii_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let budget = self.budget();
        self.session = self.session.clone().apply(Action::Guess(letter));
        debug!(%letter, outcome = ?self.session.last_guess_outcome(), "guess");

        self.farewell = self
            .session
            .farewell_index(budget)
            .and_then(|index| self.lives.name(index))
            .map(|name| farewell_text(name, &mut self.rng));

        match self.session.outcome(budget) {
            GameOutcome::InProgress => {}
            GameOutcome::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.add_message(
                    "🎉 Saved from Assembly! Press Enter for a new game.",
                    MessageStyle::Success,
                );
                info!(word = self.session.word().text(), "game won");
            }
            GameOutcome::Lost => {
                self.stats.total_games += 1;
                self.stats.games_lost += 1;
                self.add_message(
                    &format!(
                        "The word was {}. Press Enter for a new game.",
                        self.session.word().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                info!(word = self.session.word().text(), "game lost");
            }
        }
    }

    /// Replace the session with a fresh game on a new word
    pub fn new_game(&mut self) {
        let word = self.supplier.next_word();
        self.session = self.session.clone().apply(Action::NewGame(word));
        self.farewell = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        debug!(length = self.session.word().len(), "new game");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter if self.is_over() => {
                self.new_game();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.guess(c);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "leaving interactive mode"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SequenceSupplier;
    use crate::wordlists::loader::words_from_slice;

    fn app(words: &[&str]) -> App {
        let supplier = SequenceSupplier::new(words_from_slice(words)).unwrap();
        App::new(Box::new(supplier), LivesTable::builtin())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_letters(app: &mut App, letters: &str) {
        for c in letters.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn letters_are_guessed() {
        let mut app = app(&["rust"]);
        type_letters(&mut app, "rZ");

        assert_eq!(app.session.guesses().to_string(), "rz");
        assert!(app.farewell.as_deref().is_some_and(|text| text.contains("HTML")));
    }

    #[test]
    fn correct_guess_clears_farewell() {
        let mut app = app(&["rust"]);
        type_letters(&mut app, "zr");
        assert!(app.farewell.is_none());
    }

    #[test]
    fn repeated_letter_reports_message() {
        let mut app = app(&["rust"]);
        type_letters(&mut app, "rr");

        assert_eq!(app.session.guesses().len(), 1);
        assert!(app.messages.last().unwrap().text.contains("already tried"));
    }

    #[test]
    fn win_updates_stats_and_blocks_input() {
        let mut app = app(&["go"]);
        type_letters(&mut app, "goz");

        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.session.guesses().len(), 2);
    }

    #[test]
    fn loss_updates_stats() {
        let mut app = app(&["go"]);
        type_letters(&mut app, "abcdefhi");

        assert_eq!(app.session.outcome(8), GameOutcome::Lost);
        assert_eq!(app.stats.games_lost, 1);
        assert!(app.farewell.is_none());
    }

    #[test]
    fn enter_starts_new_game_only_when_over() {
        let mut app = app(&["go", "rust"]);
        type_letters(&mut app, "g");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.word().text(), "go");

        type_letters(&mut app, "o");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.word().text(), "rust");
        assert!(app.session.guesses().is_empty());
    }

    #[test]
    fn quit_keys() {
        let mut esc = app(&["go"]);
        press(&mut esc, KeyCode::Esc);
        assert!(esc.should_quit);

        let mut ctrl_c = app(&["go"]);
        ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit);
        assert!(ctrl_c.session.guesses().is_empty());
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(&["go"]);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
