//! TUI rendering with ratatui
//!
//! Draws the header, status banner, language chips, word slots, keyboard and
//! status bar for the current session.

use super::app::{App, MessageStyle};
use crate::core::ALPHABET;
use crate::core::board::{
    KeyState, StatusBanner, chip_lost, guess_announcement, key_state, letter_slots, status_banner,
    word_announcement,
};
use crate::languages::Rgb;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(4), // Status banner
            Constraint::Length(3), // Language chips
            Constraint::Length(3), // Word
            Constraint::Length(4), // Keyboard
            Constraint::Min(4),    // Announcements and messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status(f, app, chunks[1]);
    render_chips(f, app, chunks[2]);
    render_word(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[5]);
    render_announcements(f, app, bottom[0]);
    render_messages(f, app, bottom[1]);

    render_status_bar(f, app, chunks[6]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guess the word within {} attempts to keep the programming world safe from Assembly!",
            app.budget()
        )),
    ];

    let header = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let banner = status_banner(&app.session, app.budget());

    let (lines, color) = match banner {
        StatusBanner::Farewell(_) => (
            vec![Line::from(Span::styled(
                app.farewell.clone().unwrap_or_default(),
                Style::default().add_modifier(Modifier::ITALIC),
            ))],
            Color::Magenta,
        ),
        StatusBanner::Won | StatusBanner::Lost => {
            let (heading, body) = banner.text().unwrap_or_default();
            let color = if banner == StatusBanner::Won {
                Color::Green
            } else {
                Color::Red
            };
            (
                vec![
                    Line::from(Span::styled(
                        heading,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(body),
                ],
                color,
            )
        }
        StatusBanner::Empty => (Vec::new(), Color::DarkGray),
    };

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if banner == StatusBanner::Won {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .style(Style::default().fg(color)),
        );
    f.render_widget(status, area);
}

fn render_chips(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (index, language) in app.lives.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if chip_lost(&app.session, index) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
                .bg(rgb(language.background))
                .fg(rgb(language.foreground))
        };
        spans.push(Span::styled(format!(" {} ", language.name), style));
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Languages ").borders(Borders::ALL));
    f.render_widget(chips, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = letter_slots(&app.session, app.budget())
        .into_iter()
        .flat_map(|slot| {
            let text = if slot.revealed {
                slot.letter.to_ascii_uppercase().to_string()
            } else {
                " ".to_string()
            };
            let fg = if slot.missed { Color::Red } else { Color::White };
            [
                Span::styled(
                    format!(" {text} "),
                    Style::default()
                        .bg(Color::DarkGray)
                        .fg(fg)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                Span::raw(" "),
            ]
        })
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let disabled = app.is_over();

    let rows: Vec<Line> = ALPHABET
        .chunks(13)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&letter| {
                    let mut style = match key_state(&app.session, letter) {
                        KeyState::Correct => Style::default().bg(Color::Green).fg(Color::Black),
                        KeyState::Wrong => Style::default().bg(Color::Red).fg(Color::White),
                        KeyState::Unused => Style::default().bg(Color::Yellow).fg(Color::Black),
                    };
                    if disabled {
                        style = style.add_modifier(Modifier::DIM);
                    }
                    [
                        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_announcements(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(text) = guess_announcement(&app.session, app.budget()) {
        lines.push(Line::from(text));
    }
    lines.push(Line::from(word_announcement(&app.session)));

    if app.is_over() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[ New Game ] press Enter",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let announcements = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Status ").borders(Borders::ALL));
    f.render_widget(announcements, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Lost: {}",
        app.stats.total_games, app.stats.games_won, app.stats.games_lost
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempts_text = format!(
        "Attempts left: {}",
        app.session.attempts_left(app.budget())
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "a-z: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::LivesTable;
    use crate::wordlists::SequenceSupplier;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn app(word: &str, letters: &str) -> App {
        let supplier = SequenceSupplier::new(words_from_slice(&[word])).unwrap();
        let mut app = App::new(Box::new(supplier), LivesTable::builtin());
        for letter in letters.chars() {
            app.guess(letter);
        }
        app
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
        symbols
            .chunks(width)
            .map(|row| row.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_header_and_chips() {
        let screen = draw(&app("rust", ""));
        assert!(screen.contains("Assembly: Endgame"));
        assert!(screen.contains("within 8 attempts"));
        assert!(screen.contains("JavaScript"));
        assert!(screen.contains("Current word: blank blank blank blank"));
    }

    #[test]
    fn renders_guess_announcement() {
        let screen = draw(&app("rust", "r"));
        assert!(screen.contains("Correct! The letter r is in the word."));
        assert!(screen.contains("Attempts left: 8"));
    }

    #[test]
    fn renders_win_state() {
        let screen = draw(&app("go", "go"));
        assert!(screen.contains("You win!"));
        assert!(screen.contains("New Game"));
        assert!(screen.contains("Enter: New Game"));
    }

    #[test]
    fn renders_loss_state() {
        let screen = draw(&app("go", "abcdefhi"));
        assert!(screen.contains("Game over!"));
        assert!(screen.contains("Lost: 1"));
    }

    #[test]
    fn new_game_control_hidden_while_playing() {
        let screen = draw(&app("rust", "z"));
        assert!(!screen.contains("[ New Game ]"));
        assert!(screen.contains("a-z: Guess"));
    }
}
