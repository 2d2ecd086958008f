//! Assembly: Endgame
//!
//! A terminal word-guessing game. Every wrong guess eliminates one programming
//! language; lose them all and only Assembly is left.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{Action, GameOutcome, GameSession, TargetWord};
//! use assembly_endgame::languages::LivesTable;
//!
//! let lives = LivesTable::builtin();
//! let session = GameSession::new(TargetWord::new("react").unwrap())
//!     .apply(Action::Guess('r'))
//!     .apply(Action::Guess('z'));
//!
//! assert_eq!(session.wrong_guess_count(), 1);
//! assert_eq!(session.outcome(lives.budget()), GameOutcome::InProgress);
//! assert_eq!(lives.name(session.farewell_index(lives.budget()).unwrap()), Some("HTML"));
//! ```

// Core domain types and the game state engine
pub mod core;

// Lives table and farewell messages
pub mod languages;

// Word lists and word suppliers
pub mod wordlists;

// Automated players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
