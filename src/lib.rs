//! video-poker: five-card draw video poker
//!
//! - Deck, hand evaluator and per-variant paytables
//! - A single-player betting state machine that reports every transition as a
//!   list of [`events::Event`]s
//! - Two front ends: a ratatui TUI and a plain line mode
//!
//! ## Quick start: play one hand
//! ```
//! use video_poker::config::SessionConfig;
//! use video_poker::engine::{Command, VideoPokerEngine};
//! use video_poker::game::{Game, Phase};
//!
//! let mut game = Game::seeded(SessionConfig::default(), 2024);
//! game.dispatch(Command::DealOrDraw);
//! game.dispatch(Command::ToggleHold(0));
//! let events = game.dispatch(Command::DealOrDraw);
//!
//! assert_eq!(game.phase(), Phase::Deal);
//! assert_eq!(game.hands_played(), 1);
//! assert!(!events.is_empty());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin video-poker -- --variant jacks-9-5
//! ```

pub mod cards;
pub mod cli;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod events;
pub mod game;
pub mod hand;
pub mod keymap;
pub mod logging;
pub mod paytable;
pub mod text;
pub mod tui;
pub mod variant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
