//! Hangman
//!
//! A console word-guessing game with categories, difficulty tiers and hints.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{CategoryFilter, DifficultyFilter, HangmanGame};
//! use hangman::wordlists::WordDictionary;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dictionary = WordDictionary::builtin();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = HangmanGame::start(
//!     &dictionary,
//!     DifficultyFilter::Random,
//!     &CategoryFilter::Random,
//!     &mut rng,
//! )
//! .unwrap();
//!
//! game.guess_letter('e').unwrap();
//! println!("{} ({} attempts left)", game.word_display(), game.remaining_attempts());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
