//! Core domain types for hangman
//!
//! Words, selection filters, the session state machine and its errors.
//! Nothing here performs I/O.

mod error;
mod filter;
mod game;
mod stats;
mod word;

pub use error::{GameError, ParseDifficultyError};
pub use filter::{CategoryFilter, DifficultyFilter};
pub use game::{GameStatus, GuessOutcome, HINT_COUNT, HangmanGame, MASK_CHAR};
pub use stats::Statistics;
pub use word::{Difficulty, Word};
