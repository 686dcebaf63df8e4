//! Error types for the game core

use super::filter::{CategoryFilter, DifficultyFilter};
use thiserror::Error;

/// Rejected game or dictionary operation
///
/// Every variant is recoverable: the caller reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(
        "no words found for category ({category}) and difficulty ({difficulty}); try other options"
    )]
    NoMatchingWord {
        difficulty: DifficultyFilter,
        category: CategoryFilter,
    },
    #[error("the word list is empty")]
    EmptyDictionary,
    #[error("letter '{0}' was already guessed, try another one")]
    LetterAlreadyGuessed(char),
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("hint {} was already used", .index + 1)]
    HintAlreadyUsed { index: usize },
    #[error("there is no hint {}", .index + 1)]
    InvalidHint { index: usize },
    #[error("the game is already over")]
    GameOver,
}

/// Unknown difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);
