//! Validation of raw console input
//!
//! Turns typed lines into menu choices and game actions before anything
//! reaches the game core.

use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid input '{0}', please enter a menu number")]
    InvalidMenuChoice(String),
    #[error("invalid input '{0}', please enter a menu number or a single letter")]
    InvalidGuess(String),
}

/// Action requested on the game screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Reveal a hint (zero-based index)
    Hint(usize),
    GiveUp,
    Quit,
    Letter(char),
}

/// Parse a menu number within `valid`
///
/// # Errors
///
/// Returns [`InputError::InvalidMenuChoice`] for anything that is not a number
/// in range.
pub fn parse_menu_choice(input: &str, valid: RangeInclusive<usize>) -> Result<usize, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|choice| valid.contains(choice))
        .ok_or_else(|| InputError::InvalidMenuChoice(trimmed.to_string()))
}

/// Parse game screen input: `1`/`2` hints, `3` give up, `4` quit, or one letter
///
/// # Errors
///
/// Returns [`InputError::InvalidGuess`] for anything else.
pub fn parse_game_input(input: &str) -> Result<GameInput, InputError> {
    let trimmed = input.trim();
    match trimmed {
        "1" => return Ok(GameInput::Hint(0)),
        "2" => return Ok(GameInput::Hint(1)),
        "3" => return Ok(GameInput::GiveUp),
        "4" => return Ok(GameInput::Quit),
        _ => {}
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Ok(GameInput::Letter(letter)),
        _ => Err(InputError::InvalidGuess(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_in_range() {
        assert_eq!(parse_menu_choice("1", 1..=4), Ok(1));
        assert_eq!(parse_menu_choice(" 4\n", 1..=4), Ok(4));
        assert_eq!(parse_menu_choice("0", 0..=3), Ok(0));
    }

    #[test]
    fn menu_choice_rejected() {
        assert_eq!(
            parse_menu_choice("5", 1..=4),
            Err(InputError::InvalidMenuChoice("5".to_string()))
        );
        assert!(parse_menu_choice("0", 1..=4).is_err());
        assert!(parse_menu_choice("a", 1..=4).is_err());
        assert!(parse_menu_choice("", 1..=4).is_err());
        assert!(parse_menu_choice("-1", 0..=4).is_err());
    }

    #[test]
    fn game_input_commands() {
        assert_eq!(parse_game_input("1"), Ok(GameInput::Hint(0)));
        assert_eq!(parse_game_input("2"), Ok(GameInput::Hint(1)));
        assert_eq!(parse_game_input("3"), Ok(GameInput::GiveUp));
        assert_eq!(parse_game_input("4"), Ok(GameInput::Quit));
    }

    #[test]
    fn game_input_letters() {
        assert_eq!(parse_game_input("a"), Ok(GameInput::Letter('a')));
        assert_eq!(parse_game_input(" Q "), Ok(GameInput::Letter('Q')));
        assert_eq!(parse_game_input("ж"), Ok(GameInput::Letter('ж')));
    }

    #[test]
    fn game_input_rejected() {
        for bad in ["", "ab", "5", "!", "12"] {
            assert_eq!(
                parse_game_input(bad),
                Err(InputError::InvalidGuess(bad.to_string())),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn error_messages_quote_the_input() {
        let err = parse_game_input("xyz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input 'xyz', please enter a menu number or a single letter"
        );
    }
}
