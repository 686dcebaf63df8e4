//! Console rendering for the text game loop
//!
//! Every function writes to the given writer so the loop can be driven from
//! tests with an in-memory buffer.

use super::formatters::{attempts_bar, gallows_for, spaced, used_letters};
use crate::core::{CategoryFilter, DifficultyFilter, GameStatus, HangmanGame, Word};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Menu label shown for the `Random` wildcard
pub const RANDOM_OPTION: &str = "Random";

/// Clear the terminal and move the cursor home
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Print an error line if there is one
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_error<W: Write>(out: &mut W, message: Option<&str>) -> io::Result<()> {
    if let Some(message) = message {
        writeln!(out, "{} {}", "Error:".red().bold(), message.red())?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_main_menu<W: Write>(
    out: &mut W,
    category: &CategoryFilter,
    difficulty: DifficultyFilter,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "             H A N G M A N".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "1. Start game")?;
    writeln!(
        out,
        "2. Choose category (current: {})",
        category.to_string().bright_yellow()
    )?;
    writeln!(
        out,
        "3. Choose difficulty (current: {})",
        difficulty.to_string().bright_yellow()
    )?;
    writeln!(out, "4. Exit")
}

/// List of options preceded by the `0. Random` wildcard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_option_menu<W: Write>(out: &mut W, options: &[String]) -> io::Result<()> {
    writeln!(out, "0. {RANDOM_OPTION}")?;
    for (i, option) in options.iter().enumerate() {
        writeln!(out, "{}. {option}", i + 1)?;
    }
    Ok(())
}

/// Gallows, masked word, attempts left and used letters
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_game<W: Write>(out: &mut W, game: &HangmanGame<'_>) -> io::Result<()> {
    writeln!(out, "{}", gallows_for(game))?;
    writeln!(out)?;
    writeln!(
        out,
        "Word: {}",
        spaced(&game.word_display()).bright_white().bold()
    )?;
    writeln!(
        out,
        "Category: {} | Difficulty: {}",
        game.current_word().category(),
        game.current_word().difficulty()
    )?;
    writeln!(
        out,
        "Attempts left: {} {}",
        game.remaining_attempts(),
        attempts_bar(game, game.max_attempts() as usize).bright_red()
    )?;
    writeln!(out, "Used letters: {}", used_letters(game))
}

/// In-game options; revealed hints are shown in place of their menu entry
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_game_menu<W: Write>(out: &mut W, game: &HangmanGame<'_>) -> io::Result<()> {
    for (i, hint) in game.revealed_hints().iter().enumerate() {
        match hint {
            Some(text) => writeln!(out, "Hint {}: {}", i + 1, text.bright_yellow())?,
            None => writeln!(out, "{}. Hint {}", i + 1, i + 1)?,
        }
    }
    writeln!(out, "3. Give up")?;
    writeln!(out, "4. Quit")
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_game_result<W: Write>(out: &mut W, game: &HangmanGame<'_>) -> io::Result<()> {
    let word = game.current_word().text();
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "{} The word was: {}",
            "Congratulations, you won!".bright_green().bold(),
            word.bright_white().bold()
        ),
        GameStatus::Lost | GameStatus::InProgress => writeln!(
            out,
            "{} The word was: {}",
            "Sorry, you lost.".red().bold(),
            word.bright_white().bold()
        ),
    }
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_post_game_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "1. Back to menu")?;
    writeln!(out, "2. Exit")
}

/// All metadata of one word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_word_card<W: Write>(out: &mut W, word: &Word) -> io::Result<()> {
    writeln!(out, "{}", word.text().bright_white().bold())?;
    writeln!(out, "  Hint 1:     {}", word.hint1())?;
    writeln!(out, "  Hint 2:     {}", word.hint2())?;
    writeln!(out, "  Category:   {}", word.category())?;
    writeln!(out, "  Difficulty: {}", word.difficulty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn game_screen_shows_progress() {
        let word = Word::new("test", "Exam", "Trial", "school");
        let mut game = HangmanGame::new(&word);
        game.guess_letter('t').unwrap();
        game.guess_letter('a').unwrap();

        let text = rendered(|out| render_game(out, &game));
        assert!(text.contains("t _ _ t"));
        assert!(text.contains("Attempts left: 6"));
        assert!(text.contains("Used letters: a, t"));
        assert!(text.contains("  O   |"));
    }

    #[test]
    fn game_menu_replaces_revealed_hint() {
        let word = Word::new("test", "Exam", "Trial", "school");
        let mut game = HangmanGame::new(&word);
        game.use_hint(1).unwrap();

        let text = rendered(|out| render_game_menu(out, &game));
        assert!(text.contains("1. Hint 1"));
        assert!(text.contains("Hint 2: "));
        assert!(text.contains("Trial"));
        assert!(!text.contains("2. Hint 2"));
    }

    #[test]
    fn result_names_the_word() {
        let word = Word::new("cat", "a", "b", "animals");
        let mut game = HangmanGame::new(&word);
        for letter in ['c', 'a', 't'] {
            game.guess_letter(letter).unwrap();
        }
        let text = rendered(|out| render_game_result(out, &game));
        assert!(text.contains("you won"));
        assert!(text.contains("cat"));
    }

    #[test]
    fn option_menu_starts_with_random() {
        let options = vec!["animals".to_string(), "fruits".to_string()];
        let text = rendered(|out| render_option_menu(out, &options));
        assert_eq!(text, "0. Random\n1. animals\n2. fruits\n");
    }

    #[test]
    fn error_line_only_when_present() {
        assert_eq!(rendered(|out| render_error(out, None)), "");
        assert!(rendered(|out| render_error(out, Some("bad input"))).contains("bad input"));
    }

    #[test]
    fn word_card_lists_metadata() {
        let word = Word::new("elephant", "Huge", "Trunk", "animals");
        let text = rendered(|out| render_word_card(out, &word));
        assert!(text.contains("Hint 1:     Huge"));
        assert!(text.contains("Category:   animals"));
        assert!(text.contains("Difficulty: Hard"));
    }
}
