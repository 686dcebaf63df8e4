//! Formatting utilities for terminal output

use crate::core::HangmanGame;

/// Gallows drawings from empty to a complete figure
pub const GALLOWS: [&str; 7] = [
    "  +---+
  |   |
      |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
      |
      |
      |
=========",
    "  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
      |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 /    |
      |
=========",
    "  +---+
  |   |
  O   |
 /|\\  |
 / \\  |
      |
=========",
];

/// Which gallows drawing to show
///
/// Mistakes are scaled onto the drawings so every tier ends on the complete
/// figure, and the complete figure only appears once no attempts are left.
#[must_use]
pub fn gallows_stage(mistakes: u32, max_attempts: u32) -> usize {
    let last = GALLOWS.len() - 1;
    if max_attempts == 0 || mistakes >= max_attempts {
        return last;
    }
    let scaled = (mistakes as usize * last).div_ceil(max_attempts as usize);
    scaled.min(last - 1)
}

/// Gallows drawing for the current state of a game
#[must_use]
pub fn gallows_for(game: &HangmanGame<'_>) -> &'static str {
    GALLOWS[gallows_stage(game.mistakes(), game.max_attempts())]
}

/// Masked word with spaces between characters, e.g. `t _ _ t`
#[must_use]
pub fn spaced(display: &str) -> String {
    let mut result = String::with_capacity(display.len() * 2);
    for (i, ch) in display.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Guessed letters in alphabetical order, comma separated
#[must_use]
pub fn used_letters(game: &HangmanGame<'_>) -> String {
    game.guessed_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(game: &HangmanGame<'_>, width: usize) -> String {
    create_progress_bar(
        f64::from(game.remaining_attempts()),
        f64::from(game.max_attempts()),
        width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use pretty_assertions::assert_eq;

    #[test]
    fn gallows_starts_empty_and_ends_complete() {
        for max in [3, 5, 7] {
            assert_eq!(gallows_stage(0, max), 0);
            assert_eq!(gallows_stage(max, max), 6);
        }
    }

    #[test]
    fn gallows_first_mistake_is_visible() {
        for max in [3, 5, 7] {
            assert!(gallows_stage(1, max) > 0, "max {max}");
        }
    }

    #[test]
    fn gallows_complete_only_when_lost() {
        for max in [3, 5, 7] {
            for mistakes in 0..max {
                assert!(gallows_stage(mistakes, max) < 6);
            }
        }
    }

    #[test]
    fn gallows_never_goes_backwards() {
        for max in [3, 5, 7] {
            let stages: Vec<usize> = (0..=max).map(|m| gallows_stage(m, max)).collect();
            assert!(stages.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn spaced_display() {
        assert_eq!(spaced("t__t"), "t _ _ t");
        assert_eq!(spaced(""), "");
        assert_eq!(spaced("т_"), "т _");
    }

    #[test]
    fn used_letters_sorted() {
        let word = Word::new("test", "a", "b", "c");
        let mut game = HangmanGame::new(&word);
        for letter in ['t', 'a', 'e'] {
            game.guess_letter(letter).unwrap();
        }
        assert_eq!(used_letters(&game), "a, e, t");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
