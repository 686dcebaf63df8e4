//! Hangman word representation
//!
//! A Word stores the puzzle text with its hints and category, and tracks letter
//! positions so guesses can be resolved without rescanning the text.

use super::error::ParseDifficultyError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Difficulty tier of a word, derived purely from its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Classify a word length (in characters)
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_length(4), Difficulty::Easy);
    /// assert_eq!(Difficulty::from_length(5), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_length(8), Difficulty::Hard);
    /// ```
    #[must_use]
    pub const fn from_length(length: usize) -> Self {
        match length {
            0..5 => Self::Easy,
            5..8 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Number of wrong guesses a player may make on a word of this tier
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        match self {
            Self::Easy => 7,
            Self::Medium => 5,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// A hangman puzzle word with its hints and category
///
/// The text is normalized to lowercase on construction so that guesses, which
/// are lowercased too, compare directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    hint1: String,
    hint2: String,
    category: String,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl Word {
    /// Create a new Word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Difficulty, Word};
    ///
    /// let word = Word::new("Tiger", "Big cat", "Has stripes", "animals");
    /// assert_eq!(word.text(), "tiger");
    /// assert_eq!(word.difficulty(), Difficulty::Medium);
    /// ```
    pub fn new(
        text: impl Into<String>,
        hint1: impl Into<String>,
        hint2: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let text: String = text.into().chars().map(normalize_letter).collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            hint1: hint1.into(),
            hint2: hint2.into(),
            category: category.into(),
            char_positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn hint1(&self) -> &str {
        &self.hint1
    }

    #[inline]
    #[must_use]
    pub fn hint2(&self) -> &str {
        &self.hint2
    }

    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Both hints, in order
    #[must_use]
    pub fn hints(&self) -> [&str; 2] {
        [&self.hint1, &self.hint2]
    }

    /// Length in characters, not bytes
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_length(self.length())
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all character positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the word; spaces, hyphens and other non-letters
    /// are skipped since they are never guessed
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions
            .keys()
            .copied()
            .filter(|c| c.is_alphabetic())
    }
}

/// Lowercase a character, keeping it as-is when lowercasing would expand it
/// into several characters
///
/// Word text and guesses both go through this, so a guessed letter always
/// lines up with one character of the text.
pub(crate) fn normalize_letter(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => letter,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
