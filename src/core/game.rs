//! Hangman session state machine
//!
//! A `HangmanGame` tracks one word, the letters guessed so far, the remaining
//! attempts and which hints have been revealed. Won and lost games are
//! terminal: every mutating call on a finished game returns [`GameError::GameOver`].

use super::error::GameError;
use super::filter::{CategoryFilter, DifficultyFilter};
use super::word::{Word, normalize_letter};
use crate::wordlists::WordDictionary;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// Placeholder shown for letters not yet guessed
pub const MASK_CHAR: char = '_';

/// Number of hints every word carries
pub const HINT_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit { occurrences: usize },
    Miss,
}

#[derive(Debug, Clone)]
pub struct HangmanGame<'a> {
    current_word: &'a Word,
    guessed_letters: BTreeSet<char>,
    remaining_attempts: u32,
    hints_used: [bool; HINT_COUNT],
}

impl<'a> HangmanGame<'a> {
    /// Start a session on a given word
    ///
    /// Attempts come from the word's own difficulty tier.
    #[must_use]
    pub fn new(word: &'a Word) -> Self {
        Self {
            current_word: word,
            guessed_letters: BTreeSet::new(),
            remaining_attempts: word.difficulty().max_attempts(),
            hints_used: [false; HINT_COUNT],
        }
    }

    /// Pick a word from the dictionary and start a session on it
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMatchingWord`] if no word satisfies both filters.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &'a WordDictionary,
        difficulty: DifficultyFilter,
        category: &CategoryFilter,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let word = dictionary.word_by_difficulty_and_category(difficulty, category, rng)?;
        debug!(word = word.text(), %difficulty, %category, "game started");
        Ok(Self::new(word))
    }

    /// Replace the word and clear all progress
    ///
    /// The requested filters only narrow the selection; attempts are taken from
    /// the chosen word's own difficulty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMatchingWord`] if no word satisfies both filters,
    /// in which case the current session is left untouched.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        dictionary: &'a WordDictionary,
        difficulty: DifficultyFilter,
        category: &CategoryFilter,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let word = dictionary.word_by_difficulty_and_category(difficulty, category, rng)?;
        debug!(word = word.text(), %difficulty, %category, "game reset");
        *self = Self::new(word);
        Ok(())
    }

    /// Guess a letter
    ///
    /// The letter is lowercased before it is compared and stored. A miss costs
    /// one attempt; attempts never drop below zero.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is already won or lost
    /// - [`GameError::NotALetter`] if `letter` is not alphabetic
    /// - [`GameError::LetterAlreadyGuessed`] if the letter was guessed before;
    ///   the state is unchanged
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !letter.is_alphabetic() {
            return Err(GameError::NotALetter(letter));
        }

        let letter = normalize_letter(letter);
        if !self.guessed_letters.insert(letter) {
            return Err(GameError::LetterAlreadyGuessed(letter));
        }

        let occurrences = self.current_word.positions_of(letter).len();
        let outcome = if occurrences == 0 {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit { occurrences }
        };

        debug!(
            %letter,
            ?outcome,
            remaining = self.remaining_attempts,
            "letter guessed"
        );
        Ok(outcome)
    }

    /// Reveal one of the word's two hints (index 0 or 1)
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game is already won or lost
    /// - [`GameError::InvalidHint`] if `index` is not 0 or 1
    /// - [`GameError::HintAlreadyUsed`] if that hint was revealed before
    pub fn use_hint(&mut self, index: usize) -> Result<&'a str, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let used = self
            .hints_used
            .get_mut(index)
            .ok_or(GameError::InvalidHint { index })?;
        if *used {
            return Err(GameError::HintAlreadyUsed { index });
        }
        *used = true;

        debug!(index, "hint revealed");
        Ok(self.current_word.hints()[index])
    }

    /// Hints revealed so far, by index
    #[must_use]
    pub fn revealed_hints(&self) -> [Option<&'a str>; HINT_COUNT] {
        let hints = self.current_word.hints();
        [0, 1].map(|i| self.hints_used[i].then_some(hints[i]))
    }

    /// The word with every unguessed letter replaced by [`MASK_CHAR`]
    ///
    /// Non-letters such as spaces and hyphens cannot be guessed and are always
    /// shown.
    #[must_use]
    pub fn word_display(&self) -> String {
        self.current_word
            .text()
            .chars()
            .map(|c| if self.is_revealed(c) { c } else { MASK_CHAR })
            .collect()
    }

    #[must_use]
    pub fn is_word_guessed(&self) -> bool {
        self.current_word.text().chars().all(|c| self.is_revealed(c))
    }

    fn is_revealed(&self, c: char) -> bool {
        !c.is_alphabetic() || self.guessed_letters.contains(&c)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.remaining_attempts == 0 || self.is_word_guessed()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_word_guessed() {
            GameStatus::Won
        } else if self.remaining_attempts == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub const fn current_word(&self) -> &'a Word {
        self.current_word
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Attempts the session started with
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.current_word.difficulty().max_attempts()
    }

    /// Wrong guesses made so far
    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.max_attempts() - self.remaining_attempts
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }
}
