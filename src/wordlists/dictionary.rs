//! Word dictionary with random and filtered selection

use super::embedded::BUILTIN;
use super::loader::words_from_records;
use crate::core::{CategoryFilter, Difficulty, DifficultyFilter, GameError, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Ordered collection of words to play with
///
/// The word list is injected at construction; [`WordDictionary::builtin`] uses
/// the list compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    words: Vec<Word>,
}

impl WordDictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Dictionary seeded from the embedded word list
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(words_from_records(BUILTIN))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append a word; duplicates are allowed
    ///
    /// The text is not validated. Non-letters in it are shown from the start
    /// of a round, so a text without any letters is won before the first
    /// guess. Use [`loader::parse_words`](super::loader::parse_words) for
    /// checked input.
    pub fn add_word(
        &mut self,
        text: impl Into<String>,
        hint1: impl Into<String>,
        hint2: impl Into<String>,
        category: impl Into<String>,
    ) {
        self.words.push(Word::new(text, hint1, hint2, category));
    }

    /// Pick any word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyDictionary`] if there are no words.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, GameError> {
        self.words.choose(rng).ok_or(GameError::EmptyDictionary)
    }

    /// Pick a word uniformly at random among those matching both filters
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMatchingWord`] carrying both filters when nothing
    /// matches.
    pub fn word_by_difficulty_and_category<R: Rng + ?Sized>(
        &self,
        difficulty: DifficultyFilter,
        category: &CategoryFilter,
        rng: &mut R,
    ) -> Result<&Word, GameError> {
        let candidates: Vec<&Word> = self
            .words
            .iter()
            .filter(|word| difficulty.matches(word) && category.matches(word))
            .collect();

        debug!(
            %difficulty,
            %category,
            candidates = candidates.len(),
            "filtered word list"
        );

        candidates
            .choose(rng)
            .copied()
            .ok_or_else(|| GameError::NoMatchingWord {
                difficulty,
                category: category.clone(),
            })
    }

    /// Distinct categories present right now, unordered
    #[must_use]
    pub fn unique_categories(&self) -> FxHashSet<&str> {
        self.words.iter().map(Word::category).collect()
    }

    /// Distinct difficulties present right now, unordered
    #[must_use]
    pub fn unique_difficulties(&self) -> FxHashSet<Difficulty> {
        self.words.iter().map(Word::difficulty).collect()
    }

    /// Distinct categories in alphabetical order, for menus
    #[must_use]
    pub fn sorted_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.unique_categories().into_iter().collect();
        categories.sort_unstable();
        categories
    }

    /// Distinct difficulties from easiest to hardest, for menus
    #[must_use]
    pub fn sorted_difficulties(&self) -> Vec<Difficulty> {
        let mut difficulties: Vec<Difficulty> = self.unique_difficulties().into_iter().collect();
        difficulties.sort_unstable();
        difficulties
    }
}
