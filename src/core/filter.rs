//! Word selection filters
//!
//! Both filters carry a `Random` wildcard that matches every word.

use super::error::ParseDifficultyError;
use super::word::{Difficulty, Word};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const RANDOM_LABEL: &str = "Random";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    #[default]
    Random,
    Exact(Difficulty),
}

impl DifficultyFilter {
    #[must_use]
    pub fn matches(self, word: &Word) -> bool {
        match self {
            Self::Random => true,
            Self::Exact(difficulty) => word.difficulty() == difficulty,
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(difficulty: Difficulty) -> Self {
        Self::Exact(difficulty)
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str(RANDOM_LABEL),
            Self::Exact(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(RANDOM_LABEL) {
            Ok(Self::Random)
        } else {
            s.parse().map(Self::Exact)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    Random,
    Named(String),
}

impl CategoryFilter {
    pub fn named(category: impl Into<String>) -> Self {
        Self::Named(category.into())
    }

    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        match self {
            Self::Random => true,
            Self::Named(category) => word.category() == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str(RANDOM_LABEL),
            Self::Named(category) => f.write_str(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RANDOM_LABEL) {
            Ok(Self::Random)
        } else {
            Ok(Self::named(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_matches_everything() {
        let word = Word::new("elephant", "a", "b", "animals");
        assert!(DifficultyFilter::Random.matches(&word));
        assert!(CategoryFilter::Random.matches(&word));
    }

    #[test]
    fn exact_filters_compare_derived_difficulty_and_category() {
        let word = Word::new("elephant", "a", "b", "animals");
        assert!(DifficultyFilter::Exact(Difficulty::Hard).matches(&word));
        assert!(!DifficultyFilter::Exact(Difficulty::Easy).matches(&word));
        assert!(CategoryFilter::named("animals").matches(&word));
        assert!(!CategoryFilter::named("fruits").matches(&word));
    }

    #[test]
    fn parse_filters() {
        assert_eq!(
            "random".parse::<DifficultyFilter>().unwrap(),
            DifficultyFilter::Random
        );
        assert_eq!(
            "hard".parse::<DifficultyFilter>().unwrap(),
            DifficultyFilter::Exact(Difficulty::Hard)
        );
        assert!("impossible".parse::<DifficultyFilter>().is_err());
        assert_eq!(
            "RANDOM".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Random
        );
        assert_eq!(
            "fruits".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::named("fruits")
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(DifficultyFilter::Random.to_string(), "Random");
        assert_eq!(DifficultyFilter::Exact(Difficulty::Easy).to_string(), "Easy");
        assert_eq!(CategoryFilter::named("sports").to_string(), "sports");
    }
}
