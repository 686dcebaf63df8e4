//! Word list listing command
//!
//! Prints the words matching the given filters, followed by the categories
//! and difficulties present in the dictionary.

use crate::core::{CategoryFilter, DifficultyFilter, Word};
use crate::output::render_word_card;
use crate::wordlists::WordDictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Print matching words and a summary; returns how many words matched
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list_words<W: Write>(
    out: &mut W,
    dictionary: &WordDictionary,
    difficulty: DifficultyFilter,
    category: &CategoryFilter,
) -> io::Result<usize> {
    let matching: Vec<&Word> = dictionary
        .words()
        .iter()
        .filter(|word| difficulty.matches(word) && category.matches(word))
        .collect();

    for word in &matching {
        render_word_card(out, word)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {} of {} words",
        "Matched:".bright_cyan().bold(),
        matching.len(),
        dictionary.len()
    )?;
    writeln!(
        out,
        "{} {}",
        "Categories:".bright_cyan().bold(),
        dictionary.sorted_categories().join(", ")
    )?;
    let difficulties: Vec<String> = dictionary
        .sorted_difficulties()
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(
        out,
        "{} {}",
        "Difficulties:".bright_cyan().bold(),
        difficulties.join(", ")
    )?;

    Ok(matching.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn dictionary() -> WordDictionary {
        let mut dictionary = WordDictionary::default();
        dictionary.add_word("cat", "Purrs", "Chases mice", "animals");
        dictionary.add_word("elephant", "Huge", "Trunk", "animals");
        dictionary.add_word("pear", "Bell shaped", "Orchard", "fruits");
        dictionary
    }

    #[test]
    fn lists_all_words_without_filters() {
        let mut out = Vec::new();
        let count = list_words(
            &mut out,
            &dictionary(),
            DifficultyFilter::Random,
            &CategoryFilter::Random,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 3);
        assert!(text.contains("elephant"));
        assert!(text.contains("animals, fruits"));
        assert!(text.contains("Easy, Hard"));
    }

    #[test]
    fn lists_only_matching_words() {
        let mut out = Vec::new();
        let count = list_words(
            &mut out,
            &dictionary(),
            DifficultyFilter::Exact(Difficulty::Easy),
            &CategoryFilter::named("animals"),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 1);
        assert!(text.contains("Purrs"));
        assert!(!text.contains("Trunk"));
        assert!(!text.contains("Orchard"));
    }
}
