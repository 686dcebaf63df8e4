//! Word lists for hangman
//!
//! The dictionary the game draws from, the word list embedded in the binary,
//! and a loader for custom word list files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::WordDictionary;
pub use embedded::{BUILTIN, BUILTIN_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_lowercase_letters() {
        for &(word, _, _, _) in BUILTIN {
            assert!(
                word.chars().all(char::is_lowercase),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_records_have_hints_and_category() {
        for &(word, hint1, hint2, category) in BUILTIN {
            assert!(!hint1.is_empty(), "Word '{word}' has an empty first hint");
            assert!(!hint2.is_empty(), "Word '{word}' has an empty second hint");
            assert!(!category.is_empty(), "Word '{word}' has no category");
        }
    }
}
