//! Word list loading utilities
//!
//! Word list files are UTF-8 text with one record per line:
//! `word<TAB>hint1<TAB>hint2<TAB>category`. Blank lines and lines starting
//! with `#` are ignored.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file
///
/// Malformed lines are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse word list text, skipping comments, blank and malformed lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let word = parse_record(trimmed);
            if word.is_none() {
                warn!(line = i + 1, "skipping malformed word list entry");
            }
            word
        })
        .collect()
}

fn parse_record(line: &str) -> Option<Word> {
    let mut fields = line.split('\t').map(str::trim);
    let (Some(text), Some(hint1), Some(hint2), Some(category), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return None;
    };

    if [text, hint1, hint2, category].iter().any(|f| f.is_empty())
        || !text.chars().all(char::is_alphabetic)
    {
        return None;
    }

    Some(Word::new(text, hint1, hint2, category))
}

/// Convert embedded records to a Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_records;
/// use hangman::wordlists::BUILTIN;
///
/// let words = words_from_records(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_records(records: &[(&str, &str, &str, &str)]) -> Vec<Word> {
    records
        .iter()
        .map(|&(text, hint1, hint2, category)| Word::new(text, hint1, hint2, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_reads_records() {
        let content = "cat\tPurrs\tChases mice\tanimals\npear\tBell\tOrchard\tfruits\n";
        let words = parse_words(content);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[0].hints(), ["Purrs", "Chases mice"]);
        assert_eq!(words[1].category(), "fruits");
    }

    #[test]
    fn parse_words_skips_comments_and_blank_lines() {
        let content = "# header\n\n   \ncat\ta\tb\tanimals\n";
        let words = parse_words(content);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn parse_words_skips_malformed() {
        let content = "\
cat\ta\tb\tanimals
missing\tfields
too\tmany\tfields\there\textra
c4t\ta\tb\tanimals
empty\t\tb\tanimals
dog\ta\tb\tanimals
";
        let words = parse_words(content);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn parse_words_accepts_cyrillic() {
        let words = parse_words("кошка\tМурлычет\tЛовит мышей\tживотные\n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].length(), 5);
    }

    #[test]
    fn words_from_records_empty() {
        let records: &[(&str, &str, &str, &str)] = &[];
        assert!(words_from_records(records).is_empty());
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.tsv").is_err());
    }
}
