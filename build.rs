//! Build script to generate the embedded word list
//!
//! Reads the tab-separated word data file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.tsv",
        &Path::new(&out_dir).join("builtin.rs"),
        "BUILTIN",
        "Built-in hangman words as (word, hint1, hint2, category) records",
    );

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let records: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.split('\t').map(str::trim).collect())
        .collect();

    for (i, fields) in records.iter().enumerate() {
        assert!(
            fields.len() == 4 && fields.iter().all(|f| !f.is_empty()),
            "{input_path}: record {} must have 4 non-empty tab-separated fields",
            i + 1
        );
    }

    let count = records.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str, &str, &str)] = &[").unwrap();

    for fields in &records {
        writeln!(
            output,
            "    ({:?}, {:?}, {:?}, {:?}),",
            fields[0], fields[1], fields[2], fields[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of records in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
