//! Build script to generate the embedded corpus
//!
//! Reads the word list and the usage-weight table and generates Rust source
//! code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words.txt",
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default solver corpus, one five-letter word per entry",
    );

    generate_frequency_table(
        "data/frequencies.txt",
        &Path::new(&out_dir).join("frequencies.rs"),
        "FREQUENCIES",
        "English usage weights for the default corpus",
    );

    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/frequencies.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_frequency_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated frequency table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(word), Some(weight)) = (fields.next(), fields.next()) else {
            panic!("Malformed frequency line in {input_path}: {line}");
        };
        let weight: f64 = weight
            .parse()
            .unwrap_or_else(|e| panic!("Bad weight for {word} in {input_path}: {e}"));
        writeln!(output, "    ({word:?}, {weight:e}),").unwrap();
    }

    writeln!(output, "];").unwrap();
}
