//! Build script to generate embedded game tables
//!
//! Reads the word list and the lives table from `data/` and generates Rust
//! source code with const arrays.

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
        "Words the game picks its target from",
    );

    generate_language_table(
        "data/languages.txt",
        &Path::new(&out_dir).join("languages.rs"),
    );

    // Rebuild if tables change
    println!("cargo:rerun-if-changed=data/words.txt");
    println!("cargo:rerun-if-changed=data/languages.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn generate_language_table(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut rows = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        assert!(
            fields.len() == 3,
            "Malformed language row in {input_path}: {line}"
        );
        let background = parse_hex(fields[1])
            .unwrap_or_else(|| panic!("Invalid background color in {input_path}: {line}"));
        let foreground = parse_hex(fields[2])
            .unwrap_or_else(|| panic!("Invalid foreground color in {input_path}: {line}"));
        rows.push((fields[0], background, foreground));
    }
    assert!(!rows.is_empty(), "No languages in {input_path}");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated lives table").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Built-in lives table as (name, background, foreground) rows"
    )
    .unwrap();
    writeln!(
        output,
        "pub const LANGUAGES: &[(&str, [u8; 3], [u8; 3])] = &["
    )
    .unwrap();

    for (name, background, foreground) in rows {
        writeln!(output, "    (\"{name}\", {background:?}, {foreground:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
}

/// `#RRGGBB` to its three channels
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(channels)
}
