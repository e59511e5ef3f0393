//! Build script to generate embedded word lists
//!
//! Each list in `data/` becomes a const slice plus a `_COUNT` constant.
//! Entries that are not 6 lowercase ASCII letters fail the build.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// (input file, generated file, const name, doc line)
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words that can be chosen as the secret",
    ),
    (
        "data/vocab.txt",
        "allowed.rs",
        "ALLOWED",
        "All allowed guessable words",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name, doc) in LISTS {
        let source = render_list(input, const_name, doc);
        let path = Path::new(&out_dir).join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

fn render_list(input: &str, const_name: &str, doc: &str) -> String {
    let content =
        fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));

    let mut words = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.len() == 6 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input}:{}: {word:?} is not a 6-letter lowercase word",
            number + 1
        );
        words.push(word);
    }

    let mut source = format!("// Generated from {input}\n\n/// {doc}\npub const {const_name}: &[&str] = &[\n");
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap();
    }
    writeln!(source, "];\n").unwrap();
    writeln!(source, "/// Number of words in {const_name}").unwrap();
    writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len()).unwrap();
    source
}
