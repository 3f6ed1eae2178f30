//! Encoding tests against a golden word list plus the invariants every key
//! pair must satisfy.
//!
//! Run: cargo test -p metaphone3-en --test encode

use std::path::PathBuf;

use metaphone3_en::{EncoderOptions, Metaphone3, encode, encode_with};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Golden cases
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenCase {
    word: String,
    #[serde(default)]
    encode_vowels: bool,
    #[serde(default)]
    encode_exact: bool,
    #[serde(default)]
    max_key_length: Option<usize>,
    primary: String,
    alternate: String,
}

impl GoldenCase {
    fn options(&self) -> EncoderOptions {
        let mut options = EncoderOptions::default()
            .with_encode_vowels(self.encode_vowels)
            .with_encode_exact(self.encode_exact);
        if let Some(length) = self.max_key_length {
            options = options.with_max_key_length(length);
        }
        options
    }
}

fn load_golden() -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_words() {
    let cases = load_golden();
    assert!(!cases.is_empty());
    let mut failures = Vec::new();
    for case in &cases {
        let keys = encode_with(&case.word, case.options());
        if keys.primary != case.primary || keys.alternate != case.alternate {
            failures.push(format!(
                "{:?} ({:?}): expected ({}, {}), got ({}, {})",
                case.word,
                case.options(),
                case.primary,
                case.alternate,
                keys.primary,
                keys.alternate
            ));
        }
    }
    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

const SAMPLE: &[&str] = &[
    "Metaphone", "Thompson", "Knight", "Smith", "Schmidt", "Gallagher", "Zimbabwe", "Filipowicz",
    "Witter", "Christensen", "bristle", "island", "Tchaikovsky", "Nietzsche", "Xavier",
    "Caesar", "Ghislaine", "McGaughey", "Josefina", "Baghdad", "phthalein", "Aeiouy", "whoosh",
    "Jägermeister", "Façade", "Ñandú", "Þórr", "Łódź", "crème brûlée", "o'Brien", "",
];

fn all_options() -> Vec<EncoderOptions> {
    let mut out = Vec::new();
    for vowels in [false, true] {
        for exact in [false, true] {
            for length in [1, 4, 8, 32] {
                out.push(
                    EncoderOptions::default()
                        .with_encode_vowels(vowels)
                        .with_encode_exact(exact)
                        .with_max_key_length(length),
                );
            }
        }
    }
    out
}

#[test]
fn keys_respect_max_length() {
    for options in all_options() {
        for word in SAMPLE {
            let keys = encode_with(word, options);
            assert!(keys.primary.chars().count() <= options.max_key_length(), "{word}");
            assert!(keys.alternate.chars().count() <= options.max_key_length(), "{word}");
        }
    }
}

#[test]
fn no_doubled_vowel_placeholder() {
    for options in all_options() {
        for word in SAMPLE {
            let keys = encode_with(word, options);
            assert!(!keys.primary.contains("AA"), "{word}: {}", keys.primary);
            assert!(!keys.alternate.contains("AA"), "{word}: {}", keys.alternate);
        }
    }
}

#[test]
fn identical_alternate_is_dropped() {
    for options in all_options() {
        for word in SAMPLE {
            let keys = encode_with(word, options);
            if !keys.alternate.is_empty() {
                assert_ne!(keys.primary, keys.alternate, "{word}");
            }
        }
    }
}

#[test]
fn encoding_is_repeatable() {
    let mut encoder = Metaphone3::new();
    for word in SAMPLE {
        encoder.set_word(word);
        encoder.encode();
        let first = encoder.keys().clone();
        encoder.encode();
        assert_eq!(&first, encoder.keys(), "{word}");
    }
}

#[test]
fn reused_encoder_matches_fresh_one() {
    let mut encoder = Metaphone3::new();
    encoder.set_encode_vowels(true);
    let options = encoder.options();
    for word in SAMPLE {
        encoder.set_word(word);
        encoder.encode();
        assert_eq!(encoder.keys(), &encode_with(word, options), "{word}");
    }
}

#[test]
fn case_does_not_matter() {
    for word in ["Thompson", "Jägermeister", "Ñandú"] {
        assert_eq!(encode(word), encode(&word.to_lowercase()), "{word}");
        assert_eq!(encode(word), encode(&word.to_uppercase()), "{word}");
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn vowel_encoding_changes_keys() {
    let plain = encode_with("banana", EncoderOptions::default());
    let vowels = encode_with("banana", EncoderOptions::default().with_encode_vowels(true));
    assert_ne!(plain.primary, vowels.primary);
    assert_eq!(plain.primary.chars().filter(|&c| c == 'A').count(), 0);
}

#[test]
fn th_is_a_single_symbol() {
    let keys = encode("Smith");
    assert!(keys.primary.ends_with('0'));
    assert!(!keys.primary.contains('H'));
}

#[test]
fn max_key_length_setter_contract() {
    let mut encoder = Metaphone3::new();
    assert!(!encoder.set_max_key_length(0));
    assert_eq!(encoder.max_key_length(), 1);
    assert!(!encoder.set_max_key_length(100));
    assert_eq!(encoder.max_key_length(), 32);
    assert!(encoder.set_max_key_length(5));
    encoder.set_word("Christensen");
    encoder.encode();
    assert!(encoder.primary_key().chars().count() <= 5);
    assert!(encoder.alternate_key().chars().count() <= 5);
}
