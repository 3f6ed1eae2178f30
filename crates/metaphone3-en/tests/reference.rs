//! Differential tests: compare encoder output against keys produced by the
//! reference Metaphone 3 encoder.
//!
//! `tests/golden/reference.json` maps each word to its keys under a fixed set
//! of option profiles. The word list covers every literal the letter rules
//! test for, plus inflected forms and common names.
//!
//! Run: cargo test -p metaphone3-en --test reference

use std::collections::BTreeMap;
use std::path::PathBuf;

use metaphone3_en::{EncoderOptions, Metaphone3, encode_with};

/// Per word: profile name -> `[primary, alternate]`.
type Golden = BTreeMap<String, BTreeMap<String, [String; 2]>>;

fn load_golden() -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/reference.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn profile(name: &str) -> EncoderOptions {
    let base = EncoderOptions::default();
    match name {
        "default" => base,
        "vowels" => base.with_encode_vowels(true),
        "exact" => base.with_encode_exact(true),
        "vowels_exact" => base.with_encode_vowels(true).with_encode_exact(true),
        "length_4" => base.with_max_key_length(4),
        "length_32" => base
            .with_encode_vowels(true)
            .with_encode_exact(true)
            .with_max_key_length(32),
        other => panic!("unknown option profile {other:?} in golden file"),
    }
}

// ---------------------------------------------------------------------------
// Differential: every profile
// ---------------------------------------------------------------------------

#[test]
fn differential_all_profiles() {
    let golden = load_golden();
    assert!(golden.len() > 1000, "golden corpus looks truncated");

    let mut mismatches = Vec::new();
    let mut total = 0;

    for (word, profiles) in &golden {
        for (name, [primary, alternate]) in profiles {
            total += 1;
            let keys = encode_with(word, profile(name));
            if &keys.primary != primary || &keys.alternate != alternate {
                mismatches.push(format!(
                    "  [{word}] {name}: expected ({primary}, {alternate}), got ({}, {})",
                    keys.primary, keys.alternate
                ));
            }
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\n=== MISMATCHES: {}/{} ===", mismatches.len(), total);
        for m in mismatches.iter().take(100) {
            eprintln!("{m}");
        }
    }
    assert!(
        mismatches.is_empty(),
        "{}/{} mismatches (see stderr for details)",
        mismatches.len(),
        total
    );
}

// ---------------------------------------------------------------------------
// Root-form words
// ---------------------------------------------------------------------------

/// Words whose rules consult the root-or-inflection test. Their keys must
/// match the reference exactly, inflections included.
#[test]
fn root_form_words_match_reference() {
    let golden = load_golden();
    let roots = [
        "ACHE", "ACHES", "ACHING", "ARCH", "ARCHES", "ARCHING", "STARCH", "ANGER", "LINGER",
        "MALINGER", "FINGER", "FINGERS", "ASSAULT", "ASSAULTED", "CHRISTEN", "CHRISTENS",
    ];
    for word in roots {
        let expected = golden
            .get(word)
            .unwrap_or_else(|| panic!("{word} missing from golden file"));
        let [primary, alternate] = &expected["default"];
        let keys = encode_with(word, EncoderOptions::default());
        assert_eq!((&keys.primary, &keys.alternate), (primary, alternate), "{word}");
    }
}

// ---------------------------------------------------------------------------
// Reused encoder
// ---------------------------------------------------------------------------

/// One encoder switching words and options must agree with the golden keys.
#[test]
fn reused_encoder_matches_reference() {
    let golden = load_golden();
    let mut encoder = Metaphone3::new();
    for (word, profiles) in golden.iter().step_by(7) {
        let [primary, alternate] = &profiles["vowels_exact"];
        encoder.set_encode_vowels(true);
        encoder.set_encode_exact(true);
        encoder.set_word(word);
        encoder.encode();
        assert_eq!(encoder.primary_key(), primary, "{word}");
        assert_eq!(encoder.alternate_key(), alternate, "{word}");

        let [primary, alternate] = &profiles["default"];
        encoder.set_encode_vowels(false);
        encoder.set_encode_exact(false);
        encoder.encode();
        assert_eq!(encoder.primary_key(), primary, "{word}");
        assert_eq!(encoder.alternate_key(), alternate, "{word}");
    }
}
