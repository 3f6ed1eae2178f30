// Criterion benchmarks for metaphone3-en.
//
// Run:
//   cargo bench -p metaphone3-en

use criterion::{Criterion, criterion_group, criterion_main};
use metaphone3_en::{EncoderOptions, Metaphone3, encode_with};

const WORDS: &[&str] = &[
    "Metaphone", "Thompson", "Knight", "Smith", "Schmidt", "Gallagher", "Zimbabwe", "Filipowicz",
    "Christensen", "bristle", "island", "Tchaikovsky", "Nietzsche", "Xavier", "Caesar",
    "Ghislaine", "McGaughey", "Josefina", "Baghdad", "phthalein", "accountancy", "Yastrzemski",
    "Broughton", "Gonsalves", "Beauchesne", "Deschamps", "hollowhearted", "Jaramillo",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Encode the word list with one reused encoder.
fn bench_reused_encoder(c: &mut Criterion) {
    let mut encoder = Metaphone3::new();
    c.bench_function("encode_words_reused", |b| {
        b.iter(|| {
            for word in WORDS {
                encoder.set_word(std::hint::black_box(word));
                encoder.encode();
                std::hint::black_box(encoder.primary_key());
            }
        })
    });
}

/// Encode the word list with every option turned on.
fn bench_all_options(c: &mut Criterion) {
    let options = EncoderOptions::default()
        .with_encode_vowels(true)
        .with_encode_exact(true)
        .with_max_key_length(32);
    c.bench_function("encode_words_all_options", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(encode_with(std::hint::black_box(word), options));
            }
        })
    });
}

criterion_group!(benches, bench_reused_encoder, bench_all_options);
criterion_main!(benches);
