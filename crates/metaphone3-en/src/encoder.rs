// Metaphone3: reusable encoder holding the current word, the options and the
// keys of the last pass.
//
// One instance may encode any number of words in sequence. `set_word` only
// replaces the word; the options persist until changed. Every `encode` call
// starts from a fresh scan context, so nothing from a previous word leaks
// into the next one. Instances are not meant to be shared across threads;
// give each thread its own (the rule tables are immutable statics).

use metaphone3_core::config::MAX_KEY_ALLOCATION;
use metaphone3_core::{EncoderOptions, KeyLengthError, MetaphKeys, Word};

use crate::context::ScanContext;
use crate::rules;

/// Phonetic encoder for English words and American names.
///
/// ```
/// use metaphone3_en::Metaphone3;
///
/// let mut encoder = Metaphone3::new();
/// encoder.set_word("Knight");
/// encoder.encode();
/// assert_eq!(encoder.primary_key(), "NT");
/// assert_eq!(encoder.alternate_key(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Metaphone3 {
    word: Word,
    options: EncoderOptions,
    keys: MetaphKeys,
}

impl Metaphone3 {
    /// Create an encoder with default options: no vowel encoding, no exact
    /// voicing, keys of at most 8 symbols.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncoderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create an encoder already holding `text`.
    pub fn with_word(text: &str) -> Self {
        let mut encoder = Self::new();
        encoder.set_word(text);
        encoder
    }

    // -----------------------------------------------------------------------
    // Word
    // -----------------------------------------------------------------------

    /// Normalize and store the word for the next [`encode`](Self::encode).
    /// Options are left untouched.
    pub fn set_word(&mut self, text: &str) {
        self.word = Word::new(text);
    }

    /// The normalized word.
    pub fn word(&self) -> &Word {
        &self.word
    }

    // -----------------------------------------------------------------------
    // Options
    // -----------------------------------------------------------------------

    /// Set the maximum key length. Out-of-range values are clamped into
    /// `1..=32`; returns whether the request was honored as given.
    pub fn set_max_key_length(&mut self, requested: usize) -> bool {
        self.try_set_max_key_length(requested).is_ok()
    }

    /// Like [`set_max_key_length`](Self::set_max_key_length), reporting why a
    /// request was clamped.
    pub fn try_set_max_key_length(&mut self, requested: usize) -> Result<(), KeyLengthError> {
        let result = self.options.try_set_max_key_length(requested);
        if let Err(e) = &result {
            log::warn!("{e}; using {}", e.clamped());
        }
        result
    }

    pub fn max_key_length(&self) -> usize {
        self.options.max_key_length()
    }

    /// Hard ceiling accepted by [`set_max_key_length`](Self::set_max_key_length).
    pub fn maximum_key_length() -> usize {
        MAX_KEY_ALLOCATION
    }

    pub fn set_encode_vowels(&mut self, value: bool) {
        self.options.encode_vowels = value;
    }

    pub fn encode_vowels(&self) -> bool {
        self.options.encode_vowels
    }

    pub fn set_encode_exact(&mut self, value: bool) {
        self.options.encode_exact = value;
    }

    pub fn encode_exact(&self) -> bool {
        self.options.encode_exact
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Encode the current word, replacing the keys of any previous pass.
    pub fn encode(&mut self) {
        self.keys = encode_word(&self.word, self.options);
    }

    /// Primary key of the last pass.
    pub fn primary_key(&self) -> &str {
        &self.keys.primary
    }

    /// Alternate key of the last pass; empty when the word has no competing
    /// pronunciation.
    pub fn alternate_key(&self) -> &str {
        &self.keys.alternate
    }

    pub fn keys(&self) -> &MetaphKeys {
        &self.keys
    }
}

/// Encode `text` with default options.
pub fn encode(text: &str) -> MetaphKeys {
    encode_with(text, EncoderOptions::default())
}

/// Encode `text` with the given options.
pub fn encode_with(text: &str, options: EncoderOptions) -> MetaphKeys {
    encode_word(&Word::new(text), options)
}

/// Run one encoding pass over a normalized word.
///
/// Stops once the cursor passes the last letter or either key has grown
/// past the maximum length. A rule that leaves the cursor in place is
/// stepped over so the loop always terminates.
pub fn encode_word(word: &Word, options: EncoderOptions) -> MetaphKeys {
    let mut ctx = ScanContext::new(word, options);
    scan(&mut ctx);

    let keys = ctx.finish();
    log::debug!(
        "encoded {word}: primary={:?} alternate={:?}",
        keys.primary,
        keys.alternate
    );
    keys
}

/// Dispatch letter rules until the word or the keys run out, returning the
/// number of dispatches. Every dispatch moves the cursor forward, so a word
/// of `n` letters takes at most `n`.
fn scan(ctx: &mut ScanContext) -> usize {
    let length = ctx.length();
    let mut dispatches = 0;

    while !ctx.keys_full() && ctx.current < length {
        let before = ctx.current;
        rules::dispatch(ctx);
        dispatches += 1;
        if ctx.current <= before {
            log::trace!(
                "rule for {:?} at {before} did not advance; skipping",
                ctx.char_at(before)
            );
            ctx.current = before + 1;
        }
    }
    dispatches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_gives_empty_keys() {
        let keys = encode("");
        assert_eq!(keys, MetaphKeys::default());
    }

    #[test]
    fn non_letters_are_skipped() {
        assert_eq!(encode("1234-").primary, "");
        assert_eq!(encode("k-9").primary, "K");
    }

    #[test]
    fn extended_letters_map_directly() {
        assert_eq!(encode("\u{00DF}").primary, "S");
        assert_eq!(encode("\u{00D1}").primary, "N");
        assert_eq!(encode("\u{00FE}").primary, "0");
        assert_eq!(encode("\u{0161}").primary, "X");
        assert_eq!(encode("\u{017E}").primary, "S");
    }

    #[test]
    fn key_length_clamps() {
        let mut encoder = Metaphone3::new();
        assert!(!encoder.set_max_key_length(0));
        assert_eq!(encoder.max_key_length(), 1);
        assert!(!encoder.set_max_key_length(33));
        assert_eq!(encoder.max_key_length(), Metaphone3::maximum_key_length());
        assert!(encoder.set_max_key_length(5));
        assert_eq!(encoder.max_key_length(), 5);
    }

    #[test]
    fn try_set_reports_reason() {
        let mut encoder = Metaphone3::new();
        assert_eq!(
            encoder.try_set_max_key_length(40),
            Err(KeyLengthError::TooLong { requested: 40 })
        );
        assert_eq!(
            encoder.try_set_max_key_length(0),
            Err(KeyLengthError::TooShort { requested: 0 })
        );
    }

    #[test]
    fn options_persist_across_words() {
        let mut encoder = Metaphone3::new();
        encoder.set_encode_vowels(true);
        encoder.set_word("banana");
        encoder.encode();
        assert_eq!(encoder.primary_key(), "PANANA");

        encoder.set_word("bob");
        assert!(encoder.encode_vowels());
        encoder.encode();
        assert_eq!(encoder.primary_key(), "PAP");
    }

    #[test]
    fn set_word_keeps_previous_keys_until_encode() {
        let mut encoder = Metaphone3::with_word("knight");
        encoder.encode();
        encoder.set_word("smith");
        assert_eq!(encoder.primary_key(), "NT");
    }

    #[test]
    fn dispatches_bounded_by_word_length() {
        let words = [
            "Knight", "Schwarzenegger", "Tchaikovsky", "bristle", "McGaughey", "Nietzsche",
            "phthalein", "aeiou", "x", "crème brûlée", "1234-", "",
        ];
        for vowels in [false, true] {
            for exact in [false, true] {
                let options = EncoderOptions::default()
                    .with_encode_vowels(vowels)
                    .with_encode_exact(exact)
                    .with_max_key_length(Metaphone3::maximum_key_length());
                for text in words {
                    let word = Word::new(text);
                    let mut ctx = ScanContext::new(&word, options);
                    let dispatches = scan(&mut ctx);
                    assert!(dispatches <= word.len(), "{text}: {dispatches} dispatches");
                    if !word.is_empty() {
                        assert!(dispatches > 0, "{text}");
                    }
                }
            }
        }
    }

    #[test]
    fn truncates_to_max_length() {
        let options = EncoderOptions::default().with_max_key_length(2);
        let keys = encode_with("fitzgerald", options);
        assert_eq!(keys.primary.chars().count(), 2);
    }
}
