// Mutable scan state for one encoding pass.
//
// Every letter rule receives a `ScanContext` by mutable reference: the word
// and options are read-only, while the cursor, the key buffers and the
// AL-inversion flag are the only state a rule may change.

use metaphone3_core::character::is_vowel;
use metaphone3_core::key::VOWEL_PLACEHOLDER;
use metaphone3_core::{EncoderOptions, KeyPair, MetaphKeys, Word};

pub(crate) struct ScanContext<'a> {
    word: &'a Word,
    options: EncoderOptions,
    /// Index of the letter being encoded. Never moves backwards.
    pub(crate) current: isize,
    keys: KeyPair,
    /// Set once a vowel+L transposition has emitted the vowel for the
    /// current syllable, so the following 'E' is not encoded again.
    pub(crate) al_inversion: bool,
}

impl<'a> ScanContext<'a> {
    pub(crate) fn new(word: &'a Word, options: EncoderOptions) -> Self {
        Self {
            word,
            options,
            current: 0,
            keys: KeyPair::new(),
            al_inversion: false,
        }
    }

    // -----------------------------------------------------------------------
    // Word queries
    // -----------------------------------------------------------------------

    /// Number of letters in the word.
    pub(crate) fn length(&self) -> isize {
        self.word.len() as isize
    }

    /// Index of the last letter (`-1` for an empty word).
    pub(crate) fn last(&self) -> isize {
        self.length() - 1
    }

    pub(crate) fn char_at(&self, at: isize) -> char {
        self.word.char_at(at)
    }

    /// Letter under the cursor.
    pub(crate) fn current_char(&self) -> char {
        self.word.char_at(self.current)
    }

    /// Character `offset` positions away from the cursor.
    pub(crate) fn peek(&self, offset: isize) -> char {
        self.word.char_at(self.current + offset)
    }

    /// Substring test at an absolute position.
    pub(crate) fn string_at(&self, start: isize, length: usize, alternatives: &[&str]) -> bool {
        self.word.matches_at(start, length, alternatives)
    }

    pub(crate) fn contains(&self, needle: &str) -> bool {
        self.word.contains(needle)
    }

    pub(crate) fn is_vowel_at(&self, at: isize) -> bool {
        self.word.is_vowel_at(at)
    }

    pub(crate) fn front_vowel(&self, at: isize) -> bool {
        self.word.is_front_vowel_at(at)
    }

    /// Whole-word (`from == 0`) or tail inflection test.
    pub(crate) fn root_or_inflections(&self, from: isize, root: &str) -> bool {
        self.word.is_root_or_inflection(from, root)
    }

    /// Names or words beginning with spellings typical of German or Slavic
    /// words, used to pick between competing pronunciations.
    pub(crate) fn slavo_germanic(&self) -> bool {
        self.string_at(0, 3, &["SCH"])
            || self.string_at(0, 2, &["SW"])
            || self.char_at(0) == 'J'
            || self.char_at(0) == 'W'
    }

    /// Skip a run of vowels (and 'W', which is treated as one) starting at
    /// `at`, returning the index of the next letter to encode.
    ///
    /// Stops in front of Slavic "-WICZ"/"-SKI" style endings, and swallows the
    /// 'H' of a "WH" unless it starts a new word part as in "blowhard".
    pub(crate) fn skip_vowels(&self, mut at: isize) -> isize {
        if at < 0 {
            return 0;
        }
        if at >= self.length() {
            return self.length();
        }

        let mut it = self.char_at(at);
        while is_vowel(it) || it == 'W' {
            if self.string_at(at, 4, &["WICZ", "WITZ", "WIAK"])
                || self.string_at(at - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || (self.string_at(at, 5, &["WICKI", "WACKI"]) && (at + 4) == self.last())
            {
                break;
            }

            at += 1;
            if self.char_at(at - 1) == 'W'
                && self.char_at(at) == 'H'
                && !(self.string_at(at, 3, &["HOP"])
                    || self.string_at(
                        at,
                        4,
                        &[
                            "HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE",
                        ],
                    )
                    || self.string_at(at, 5, &["HEART", "HOUSE", "HOUND"])
                    || self.string_at(at, 6, &["HAMMER"]))
            {
                at += 1;
            }

            it = self.char_at(at);
        }
        at
    }

    // -----------------------------------------------------------------------
    // Options
    // -----------------------------------------------------------------------

    pub(crate) fn encode_vowels(&self) -> bool {
        self.options.encode_vowels
    }

    pub(crate) fn encode_exact(&self) -> bool {
        self.options.encode_exact
    }

    /// Move the cursor by one of two amounts depending on whether non-initial
    /// vowels are being encoded.
    pub(crate) fn advance(&mut self, if_not_encode_vowels: isize, if_encode_vowels: isize) {
        if self.options.encode_vowels {
            self.current += if_encode_vowels;
        } else {
            self.current += if_not_encode_vowels;
        }
    }

    // -----------------------------------------------------------------------
    // Emission
    // -----------------------------------------------------------------------

    /// Append the same symbols to both keys.
    pub(crate) fn add(&mut self, main: &str) {
        self.keys.push(main);
    }

    /// Append different symbols to the primary and alternate keys.
    pub(crate) fn add_alt(&mut self, main: &str, alt: &str) {
        self.keys.push_pair(main, alt);
    }

    /// Append `main_exact` when exact voicing is on, `main` otherwise.
    pub(crate) fn add_exact_approx(&mut self, main_exact: &str, main: &str) {
        if self.options.encode_exact {
            self.add(main_exact);
        } else {
            self.add(main);
        }
    }

    /// Two-key variant of [`add_exact_approx`](Self::add_exact_approx).
    pub(crate) fn add_exact_approx_alt(
        &mut self,
        main_exact: &str,
        alt_exact: &str,
        main: &str,
        alt: &str,
    ) {
        if self.options.encode_exact {
            self.add_alt(main_exact, alt_exact);
        } else {
            self.add_alt(main, alt);
        }
    }

    /// Whether the primary key so far ends in a vowel placeholder.
    pub(crate) fn primary_ends_in_vowel(&self) -> bool {
        self.keys.primary().ends_with(VOWEL_PLACEHOLDER)
    }

    /// Whether either key has grown past the configured maximum.
    pub(crate) fn keys_full(&self) -> bool {
        self.keys.exceeds(self.options.max_key_length())
    }

    pub(crate) fn finish(self) -> MetaphKeys {
        self.keys.finish(self.options.max_key_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_for(word: &Word) -> ScanContext<'_> {
        ScanContext::new(word, EncoderOptions::default())
    }

    #[test]
    fn skip_vowels_stops_at_consonant() {
        let word = Word::new("beautiful");
        let ctx = context_for(&word);
        assert_eq!(ctx.skip_vowels(1), 4);
        assert_eq!(ctx.skip_vowels(-3), 0);
        assert_eq!(ctx.skip_vowels(20), 9);
    }

    #[test]
    fn skip_vowels_swallows_wh() {
        let word = Word::new("awhile");
        let ctx = context_for(&word);
        assert_eq!(ctx.skip_vowels(0), 4);
    }

    #[test]
    fn skip_vowels_keeps_h_of_compound() {
        let word = Word::new("blowhard");
        let ctx = context_for(&word);
        assert_eq!(ctx.skip_vowels(3), 4);
    }

    #[test]
    fn skip_vowels_stops_before_slavic_ending() {
        let word = Word::new("nowicki");
        let ctx = context_for(&word);
        assert_eq!(ctx.skip_vowels(1), 2);
        let word = Word::new("nowski");
        let ctx = context_for(&word);
        assert_eq!(ctx.skip_vowels(1), 2);
    }

    #[test]
    fn slavo_germanic_prefixes() {
        for name in ["schmidt", "swanson", "jablonski", "wagner"] {
            let word = Word::new(name);
            assert!(context_for(&word).slavo_germanic(), "{name}");
        }
        let word = Word::new("smith");
        assert!(!context_for(&word).slavo_germanic());
    }

    #[test]
    fn advance_depends_on_vowel_encoding() {
        let word = Word::new("cello");
        let mut ctx = context_for(&word);
        ctx.advance(2, 1);
        assert_eq!(ctx.current, 2);

        let options = EncoderOptions::default().with_encode_vowels(true);
        let mut ctx = ScanContext::new(&word, options);
        ctx.advance(2, 1);
        assert_eq!(ctx.current, 1);
    }

    #[test]
    fn exact_approx_selects_symbols() {
        let word = Word::new("dog");
        let mut ctx = context_for(&word);
        ctx.add_exact_approx("D", "T");
        let options = EncoderOptions::default().with_encode_exact(true);
        let mut exact = ScanContext::new(&word, options);
        exact.add_exact_approx("D", "T");
        assert_eq!(ctx.finish().primary, "T");
        assert_eq!(exact.finish().primary, "D");
    }
}
