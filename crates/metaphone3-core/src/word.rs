// Normalized input word and the substring matcher every encoding rule is
// built from.

use std::fmt;

use crate::character::{SENTINEL, fold_upper, is_front_vowel, is_vowel};

/// Character returned for positions outside the word and its sentinel.
const OUT_OF_RANGE: char = '\0';

/// A word normalized for encoding.
///
/// Holds the uppercased, folded letters followed by a single [`SENTINEL`].
/// All positional queries take signed offsets so that rules can look behind
/// the start of the word; any position outside the word is reported as a
/// non-match instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    /// Normalized letters plus the trailing sentinel.
    chars: Vec<char>,
    /// Number of real letters (sentinel excluded).
    len: usize,
}

impl Word {
    /// Normalize `text` into a word: uppercase, fold accented letters onto the
    /// working alphabet and append the sentinel.
    pub fn new(text: &str) -> Self {
        let mut chars: Vec<char> = text.chars().map(fold_upper).collect();
        let len = chars.len();
        chars.push(SENTINEL);
        Self { chars, len }
    }

    /// Number of letters in the word, sentinel excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the last real letter, or `None` for an empty word.
    pub fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// The normalized letters, without the sentinel.
    pub fn letters(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// Character at `at`.
    ///
    /// Returns the sentinel for the position just past the last letter and
    /// `'\0'` for anything further out or before the start.
    pub fn char_at(&self, at: isize) -> char {
        if at < 0 {
            return OUT_OF_RANGE;
        }
        self.chars.get(at as usize).copied().unwrap_or(OUT_OF_RANGE)
    }

    /// Test the window `[start, start + length)` against a list of literal
    /// alternatives.
    ///
    /// The window must lie entirely within the real letters. An alternative
    /// matches when its first `length` characters equal the window; an
    /// alternative shorter than the window never matches. Order of the
    /// alternatives does not matter.
    pub fn matches_at(&self, start: isize, length: usize, alternatives: &[&str]) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;
        let end = start + length;
        if start >= self.len || end > self.len {
            return false;
        }
        let window = &self.chars[start..end];
        alternatives.iter().any(|alt| {
            let mut alt_chars = alt.chars();
            window.iter().all(|&c| alt_chars.next() == Some(c))
        })
    }

    /// Whether `needle` occurs anywhere among the real letters.
    pub fn contains(&self, needle: &str) -> bool {
        let needle: Vec<char> = needle.chars().collect();
        !needle.is_empty() && self.letters().windows(needle.len()).any(|w| w == needle.as_slice())
    }

    /// Whether the letter at `at` is a vowel. Positions outside the word are
    /// never vowels.
    pub fn is_vowel_at(&self, at: isize) -> bool {
        if at < 0 || at as usize >= self.len {
            return false;
        }
        is_vowel(self.chars[at as usize])
    }

    /// Whether the character at `at` is E, I or Y.
    pub fn is_front_vowel_at(&self, at: isize) -> bool {
        is_front_vowel(self.char_at(at))
    }

    /// Compare the text from `from` onward against `root` and its regular
    /// English inflections ("ACHE": "ACHES", "ACHED", "ACHING", "ACHINGLY",
    /// "ACHY").
    ///
    /// The compared text keeps its trailing [`SENTINEL`], so no normalized
    /// word ever equals a root or inflection and the rules consulting this
    /// always take their fallback branch. Published keys depend on that
    /// result; see [`is_inflection_of`] for the form test itself.
    pub fn is_root_or_inflection(&self, from: isize, root: &str) -> bool {
        if from < 0 || from as usize > self.len || root.is_empty() {
            return false;
        }
        let tail: String = self.chars[from as usize..].iter().collect();
        is_inflection_of(&tail, root)
    }
}

/// Check `word` against `root` and its inflected forms.
pub fn is_inflection_of(word: &str, root: &str) -> bool {
    let ends_in_e = root.ends_with('E');
    if word == root || word == format!("{root}S") {
        return true;
    }
    if !ends_in_e && word == format!("{root}ES") {
        return true;
    }
    let past = if ends_in_e {
        format!("{root}D")
    } else {
        format!("{root}ED")
    };
    if word == past {
        return true;
    }
    let stem = if ends_in_e {
        &root[..root.len() - 1]
    } else {
        root
    };
    ["ING", "INGLY", "Y"]
        .iter()
        .any(|suffix| word == format!("{stem}{suffix}"))
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters().iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_appends_sentinel() {
        let word = Word::new("Crème");
        assert_eq!(word.len(), 5);
        assert_eq!(word.to_string(), "CR\u{00C8}ME");
        assert_eq!(word.char_at(5), SENTINEL);
        assert_eq!(word.char_at(6), '\0');
        assert_eq!(word.char_at(-1), '\0');
        assert_eq!(word.last(), Some(4));
    }

    #[test]
    fn empty_word() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.last(), None);
        assert_eq!(word.char_at(0), SENTINEL);
        assert!(!word.matches_at(0, 1, &[" "]));
    }

    #[test]
    fn matches_any_alternative() {
        let word = Word::new("knight");
        assert!(word.matches_at(0, 2, &["GN", "KN", "PN"]));
        assert!(word.matches_at(3, 2, &["GH"]));
        assert!(!word.matches_at(3, 2, &["CH", "SH"]));
    }

    #[test]
    fn contains_searches_letters_only() {
        let word = Word::new("deutsch");
        assert!(word.contains("SCH"));
        assert!(!word.contains("CH "));
        assert!(!word.contains(""));
    }

    #[test]
    fn out_of_range_windows_do_not_match() {
        let word = Word::new("ache");
        assert!(!word.matches_at(-1, 2, &["AC"]));
        assert!(!word.matches_at(3, 2, &["E "]));
        assert!(!word.matches_at(4, 1, &[" "]));
        assert!(word.matches_at(0, 4, &["ACHE"]));
    }

    #[test]
    fn alternative_compared_by_prefix() {
        let word = Word::new("ciao");
        // only the first three characters of each alternative are compared
        assert!(word.matches_at(0, 3, &["CIAS"]));
        // a short alternative can never fill the window
        assert!(!word.matches_at(0, 3, &["CI"]));
    }

    #[test]
    fn vowel_positions() {
        let word = Word::new("beau");
        assert!(!word.is_vowel_at(0));
        assert!(word.is_vowel_at(1));
        assert!(word.is_vowel_at(3));
        assert!(!word.is_vowel_at(4));
        assert!(!word.is_vowel_at(-2));
        assert!(word.is_front_vowel_at(1));
        assert!(!word.is_front_vowel_at(2));
    }

    #[test]
    fn inflected_forms() {
        for form in ["ACHE", "ACHES", "ACHED", "ACHING", "ACHINGLY", "ACHY"] {
            assert!(is_inflection_of(form, "ACHE"), "{form}");
        }
        assert!(!is_inflection_of("ACHEY", "ACHE"));
        for form in ["ARCH", "ARCHES", "ARCHED", "ARCHING", "ARCHY"] {
            assert!(is_inflection_of(form, "ARCH"), "{form}");
        }
        assert!(!is_inflection_of("ARCHER", "ARCH"));
    }

    #[test]
    fn root_comparison_includes_sentinel() {
        for form in ["ACHE", "ACHES", "ACHING", "ACHY"] {
            assert!(!Word::new(form).is_root_or_inflection(0, "ACHE"), "{form}");
        }
        assert!(!Word::new("christen").is_root_or_inflection(0, "CHRISTEN"));
        assert!(!Word::new("anger").is_root_or_inflection(0, "ANGER"));
        // trailing blanks in the input do not line up with the sentinel either
        assert!(!Word::new("ache ").is_root_or_inflection(0, "ACHE"));
    }

    #[test]
    fn root_comparison_from_offset() {
        let word = Word::new("headache");
        assert!(!word.is_root_or_inflection(4, "ACHE"));
        assert!(!word.is_root_or_inflection(-1, "ACHE"));
        assert!(!word.is_root_or_inflection(40, "ACHE"));
        // the sentinel position is still a valid start
        assert!(!word.is_root_or_inflection(8, "ACHE"));
    }
}
