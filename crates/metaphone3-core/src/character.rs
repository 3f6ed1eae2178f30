// Character normalization and classification for the working alphabet.
//
// Words are encoded over an uppercased alphabet made of basic Latin plus the
// Latin-1 supplement letters (and the few Windows-1252 letters that sit next
// to them: Š, Œ, Ž, Ÿ). Lowercase accented letters are folded onto their
// uppercase counterparts through an explicit lookup table rather than by
// code point arithmetic.

/// Character appended after the last letter of every normalized word so that
/// a one-character lookahead past the end always reads a non-letter.
pub const SENTINEL: char = ' ';

// ---------------------------------------------------------------------------
// Uppercase folding
// ---------------------------------------------------------------------------

/// Lowercase accented letters and their uppercase forms.
///
/// Covers the three folding ranges of the working alphabet: the Latin-1
/// grave-through-thorn block, the caron letters (plus the OE ligature that
/// sits between them), and y with diaeresis.
const UPPERCASE_FOLDS: &[(char, char)] = &[
    // à..þ -> À..Þ
    ('\u{00E0}', '\u{00C0}'), // à
    ('\u{00E1}', '\u{00C1}'), // á
    ('\u{00E2}', '\u{00C2}'), // â
    ('\u{00E3}', '\u{00C3}'), // ã
    ('\u{00E4}', '\u{00C4}'), // ä
    ('\u{00E5}', '\u{00C5}'), // å
    ('\u{00E6}', '\u{00C6}'), // æ
    ('\u{00E7}', '\u{00C7}'), // ç
    ('\u{00E8}', '\u{00C8}'), // è
    ('\u{00E9}', '\u{00C9}'), // é
    ('\u{00EA}', '\u{00CA}'), // ê
    ('\u{00EB}', '\u{00CB}'), // ë
    ('\u{00EC}', '\u{00CC}'), // ì
    ('\u{00ED}', '\u{00CD}'), // í
    ('\u{00EE}', '\u{00CE}'), // î
    ('\u{00EF}', '\u{00CF}'), // ï
    ('\u{00F0}', '\u{00D0}'), // ð
    ('\u{00F1}', '\u{00D1}'), // ñ
    ('\u{00F2}', '\u{00D2}'), // ò
    ('\u{00F3}', '\u{00D3}'), // ó
    ('\u{00F4}', '\u{00D4}'), // ô
    ('\u{00F5}', '\u{00D5}'), // õ
    ('\u{00F6}', '\u{00D6}'), // ö
    ('\u{00F8}', '\u{00D8}'), // ø
    ('\u{00F9}', '\u{00D9}'), // ù
    ('\u{00FA}', '\u{00DA}'), // ú
    ('\u{00FB}', '\u{00DB}'), // û
    ('\u{00FC}', '\u{00DC}'), // ü
    ('\u{00FD}', '\u{00DD}'), // ý
    ('\u{00FE}', '\u{00DE}'), // þ
    // caron letters and the OE ligature
    ('\u{0161}', '\u{0160}'), // š
    ('\u{0153}', '\u{0152}'), // œ
    ('\u{017E}', '\u{017D}'), // ž
    // y with diaeresis
    ('\u{00FF}', '\u{0178}'), // ÿ
];

/// Fold a single input character onto the uppercase working alphabet.
///
/// ASCII letters are uppercased directly; lowercase accented letters are
/// mapped through [`UPPERCASE_FOLDS`]. Every other character is returned
/// unchanged (including `ß`, which has no single-character uppercase form).
pub fn fold_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    UPPERCASE_FOLDS
        .iter()
        .find(|&&(lower, _)| lower == c)
        .map_or(c, |&(_, upper)| upper)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Accented uppercase letters treated as vowels, in addition to A E I O U Y.
const ACCENTED_VOWELS: &[char] = &[
    '\u{00C0}', // À
    '\u{00C1}', // Á
    '\u{00C2}', // Â
    '\u{00C3}', // Ã
    '\u{00C4}', // Ä
    '\u{00C5}', // Å
    '\u{00C6}', // Æ
    '\u{00C8}', // È
    '\u{00C9}', // É
    '\u{00CA}', // Ê
    '\u{00CB}', // Ë
    '\u{00CC}', // Ì
    '\u{00CD}', // Í
    '\u{00CE}', // Î
    '\u{00CF}', // Ï
    '\u{00D2}', // Ò
    '\u{00D3}', // Ó
    '\u{00D4}', // Ô
    '\u{00D5}', // Õ
    '\u{00D6}', // Ö
    '\u{0152}', // Œ
    '\u{00D8}', // Ø
    '\u{00D9}', // Ù
    '\u{00DA}', // Ú
    '\u{00DB}', // Û
    '\u{00DC}', // Ü
    '\u{00DD}', // Ý
    '\u{0178}', // Ÿ
];

/// Check whether a normalized (uppercase) character is a vowel.
///
/// 'Y' counts as a vowel. 'W' does not, although the vowel skipper treats it
/// like one in most positions.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y') || ACCENTED_VOWELS.contains(&c)
}

/// Check whether a normalized character is one of the close front vowels
/// E, I or Y (the vowels that soften a preceding C or G).
pub fn is_front_vowel(c: char) -> bool {
    matches!(c, 'E' | 'I' | 'Y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_ascii() {
        assert_eq!(fold_upper('a'), 'A');
        assert_eq!(fold_upper('z'), 'Z');
        assert_eq!(fold_upper('Q'), 'Q');
        assert_eq!(fold_upper('-'), '-');
        assert_eq!(fold_upper('7'), '7');
    }

    #[test]
    fn fold_latin1_block() {
        assert_eq!(fold_upper('\u{00E9}'), '\u{00C9}'); // é -> É
        assert_eq!(fold_upper('\u{00F1}'), '\u{00D1}'); // ñ -> Ñ
        assert_eq!(fold_upper('\u{00E7}'), '\u{00C7}'); // ç -> Ç
        assert_eq!(fold_upper('\u{00FE}'), '\u{00DE}'); // þ -> Þ
        assert_eq!(fold_upper('\u{00F0}'), '\u{00D0}'); // ð -> Ð
    }

    #[test]
    fn fold_caron_and_diaeresis() {
        assert_eq!(fold_upper('\u{0161}'), '\u{0160}'); // š -> Š
        assert_eq!(fold_upper('\u{017E}'), '\u{017D}'); // ž -> Ž
        assert_eq!(fold_upper('\u{0153}'), '\u{0152}'); // œ -> Œ
        assert_eq!(fold_upper('\u{00FF}'), '\u{0178}'); // ÿ -> Ÿ
    }

    #[test]
    fn fold_leaves_unmapped_characters() {
        assert_eq!(fold_upper('\u{00DF}'), '\u{00DF}'); // ß
        assert_eq!(fold_upper('\u{00F7}'), '\u{00F7}'); // ÷
        assert_eq!(fold_upper('\u{00C9}'), '\u{00C9}'); // already uppercase
        assert_eq!(fold_upper('\u{3042}'), '\u{3042}');
    }

    #[test]
    fn vowels() {
        for c in ['A', 'E', 'I', 'O', 'U', 'Y'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(is_vowel('\u{00C9}')); // É
        assert!(is_vowel('\u{0152}')); // Œ
        assert!(is_vowel('\u{0178}')); // Ÿ
        assert!(!is_vowel('W'));
        assert!(!is_vowel('B'));
        assert!(!is_vowel('\u{00C7}')); // Ç
        assert!(!is_vowel('\u{00D1}')); // Ñ
        assert!(!is_vowel(SENTINEL));
        assert!(!is_vowel('a'));
    }

    #[test]
    fn front_vowels() {
        assert!(is_front_vowel('E'));
        assert!(is_front_vowel('I'));
        assert!(is_front_vowel('Y'));
        assert!(!is_front_vowel('A'));
        assert!(!is_front_vowel('O'));
    }
}
