// Primary/alternate key buffers filled during one encoding pass.

/// Symbol standing for any vowel sound.
pub const VOWEL_PLACEHOLDER: char = 'A';

/// The two keys produced for a word.
///
/// `alternate` is empty when no rule gave the word a competing
/// pronunciation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MetaphKeys {
    pub primary: String,
    pub alternate: String,
}

impl MetaphKeys {
    /// Whether an alternate key is present.
    pub fn has_alternate(&self) -> bool {
        !self.alternate.is_empty()
    }
}

/// Growable primary and secondary key buffers.
///
/// Appending never places a vowel placeholder directly after another one in
/// the same buffer: a symbol string starting with `'A'` is dropped for a
/// buffer that already ends in `'A'`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPair {
    primary: String,
    secondary: String,
}

impl KeyPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the same symbols to both buffers.
    pub fn push(&mut self, symbols: &str) {
        push_collapsed(&mut self.primary, symbols);
        push_collapsed(&mut self.secondary, symbols);
    }

    /// Append `main` to the primary buffer and `alt` to the secondary one.
    /// An empty `alt` leaves the secondary buffer untouched.
    pub fn push_pair(&mut self, main: &str, alt: &str) {
        push_collapsed(&mut self.primary, main);
        push_collapsed(&mut self.secondary, alt);
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Whether either buffer has grown past `max_len` characters.
    pub fn exceeds(&self, max_len: usize) -> bool {
        self.primary.chars().count() > max_len || self.secondary.chars().count() > max_len
    }

    /// Clear both buffers.
    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary.clear();
    }

    /// Truncate both buffers to `max_len` characters and produce the final
    /// keys. When the truncated buffers are identical the alternate key is
    /// left empty.
    pub fn finish(self, max_len: usize) -> MetaphKeys {
        let primary = truncated(self.primary, max_len);
        let mut alternate = truncated(self.secondary, max_len);
        if primary == alternate {
            alternate.clear();
        }
        MetaphKeys { primary, alternate }
    }
}

fn push_collapsed(buffer: &mut String, symbols: &str) {
    if symbols.is_empty() {
        return;
    }
    if symbols.starts_with(VOWEL_PLACEHOLDER) && buffer.ends_with(VOWEL_PLACEHOLDER) {
        return;
    }
    buffer.push_str(symbols);
}

fn truncated(mut key: String, max_len: usize) -> String {
    if let Some((idx, _)) = key.char_indices().nth(max_len) {
        key.truncate(idx);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_to_both() {
        let mut keys = KeyPair::new();
        keys.push("K");
        keys.push("ST");
        assert_eq!(keys.primary(), "KST");
        assert_eq!(keys.secondary(), "KST");
    }

    #[test]
    fn vowel_placeholder_never_doubles() {
        let mut keys = KeyPair::new();
        keys.push("A");
        keys.push("A");
        keys.push("AT");
        assert_eq!(keys.primary(), "A");
        keys.push("T");
        keys.push("A");
        assert_eq!(keys.primary(), "ATA");
    }

    #[test]
    fn pair_diverges() {
        let mut keys = KeyPair::new();
        keys.push_pair("X", "K");
        keys.push_pair("A", "");
        keys.push_pair("", "A");
        assert_eq!(keys.primary(), "XA");
        assert_eq!(keys.secondary(), "KA");
    }

    #[test]
    fn collapse_is_per_buffer() {
        let mut keys = KeyPair::new();
        keys.push_pair("A", "T");
        keys.push("A");
        assert_eq!(keys.primary(), "A");
        assert_eq!(keys.secondary(), "TA");
    }

    #[test]
    fn exceeds_checks_either_buffer() {
        let mut keys = KeyPair::new();
        keys.push_pair("KST", "K");
        assert!(!keys.exceeds(3));
        assert!(keys.exceeds(2));
    }

    #[test]
    fn finish_truncates_and_collapses_alternate() {
        let mut keys = KeyPair::new();
        keys.push_pair("PRTSK", "PRTSX");
        let finished = keys.clone().finish(4);
        assert_eq!(finished.primary, "PRTS");
        assert_eq!(finished.alternate, "");
        assert!(!finished.has_alternate());

        let finished = keys.finish(5);
        assert_eq!(finished.primary, "PRTSK");
        assert_eq!(finished.alternate, "PRTSX");
    }
}
