// Encoder configuration: vowel encoding, exact voicing, maximum key length.

/// Hard ceiling on the length of a key.
pub const MAX_KEY_ALLOCATION: usize = 32;

/// Maximum key length used when none is configured.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 8;

/// Smallest accepted maximum key length.
pub const MIN_KEY_LENGTH: usize = 1;

/// Error returned when a requested maximum key length cannot be honored.
///
/// The option is still updated to the clamped value carried by the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KeyLengthError {
    #[error("key length {requested} is below the minimum of {MIN_KEY_LENGTH}")]
    TooShort { requested: usize },

    #[error("key length {requested} exceeds the maximum of {MAX_KEY_ALLOCATION}")]
    TooLong { requested: usize },
}

impl KeyLengthError {
    /// The length actually applied after clamping.
    pub fn clamped(&self) -> usize {
        match self {
            KeyLengthError::TooShort { .. } => MIN_KEY_LENGTH,
            KeyLengthError::TooLong { .. } => MAX_KEY_ALLOCATION,
        }
    }
}

/// Options controlling how a word is encoded.
///
/// Read-only during an encoding pass; persists across words when an encoder
/// is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Encode vowels after the first letter as the vowel placeholder.
    pub encode_vowels: bool,
    /// Keep voiced and unvoiced consonant pairs (B/P, D/T, G/K, V/F) apart.
    pub encode_exact: bool,
    max_key_length: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            encode_vowels: false,
            encode_exact: false,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

impl EncoderOptions {
    /// Current maximum key length.
    pub fn max_key_length(&self) -> usize {
        self.max_key_length
    }

    /// Set the maximum key length, clamping it into
    /// `MIN_KEY_LENGTH..=MAX_KEY_ALLOCATION`. Returns an error describing the
    /// clamp when the requested value was out of range.
    pub fn try_set_max_key_length(&mut self, requested: usize) -> Result<(), KeyLengthError> {
        let result = if requested < MIN_KEY_LENGTH {
            Err(KeyLengthError::TooShort { requested })
        } else if requested > MAX_KEY_ALLOCATION {
            Err(KeyLengthError::TooLong { requested })
        } else {
            Ok(())
        };
        self.max_key_length = match result {
            Ok(()) => requested,
            Err(e) => e.clamped(),
        };
        result
    }

    /// Builder-style variant of [`try_set_max_key_length`](Self::try_set_max_key_length)
    /// that ignores out-of-range requests after clamping.
    pub fn with_max_key_length(mut self, requested: usize) -> Self {
        let _ = self.try_set_max_key_length(requested);
        self
    }

    pub fn with_encode_vowels(mut self, value: bool) -> Self {
        self.encode_vowels = value;
        self
    }

    pub fn with_encode_exact(mut self, value: bool) -> Self {
        self.encode_exact = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = EncoderOptions::default();
        assert!(!options.encode_vowels);
        assert!(!options.encode_exact);
        assert_eq!(options.max_key_length(), 8);
    }

    #[test]
    fn in_range_length_is_honored() {
        let mut options = EncoderOptions::default();
        assert_eq!(options.try_set_max_key_length(5), Ok(()));
        assert_eq!(options.max_key_length(), 5);
        assert_eq!(options.try_set_max_key_length(32), Ok(()));
        assert_eq!(options.max_key_length(), 32);
    }

    #[test]
    fn zero_clamps_to_one() {
        let mut options = EncoderOptions::default();
        let err = options.try_set_max_key_length(0).unwrap_err();
        assert_eq!(err, KeyLengthError::TooShort { requested: 0 });
        assert_eq!(options.max_key_length(), 1);
    }

    #[test]
    fn too_long_clamps_to_ceiling() {
        let mut options = EncoderOptions::default();
        let err = options.try_set_max_key_length(100).unwrap_err();
        assert_eq!(err.clamped(), MAX_KEY_ALLOCATION);
        assert_eq!(options.max_key_length(), 32);
        assert_eq!(
            err.to_string(),
            "key length 100 exceeds the maximum of 32"
        );
    }

    #[test]
    fn builder() {
        let options = EncoderOptions::default()
            .with_encode_vowels(true)
            .with_encode_exact(true)
            .with_max_key_length(40);
        assert!(options.encode_vowels);
        assert!(options.encode_exact);
        assert_eq!(options.max_key_length(), 32);
    }
}
