// metaphone3-core: shared building blocks for Metaphone 3 encoders.
//
// - `character`: uppercase folding and vowel classification
// - `word`: the normalized word and its substring matcher
// - `key`: primary/alternate key buffers
// - `config`: encoder options and key length limits

pub mod character;
pub mod config;
pub mod key;
pub mod word;

pub use config::{EncoderOptions, KeyLengthError};
pub use key::{KeyPair, MetaphKeys};
pub use word::Word;
