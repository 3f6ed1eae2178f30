// metaphone3-en: Metaphone 3 phonetic keys for English words and American
// names.
//
// - `encoder`: the reusable `Metaphone3` encoder and the driver loop
// - `context`: per-pass scan state handed to every rule
// - `rules`: the per-letter rule cascades and their dispatcher

mod context;
pub mod encoder;
mod rules;

pub use encoder::{Metaphone3, encode, encode_with, encode_word};
pub use metaphone3_core::{EncoderOptions, KeyLengthError, MetaphKeys};
