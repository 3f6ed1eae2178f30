// WASM bindings for the Metaphone 3 encoder.
//
// Exports a `WasmMetaphone3` class wrapping `Metaphone3`. Batch results are
// serialized to JavaScript objects with serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const mp = new WasmMetaphone3();
//   mp.setEncodeVowels(true);
//   mp.encode("Smith");            // => { primary: "SMA0", alternate: "XMAT" }
//   mp.encodeAll(["a", "b"]);      // => [{ word: "a", primary: "A", ... }, ...]
//   mp.setKeyLength(40);           // => false (clamped to 32)

use serde::Serialize;
use wasm_bindgen::prelude::*;

use metaphone3_en::{MetaphKeys, Metaphone3};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

#[derive(Serialize)]
struct JsKeys {
    primary: String,
    alternate: String,
}

#[derive(Serialize)]
struct JsWordKeys {
    word: String,
    primary: String,
    alternate: String,
}

impl From<&MetaphKeys> for JsKeys {
    fn from(keys: &MetaphKeys) -> Self {
        Self {
            primary: keys.primary.clone(),
            alternate: keys.alternate.clone(),
        }
    }
}

// ============================================================================
// WasmMetaphone3
// ============================================================================

/// Metaphone 3 phonetic encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmMetaphone3 {
    encoder: Metaphone3,
}

impl Default for WasmMetaphone3 {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmMetaphone3 {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMetaphone3 {
        WasmMetaphone3 {
            encoder: Metaphone3::new(),
        }
    }

    /// Encode one word, returning `{ primary, alternate }`.
    pub fn encode(&mut self, word: &str) -> Result<JsValue, JsError> {
        self.encoder.set_word(word);
        self.encoder.encode();
        serde_wasm_bindgen::to_value(&JsKeys::from(self.encoder.keys()))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Primary key only.
    #[wasm_bindgen(js_name = "primaryKey")]
    pub fn primary_key(&mut self, word: &str) -> String {
        self.encoder.set_word(word);
        self.encoder.encode();
        self.encoder.primary_key().to_string()
    }

    /// Encode a list of words with the current options.
    #[wasm_bindgen(js_name = "encodeAll")]
    pub fn encode_all(&mut self, words: Vec<String>) -> Result<JsValue, JsError> {
        let results: Vec<JsWordKeys> = words
            .into_iter()
            .map(|word| {
                self.encoder.set_word(&word);
                self.encoder.encode();
                JsWordKeys {
                    primary: self.encoder.primary_key().to_string(),
                    alternate: self.encoder.alternate_key().to_string(),
                    word,
                }
            })
            .collect();
        serde_wasm_bindgen::to_value(&results).map_err(|e| JsError::new(&e.to_string()))
    }

    // ========================================================================
    // Option setters
    // ========================================================================

    /// Set the maximum key length; returns false when the value was clamped.
    #[wasm_bindgen(js_name = "setKeyLength")]
    pub fn set_key_length(&mut self, value: usize) -> bool {
        self.encoder.set_max_key_length(value)
    }

    #[wasm_bindgen(js_name = "keyLength")]
    pub fn key_length(&self) -> usize {
        self.encoder.max_key_length()
    }

    #[wasm_bindgen(js_name = "setEncodeVowels")]
    pub fn set_encode_vowels(&mut self, value: bool) {
        self.encoder.set_encode_vowels(value);
    }

    #[wasm_bindgen(js_name = "setEncodeExact")]
    pub fn set_encode_exact(&mut self, value: bool) {
        self.encoder.set_encode_exact(value);
    }

    /// Return the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_uses_options() {
        let mut mp = WasmMetaphone3::new();
        assert_eq!(mp.primary_key("banana"), "PNN");
        mp.set_encode_vowels(true);
        assert_eq!(mp.primary_key("banana"), "PANANA");
    }

    #[test]
    fn key_length_clamps() {
        let mut mp = WasmMetaphone3::default();
        assert!(!mp.set_key_length(40));
        assert_eq!(mp.key_length(), 32);
        assert!(mp.set_key_length(4));
    }
}
