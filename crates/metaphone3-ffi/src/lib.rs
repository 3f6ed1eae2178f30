// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per function.
#![allow(clippy::missing_safety_doc)]

// metaphone3-ffi: C ABI for the Metaphone3 encoder.
//
// Memory management rules:
// - Opaque `Metaphone3` pointer: created by `metaphone3_new`, freed by
//   `metaphone3_free`.
// - Returned key strings: caller must free with `metaphone3_free_str`.
// - Input words are null-terminated C strings, read as UTF-8 when valid and
//   as Latin-1 bytes otherwise.

use std::borrow::Cow;
use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use metaphone3_en::Metaphone3;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create an encoder with default options. Free with `metaphone3_free`.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone3_new() -> *mut Metaphone3 {
    Box::into_raw(Box::new(Metaphone3::new()))
}

/// Free an encoder created by `metaphone3_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_free(handle: *mut Metaphone3) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Word and encoding ───────────────────────────────────────────

/// Set the word to encode. Bytes that are not valid UTF-8 are read as
/// Latin-1. Returns 0 on success, -1 on a null handle or a null word; a null
/// word clears the current one so a following encode yields empty keys.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_set_word(handle: *mut Metaphone3, word: *const c_char) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    match cstr_to_word(word) {
        Some(word) => {
            handle.set_word(&word);
            0
        }
        None => {
            handle.set_word("");
            -1
        }
    }
}

/// Encode the current word.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_encode(handle: *mut Metaphone3) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.encode();
    }
}

/// Primary key of the last encode. Caller frees with `metaphone3_free_str`.
/// Returns NULL on a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_primary_key(handle: *const Metaphone3) -> *mut c_char {
    match unsafe { handle.as_ref() } {
        Some(handle) => str_to_c(handle.primary_key()),
        None => ptr::null_mut(),
    }
}

/// Alternate key of the last encode (possibly empty). Caller frees with
/// `metaphone3_free_str`. Returns NULL on a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_alternate_key(handle: *const Metaphone3) -> *mut c_char {
    match unsafe { handle.as_ref() } {
        Some(handle) => str_to_c(handle.alternate_key()),
        None => ptr::null_mut(),
    }
}

// ── Option setters ──────────────────────────────────────────────

/// Set the maximum key length. Returns 1 when honored as given, 0 when
/// clamped, -1 on a null handle. Negative lengths clamp to 1.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_set_key_length(handle: *mut Metaphone3, value: c_int) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return -1;
    };
    let requested = usize::try_from(value).unwrap_or(0);
    if handle.set_max_key_length(requested) { 1 } else { 0 }
}

/// Current maximum key length, or -1 on a null handle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_key_length(handle: *const Metaphone3) -> c_int {
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.max_key_length() as c_int,
        None => -1,
    }
}

/// Hard ceiling on the key length.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone3_maximum_key_length() -> c_int {
    Metaphone3::maximum_key_length() as c_int
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_set_encode_vowels(handle: *mut Metaphone3, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_encode_vowels(value != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_encode_vowels(handle: *const Metaphone3) -> c_int {
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.encode_vowels() as c_int,
        None => -1,
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_set_encode_exact(handle: *mut Metaphone3, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_encode_exact(value != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_encode_exact(handle: *const Metaphone3) -> c_int {
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.encode_exact() as c_int,
        None => -1,
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is static. Do NOT free it.
#[unsafe(no_mangle)]
pub extern "C" fn metaphone3_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> =
        std::sync::LazyLock::new(|| CString::new(env!("CARGO_PKG_VERSION")).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a string returned by this library.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn metaphone3_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_word<'a>(s: *const c_char) -> Option<Cow<'a, str>> {
    if s.is_null() {
        return None;
    }
    let bytes = unsafe { CStr::from_ptr(s) }.to_bytes();
    Some(match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    })
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(s: *mut c_char) -> String {
        assert!(!s.is_null());
        let out = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
        unsafe { metaphone3_free_str(s) };
        out
    }

    #[test]
    fn encode_round_trip() {
        let handle = metaphone3_new();
        let word = CString::new("Smith").unwrap();
        unsafe {
            assert_eq!(metaphone3_set_word(handle, word.as_ptr()), 0);
            metaphone3_encode(handle);
            assert_eq!(take(metaphone3_primary_key(handle)), "SM0");
            assert_eq!(take(metaphone3_alternate_key(handle)), "XMT");
            metaphone3_free(handle);
        }
    }

    #[test]
    fn options() {
        let handle = metaphone3_new();
        unsafe {
            assert_eq!(metaphone3_set_key_length(handle, 0), 0);
            assert_eq!(metaphone3_key_length(handle), 1);
            assert_eq!(metaphone3_set_key_length(handle, -5), 0);
            assert_eq!(metaphone3_set_key_length(handle, 40), 0);
            assert_eq!(metaphone3_key_length(handle), metaphone3_maximum_key_length());
            assert_eq!(metaphone3_set_key_length(handle, 5), 1);

            assert_eq!(metaphone3_encode_vowels(handle), 0);
            metaphone3_set_encode_vowels(handle, 1);
            assert_eq!(metaphone3_encode_vowels(handle), 1);
            metaphone3_set_encode_exact(handle, 1);
            assert_eq!(metaphone3_encode_exact(handle), 1);
            metaphone3_free(handle);
        }
    }

    #[test]
    fn null_handles_are_rejected() {
        let word = CString::new("x").unwrap();
        unsafe {
            assert_eq!(metaphone3_set_word(ptr::null_mut(), word.as_ptr()), -1);
            assert!(metaphone3_primary_key(ptr::null()).is_null());
            assert_eq!(metaphone3_key_length(ptr::null()), -1);
            metaphone3_encode(ptr::null_mut());
            metaphone3_free(ptr::null_mut());
        }
    }

    #[test]
    fn latin1_word_replaces_previous_one() {
        let handle = metaphone3_new();
        let smith = CString::new("Smith").unwrap();
        let utf8 = CString::new("M\u{00FC}ller").unwrap();
        let latin1 = CString::new(b"M\xFCller".to_vec()).unwrap();
        unsafe {
            metaphone3_set_word(handle, smith.as_ptr());
            metaphone3_encode(handle);
            assert_eq!(take(metaphone3_primary_key(handle)), "SM0");

            metaphone3_set_word(handle, utf8.as_ptr());
            metaphone3_encode(handle);
            let expected = take(metaphone3_primary_key(handle));

            metaphone3_set_word(handle, smith.as_ptr());
            metaphone3_encode(handle);
            assert_eq!(metaphone3_set_word(handle, latin1.as_ptr()), 0);
            metaphone3_encode(handle);
            assert_eq!(take(metaphone3_primary_key(handle)), expected);
            assert_ne!(expected, "SM0");
            metaphone3_free(handle);
        }
    }

    #[test]
    fn null_word_clears_previous_one() {
        let handle = metaphone3_new();
        let smith = CString::new("Smith").unwrap();
        unsafe {
            metaphone3_set_word(handle, smith.as_ptr());
            assert_eq!(metaphone3_set_word(handle, ptr::null()), -1);
            metaphone3_encode(handle);
            assert_eq!(take(metaphone3_primary_key(handle)), "");
            assert_eq!(take(metaphone3_alternate_key(handle)), "");
            metaphone3_free(handle);
        }
    }

    #[test]
    fn version_is_static() {
        let v = unsafe { CStr::from_ptr(metaphone3_version()) };
        assert_eq!(v.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
