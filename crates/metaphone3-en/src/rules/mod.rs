// Letter rule groups and the per-letter dispatcher.
//
// Each submodule exposes `encode(ctx)`, an ordered cascade of sub-rules for
// one letter. The first sub-rule whose guard holds emits its symbols,
// advances the cursor and ends the cascade; otherwise the letter's default
// applies. A handful of extended letters map straight to a fixed symbol.

mod b;
mod c;
mod d;
mod f;
mod g;
mod h;
mod j;
mod k;
mod l;
mod m;
mod n;
mod names;
mod p;
mod q;
mod r;
mod s;
mod t;
mod v;
mod vowels;
mod w;
mod x;
mod z;

use metaphone3_core::character::is_vowel;

use crate::context::ScanContext;

/// Encode the letter under the cursor, advancing past everything the
/// matched rule consumed.
pub(crate) fn dispatch(ctx: &mut ScanContext) {
    match ctx.current_char() {
        'B' => b::encode(ctx),
        'C' => c::encode(ctx),
        'D' => d::encode(ctx),
        'F' => f::encode(ctx),
        'G' => g::encode(ctx),
        'H' => h::encode(ctx),
        'J' => j::encode(ctx),
        'K' => k::encode(ctx),
        'L' => l::encode(ctx),
        'M' => m::encode(ctx),
        'N' => n::encode(ctx),
        'P' => p::encode(ctx),
        'Q' => q::encode(ctx),
        'R' => r::encode(ctx),
        'S' => s::encode(ctx),
        'T' => t::encode(ctx),
        'V' => v::encode(ctx),
        'W' => w::encode(ctx),
        'X' => x::encode(ctx),
        'Z' => z::encode(ctx),
        // ß, Ç
        '\u{00DF}' | '\u{00C7}' => emit_one(ctx, "S"),
        // Ñ
        '\u{00D1}' => emit_one(ctx, "N"),
        // eth, thorn
        '\u{00D0}' | '\u{00DE}' => emit_one(ctx, "0"),
        // Š
        '\u{0160}' => emit_one(ctx, "X"),
        // Ž
        '\u{017D}' => emit_one(ctx, "S"),
        c if is_vowel(c) => vowels::encode(ctx),
        // digits, punctuation, anything outside the working alphabet
        _ => ctx.current += 1,
    }
}

fn emit_one(ctx: &mut ScanContext, symbol: &str) {
    ctx.add(symbol);
    ctx.current += 1;
}

/// Key helpers shared by the rule modules' tests.
#[cfg(test)]
pub(crate) mod testing {
    use metaphone3_core::EncoderOptions;

    use crate::encoder::encode_with;

    fn keys_with(word: &str, options: EncoderOptions) -> (String, String) {
        let keys = encode_with(word, options);
        (keys.primary, keys.alternate)
    }

    /// Keys with default options.
    pub(crate) fn keys(word: &str) -> (String, String) {
        keys_with(word, EncoderOptions::default())
    }

    /// Keys with non-initial vowels encoded.
    pub(crate) fn vowel_keys(word: &str) -> (String, String) {
        keys_with(word, EncoderOptions::default().with_encode_vowels(true))
    }

    /// Keys with exact voicing.
    pub(crate) fn exact_keys(word: &str) -> (String, String) {
        keys_with(word, EncoderOptions::default().with_encode_exact(true))
    }

    pub(crate) fn pair(primary: &str, alternate: &str) -> (String, String) {
        (primary.to_string(), alternate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::testing::keys;

    #[test]
    fn double_t_before_h() {
        assert_eq!(keys("matthew"), ("M0".into(), "".into()));
    }

    #[test]
    fn tion_is_x() {
        assert_eq!(keys("nation"), ("NXN".into(), "".into()));
    }

    #[test]
    fn initial_wr_drops_w() {
        assert_eq!(keys("wright"), ("RT".into(), "".into()));
    }

    #[test]
    fn pinyin_zh() {
        assert_eq!(keys("zhao"), ("J".into(), "".into()));
    }

    #[test]
    fn italian_zz_has_alternate() {
        assert_eq!(keys("pizza"), ("PTS".into(), "PS".into()));
    }

    #[test]
    fn often_keeps_optional_t() {
        assert_eq!(keys("often"), ("AFN".into(), "AFTN".into()));
    }

    #[test]
    fn unknown_characters_advance() {
        assert_eq!(keys("--"), ("".into(), "".into()));
        assert_eq!(keys("\u{00C7}a"), ("S".into(), "".into()));
    }
}
