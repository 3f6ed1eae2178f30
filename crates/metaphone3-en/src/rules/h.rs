// 'H'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_initial_silent_h(ctx)
        || encode_initial_hs(ctx)
        || encode_initial_hu_hw(ctx)
        || encode_non_initial_silent_h(ctx)
    {
        return;
    }

    // kept only when initial before a vowel or between two vowels; this
    // also skips the first of "HH"
    if !encode_h_pronounced(ctx) {
        ctx.current += 1;
    }
}

/// 'hour', 'herb', 'heir', 'honor'
fn encode_initial_silent_h(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(ctx.string_at(cur + 1, 3, &["OUR", "ERB", "EIR"])
        || ctx.string_at(cur + 1, 4, &["ONOR"])
        || ctx.string_at(cur + 1, 5, &["ONOUR", "ONEST"]))
    {
        return false;
    }

    if ctx.string_at(cur, 4, &["HERB"]) {
        // 'H' for the name, none for the plant
        if ctx.encode_vowels() {
            ctx.add_alt("HA", "A");
        } else {
            ctx.add_alt("H", "A");
        }
    } else if cur == 0 || ctx.encode_vowels() {
        ctx.add("A");
    }
    ctx.current = ctx.skip_vowels(cur + 1);
    true
}

/// Old pinyin transliteration, e.g. 'hsiao'.
fn encode_initial_hs(ctx: &mut ScanContext) -> bool {
    if ctx.current == 0 && ctx.string_at(0, 2, &["HS"]) {
        ctx.add("X");
        ctx.current += 2;
        return true;
    }
    false
}

/// Spanish spellings and pinyin: 'huerta', 'huang'.
fn encode_initial_hu_hw(ctx: &mut ScanContext) -> bool {
    if !ctx.string_at(0, 3, &["HUA", "HUE", "HWA"]) || ctx.string_at(ctx.current, 4, &["HUEY"]) {
        return false;
    }

    ctx.add("A");
    if ctx.encode_vowels() {
        ctx.current += 1;
        while ctx.is_vowel_at(ctx.current) || ctx.current_char() == 'W' {
            ctx.current += 1;
        }
    } else {
        ctx.current += 3;
    }
    true
}

/// 'nihilism', 'graham', 'cohen', 'prohibition'
fn encode_non_initial_silent_h(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(
        cur - 2,
        5,
        &["NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN"],
    ) || ctx.string_at(
        cur - 3,
        6,
        &["GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"],
    ) || ctx.string_at(cur - 3, 5, &["TOUHY"])
        || ctx.string_at(0, 9, &["CHIHUAHUA"])
    {
        if ctx.encode_vowels() {
            ctx.current = ctx.skip_vowels(cur + 1);
        } else {
            ctx.current += 2;
        }
        return true;
    }
    false
}

fn encode_h_pronounced(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ((cur == 0 || ctx.is_vowel_at(cur - 1) || (cur > 0 && ctx.char_at(cur - 1) == 'W'))
        && ctx.is_vowel_at(cur + 1))
        // 'alwahhab'
        || (ctx.peek(1) == 'H' && ctx.is_vowel_at(cur + 2))
    {
        ctx.add("H");
        ctx.advance(2, 1);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair};

    #[test]
    fn h_between_vowels_and_after_consonants() {
        assert_eq!(keys("Maher"), pair("MHR", ""));
        assert_eq!(keys("Ohio"), pair("AH", ""));
        assert_eq!(keys("Cohen"), pair("KN", ""));
    }
}
