// 'W'
//
// Mostly a vowel or silent. Consonantal readings: "WR-" as 'R', "WH-" as
// 'H', and 'V'/'F' for Germanic and Slavic names.

use super::names;
use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_silent_w_at_beginning(ctx)
        || encode_witz_wicz(ctx)
        || encode_wr(ctx)
        || encode_initial_w_vowel(ctx)
        || encode_wh(ctx)
        || encode_eastern_european_w(ctx)
    {
        return;
    }

    // 'zimbabwe'
    if ctx.encode_vowels() && ctx.string_at(ctx.current, 2, &["WE"]) && ctx.current + 1 == ctx.last() {
        ctx.add("A");
    }
    ctx.current += 1;
}

fn encode_silent_w_at_beginning(ctx: &mut ScanContext) -> bool {
    if ctx.current == 0 && ctx.string_at(0, 2, &["WR"]) {
        ctx.current += 1;
        return true;
    }
    false
}

/// Polish endings, e.g. 'filipowicz'.
fn encode_witz_wicz(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(cur + 3 == ctx.last() && ctx.string_at(cur, 4, &["WICZ", "WITZ"])) {
        return false;
    }

    if ctx.encode_vowels() {
        if ctx.primary_ends_in_vowel() {
            ctx.add_alt("TS", "FAX");
        } else {
            ctx.add_alt("ATS", "FAX");
        }
    } else {
        ctx.add_alt("TS", "FX");
    }
    ctx.current += 4;
    true
}

fn encode_wr(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current, 2, &["WR"]) {
        ctx.add("R");
        ctx.current += 2;
        return true;
    }
    false
}

fn encode_initial_w_vowel(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(cur == 0 && ctx.is_vowel_at(cur + 1)) {
        return false;
    }

    // "witter" should match "vitter"
    if names::germanic_or_slavic_w(ctx) {
        if ctx.encode_vowels() {
            ctx.add_exact_approx_alt("A", "VA", "A", "FA");
        } else {
            ctx.add_exact_approx_alt("A", "V", "A", "F");
        }
    } else {
        ctx.add("A");
    }
    ctx.current = ctx.skip_vowels(cur + 1);
    true
}

fn encode_wh(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !ctx.string_at(cur, 2, &["WH"]) {
        return false;
    }

    // 'who', 'whole', but not the vowel-like 'whoosh', 'whorl', 'whoa'
    if ctx.peek(2) == 'O'
        && !(ctx.string_at(cur + 2, 4, &["OOSH"])
            || ctx.string_at(cur + 2, 3, &["OOP", "OMP", "ORL", "ORT"])
            || ctx.string_at(cur + 2, 2, &["OA", "OP"]))
    {
        ctx.add("H");
        ctx.advance(3, 2);
        return true;
    }

    // combining forms: 'hollowhearted', 'rawhide'
    if ctx.string_at(
        cur + 2,
        3,
        &["IDE", "ARD", "EAD", "AWK", "ERD", "OOK", "AND", "OLE", "OOD"],
    ) || ctx.string_at(cur + 2, 4, &["EART", "OUSE", "OUND"])
        || ctx.string_at(cur + 2, 5, &["AMMER"])
    {
        ctx.add("H");
        ctx.current += 2;
        return true;
    }

    if cur == 0 {
        ctx.add("A");
        ctx.current = ctx.skip_vowels(cur + 2);
        return true;
    }
    ctx.current += 2;
    true
}

/// "arnow" should match "arnoff".
fn encode_eastern_european_w(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if (cur == ctx.last() && ctx.is_vowel_at(cur - 1))
        || ctx.string_at(cur - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
        || (ctx.string_at(cur, 5, &["WICKI", "WACKI"]) && cur + 4 == ctx.last())
        || (ctx.string_at(cur, 4, &["WIAK"]) && cur + 3 == ctx.last())
        || ctx.string_at(0, 3, &["SCH"])
    {
        ctx.add_exact_approx_alt("", "V", "", "F");
        ctx.current += 1;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{exact_keys, keys, pair};

    #[test]
    fn germanic_w_alternate() {
        assert_eq!(keys("witter"), pair("ATR", "FTR"));
        assert_eq!(exact_keys("witter"), pair("ATR", "VTR"));
        assert_eq!(keys("Wagner"), pair("AKNR", "FKNR"));
    }

    #[test]
    fn slavic_endings() {
        assert_eq!(keys("Wachowski"), pair("AKSK", "AXFSK"));
        assert_eq!(keys("Filipowicz"), pair("FLPTS", "FLPFX"));
    }

    #[test]
    fn wh_and_wr() {
        assert_eq!(keys("whoosh"), pair("AX", ""));
        assert_eq!(keys("wright"), pair("RT", ""));
    }
}
