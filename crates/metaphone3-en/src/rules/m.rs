// 'M'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_silent_m_at_beginning(ctx)
        || encode_mr_and_mrs(ctx)
        || encode_mac(ctx)
        || encode_mpt(ctx)
    {
        return;
    }

    // a silent 'B' after 'M' is consumed here
    encode_mb(ctx);
    ctx.add("M");
}

fn encode_silent_m_at_beginning(ctx: &mut ScanContext) -> bool {
    if ctx.current == 0 && ctx.string_at(ctx.current, 2, &["MN"]) {
        ctx.current += 1;
        return true;
    }
    false
}

/// "mr." and "mrs." with the period already stripped.
fn encode_mr_and_mrs(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(cur == 0 && ctx.string_at(cur, 2, &["MR"])) {
        return false;
    }

    if ctx.length() == 2 && ctx.string_at(cur, 2, &["MR"]) {
        if ctx.encode_vowels() {
            ctx.add("MASTAR");
        } else {
            ctx.add("MSTR");
        }
        ctx.current += 2;
        return true;
    }
    if ctx.length() == 3 && ctx.string_at(cur, 3, &["MRS"]) {
        if ctx.encode_vowels() {
            ctx.add("MASAS");
        } else {
            ctx.add("MSS");
        }
        ctx.current += 3;
        return true;
    }
    false
}

/// Scottish names, e.g. 'macintosh', 'mcgregor'.
fn encode_mac(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !(cur == 0
        && (ctx.string_at(0, 7, &["MACIVER", "MACEWEN"])
            || ctx.string_at(0, 8, &["MACELROY", "MACILROY"])
            || ctx.string_at(0, 9, &["MACINTOSH"])
            || ctx.string_at(0, 2, &["MC"])))
    {
        return false;
    }

    if ctx.encode_vowels() {
        ctx.add("MAK");
    } else {
        ctx.add("MK");
    }

    if ctx.string_at(0, 2, &["MC"]) {
        // but "McGeorge"
        if ctx.string_at(cur + 2, 1, &["K", "G", "Q"]) && !ctx.string_at(cur + 2, 4, &["GEOR"]) {
            ctx.current += 3;
        } else {
            ctx.current += 2;
        }
    } else {
        ctx.current += 3;
    }
    true
}

fn encode_mpt(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current - 2, 8, &["COMPTROL"])
        || ctx.string_at(ctx.current - 4, 7, &["ACCOMPT"])
    {
        ctx.add("N");
        ctx.current += 2;
        return true;
    }
    false
}

/// "lamb", "comb", "limb", "dumb", "bomb", with combining roots first.
fn test_silent_mb_1(ctx: &ScanContext) -> bool {
    let cur = ctx.current;
    (cur == 3 && ctx.string_at(cur - 3, 5, &["THUMB"]))
        || (cur == 2
            && ctx.string_at(
                cur - 2,
                4,
                &["DUMB", "BOMB", "DAMN", "LAMB", "NUMB", "TOMB"],
            ))
}

fn test_pronounced_mb(ctx: &ScanContext) -> bool {
    let cur = ctx.current;
    ctx.string_at(cur - 2, 6, &["NUMBER"])
        || (ctx.string_at(cur + 2, 1, &["A"]) && !ctx.string_at(cur - 2, 7, &["DUMBASS"]))
        || ctx.string_at(cur + 2, 1, &["O"])
        || ctx.string_at(
            cur - 2,
            6,
            &["LAMBEN", "LAMBER", "LAMBET", "TOMBIG", "LAMBRE"],
        )
}

/// "-MB" at the end of a root followed by a common suffix, e.g. "climbing"
/// => KLMNK, "bomber".
fn test_silent_mb_2(ctx: &ScanContext) -> bool {
    let cur = ctx.current;
    let last = ctx.last();
    ctx.peek(1) == 'B'
        && cur > 1
        && (cur + 1 == last
            || ctx.string_at(cur + 2, 3, &["ING", "ABL"])
            || ctx.string_at(cur + 2, 4, &["LIKE"])
            || (ctx.peek(2) == 'S' && cur + 2 == last)
            || ctx.string_at(cur - 5, 7, &["BUNCOMB"])
            || (ctx.string_at(cur + 2, 2, &["ED", "ER"])
                && cur + 3 == last
                // but "beachcomber"
                && (ctx.string_at(0, 5, &["CLIMB", "PLUMB"])
                    || !ctx.string_at(cur - 1, 5, &["IMBER", "AMBER", "EMBER", "UMBER"]))
                && !ctx.string_at(cur - 2, 6, &["CUMBER", "SOMBER"])))
}

/// "bombastic", "umbrage", "flamboyant"
fn test_pronounced_mb_2(ctx: &ScanContext) -> bool {
    let cur = ctx.current;
    ctx.string_at(cur - 1, 5, &["OMBAS", "OMBAD", "UMBRA"])
        || ctx.string_at(cur - 3, 4, &["FLAM"])
}

/// "-MN" at the end of a word or before an inflection: "damn", "damning".
fn test_mn(ctx: &ScanContext) -> bool {
    let cur = ctx.current;
    let last = ctx.last();
    ctx.peek(1) == 'N'
        && (cur + 1 == last
            || (ctx.string_at(cur + 2, 3, &["ING", "EST"]) && cur + 4 == last)
            || (ctx.peek(2) == 'S' && cur + 2 == last)
            || (ctx.string_at(cur + 2, 2, &["LY", "ER", "ED"]) && cur + 3 == last)
            || ctx.string_at(cur - 2, 9, &["DAMNEDEST"])
            || ctx.string_at(cur - 5, 9, &["GODDAMNIT"]))
}

fn encode_mb(ctx: &mut ScanContext) {
    if test_silent_mb_1(ctx) {
        if test_pronounced_mb(ctx) {
            ctx.current += 1;
        } else {
            ctx.current += 2;
        }
    } else if test_silent_mb_2(ctx) {
        if test_pronounced_mb_2(ctx) {
            ctx.current += 1;
        } else {
            ctx.current += 2;
        }
    } else if test_mn(ctx) || ctx.peek(1) == 'M' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{exact_keys, keys, pair};

    #[test]
    fn silent_b_after_m() {
        assert_eq!(keys("tomb"), pair("TM", ""));
        assert_eq!(exact_keys("dumb"), pair("DM", ""));
    }
}
