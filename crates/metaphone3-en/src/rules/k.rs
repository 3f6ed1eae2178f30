// 'K'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_silent_k(ctx) {
        return;
    }

    ctx.add("K");
    if ctx.peek(1) == 'K' || ctx.peek(1) == 'Q' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
}

/// Initial "KN-" except 'knesset' and 'knievel'; "know", "knit", "knight"
/// anywhere in the word.
fn encode_silent_k(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if cur == 0
        && ctx.string_at(cur, 2, &["KN"])
        && !(ctx.string_at(cur + 2, 5, &["ESSET", "IEVEL"]) || ctx.string_at(cur + 2, 3, &["ISH"]))
    {
        ctx.current += 1;
        return true;
    }

    // "slipknot" => SLPNT but "banknote" => PNKNT
    if (ctx.string_at(cur + 1, 3, &["NOW", "NIT", "NOT", "NOB"])
        && !ctx.string_at(0, 8, &["BANKNOTE"]))
        || ctx.string_at(cur + 1, 4, &["NOCK", "NUCK", "NIFE", "NACK"])
        || ctx.string_at(cur + 1, 5, &["NIGHT"])
    {
        // 'N' already encoded, e.g. "penknife"
        if cur > 0 && ctx.char_at(cur - 1) == 'N' {
            ctx.current += 2;
        } else {
            ctx.current += 1;
        }
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair, vowel_keys};

    #[test]
    fn initial_kn() {
        assert_eq!(keys("knight"), pair("NT", ""));
        assert_eq!(vowel_keys("knight"), pair("NAT", ""));
    }
}
