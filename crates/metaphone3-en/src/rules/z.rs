// 'Z'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_zz(ctx)
        || encode_zu_zier_zs(ctx)
        || encode_french_ez(ctx)
        || encode_german_z(ctx)
        || encode_zh(ctx)
    {
        return;
    }

    ctx.add("S");
    if ctx.peek(1) == 'Z' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
}

/// "abruzzi", 'pizza'
fn encode_zz(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.peek(1) == 'Z'
        && ((ctx.string_at(cur + 2, 1, &["I", "O", "A"]) && cur + 2 == ctx.last())
            || ctx.string_at(cur - 2, 9, &["MOZZARELL", "PIZZICATO", "PUZZONLAN"]))
    {
        ctx.add_alt("TS", "S");
        ctx.current += 2;
        return true;
    }
    false
}

/// 'azure', 'brazier', Hungarian "zsa"
fn encode_zu_zier_zs(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if !((cur == 1 && ctx.string_at(cur - 1, 4, &["AZUR"]))
        || (ctx.string_at(cur, 4, &["ZIER"]) && !ctx.string_at(cur - 2, 6, &["VIZIER", "ROZIER"]))
        || ctx.string_at(cur, 3, &["ZSA"]))
    {
        return false;
    }

    ctx.add_alt("J", "S");
    if ctx.string_at(cur, 3, &["ZSA"]) {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    true
}

/// Silent in 'chez' and 'rendezvous'.
fn encode_french_ez(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if (cur == 3 && ctx.string_at(cur - 3, 4, &["CHEZ"])) || ctx.string_at(cur - 5, 6, &["RENDEZ"]) {
        ctx.current += 1;
        return true;
    }
    false
}

fn encode_german_z(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if (cur == 2 && cur + 1 == ctx.last() && ctx.string_at(cur - 2, 4, &["NAZI"]))
        || ctx.string_at(cur - 2, 6, &["NAZIFY", "MOZART"])
        || ctx.string_at(cur - 3, 4, &["HOLZ", "HERZ", "MERZ", "FITZ"])
        || (ctx.string_at(cur - 3, 4, &["GANZ"]) && !ctx.is_vowel_at(cur + 1))
        || ctx.string_at(cur - 4, 5, &["STOLZ", "PRINZ"])
        || ctx.string_at(cur - 4, 7, &["VENEZIA"])
        || ctx.string_at(cur - 3, 6, &["HERZOG"])
        // German words with "SCH-", but not 'schlimazel' or 'schmooze'
        || (ctx.contains("SCH") && !ctx.string_at(ctx.last() - 2, 3, &["IZE", "OZE", "ZEL"]))
        || (cur > 0 && ctx.string_at(cur, 4, &["ZEIT"]))
        || ctx.string_at(cur - 3, 4, &["WEIZ"])
    {
        if cur > 0 && ctx.char_at(cur - 1) == 'T' {
            ctx.add("S");
        } else {
            ctx.add("TS");
        }
        ctx.current += 1;
        return true;
    }
    false
}

/// Pinyin 'zhao' and English phonetic spellings.
fn encode_zh(ctx: &mut ScanContext) -> bool {
    if ctx.peek(1) == 'H' {
        ctx.add("J");
        ctx.current += 2;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair};

    #[test]
    fn z_forms() {
        assert_eq!(keys("pizza"), pair("PTS", "PS"));
        assert_eq!(keys("zhao"), pair("J", ""));
        assert_eq!(keys("Zeitgeist"), pair("STKST", "STJST"));
        assert_eq!(keys("Ramirez"), pair("RMRS", ""));
    }
}
