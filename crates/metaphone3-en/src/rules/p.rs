// 'P'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_silent_p_at_beginning(ctx)
        || encode_pt(ctx)
        || encode_ph(ctx)
        || encode_pph(ctx)
        || encode_rps(ctx)
        || encode_coup(ctx)
        || encode_pneum(ctx)
        || encode_psych(ctx)
        || encode_psalm(ctx)
    {
        return;
    }

    // "campbell", "raspberry"
    if ctx.string_at(ctx.current + 1, 1, &["P", "B"]) {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    ctx.add("P");
}

fn encode_silent_p_at_beginning(ctx: &mut ScanContext) -> bool {
    if ctx.current == 0 && ctx.string_at(ctx.current, 2, &["PN", "PF", "PS", "PT"]) {
        ctx.current += 1;
        return true;
    }
    false
}

/// 'pterodactyl', 'receipt', 'asymptote'
fn encode_pt(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.peek(1) == 'T'
        && ((cur == 0 && ctx.string_at(cur, 5, &["PTERO"]))
            || ctx.string_at(cur - 5, 7, &["RECEIPT"])
            || ctx.string_at(cur - 4, 8, &["ASYMPTOT"]))
    {
        ctx.add("T");
        ctx.current += 2;
        return true;
    }
    false
}

fn encode_ph(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.peek(1) != 'H' {
        return false;
    }

    if ctx.string_at(cur, 9, &["PHTHALEIN"])
        || (cur == 0 && ctx.string_at(cur, 4, &["PHTH"]))
        || ctx.string_at(cur - 3, 10, &["APOPHTHEGM"])
    {
        // "PH" silent
        ctx.add("0");
        ctx.current += 4;
    } else if cur > 0
        // combining forms: 'shepherd', 'upheaval', 'cupholder'
        && (ctx.string_at(
            cur + 2,
            3,
            &[
                "EAD", "OLE", "ELD", "ILL", "OLD", "EAP", "ERD", "ARD", "ANG", "ORN", "EAV", "ART",
            ],
        ) || ctx.string_at(cur + 2, 4, &["OUSE"])
            || (ctx.string_at(cur + 2, 2, &["AM"]) && !ctx.string_at(cur - 1, 5, &["LPHAM"]))
            || ctx.string_at(cur + 2, 5, &["AMMER", "AZARD", "UGGER"])
            || ctx.string_at(cur + 2, 6, &["OLSTER"]))
        && !ctx.string_at(cur - 3, 5, &["LYMPH", "NYMPH"])
    {
        ctx.add("P");
        ctx.advance(3, 2);
    } else {
        ctx.add("F");
        ctx.current += 2;
    }
    true
}

/// 'sappho'
fn encode_pph(ctx: &mut ScanContext) -> bool {
    if ctx.peek(1) == 'P' && ctx.peek(2) == 'H' {
        ctx.add("F");
        ctx.current += 3;
        return true;
    }
    false
}

/// 'corps', 'corpsman', but not 'corpse'.
fn encode_rps(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur - 3, 5, &["CORPS"]) && !ctx.string_at(cur - 3, 6, &["CORPSE"]) {
        ctx.current += 2;
        return true;
    }
    false
}

/// 'coup' but not 'recoup'.
fn encode_coup(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if cur == ctx.last()
        && ctx.string_at(cur - 3, 4, &["COUP"])
        && !ctx.string_at(cur - 5, 6, &["RECOUP"])
    {
        ctx.current += 1;
        return true;
    }
    false
}

fn encode_pneum(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current + 1, 4, &["NEUM"]) {
        ctx.add("N");
        ctx.current += 2;
        return true;
    }
    false
}

fn encode_psych(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current + 1, 4, &["SYCH"]) {
        if ctx.encode_vowels() {
            ctx.add("SAK");
        } else {
            ctx.add("SK");
        }
        ctx.current += 5;
        return true;
    }
    false
}

fn encode_psalm(ctx: &mut ScanContext) -> bool {
    if ctx.string_at(ctx.current + 1, 4, &["SALM"]) {
        if ctx.encode_vowels() {
            ctx.add("SAM");
        } else {
            ctx.add("SM");
        }
        ctx.current += 5;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{exact_keys, keys, pair};

    #[test]
    fn ph_is_f() {
        assert_eq!(keys("phone"), pair("FN", ""));
        assert_eq!(keys("Raphael"), pair("RFL", ""));
    }

    #[test]
    fn shepherd_keeps_p() {
        assert_eq!(keys("shepherd"), pair("XPRT", ""));
        assert_eq!(exact_keys("shepherd"), pair("XPRD", ""));
    }
}
