// 'B'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_silent_b(ctx) {
        return;
    }

    // "-mb", e.g. "dumb", is already skipped over under 'M'
    ctx.add_exact_approx("B", "P");

    if ctx.peek(1) == 'B'
        || (ctx.peek(1) == 'P' && ctx.current + 1 < ctx.last() && ctx.peek(2) != 'H')
    {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
}

/// Silent 'B' outside "-MB-": 'debt', 'doubt', 'subtle'.
fn encode_silent_b(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur - 2, 4, &["DEBT"])
        || ctx.string_at(cur - 2, 5, &["SUBTL"])
        || ctx.string_at(cur - 2, 6, &["SUBTIL"])
        || ctx.string_at(cur - 3, 5, &["DOUBT"])
    {
        ctx.add("T");
        ctx.current += 2;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{exact_keys, keys, pair};

    #[test]
    fn b_devoices_unless_exact() {
        assert_eq!(keys("bob"), pair("PP", ""));
        assert_eq!(exact_keys("bob"), pair("BB", ""));
    }

    #[test]
    fn silent_mb() {
        assert_eq!(keys("tomb"), pair("TM", ""));
        assert_eq!(keys("dumb"), pair("TM", ""));
        assert_eq!(keys("Dumbledore"), pair("TMLTR", ""));
    }
}
