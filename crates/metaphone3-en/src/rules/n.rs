// 'N'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if encode_nce(ctx) {
        return;
    }

    if ctx.peek(1) == 'N' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }

    // "monsieur", "aloneness"
    if !ctx.string_at(ctx.current - 3, 8, &["MONSIEUR"])
        && !ctx.string_at(ctx.current - 3, 6, &["NENESS"])
    {
        ctx.add("N");
    }
}

/// 'acceptance', 'accountancy'
fn encode_nce(ctx: &mut ScanContext) -> bool {
    let cur = ctx.current;
    if ctx.string_at(cur + 1, 1, &["C", "S"])
        && ctx.string_at(cur + 2, 1, &["E", "Y", "I"])
        && (cur + 2 == ctx.last() || (cur + 3 == ctx.last() && ctx.peek(3) == 'S'))
    {
        ctx.add("NTS");
        ctx.current += 2;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair};

    #[test]
    fn n_in_longer_words() {
        assert_eq!(keys("nation"), pair("NXN", ""));
        assert_eq!(keys("lieutenant"), pair("LTNNT", ""));
    }
}
