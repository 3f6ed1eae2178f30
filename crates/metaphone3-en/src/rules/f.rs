// 'F'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    // "-FT-" where the 'T' is usually silent: 'often', 'soften'
    if ctx.string_at(ctx.current - 1, 5, &["OFTEN"]) {
        ctx.add_alt("F", "FT");
        ctx.current += 2;
        return;
    }

    if ctx.peek(1) == 'F' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    ctx.add("F");
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair};

    #[test]
    fn f_sounds() {
        assert_eq!(keys("faux"), pair("F", ""));
        assert_eq!(keys("often"), pair("AFN", "AFTN"));
    }
}
