// 'Q'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    // current pinyin
    if ctx.string_at(ctx.current, 3, &["QIN"]) {
        ctx.add("X");
        ctx.current += 1;
        return;
    }

    if ctx.peek(1) == 'Q' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    ctx.add("K");
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{keys, pair};

    #[test]
    fn q_forms() {
        assert_eq!(keys("queen"), pair("KN", ""));
        assert_eq!(keys("Quixote"), pair("KHT", ""));
        assert_eq!(keys("Acquire"), pair("AKR", ""));
    }
}
