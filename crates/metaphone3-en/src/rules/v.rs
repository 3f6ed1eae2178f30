// 'V'

use crate::context::ScanContext;

pub(crate) fn encode(ctx: &mut ScanContext) {
    if ctx.peek(1) == 'V' {
        ctx.current += 2;
    } else {
        ctx.current += 1;
    }
    ctx.add_exact_approx("V", "F");
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::{exact_keys, keys, pair};

    #[test]
    fn v_devoices_unless_exact() {
        assert_eq!(keys("Vivian"), pair("FFN", ""));
        assert_eq!(exact_keys("Vivian"), pair("VVN", ""));
        assert_eq!(exact_keys("van"), pair("VN", ""));
    }
}
