/// String contents with every backslash dropped.
///
/// Escapes are not interpreted: `\"` yields `"` and `\n` yields `n`.
pub(crate) fn strip_backslashes(raw: &str) -> String {
    raw.replace('\\', "")
}

/// Converts text matched by [`Pattern::Number`](super::cursor::Pattern::Number).
///
/// Leading zeros are accepted and exponents beyond the `f64` range saturate
/// to infinity.
pub(crate) fn number(lexeme: &str) -> Option<f64> {
    lexeme.parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("bar", "bar")]
    #[case(r#"bar \"bar\" bar"#, r#"bar "bar" bar"#)]
    #[case(r"a\nb", "anb")]
    #[case(r"\u0041", "u0041")]
    #[case(r"tail\\", "tail")]
    fn strips_every_backslash(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(strip_backslashes(raw), expected);
    }

    #[rstest]
    #[case("0", 0.0)]
    #[case("0000", 0.0)]
    #[case("-100", -100.0)]
    #[case("10.01", 10.01)]
    #[case("0.0", 0.0)]
    #[case("1e2", 100.0)]
    #[case("1E+2", 100.0)]
    #[case("1e-1", 0.1)]
    #[case("007.50", 7.5)]
    fn converts_numbers(#[case] lexeme: &str, #[case] expected: f64) {
        assert_eq!(number(lexeme), Some(expected));
    }

    #[test]
    fn huge_exponent_saturates() {
        assert_eq!(number("1e400"), Some(f64::INFINITY));
        assert_eq!(number("-1e400"), Some(f64::NEG_INFINITY));
    }
}
