/// The amount recorded when nothing can be derived.
pub const ZERO_AMOUNT: &str = "0";

/// Parse a decimal integer, falling back to zero.
///
/// Historical records carry hours and rates that do not parse. Those bill at
/// zero instead of failing the invocation.
pub fn parse_amount_or_zero(raw: &str) -> i64 {
    raw.parse::<i64>().unwrap_or(0)
}

/// Compute `hours * rate` as a decimal string.
///
/// Without a rate the amount is [`ZERO_AMOUNT`]. Either operand failing to
/// parse, or the product overflowing, also yields zero.
pub fn derive_amount(hours: &str, rate: Option<&str>) -> String {
    let Some(rate) = rate else {
        return ZERO_AMOUNT.to_string();
    };

    parse_amount_or_zero(hours)
        .checked_mul(parse_amount_or_zero(rate))
        .unwrap_or(0)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_amount_or_zero("110"), 110);
        assert_eq!(parse_amount_or_zero("-4"), -4);
        assert_eq!(parse_amount_or_zero("+7"), 7);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_amount_or_zero(""), 0);
        assert_eq!(parse_amount_or_zero("ten"), 0);
        assert_eq!(parse_amount_or_zero("7.5"), 0);
        assert_eq!(parse_amount_or_zero(" 7"), 0);
    }

    #[test]
    fn derive_multiplies_hours_by_rate() {
        assert_eq!(derive_amount("10", Some("110")), "1100");
        assert_eq!(derive_amount("0", Some("110")), "0");
    }

    #[test]
    fn derive_without_rate_is_zero() {
        assert_eq!(derive_amount("10", None), "0");
    }

    #[test]
    fn derive_with_unparseable_operand_is_zero() {
        assert_eq!(derive_amount("ten", Some("110")), "0");
        assert_eq!(derive_amount("10", Some("n/a")), "0");
    }

    #[test]
    fn derive_overflow_is_zero() {
        assert_eq!(derive_amount(&i64::MAX.to_string(), Some("2")), "0");
    }
}
