//! Parsing and currency formatting for extracted figures

/// Parse the leading integer prefix of a figure string.
///
/// Skips leading whitespace, accepts one sign, then consumes decimal digits
/// up to the first non-digit character. Returns `None` when no digit prefix
/// exists; the caller renders that as an explicit unknown marker.
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::parse_amount;
/// assert_eq!(parse_amount("1000"), Some(1000));
/// assert_eq!(parse_amount("1,234"), Some(1));
/// assert_eq!(parse_amount("n/a"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        value = value.checked_mul(10)?.checked_add(d as i64)?;
        seen_digit = true;
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Gross profit is derived client-side: revenue minus cost of sales.
/// An unknown operand makes the result unknown.
pub fn gross_profit(revenue: Option<i64>, cost_of_sales: Option<i64>) -> Option<i64> {
    Some(revenue? - cost_of_sales?)
}

/// Format an amount as a currency value with a "$" prefix and comma
/// thousands separators. The sign goes ahead of the currency symbol.
pub fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    // Insert commas every 3 digits walking from the end
    let mut reversed = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Render an optional amount; an unknown figure shows as "N/A".
pub fn format_amount_opt(value: Option<i64>) -> String {
    match value {
        Some(v) => format_amount(v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000"), Some(1000));
        assert_eq!(parse_amount("400"), Some(400));
        assert_eq!(parse_amount("-400"), Some(-400));
        assert_eq!(parse_amount("+7"), Some(7));
        assert_eq!(parse_amount("  42"), Some(42));
    }

    #[test]
    fn test_parse_amount_truncates_at_first_non_digit() {
        assert_eq!(parse_amount("1,234"), Some(1));
        assert_eq!(parse_amount("512.75"), Some(512));
        assert_eq!(parse_amount("99 million"), Some(99));
    }

    #[test]
    fn test_parse_amount_without_digit_prefix_is_unknown() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
        assert_eq!(parse_amount("$500"), None);
        assert_eq!(parse_amount("-"), None);
    }

    #[test]
    fn test_gross_profit() {
        assert_eq!(gross_profit(Some(1000), Some(400)), Some(600));
        assert_eq!(gross_profit(Some(400), Some(1000)), Some(-600));
        assert_eq!(gross_profit(None, Some(400)), None);
        assert_eq!(gross_profit(Some(1000), None), None);
        assert_eq!(gross_profit(None, None), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(600), "$600");
        assert_eq!(format_amount(1000), "$1,000");
        assert_eq!(format_amount(1234567), "$1,234,567");
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(-1234), "-$1,234");
    }

    #[test]
    fn test_format_amount_opt() {
        assert_eq!(format_amount_opt(Some(1000)), "$1,000");
        assert_eq!(format_amount_opt(None), "N/A");
    }
}
