/// Formats a price as US currency: `$1,234,567.89`.
///
/// Negative values put the sign before the dollar sign (`-$1,200.00`).
/// Values that round to zero cents never carry a sign. Callers pass finite
/// prices; the predictor rejects anything else before a page is rendered.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(387_393.494), "$387,393.49");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_currency(12.345_6), "$12.35");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-1200.0), "-$1,200.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_large_prices_keep_currency_shape() {
        assert_eq!(format_currency(1e15), "$1,000,000,000,000,000.00");
        assert_eq!(
            format_currency(-1e20),
            "-$100,000,000,000,000,000,000.00"
        );
    }
}
