//! Price text extraction
//!
//! Listing prices arrive as free text ("EUR 45,00", "£12.50 + P&P",
//! "45,00 €"). Two extraction rules exist: a loose one used for vendors with
//! a title/price listing layout, and a strict decimal-comma one for autodoc.

use regex::Regex;
use std::sync::LazyLock;

/// First run of digits with an optional decimal point and fraction
static LOOSE_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+[\.,]?[0-9]*)").expect("valid regex"));

/// Digits, comma, exactly two decimals
static DECIMAL_COMMA_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+,[0-9]{2})").expect("valid regex"));

/// Extract the first number from a price text.
///
/// Commas are read as decimal points. Thousands separators are not
/// recognised: "1.234,56" yields 1.234.
///
/// # Examples
/// ```
/// use partprice::services::extractor::extract_price;
///
/// assert_eq!(extract_price("12,50"), Some(12.5));
/// assert_eq!(extract_price("€ 45.00 incl. VAT"), Some(45.0));
/// assert_eq!(extract_price("no price"), None);
/// ```
pub fn extract_price(text: &str) -> Option<f64> {
    let text = text.replace(',', ".");
    let caps = LOOSE_PRICE.captures(&text)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Extract a `digits,dd` price, as printed by autodoc.
///
/// Returns `None` for prices written with a decimal point or without
/// exactly two decimals.
pub fn extract_decimal_comma_price(text: &str) -> Option<f64> {
    let caps = DECIMAL_COMMA_PRICE.captures(text)?;
    caps.get(1)?.as_str().replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_price(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap_or_else(|| panic!("expected {}, got None", expected));
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    // ========== extract_price ==========

    #[test]
    fn test_decimal_comma() {
        assert_price(extract_price("12,50"), 12.5);
    }

    #[test]
    fn test_currency_prefix_and_suffix_text() {
        assert_price(extract_price("€ 45.00 incl. VAT"), 45.0);
        assert_price(extract_price("£12.99 + P&P"), 12.99);
        assert_price(extract_price("EUR 7,35"), 7.35);
    }

    #[test]
    fn test_integer_price() {
        assert_price(extract_price("ab 89 €"), 89.0);
    }

    #[test]
    fn test_trailing_separator() {
        // "12." parses as 12.0
        assert_price(extract_price("12,- EUR"), 12.0);
    }

    #[test]
    fn test_first_number_wins() {
        // eBay price ranges: lower bound is taken
        assert_price(extract_price("£10.00 to £14.50"), 10.0);
    }

    #[test]
    fn test_thousands_separator_limitation() {
        assert_price(extract_price("EUR 1.234,56"), 1.234);
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_price("no price"), None);
        assert_eq!(extract_price(""), None);
        assert_eq!(extract_price("Preis auf Anfrage"), None);
    }

    // ========== extract_decimal_comma_price ==========

    #[test]
    fn test_decimal_comma_strict() {
        assert_price(extract_decimal_comma_price("45,90 €"), 45.9);
        assert_price(extract_decimal_comma_price("1234,00€"), 1234.0);
    }

    #[test]
    fn test_decimal_comma_rejects_point() {
        assert_eq!(extract_decimal_comma_price("45.90 €"), None);
    }

    #[test]
    fn test_decimal_comma_requires_two_decimals() {
        assert_eq!(extract_decimal_comma_price("45,9 €"), None);
        assert_eq!(extract_decimal_comma_price("45 €"), None);
        // Longer fractions still match their first two digits
        assert_price(extract_decimal_comma_price("45,999"), 45.99);
    }
}
