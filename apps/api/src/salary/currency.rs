//! Indian-locale currency formatting (`en-IN`, INR).
//!
//! Rounding follows locale number formatting: the amount's shortest round-trip
//! decimal representation is rounded half away from zero at two fractional
//! digits. Rounding the binary value directly would turn `0.125` into `0.12`.

pub const RUPEE_SYMBOL: char = '₹';

/// Formats `amount` as rupees with Indian digit grouping, e.g. `₹12,34,567.50`.
/// Never panics; non-finite input renders as `₹NaN`, `₹∞` or `-₹∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{RUPEE_SYMBOL}NaN");
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}{RUPEE_SYMBOL}∞");
    }

    let (integer, fraction) = round_to_paise(amount.abs());
    // Locale formatting keeps the sign of negative zero and of tiny negatives.
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    format!(
        "{sign}{RUPEE_SYMBOL}{}.{fraction}",
        group_indian_digits(&integer)
    )
}

/// Rounds a non-negative finite value to two decimals.
/// Returns the integer digits and exactly two fractional digits.
fn round_to_paise(value: f64) -> (String, String) {
    // `Display` for f64 is the shortest round-trip form and never uses an exponent.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let to_text = |slice: &[u8]| slice.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (to_text(&digits[..split]), to_text(&digits[split..]))
}

/// Groups an unsigned digit string the Indian way: the last three digits, then
/// every two digits leftwards (`1234567` → `12,34,567`).
pub fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_currency(1234567.5), "₹12,34,567.50");
    }

    #[test]
    fn test_crore_grouping() {
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789.00");
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(7.0), "₹7.00");
        assert_eq!(format_currency(999.0), "₹999.00");
    }

    #[test]
    fn test_first_separator_after_three_digits() {
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(41700.0), "₹41,700.00");
        assert_eq!(format_currency(100000.0), "₹1,00,000.00");
    }

    #[test]
    fn test_half_rounds_away_from_zero_on_decimal_form() {
        assert_eq!(format_currency(0.125), "₹0.13");
        assert_eq!(format_currency(1.005), "₹1.01");
        assert_eq!(format_currency(2.344), "₹2.34");
    }

    #[test]
    fn test_rounding_carries_into_new_group() {
        assert_eq!(format_currency(99999.995), "₹1,00,000.00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(-41700.0), "-₹41,700.00");
    }

    #[test]
    fn test_negative_rounding_to_zero_keeps_sign() {
        assert_eq!(format_currency(-0.001), "-₹0.00");
        assert_eq!(format_currency(-0.0), "-₹0.00");
        assert_eq!(format_currency(0.3 - (0.1 + 0.2)), "-₹0.00");
        assert_eq!(format_currency(0.001), "₹0.00");
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }

    #[test]
    fn test_very_large_amount() {
        assert_eq!(format_currency(1e21), "₹1,00,00,00,00,00,00,00,00,00,000.00");
    }

    #[test]
    fn test_group_indian_digits() {
        assert_eq!(group_indian_digits("12345"), "12,345");
        assert_eq!(group_indian_digits("123456"), "1,23,456");
    }
}
