//! Amount in words, Indian numbering system (crore, lakh, thousand, hundred).
//!
//! Decomposition runs most-significant unit first. Each unit's count is rendered
//! recursively, so `1000` crore reads "One Thousand Crore". A single "and"
//! joins the coarse units to a non-zero remainder below one hundred:
//! 105 → "One Hundred And Five", 100 → "One Hundred".

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const UNITS: [(u128, &str); 4] = [
    (10_000_000, "crore"),
    (100_000, "lakh"),
    (1_000, "thousand"),
    (100, "hundred"),
];

/// Magnitudes at or above this are outside what the integer decomposition handles.
const MAX_SUPPORTED: f64 = 1e38;

/// Renders `amount` in title-cased English words.
///
/// - NaN, infinities and magnitudes ≥ 1e38 → empty string
/// - zero → "Zero"
/// - fractional part → rounded to paise and appended as "And … Paise";
///   a fraction that rounds to 100 paise carries into the rupees
/// - paise with no rupees → "Fifty Paise"; the "And" is dropped rather than
///   producing a leading "And Fifty Paise"
/// - negative amounts → prefixed with "Minus"
pub fn number_to_words(amount: f64) -> String {
    if !amount.is_finite() || amount.abs() >= MAX_SUPPORTED {
        return String::new();
    }
    if amount == 0.0 {
        return "Zero".to_string();
    }

    let magnitude = amount.abs();
    let mut rupees = magnitude.trunc() as u128;
    let mut paise = (magnitude.fract() * 100.0).round() as u128;
    if paise >= 100 {
        rupees += 1;
        paise = 0;
    }

    let mut parts: Vec<String> = Vec::new();
    if amount < 0.0 && (rupees > 0 || paise > 0) {
        parts.push("minus".to_string());
    }

    if rupees > 0 {
        parts.push(integer_words(rupees));
    } else if paise == 0 {
        parts.push("zero".to_string());
    }

    if paise > 0 {
        if rupees > 0 {
            parts.push("and".to_string());
        }
        parts.push(integer_words(paise));
        parts.push("paise".to_string());
    }

    title_case(&parts.join(" "))
}

/// Words for a positive integer, lower case.
fn integer_words(value: u128) -> String {
    let mut remainder = value;
    let mut parts: Vec<String> = Vec::new();

    for (unit, name) in UNITS {
        if remainder >= unit {
            parts.push(format!("{} {name}", integer_words(remainder / unit)));
            remainder %= unit;
        }
    }

    if remainder > 0 {
        if !parts.is_empty() {
            parts.push("and".to_string());
        }
        parts.push(below_hundred(remainder as usize));
    }

    parts.join(" ")
}

/// 1–99.
fn below_hundred(value: usize) -> String {
    if value < 20 {
        return ONES[value].to_string();
    }
    let (tens, ones) = (value / 10, value % 10);
    if ones == 0 {
        TENS[tens].to_string()
    } else {
        format!("{} {}", TENS[tens], ONES[ones])
    }
}

/// Upper-cases the first letter of every word and collapses whitespace.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
