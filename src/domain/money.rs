//! Rupiah amount handling: lossy normalization and display grouping.

use super::item::PriceValue;

/// Reduce arbitrary price text to an integer rupiah amount.
///
/// Strips every non-digit character, so "50.000", "Rp25,000" and "25000"
/// all normalize to the same value. Returns `fallback` when no digits
/// remain or the remainder does not fit a u64. The grouping separators
/// are never meaningful decimal points here; rupiah has no subunits in
/// practice.
pub fn normalize_number(value: &str, fallback: u64) -> u64 {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return fallback;
    }
    digits.parse().unwrap_or(fallback)
}

/// Normalize a wire price value. Numeric values pass through untouched;
/// text goes through [`normalize_number`].
pub fn normalize_price(value: &PriceValue, fallback: u64) -> u64 {
    match value {
        PriceValue::Number(n) => *n,
        PriceValue::Text(s) => normalize_number(s, fallback),
    }
}

/// Format raw input as a rupiah display string: digits grouped into
/// thousands with `.` separators.
///
/// Keeps digits and commas, drops everything else, then groups the
/// portion before the first comma. Feeding already-formatted output back
/// in yields the same text, so catalog prices and user keystrokes share
/// this one formatter.
pub fn format_currency(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let integer = kept.split(',').next().unwrap_or("");
    group_thousands(integer)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
