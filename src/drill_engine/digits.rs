//! Base-10 digit helpers shared by every generator and validator.

/// Digit of `value` at `position` places from the right (0 = ones).
///
/// Positions past the most significant digit read as 0.
pub fn digit_at(value: u64, position: usize) -> u64 {
    let place = u32::try_from(position)
        .ok()
        .and_then(|p| 10u64.checked_pow(p));
    match place {
        Some(place) => (value / place) % 10,
        None        => 0,
    }
}

/// Number of base-10 digits; 0 has one digit.
pub fn digit_count(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Digits ones-first, e.g. `457` → `[7, 5, 4]`.
pub fn digits_ones_first(value: u64) -> Vec<u64> {
    (0..digit_count(value)).map(|p| digit_at(value, p)).collect()
}

/// Rebuild a number from ones-first digits.
pub fn from_digits_ones_first(digits: &[u64]) -> u64 {
    digits.iter().rev().fold(0, |acc, &d| acc * 10 + d)
}

/// Replace the ones digit of `value` with `digit`.
pub fn with_ones_digit(value: u64, digit: u64) -> u64 {
    value - value % 10 + digit
}
