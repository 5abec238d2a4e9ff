//! Brazilian phone number normalization and display formatting.
//!
//! Same contract as the CPF helpers: never fails, malformed input passes
//! through as bare digits.

/// Strip every character that is not an ASCII digit.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Format a phone number for display.
///
/// `(DD) NNNNN-NNNN` for 11 digits (mobile), `(DD) NNNN-NNNN` for 10 digits
/// (landline); anything else is returned as the normalized digit sequence.
pub fn mask(input: &str) -> String {
    let digits = normalize(input);
    match digits.len() {
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => digits,
    }
}
