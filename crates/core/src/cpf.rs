//! CPF (Cadastro de Pessoas Físicas) normalization, validation and masking.
//!
//! A CPF is an 11-digit Brazilian taxpayer identifier whose last two digits
//! are checksums over the preceding ones. Canonical form: exactly 11 ASCII
//! digits, no punctuation.
//!
//! The free functions in this module never fail: malformed input yields a
//! defined result (empty string / `false` / pass-through) so call sites never
//! need defensive error handling. The only fallible surface is [`Cpf::parse`].

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Strip every character that is not an ASCII digit.
///
/// The remaining digits are returned unchanged in order; the result may be
/// shorter or longer than 11 and the caller must check the length. Idempotent.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Check digit over `digits` with weights `len+1 .. 2`.
///
/// `((Σ digit[i] * weight[i]) * 10) mod 11`, with a remainder of 10 mapped
/// to 0.
fn check_digit(digits: &[u32]) -> u32 {
    let len = digits.len() as u32;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (len + 1 - i as u32))
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder == 10 { 0 } else { remainder }
}

/// Validate a CPF given in any formatting.
///
/// Normalizes first, then fails closed unless the result is exactly 11
/// digits, is not one of the ten degenerate all-repeated-digit sequences
/// ("00000000000" .. "99999999999"), and both checksum digits match.
pub fn is_valid(input: &str) -> bool {
    let cpf = normalize(input);
    if cpf.len() != 11 {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Format a canonical 11-digit CPF as `DDD.***.***-DD`, revealing only the
/// first three and last two digits.
///
/// Returns the empty string for empty input. Does not validate the checksum;
/// input that is not exactly 11 digits is returned verbatim (documented
/// pass-through for malformed input, not an error).
pub fn mask(cpf: &str) -> String {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.***.***-{}", &cpf[..3], &cpf[9..])
    } else {
        cpf.to_string()
    }
}

/// A validated CPF in canonical form.
///
/// Construction goes through [`Cpf::parse`] (also via `FromStr` and serde
/// deserialization), so a `Cpf` value always holds exactly 11 checksum-valid
/// digits. Serialization carries the raw canonical digits; `Display` renders
/// the masked form so raw CPFs never leak into logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse free-form input (with or without punctuation) into a canonical
    /// CPF, rejecting anything that fails the checksum.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let digits = normalize(input);
        if is_valid(&digits) {
            Ok(Self(digits))
        } else {
            Err(DomainError::validation("invalid CPF"))
        }
    }

    /// Canonical 11-digit form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked display form, `DDD.***.***-DD`.
    pub fn masked(&self) -> String {
        mask(&self.0)
    }
}

impl ValueObject for Cpf {}

impl FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}

impl core::fmt::Display for Cpf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_keeps_digit_order() {
        assert_eq!(normalize("529.982.247-25"), "52998224725");
        assert_eq!(normalize(" 52a9b9c8 224-725 "), "52998224725");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("529.982.247-25");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn known_valid_cpf_is_accepted() {
        assert!(is_valid("52998224725"));
        assert!(is_valid("529.982.247-25"));
    }

    #[test]
    fn corrupted_check_digit_is_rejected() {
        assert!(!is_valid("52998224724"));
        // First check digit corrupted.
        assert!(!is_valid("52998224715"));
    }

    #[test]
    fn repeated_digit_sequences_are_rejected() {
        for d in 0u8..10 {
            let cpf: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!is_valid(&cpf), "expected {cpf} to be invalid");
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(!is_valid(""));
        assert!(!is_valid("5299822472"));
        assert!(!is_valid("529982247255"));
        assert!(!is_valid("abc"));
    }

    #[test]
    fn mask_reveals_only_first_three_and_last_two() {
        assert_eq!(mask("52998224725"), "529.***.***-25");
    }

    #[test]
    fn mask_of_empty_is_empty() {
        assert_eq!(mask(""), "");
    }

    #[test]
    fn mask_passes_malformed_input_through() {
        assert_eq!(mask("5299822472"), "5299822472");
        assert_eq!(mask("529.982.247-25"), "529.982.247-25");
    }

    #[test]
    fn cpf_parse_normalizes_and_validates() {
        let cpf = Cpf::parse("529.982.247-25").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
        assert_eq!(cpf.masked(), "529.***.***-25");
        assert_eq!(cpf.to_string(), "529.***.***-25");

        let err = Cpf::parse("52998224724").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn cpf_serde_round_trips_and_rejects_invalid() {
        let cpf = Cpf::parse("52998224725").unwrap();
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"52998224725\"");

        let back: Cpf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cpf);

        assert!(serde_json::from_str::<Cpf>("\"52998224724\"").is_err());
        assert!(serde_json::from_str::<Cpf>("\"11111111111\"").is_err());
    }

    mod proptest_tests {
        use super::super::*;
        use proptest::prelude::*;

        /// Build a full CPF from a 9-digit base by appending computed
        /// check digits.
        fn with_check_digits(base: &[u32]) -> String {
            let mut digits = base.to_vec();
            digits.push(check_digit(&digits));
            digits.push(check_digit(&digits));
            digits.iter().map(|d| d.to_string()).collect()
        }

        proptest! {
            #[test]
            fn normalize_yields_only_digits_and_is_idempotent(s in ".*") {
                let normalized = normalize(&s);
                prop_assert!(normalized.bytes().all(|b| b.is_ascii_digit()));
                prop_assert_eq!(normalize(&normalized), normalized);
            }

            #[test]
            fn validity_implies_canonical_length(s in ".*") {
                if is_valid(&s) {
                    prop_assert_eq!(normalize(&s).len(), 11);
                }
            }

            #[test]
            fn computed_check_digits_validate(base in proptest::collection::vec(0u32..10, 9)) {
                let cpf = with_check_digits(&base);
                // The only computed CPFs the validator rejects are the
                // degenerate repeated-digit sequences (whose check digits
                // happen to repeat the base digit as well).
                let repeated = base.iter().all(|&d| d == base[0]);
                prop_assert_eq!(is_valid(&cpf), !repeated);
            }

            #[test]
            fn corrupting_last_digit_invalidates(base in proptest::collection::vec(0u32..10, 9), bump in 1u32..10) {
                let cpf = with_check_digits(&base);
                let last = cpf.chars().last().unwrap().to_digit(10).unwrap();
                let corrupted = format!("{}{}", &cpf[..10], (last + bump) % 10);
                prop_assert!(!is_valid(&corrupted));
            }

            #[test]
            fn mask_never_reveals_middle_digits(base in proptest::collection::vec(0u32..10, 9)) {
                let cpf = with_check_digits(&base);
                let masked = mask(&cpf);
                prop_assert_eq!(&masked[..3], &cpf[..3]);
                prop_assert_eq!(&masked[4..11], "***.***");
                prop_assert_eq!(&masked[12..], &cpf[9..]);
            }
        }
    }
}
