//! Lossless decimal amount backed by rust_decimal.
//!
//! Balances and PNL are kept as exact decimals. Ingress amounts arrive as JSON
//! numbers and are parsed through their shortest textual form; outbound values
//! are rendered as canonical strings, never through `f64`.

use rust_decimal::Decimal as RustDecimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Number of decimal places between lamports and SOL (1 SOL = 10^9 lamports).
pub const MINOR_UNIT_SCALE: u32 = 9;

/// Decimal amount in major units.
///
/// Arithmetic is checked only: a sum outside rust_decimal's 96-bit range
/// yields `None` instead of panicking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns an error if the string is not a valid decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, rust_decimal::Error> {
        RustDecimal::from_str(s).map(Decimal)
    }

    /// Convert an integer count of minor units into major units.
    ///
    /// `2_500_000_000` lamports becomes `2.5`.
    pub fn from_minor_units(minor: u64) -> Self {
        Decimal(RustDecimal::from_i128_with_scale(
            i128::from(minor),
            MINOR_UNIT_SCALE,
        ))
    }

    /// Format without exponent notation and without trailing zeros.
    pub fn to_canonical_string(&self) -> String {
        format!("{}", self.0.normalize())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is < 0. Negative zero counts as zero.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    pub fn checked_add(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_add(rhs.0).map(Decimal)
    }

    pub fn checked_sub(self, rhs: Decimal) -> Option<Decimal> {
        self.0.checked_sub(rhs.0).map(Decimal)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_minor_units_conversion() {
        assert_eq!(Decimal::from_minor_units(2_500_000_000), dec("2.5"));
        assert_eq!(
            Decimal::from_minor_units(2_500_000_000).to_canonical_string(),
            "2.5"
        );
        assert_eq!(Decimal::from_minor_units(1).to_canonical_string(), "0.000000001");
        assert!(Decimal::from_minor_units(0).is_zero());
    }

    #[test]
    fn test_minor_units_max_does_not_overflow() {
        let max = Decimal::from_minor_units(u64::MAX);
        assert_eq!(max.to_canonical_string(), "18446744073.709551615");
    }

    #[test]
    fn test_canonical_string_trims_trailing_zeros() {
        assert_eq!(dec("95.000").to_canonical_string(), "95");
        assert_eq!(dec("0.10").to_canonical_string(), "0.1");
        assert!(!dec("1000000").to_canonical_string().contains('e'));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(dec("100").checked_sub(dec("10")), Some(dec("90")));
        assert_eq!(dec("90").checked_add(dec("5")), Some(dec("95")));
        assert_eq!(dec("1").checked_sub(dec("2.5")), Some(dec("-1.5")));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let big = dec("50000000000000000000000000000");
        assert_eq!(big.checked_add(big), None);
        assert_eq!(big.checked_add(dec("0")), Some(big));
        assert_eq!(dec("-50000000000000000000000000000").checked_sub(big), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(dec("-0.01").is_negative());
        assert!(!dec("0").is_negative());
        assert!(!dec("-0").is_negative());
        assert!(!dec("3").is_negative());
    }

    #[test]
    fn test_json_number_parse() {
        let value: Decimal = serde_json::from_str("2.5").unwrap();
        assert_eq!(value, dec("2.5"));

        let value: Decimal = serde_json::from_str("10").unwrap();
        assert_eq!(value, dec("10"));

        let value: Decimal = serde_json::from_str("-0.000000001").unwrap();
        assert_eq!(value, dec("-0.000000001"));
    }
}
