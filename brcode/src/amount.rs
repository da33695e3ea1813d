//! Transaction amount handling for BR Code payloads.
//!
//! Amounts are carried in the currency's major unit (reais) and rendered
//! on the wire with exactly two fraction digits and `.` as the decimal
//! separator. A payload only carries an amount field when the value is
//! strictly positive; otherwise the code is static and reusable.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A transaction amount in reais.
///
/// Backed by [`Decimal`] for exact arithmetic. Wire rendering rounds to
/// two fraction digits, half away from zero: `9.999` renders `"10.00"`,
/// `2.345` renders `"2.35"`.
///
/// # Serialization
///
/// Serializes transparently as the inner decimal, so `{"amount": 10.5}`
/// deserializes directly into `Option<Amount>` on payload types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount from a raw decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn inner(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is strictly greater than zero.
    ///
    /// Non-positive amounts never reach the wire; the amount field is
    /// omitted and the payload stays static.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Renders the amount as it appears in the payload's amount field.
    ///
    /// Two fraction digits, `.` separator, rounding half away from zero.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wire_pads_to_two_decimals() {
        let amount: Amount = "10".parse().unwrap();
        assert_eq!(amount.to_wire(), "10.00");
    }

    #[test]
    fn test_to_wire_keeps_two_decimals() {
        let amount: Amount = "10.50".parse().unwrap();
        assert_eq!(amount.to_wire(), "10.50");
    }

    #[test]
    fn test_to_wire_rounds_half_away_from_zero() {
        let amount: Amount = "2.345".parse().unwrap();
        assert_eq!(amount.to_wire(), "2.35");
        let amount: Amount = "9.999".parse().unwrap();
        assert_eq!(amount.to_wire(), "10.00");
    }

    #[test]
    fn test_is_positive() {
        let positive: Amount = "0.01".parse().unwrap();
        let zero: Amount = "0".parse().unwrap();
        let negative: Amount = "-5".parse().unwrap();
        assert!(positive.is_positive());
        assert!(!zero.is_positive());
        assert!(!negative.is_positive());
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let amount: Amount = serde_json::from_str("10.5").unwrap();
        assert_eq!(amount.to_wire(), "10.50");
    }

    #[test]
    fn test_serde_roundtrip() {
        let original: Amount = "1234.56".parse().unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
