//! Money value: integer currency units, checked arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An amount in the smallest currency unit.
///
/// Arithmetic is checked; overflow and overdraw are domain errors, never
/// panics or wrapping.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Multiply a unit price by a quantity.
    pub fn times(self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Money)
            .ok_or_else(|| DomainError::invariant("monetary overflow in price multiplication"))
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("monetary overflow in addition"))
    }

    /// Subtract `amount`, failing (without partial effect) when it exceeds self.
    pub fn checked_sub(self, amount: Money) -> DomainResult<Money> {
        self.0
            .checked_sub(amount.0)
            .map(Money)
            .ok_or(DomainError::InsufficientFunds {
                balance: self.0,
                required: amount.0,
            })
    }

    /// Render with thousands separators, e.g. `1234567` -> `"1,234,567"`.
    pub fn grouped(&self) -> String {
        group_digits(self.0)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.grouped())
    }
}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

/// Group a non-negative integer's digits in threes.
///
/// Shared by `Money` and the CLI's quantity rendering.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn grouping_matches_expected_renderings() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(30_000), "30,000");
        assert_eq!(group_digits(1_200_000), "1,200,000");
        assert_eq!(group_digits(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn times_multiplies_unit_price_by_quantity() {
        let total = Money::new(30_000).times(2).unwrap();
        assert_eq!(total, Money::new(60_000));
    }

    #[test]
    fn times_detects_overflow() {
        let err = Money::new(u64::MAX).times(2).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn checked_sub_reports_balance_and_required_on_overdraw() {
        let err = Money::new(10_000).checked_sub(Money::new(1_200_000)).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientFunds {
                balance: 10_000,
                required: 1_200_000,
            }
        );
    }

    proptest! {
        /// Property: grouping never changes the digits, only inserts commas.
        #[test]
        fn grouping_preserves_digits(value in any::<u64>()) {
            let grouped = group_digits(value);
            let ungrouped: String = grouped.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(ungrouped, value.to_string());
        }

        /// Property: sub then add round-trips whenever the sub succeeds.
        #[test]
        fn sub_then_add_round_trips(balance in any::<u64>(), charge in any::<u64>()) {
            let balance = Money::new(balance);
            let charge = Money::new(charge);
            if let Ok(rest) = balance.checked_sub(charge) {
                prop_assert_eq!(rest.checked_add(charge).unwrap(), balance);
            }
        }
    }
}
