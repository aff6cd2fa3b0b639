use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Money Value Object
// ============================================================================
//
// Non-negative decimal amount between zero and `Money::MAX`, always kept at
// two decimal places (banker's rounding). Equality and ordering compare the
// amount only. Arithmetic is checked and never leaves that range.
//
// ============================================================================

const SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("Money amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Money amount {0} exceeds the maximum of {max}", max = Money::MAX)]
    ExceedsMaximum(Decimal),

    #[error("Money arithmetic overflowed the maximum of {max}", max = Money::MAX)]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Additive identity.
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, SCALE));

    /// Largest representable amount: 1,000,000,000,000.00.
    ///
    /// Far enough below `Decimal::MAX` that multiplying it by any `u32`
    /// quantity still fits, so the range check can happen after the product.
    pub const MAX: Money = Money(Decimal::from_parts(276_447_232, 23_283, 0, false, SCALE));

    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount > Self::MAX.0 {
            return Err(MoneyError::ExceedsMaximum(amount));
        }
        let amount = scaled(amount);
        if amount < Decimal::ZERO {
            return Err(MoneyError::NegativeAmount(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    pub fn add(&self, other: Money) -> Result<Money, MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or(MoneyError::Overflow)?;
        Self::bounded(sum)
    }

    /// Price of `quantity` units of this amount.
    pub fn multiply(&self, quantity: u32) -> Result<Money, MoneyError> {
        let product = self
            .0
            .checked_mul(Decimal::from(quantity))
            .ok_or(MoneyError::Overflow)?;
        Self::bounded(product)
    }

    fn bounded(amount: Decimal) -> Result<Money, MoneyError> {
        if amount > Self::MAX.0 {
            return Err(MoneyError::Overflow);
        }
        Ok(Money(scaled(amount)))
    }
}

fn scaled(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);
    amount.rescale(SCALE);
    if amount.is_zero() {
        amount.set_sign_positive(true);
    }
    amount
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Money::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn money() -> impl Strategy<Value = Money> {
        (0i64..1_000_000_000_000).prop_map(|cents| Money::new(Decimal::new(cents, 2)).unwrap())
    }

    proptest! {
        #[test]
        fn prop_zero_is_additive_identity(amount in money()) {
            prop_assert_eq!(Money::ZERO.add(amount), Ok(amount));
            prop_assert_eq!(amount.add(Money::ZERO), Ok(amount));
        }

        #[test]
        fn prop_addition_is_associative(a in money(), b in money(), c in money()) {
            let left = a.add(b).and_then(|ab| ab.add(c));
            let right = b.add(c).and_then(|bc| a.add(bc));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_results_never_exceed_maximum(amount in money(), quantity in any::<u32>()) {
            match amount.multiply(quantity) {
                Ok(product) => prop_assert!(!product.is_greater_than(&Money::MAX)),
                Err(error) => prop_assert_eq!(error, MoneyError::Overflow),
            }
        }

        #[test]
        fn prop_addition_is_commutative(a in money(), b in money()) {
            prop_assert_eq!(a.add(b), b.add(a));
        }

        #[test]
        fn prop_multiply_matches_repeated_addition(amount in money(), quantity in 0u32..20) {
            let repeated = std::iter::repeat(amount)
                .take(quantity as usize)
                .try_fold(Money::ZERO, |total, next| total.add(next));
            prop_assert_eq!(amount.multiply(quantity), repeated);
        }
    }
}
