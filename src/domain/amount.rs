use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use std::fmt;

/// Represents a non-negative monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` so prices and order totals
/// cannot go below zero and multiply exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderError::NegativeAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Scales the amount by a unit count, failing instead of overflowing.
    pub fn checked_mul(self, quantity: u32) -> Result<Self> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(OrderError::AmountOverflow {
                amount: self.0,
                quantity,
            })
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
