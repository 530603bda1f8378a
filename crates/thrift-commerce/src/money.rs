//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid the floating-point
//! precision issues that plague monetary calculations. The storefront
//! trades in a single currency (INR), so amounts carry no currency tag
//! and serialize as bare integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Minor units (paise) per rupee.
const MINOR_UNITS_PER_RUPEE: i64 = 100;

/// Currency symbol used for display.
const SYMBOL: &str = "\u{20b9}";

/// A monetary amount in minor units (paise).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value from minor units.
    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Create a Money value from whole rupees.
    ///
    /// ```
    /// use thrift_commerce::Money;
    /// assert_eq!(Money::from_rupees(999), Money::new(99900));
    /// ```
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * MINOR_UNITS_PER_RUPEE)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a quantity.
    pub const fn multiply(self, factor: i64) -> Self {
        Self(self.0 * factor)
    }

    /// Format as a display string (e.g., "₹29.99").
    pub fn display(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{SYMBOL}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
