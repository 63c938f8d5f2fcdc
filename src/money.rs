//! Whole-unit money type with checked integer arithmetic.
//!
//! Amounts are exact integers. Every operation that can overflow returns an
//! `Option` so callers decide how to fail; nothing wraps silently.

use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A signed whole-unit currency amount.
///
/// Inputs are non-negative; balances may be negative (debt) or positive
/// (credit).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use expense_settler::Money;
///
/// let amount = Money::from_str(" 2000 ").unwrap();
/// let (share, remainder) = amount.split(3).unwrap();
/// assert_eq!(share, Money::new(666));
/// assert_eq!(remainder, Money::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero value.
    pub const ZERO: Self = Money(0);

    /// Creates a new amount.
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw integer amount.
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this value is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if this value is strictly negative.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Money)
    }

    /// Splits a non-negative amount into `parts` equal shares.
    ///
    /// Returns `(share, remainder)` with `share * parts + remainder == self`
    /// and `0 <= remainder < parts`. Returns `None` for zero parts or a
    /// negative amount.
    pub fn split(self, parts: usize) -> Option<(Self, Self)> {
        if parts == 0 || self.is_negative() {
            return None;
        }
        let parts = i64::try_from(parts).ok()?;
        let share = self.0 / parts;
        let remainder = self.0 - share * parts;
        Some((Money(share), Money(remainder)))
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl FromStr for Money {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
