//! Integer minor-unit money.
//!
//! Every amount stored or sent over the wire is an integer count of minor
//! units. The fractional display value exists only for presentation and is
//! never fed back into arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units per one display unit.
pub const CURRENCY_MULTIPLIER: i64 = 1_000_000;

/// An amount of money in minor units.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    #[must_use]
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Fractional display value, e.g. `5_000_000` -> `5.0`.
    #[must_use]
    pub fn to_display(self) -> f64 {
        self.0 as f64 / CURRENCY_MULTIPLIER as f64
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Win for a bet at the given payout multiplier.
    ///
    /// Computed on the minor-unit amount and rounded half away from zero, so
    /// the result is always a whole number of minor units. Non-finite or
    /// negative multipliers pay nothing.
    #[must_use]
    pub fn times_multiplier(self, multiplier: f64) -> Self {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Self::ZERO;
        }
        Self((self.0 as f64 * multiplier).round() as i64)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let multiplier = CURRENCY_MULTIPLIER.unsigned_abs();
        let whole = abs / multiplier;
        // Two decimals, rounded half up on the dropped minor units.
        let cents = ((abs % multiplier) * 100 + multiplier / 2) / multiplier;
        let (whole, cents) = if cents == 100 {
            (whole + 1, 0)
        } else {
            (whole, cents)
        };
        write!(f, "{sign}{whole}.{cents:02}")
    }
}
