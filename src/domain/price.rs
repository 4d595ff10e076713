//! Fixed-scale integer price for quote presentation.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// An exchange rate as a fixed-point integer scaled by 10⁶.
///
/// `Price::SCALE` units represent a rate of exactly 1. The core keeps all
/// committed state in plain base-unit integers; `Price` exists only so a
/// quote can report its effective rate without introducing floating point.
/// It is never fed back into ledger or engine arithmetic.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::{Amount, Price, Rounding};
///
/// // 1992 out for 1000 in → 1.992, i.e. 1_992_000 at 1e6 scale.
/// let p = Price::from_ratio(Amount::new(1_992), Amount::new(1_000), Rounding::Down)
///     .expect("non-zero denominator");
/// assert_eq!(p.get(), 1_992_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u128);

impl Price {
    /// The fixed-point scale: one whole unit of rate.
    pub const SCALE: u128 = 1_000_000;

    /// A rate of exactly 1.
    pub const ONE: Self = Self(Self::SCALE);

    /// Creates a `Price` from a raw 1e6-scaled value.
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw 1e6-scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `numerator / denominator` at 1e6 scale.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the scaled numerator overflows.
    pub fn from_ratio(
        numerator: Amount,
        denominator: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Self> {
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        let scaled = numerator
            .checked_mul(&Amount::new(Self::SCALE))
            .ok_or(AmmError::Overflow("price numerator overflow"))?;
        let value = scaled
            .checked_div(&denominator, rounding)
            .ok_or(AmmError::DivisionByZero)?;
        Ok(Self(value.get()))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
