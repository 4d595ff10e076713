//! Per-pool swap fee built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// The swap fee of a pool, immutable for the pool's lifetime.
///
/// Wraps [`BasisPoints`] with the standard presets used across major AMM
/// deployments and with validation: a fee of 100% or more makes every swap
/// impossible and is rejected at construction.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::FeeRate;
///
/// let fee = FeeRate::RATE_0_30_PERCENT;
/// assert_eq!(fee.basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// 0.01% fee (1 bp) — tightly correlated pairs.
    pub const RATE_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% fee (5 bp) — stablecoin pairs.
    pub const RATE_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp) — standard volatile pairs.
    pub const RATE_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp) — exotic pairs.
    pub const RATE_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeRate`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate is not strictly below
    /// 100%.
    pub const fn new(basis_points: BasisPoints) -> crate::error::Result<Self> {
        if !basis_points.is_fractional() {
            return Err(AmmError::InvalidFee("fee rate must be below 100%"));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the retained fraction after the fee, `10_000 - fee_bps`.
    ///
    /// Always valid because construction guarantees the fee is below 100%.
    #[must_use]
    pub const fn retained(&self) -> BasisPoints {
        match self.0.complement() {
            Some(v) => v,
            // Unreachable: constructor rejects rates of 100% and above.
            None => BasisPoints::ZERO,
        }
    }

    /// Computes the fee taken from `amount` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication
    /// overflows.
    pub const fn apply_to_amount(
        &self,
        amount: Amount,
        rounding: Rounding,
    ) -> crate::error::Result<Amount> {
        self.0.apply(amount, rounding)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}
