//! Basis-point representation for fees and slippage tolerances.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Fees and slippage tolerances both use this type. Any `u32` value can be
/// constructed, but fee rates and tolerances must be strictly below 100% —
/// use [`is_fractional`](Self::is_fractional) to check.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30); // 0.30%
/// assert!(fee.is_fractional());
/// assert_eq!(fee.complement(), Some(BasisPoints::new(9_970)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// The basis-point denominator (10 000 = 100%) as a raw `u128`.
    pub const DENOMINATOR: u128 = MAX_BPS as u128;

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in `[0, 10_000)` — a proper fraction
    /// of the whole, as required for fee rates and slippage tolerances.
    #[must_use]
    pub const fn is_fractional(&self) -> bool {
        self.0 < MAX_BPS
    }

    /// Returns `10_000 - self`, the share that remains after deducting
    /// this percentage. `None` if the value exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication
    /// overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("basis points apply overflow")),
        };
        let divisor = Self::DENOMINATOR;
        match rounding {
            Rounding::Down => Ok(Amount::new(product / divisor)),
            Rounding::Up => {
                let q = product / divisor;
                let r = product % divisor;
                if r != 0 {
                    Ok(Amount::new(q + 1))
                } else {
                    Ok(Amount::new(q))
                }
            }
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
