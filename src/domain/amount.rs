//! Base-unit token amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A token quantity in the smallest unit of its token (integer base units).
///
/// `Amount` never interprets decimals — decimal scaling and display
/// formatting are the UI layer's responsibility. All `u128` values are
/// valid amounts, so there is no fallible constructor.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking. Division always
/// takes an explicit [`Rounding`].
///
/// # Examples
///
/// ```
/// use defi_amm::domain::{Amount, Rounding};
///
/// let a = Amount::new(1_000);
/// let b = Amount::new(997);
/// assert_eq!(a.checked_sub(&b), Some(Amount::new(3)));
/// assert_eq!(
///     a.checked_mul_div(&b, &Amount::new(10), Rounding::Down),
///     Some(Amount::new(99_700)),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw base-unit value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                let q = self.0 / divisor.0;
                let r = self.0 % divisor.0;
                if r != 0 {
                    // q + 1 cannot overflow: r != 0 implies q < u128::MAX.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }

    /// Checked `self * mul / div` with explicit rounding.
    ///
    /// This is the core pricing primitive — the constant-product output,
    /// proportional share minting, and proportional redemption are all
    /// instances of it. Returns `None` if the intermediate product
    /// overflows or `div` is zero.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self, rounding: Rounding) -> Option<Self> {
        match self.checked_mul(mul) {
            Some(product) => product.checked_div(div, rounding),
            None => None,
        }
    }

    /// Returns the smaller of two amounts.
    pub const fn min(&self, other: &Self) -> Self {
        if self.0 <= other.0 {
            *self
        } else {
            *other
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
