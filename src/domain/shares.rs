//! Liquidity-share units for proportional pool ownership.

use core::fmt;

use super::Amount;

/// Fungible liquidity-share units representing proportional ownership of a
/// pool's reserves.
///
/// Distinct from [`Amount`] because shares are not denominated in either
/// token: a holder of `s` shares out of `total` may redeem
/// `s / total` of each reserve, rounded down. All `u128` values are valid.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::Shares;
///
/// let a = Shares::new(1_000);
/// let b = Shares::new(250);
/// assert_eq!(a.checked_sub(&b), Some(Shares::new(750)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share count is zero.
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

    /// Reinterprets the share count as an [`Amount`] for ratio arithmetic.
    ///
    /// Proportional minting and redemption multiply token amounts by share
    /// ratios; this conversion keeps that arithmetic inside `Amount`'s
    /// checked `mul_div`.
    #[must_use]
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
