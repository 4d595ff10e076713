//! Fallible arithmetic for domain wrapper types.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning checked operations on
//! [`Amount`] and [`Shares`] into [`Result`](crate::error::Result) with
//! specific error variants, which keeps the ledger and engine code on the
//! `?` operator instead of `ok_or` chains.

use crate::domain::{Amount, Rounding, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics** — all failure modes produce `Err`.
/// - **No saturation** — saturation hides bugs; errors propagate instead.
/// - Implementations delegate to the inner type's checked operations.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }
}

/// Checked `a * b / denominator` on amounts with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `a * b` exceeds `u128`.
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn mul_div(
    a: Amount,
    b: Amount,
    denominator: Amount,
    rounding: Rounding,
) -> Result<Amount, AmmError> {
    let product = a
        .checked_mul(&b)
        .ok_or(AmmError::Overflow("mul_div product overflow"))?;
    product
        .checked_div(&denominator, rounding)
        .ok_or(AmmError::DivisionByZero)
}

/// Integer square root via Newton's method, rounded down.
///
/// Converges for every `u128` input; used to derive founding shares as the
/// geometric mean of the two initial deposits.
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
