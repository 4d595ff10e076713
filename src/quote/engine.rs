//! Pure swap and liquidity quoting over reserve snapshots.
//!
//! Every function here is stateless and side-effect free: it takes the two
//! reserves (oriented so `reserve_in` is the side being sold into), applies
//! the fee-adjusted constant-product formula in checked `u128` arithmetic,
//! and returns a value. Identical inputs always produce identical outputs,
//! which is what makes the ledger's quote-then-verify commit sound and the
//! whole module property-testable without any stored pool.
//!
//! # Pricing formula (exact-in)
//!
//! ```text
//! after_fee  = amount_in × (10_000 − fee_bps) / 10_000     (truncating)
//! amount_out = reserve_out × after_fee / (reserve_in + after_fee)   (floor)
//! ```
//!
//! Output is always rounded down and required input always rounded up: the
//! protocol never overpays and the caller never underpays.

use core::fmt;

use crate::domain::{Amount, BasisPoints, FeeRate, Price, Rounding};
use crate::error::AmmError;
use crate::math::{mul_div, CheckedArithmetic};

/// Default slippage tolerance presented to users: 0.50%.
pub const DEFAULT_SLIPPAGE_TOLERANCE: BasisPoints = BasisPoints::new(50);

/// Computes the output of an exact-input swap.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero or so small that
///   nothing remains after the fee.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero, or the
///   computed output is zero or would meet/exceed `reserve_out`.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn swap_exact_in(
    reserve_in: Amount,
    reserve_out: Amount,
    fee_rate: FeeRate,
    amount_in: Amount,
) -> crate::error::Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("swap amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let after_fee = fee_rate.retained().apply(amount_in, Rounding::Down)?;
    if after_fee.is_zero() {
        return Err(AmmError::InvalidAmount("amount is entirely consumed by fee"));
    }

    let denominator = reserve_in.safe_add(&after_fee)?;
    let amount_out = mul_div(reserve_out, after_fee, denominator, Rounding::Down)?;

    if amount_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    // Never fully drain a side.
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    Ok(amount_out)
}

/// Computes the input required for an exact-output swap.
///
/// Both divisions round up so the caller never underpays.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out >= reserve_out` (cannot drain the pool).
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn swap_exact_out(
    reserve_in: Amount,
    reserve_out: Amount,
    fee_rate: FeeRate,
    amount_out: Amount,
) -> crate::error::Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount("swap amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let remaining = reserve_out.safe_sub(&amount_out)?;
    let after_fee = mul_div(reserve_in, amount_out, remaining, Rounding::Up)?;

    // Gross up to cover the fee: in = ceil(after_fee × 10_000 / retained).
    let retained = Amount::new(u128::from(fee_rate.retained().get()));
    mul_div(
        after_fee,
        Amount::new(BasisPoints::DENOMINATOR),
        retained,
        Rounding::Up,
    )
}

/// Computes the price impact of a trade in basis points.
///
/// Compares the realized effective price (`amount_out / amount_in`)
/// against the marginal spot price before the trade
/// (`reserve_out / reserve_in`) and returns the degradation, floored at
/// zero.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn price_impact_bps(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    amount_out: Amount,
) -> crate::error::Result<BasisPoints> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("trade input must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    // retention_bps = (out/in) / (reserve_out/reserve_in) × 10_000
    let numerator = amount_out
        .checked_mul(&reserve_in)
        .and_then(|v| v.checked_mul(&Amount::new(BasisPoints::DENOMINATOR)))
        .ok_or(AmmError::Overflow("price impact numerator overflow"))?;
    let denominator = amount_in
        .checked_mul(&reserve_out)
        .ok_or(AmmError::Overflow("price impact denominator overflow"))?;
    let retention_bps = numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(AmmError::DivisionByZero)?
        .get();

    // A well-formed trade never beats the spot price; clamp defensively.
    let impact = BasisPoints::DENOMINATOR.saturating_sub(retention_bps);
    Ok(BasisPoints::new(impact as u32))
}

/// Derives a slippage bound from a quoted amount.
///
/// - [`Rounding::Down`] produces a **minimum-out** bound:
///   `amount × (10_000 − tolerance) / 10_000`, floored.
/// - [`Rounding::Up`] produces a **maximum-in** bound:
///   `amount × (10_000 + tolerance) / 10_000`, ceiled.
///
/// # Errors
///
/// - [`AmmError::InvalidTolerance`] if `tolerance` is not in
///   `[0, 10_000)`.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn apply_slippage_tolerance(
    amount: Amount,
    tolerance: BasisPoints,
    rounding: Rounding,
) -> crate::error::Result<Amount> {
    if !tolerance.is_fractional() {
        return Err(AmmError::InvalidTolerance(
            "tolerance must be in [0, 10000) basis points",
        ));
    }
    match rounding {
        Rounding::Down => {
            let retained = tolerance
                .complement()
                .ok_or(AmmError::InvalidTolerance("tolerance above 100%"))?;
            retained.apply(amount, Rounding::Down)
        }
        Rounding::Up => {
            let scaled = BasisPoints::new(BasisPoints::DENOMINATOR as u32 + tolerance.get());
            scaled.apply(amount, Rounding::Up)
        }
    }
}

/// Computes the paired amount required to keep a deposit on the current
/// reserve ratio: `desired_in × reserve_out / reserve_in`, floored.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `desired_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if the pool has no reserves —
///   the first deposit sets the ratio via `initialize` instead.
/// - [`AmmError::Overflow`] on intermediate overflow.
pub fn proportional_deposit(
    reserve_in: Amount,
    reserve_out: Amount,
    desired_in: Amount,
) -> crate::error::Result<Amount> {
    if desired_in.is_zero() {
        return Err(AmmError::InvalidAmount("deposit amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(desired_in, reserve_out, reserve_in, Rounding::Down)
}

/// An ephemeral swap quote: computed on demand, presented, discarded.
///
/// A `Quote` is advisory. It owns nothing, mutates nothing, and is
/// re-validated against live reserves when the swap commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    amount_in: Amount,
    amount_out: Amount,
    price_impact_bps: BasisPoints,
    minimum_amount_out: Amount,
    effective_price: Price,
}

impl Quote {
    /// Returns the input amount the quote was computed for.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the quoted output amount.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the price impact in basis points.
    #[must_use]
    pub const fn price_impact_bps(&self) -> BasisPoints {
        self.price_impact_bps
    }

    /// Returns the minimum acceptable output under the quote's slippage
    /// tolerance — the value to pass as `min_amount_out` when committing.
    #[must_use]
    pub const fn minimum_amount_out(&self) -> Amount {
        self.minimum_amount_out
    }

    /// Returns the effective price (`amount_out / amount_in`) at 1e6
    /// scale, for presentation only.
    #[must_use]
    pub const fn effective_price(&self) -> Price {
        self.effective_price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={}, out={}, impact={}, min_out={}, price={})",
            self.amount_in,
            self.amount_out,
            self.price_impact_bps,
            self.minimum_amount_out,
            self.effective_price
        )
    }
}

/// Produces a full exact-input [`Quote`] from a reserve snapshot.
///
/// # Errors
///
/// Propagates the errors of [`swap_exact_in`], [`price_impact_bps`], and
/// [`apply_slippage_tolerance`].
pub fn quote_exact_in(
    reserve_in: Amount,
    reserve_out: Amount,
    fee_rate: FeeRate,
    amount_in: Amount,
    tolerance: BasisPoints,
) -> crate::error::Result<Quote> {
    let amount_out = swap_exact_in(reserve_in, reserve_out, fee_rate, amount_in)?;
    let impact = price_impact_bps(reserve_in, reserve_out, amount_in, amount_out)?;
    let minimum_amount_out = apply_slippage_tolerance(amount_out, tolerance, Rounding::Down)?;
    let effective_price = Price::from_ratio(amount_out, amount_in, Rounding::Down)?;
    Ok(Quote {
        amount_in,
        amount_out,
        price_impact_bps: impact,
        minimum_amount_out,
        effective_price,
    })
}
