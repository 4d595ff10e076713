//! Unified error types for the AMM core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant is recoverable by the caller: the core never
//! panics, never retries internally, and never leaves partial state behind
//! after an error.

use thiserror::Error;

/// Error type for all AMM core operations.
///
/// Variants carry a static message giving the exact guard that fired, so a
/// UI can render a specific message per kind while matching on the variant
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A supplied quantity was zero or otherwise out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Pool bootstrap was given a zero-valued side or a deposit too small
    /// to mint the minimum share count.
    #[error("invalid initial deposit: {0}")]
    InvalidInitialDeposit(&'static str),

    /// The pool has no reserves, or the requested output would meet or
    /// exceed the available reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The realized amounts violate the caller's minimum-out or
    /// maximum-in bound. The caller should re-quote or abort.
    #[error("slippage exceeded: {0}")]
    SlippageExceeded(&'static str),

    /// A withdrawal requested more shares than the position holds.
    #[error("insufficient shares")]
    InsufficientShares,

    /// A slippage tolerance outside `[0, 10_000)` basis points.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(&'static str),

    /// A fee rate of 100% or more, which makes swaps impossible.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Intermediate arithmetic exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Intermediate arithmetic would have gone negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The constant-product invariant would not hold after a commit.
    ///
    /// Re-validated inside the locked mutation path before reserves are
    /// assigned; a quote computed against the same reserves can never
    /// trigger it.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// The registry has no pool under the given id.
    #[error("unknown pool id")]
    PoolNotFound,
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = AmmError::InvalidAmount("swap amount must be non-zero");
        assert_eq!(
            format!("{err}"),
            "invalid amount: swap amount must be non-zero"
        );
    }

    #[test]
    fn display_unit_variants() {
        assert_eq!(
            format!("{}", AmmError::InsufficientLiquidity),
            "insufficient liquidity"
        );
        assert_eq!(
            format!("{}", AmmError::InsufficientShares),
            "insufficient shares"
        );
        assert_eq!(format!("{}", AmmError::DivisionByZero), "division by zero");
    }

    #[test]
    fn variants_are_comparable() {
        assert_eq!(AmmError::PoolNotFound, AmmError::PoolNotFound);
        assert_ne!(
            AmmError::InsufficientLiquidity,
            AmmError::InsufficientShares
        );
    }

    #[test]
    fn error_is_copy() {
        let a = AmmError::InvariantViolation;
        let b = a;
        assert_eq!(a, b);
    }
}
