//! Convenience re-exports of the crate's public surface.
//!
//! ```
//! use defi_amm::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, BasisPoints, FeeRate, LiquidityPosition, PoolId, Price, Rounding, Shares,
    SwapDirection, SwapOutcome,
};
pub use crate::error::{AmmError, Result};
pub use crate::ledger::{
    DepositOutcome, PoolRegistry, ReserveLedger, SharedPool, WithdrawalOutcome,
    MIN_INITIAL_SHARES,
};
pub use crate::math::{isqrt, mul_div, CheckedArithmetic};
pub use crate::quote::{
    apply_slippage_tolerance, price_impact_bps, proportional_deposit, quote_exact_in,
    swap_exact_in, swap_exact_out, Quote, DEFAULT_SLIPPAGE_TOLERANCE,
};
