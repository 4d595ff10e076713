//! Constant-product AMM pricing and liquidity accounting core.
//!
//! This crate is the deterministic heart of a swap venue: it prices trades
//! against the `x · y = k` invariant, accounts for pooled liquidity in
//! proportional shares, and exposes read-only quoting for UI display. All
//! arithmetic is checked `u128` integer math in token base units — no
//! floating point touches committed state, so identical inputs always
//! produce identical outputs.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`BasisPoints`](domain::BasisPoints), [`FeeRate`](domain::FeeRate), … |
//! | [`math`] | Checked arithmetic helpers, `mul_div`, integer square root |
//! | [`quote`] | Stateless pricing: swap quotes, price impact, slippage bounds |
//! | [`ledger`] | Stateful accounting: [`ReserveLedger`](ledger::ReserveLedger) and the concurrent [`PoolRegistry`](ledger::PoolRegistry) |
//! | [`config`] | Validated pool construction parameters |
//! | [`error`] | The crate-wide [`AmmError`](error::AmmError) |
//!
//! # Quick start
//!
//! ```
//! use defi_amm::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = PoolRegistry::new();
//!     let config = PoolConfig::new(
//!         FeeRate::RATE_0_30_PERCENT,
//!         Amount::new(1_000_000),
//!         Amount::new(2_000_000),
//!     )?;
//!     let (id, mut founder) = registry.create(&config)?;
//!
//!     // Quote first, then commit with the quote's slippage bound.
//!     let pool = registry.get(id)?;
//!     let quote = pool.lock().quote_exact_in(
//!         SwapDirection::AToB,
//!         Amount::new(1_000),
//!         DEFAULT_SLIPPAGE_TOLERANCE,
//!     )?;
//!     let outcome = pool
//!         .lock()
//!         .swap(SwapDirection::AToB, quote.amount_in(), quote.minimum_amount_out())?;
//!     assert_eq!(outcome.amount_out(), Amount::new(1_992));
//!
//!     // Withdraw everything the founder holds.
//!     let shares = founder.shares();
//!     pool.lock()
//!         .remove_liquidity(shares, Amount::ZERO, Amount::ZERO, &mut founder)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod quote;

#[cfg(test)]
mod proptest_properties;
