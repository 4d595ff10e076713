//! Stateless pricing: swap quotes, price impact, slippage bounds, and
//! proportional deposit amounts.
//!
//! Nothing in this module holds or mutates pool state. The ledger calls
//! into it both for read-only quoting and to re-derive amounts at commit
//! time.

mod engine;

pub use engine::{
    apply_slippage_tolerance, price_impact_bps, proportional_deposit, quote_exact_in,
    swap_exact_in, swap_exact_out, Quote, DEFAULT_SLIPPAGE_TOLERANCE,
};
