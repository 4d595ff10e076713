//! Stateful liquidity accounting: the per-pool [`ReserveLedger`] and the
//! concurrent [`PoolRegistry`] that owns and serializes access to pools.

mod pool;
mod registry;

pub use pool::{DepositOutcome, ReserveLedger, WithdrawalOutcome, MIN_INITIAL_SHARES};
pub use registry::{PoolRegistry, SharedPool};
