//! Concurrent pool registry: id assignment and per-pool locking.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::ReserveLedger;
use crate::config::PoolConfig;
use crate::domain::{LiquidityPosition, PoolId};
use crate::error::AmmError;

/// Handle to one pool's ledger behind its mutex.
///
/// Cloning is cheap; all clones lock the same ledger. Hold the lock for
/// the duration of a mutation so the quote-at-commit and the reserve
/// assignment observe the same state.
pub type SharedPool = Arc<Mutex<ReserveLedger>>;

/// Owns every pool and serializes access per pool.
///
/// Mutations on different pools proceed in parallel: the registry's own
/// `RwLock` guards only the id-to-pool map and is held just long enough
/// to clone out an [`Arc`]. Each ledger then has its own mutex, so two
/// swaps on the same pool are serialized while swaps on distinct pools
/// are not.
///
/// # Examples
///
/// ```
/// use defi_amm::config::PoolConfig;
/// use defi_amm::domain::{Amount, FeeRate, SwapDirection};
/// use defi_amm::ledger::PoolRegistry;
///
/// let registry = PoolRegistry::new();
/// let config = PoolConfig::new(
///     FeeRate::RATE_0_30_PERCENT,
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
/// )
/// .expect("valid config");
/// let (id, _founder) = registry.create(&config).expect("valid deposit");
///
/// let pool = registry.get(id).expect("just created");
/// let outcome = pool
///     .lock()
///     .swap(SwapDirection::AToB, Amount::new(1_000), Amount::ZERO)
///     .expect("liquid pool");
/// assert_eq!(outcome.amount_out(), Amount::new(1_992));
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolId, SharedPool>>,
    next_id: AtomicU64,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool from `config` and returns its id together with the
    /// founder's position.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ReserveLedger::initialize`]; on error no
    /// id is consumed and nothing is registered.
    pub fn create(
        &self,
        config: &PoolConfig,
    ) -> crate::error::Result<(PoolId, LiquidityPosition)> {
        let (ledger, founding) = ReserveLedger::initialize(config)?;
        let id = PoolId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.pools.write().insert(id, Arc::new(Mutex::new(ledger)));
        tracing::debug!(pool = %id, %config, "pool registered");
        Ok((id, LiquidityPosition::with_shares(id, founding)))
    }

    /// Looks up a pool's shared handle.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown id.
    pub fn get(&self, id: PoolId) -> crate::error::Result<SharedPool> {
        self.pools
            .read()
            .get(&id)
            .cloned()
            .ok_or(AmmError::PoolNotFound)
    }

    /// Returns `true` if a pool is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: PoolId) -> bool {
        self.pools.read().contains_key(&id)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Amount, FeeRate, Shares};

    fn reference_config() -> PoolConfig {
        let Ok(config) = PoolConfig::new(
            FeeRate::RATE_0_30_PERCENT,
            Amount::new(1_000_000),
            Amount::new(2_000_000),
        ) else {
            panic!("valid config");
        };
        config
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let registry = PoolRegistry::new();
        let Ok((first, _)) = registry.create(&reference_config()) else {
            panic!("expected Ok");
        };
        let Ok((second, _)) = registry.create(&reference_config()) else {
            panic!("expected Ok");
        };
        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn create_returns_founder_position() {
        let registry = PoolRegistry::new();
        let Ok((id, founder)) = registry.create(&reference_config()) else {
            panic!("expected Ok");
        };
        assert_eq!(founder.pool(), id);
        assert_eq!(founder.shares(), Shares::new(1_414_213));
    }

    #[test]
    fn failed_create_registers_nothing() {
        let registry = PoolRegistry::new();
        let Ok(dust) =
            PoolConfig::new(FeeRate::RATE_0_30_PERCENT, Amount::new(10), Amount::new(10))
        else {
            panic!("valid config");
        };
        assert!(registry.create(&dust).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn get_unknown_id() {
        let registry = PoolRegistry::new();
        let result = registry.get(PoolId::new(99));
        assert!(matches!(result, Err(AmmError::PoolNotFound)));
        assert!(!registry.contains(PoolId::new(99)));
    }

    #[test]
    fn handles_share_state() {
        let registry = PoolRegistry::new();
        let Ok((id, _)) = registry.create(&reference_config()) else {
            panic!("expected Ok");
        };
        let Ok(first) = registry.get(id) else {
            panic!("expected Ok");
        };
        let Ok(second) = registry.get(id) else {
            panic!("expected Ok");
        };
        {
            use crate::domain::SwapDirection;
            let Ok(_) = first
                .lock()
                .swap(SwapDirection::AToB, Amount::new(1_000), Amount::ZERO)
            else {
                panic!("expected Ok");
            };
        }
        assert_eq!(second.lock().reserve_a(), Amount::new(1_001_000));
    }
}
