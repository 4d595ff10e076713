//! Per-user liquidity position handle.

use core::fmt;

use super::{PoolId, Shares};
use crate::error::AmmError;

/// A user's claim on one pool's reserves, measured in shares.
///
/// The core is agnostic to account identity: the collaborator keys
/// positions by wallet-derived account id and hands the core an opaque
/// handle. The ledger credits shares on deposit and debits them on
/// withdrawal; the position's share count never exceeds the pool's total
/// because every credit mints and every debit burns the same count on the
/// pool side, inside the same locked mutation.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::{LiquidityPosition, PoolId, Shares};
///
/// let mut pos = LiquidityPosition::new(PoolId::new(0));
/// pos.credit(Shares::new(500)).expect("no overflow");
/// assert_eq!(pos.shares(), Shares::new(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityPosition {
    pool: PoolId,
    shares: Shares,
}

impl LiquidityPosition {
    /// Creates an empty position against the given pool.
    pub const fn new(pool: PoolId) -> Self {
        Self {
            pool,
            shares: Shares::ZERO,
        }
    }

    /// Creates a position that already holds shares (the founding deposit).
    pub const fn with_shares(pool: PoolId, shares: Shares) -> Self {
        Self { pool, shares }
    }

    /// Returns the pool this position belongs to.
    #[must_use]
    pub const fn pool(&self) -> PoolId {
        self.pool
    }

    /// Returns the shares held.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns `true` if the position holds no shares.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shares.is_zero()
    }

    /// Adds freshly minted shares to the position.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the share count overflows.
    pub fn credit(&mut self, minted: Shares) -> crate::error::Result<()> {
        self.shares = self
            .shares
            .checked_add(&minted)
            .ok_or(AmmError::Overflow("position share overflow"))?;
        Ok(())
    }

    /// Removes burned shares from the position.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `burned` exceeds the
    /// shares held.
    pub fn debit(&mut self, burned: Shares) -> crate::error::Result<()> {
        self.shares = self
            .shares
            .checked_sub(&burned)
            .ok_or(AmmError::InsufficientShares)?;
        Ok(())
    }
}

impl fmt::Display for LiquidityPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} shares", self.pool, self.shares)
    }
}
