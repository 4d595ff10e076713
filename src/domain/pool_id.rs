//! Opaque pool identifier.

use core::fmt;

/// Identifier for a pool registered in a
/// [`PoolRegistry`](crate::ledger::PoolRegistry).
///
/// Ids are assigned by the registry and carry no meaning beyond identity;
/// chain or network selection happens outside this core and resolves to a
/// `PoolId` before any operation reaches the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId(u64);

impl PoolId {
    /// Creates a `PoolId` from a raw value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}
