//! Pool construction parameters.

use core::fmt;

use crate::domain::{Amount, FeeRate};
use crate::error::AmmError;

/// Validated parameters for creating a pool: the immutable fee rate and
/// the founding deposit on both sides.
///
/// # Examples
///
/// ```
/// use defi_amm::config::PoolConfig;
/// use defi_amm::domain::{Amount, FeeRate};
///
/// let config = PoolConfig::new(
///     FeeRate::RATE_0_30_PERCENT,
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
/// )
/// .expect("both sides non-zero");
/// assert_eq!(config.initial_a().get(), 1_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    fee_rate: FeeRate,
    initial_a: Amount,
    initial_b: Amount,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInitialDeposit`] if either side of the
    /// founding deposit is zero — the initial deposit defines the pool's
    /// starting price, which requires both sides.
    pub const fn new(
        fee_rate: FeeRate,
        initial_a: Amount,
        initial_b: Amount,
    ) -> crate::error::Result<Self> {
        if initial_a.is_zero() || initial_b.is_zero() {
            return Err(AmmError::InvalidInitialDeposit(
                "both sides of the founding deposit must be non-zero",
            ));
        }
        Ok(Self {
            fee_rate,
            initial_a,
            initial_b,
        })
    }

    /// Returns the pool's fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the founding deposit of token A.
    #[must_use]
    pub const fn initial_a(&self) -> Amount {
        self.initial_a
    }

    /// Returns the founding deposit of token B.
    #[must_use]
    pub const fn initial_b(&self) -> Amount {
        self.initial_b
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolConfig(fee={}, a={}, b={})",
            self.fee_rate, self.initial_a, self.initial_b
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let Ok(config) = PoolConfig::new(
            FeeRate::RATE_0_30_PERCENT,
            Amount::new(1_000_000),
            Amount::new(2_000_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(config.fee_rate(), FeeRate::RATE_0_30_PERCENT);
        assert_eq!(config.initial_a(), Amount::new(1_000_000));
        assert_eq!(config.initial_b(), Amount::new(2_000_000));
    }

    #[test]
    fn zero_side_a_rejected() {
        let result = PoolConfig::new(FeeRate::RATE_0_30_PERCENT, Amount::ZERO, Amount::new(1));
        assert!(matches!(result, Err(AmmError::InvalidInitialDeposit(_))));
    }

    #[test]
    fn zero_side_b_rejected() {
        let result = PoolConfig::new(FeeRate::RATE_0_30_PERCENT, Amount::new(1), Amount::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidInitialDeposit(_))));
    }

    #[test]
    fn display() {
        let Ok(config) =
            PoolConfig::new(FeeRate::RATE_0_30_PERCENT, Amount::new(10), Amount::new(20))
        else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{config}"), "PoolConfig(fee=FeeRate(30bp), a=10, b=20)");
    }
}
