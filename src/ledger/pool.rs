//! The reserve ledger: authoritative per-pool state and its mutations.

use core::fmt;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, BasisPoints, FeeRate, LiquidityPosition, Rounding, Shares, SwapDirection, SwapOutcome,
};
use crate::error::AmmError;
use crate::math::{isqrt, mul_div, CheckedArithmetic};
use crate::quote;
use crate::quote::Quote;

/// Minimum founding share count. Rejecting dust pools at creation keeps
/// later share arithmetic away from degenerate ratios.
pub const MIN_INITIAL_SHARES: Shares = Shares::new(1_000);

/// Amounts actually taken by a deposit and the shares minted for them.
///
/// The taken amounts can be less than the desired amounts: deposits are
/// trimmed to the pool's current reserve ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositOutcome {
    amount_a: Amount,
    amount_b: Amount,
    minted: Shares,
}

impl DepositOutcome {
    /// Returns the amount of token A taken.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the amount of token B taken.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares minted to the depositor.
    #[must_use]
    pub const fn minted(&self) -> Shares {
        self.minted
    }
}

/// Amounts returned by a withdrawal and the shares burned for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalOutcome {
    amount_a: Amount,
    amount_b: Amount,
    burned: Shares,
}

impl WithdrawalOutcome {
    /// Returns the amount of token A returned.
    #[must_use]
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Returns the amount of token B returned.
    #[must_use]
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Returns the shares burned from the position.
    #[must_use]
    pub const fn burned(&self) -> Shares {
        self.burned
    }
}

/// Authoritative state of one two-asset constant-product pool: both
/// reserves, the total share supply, and the immutable fee rate.
///
/// Every mutation is fail-clean: amounts are computed and validated on
/// stack copies first, and the ledger's fields are only assigned once no
/// further failure is possible. An `Err` from any method leaves the ledger
/// exactly as it was.
///
/// The ledger itself is single-threaded; concurrent access goes through
/// [`PoolRegistry`](super::PoolRegistry), which wraps each ledger in its
/// own mutex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveLedger {
    fee_rate: FeeRate,
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

impl ReserveLedger {
    /// Bootstraps a pool from its founding deposit.
    ///
    /// The founder receives `isqrt(initial_a × initial_b)` shares — the
    /// geometric mean values both sides equally regardless of the price
    /// the deposit implies.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInitialDeposit`] if the geometric mean falls
    ///   below [`MIN_INITIAL_SHARES`].
    /// - [`AmmError::Overflow`] if the deposit product overflows.
    pub fn initialize(config: &PoolConfig) -> crate::error::Result<(Self, Shares)> {
        let product = config
            .initial_a()
            .checked_mul(&config.initial_b())
            .ok_or(AmmError::Overflow("founding deposit product overflow"))?;
        let founding = Shares::new(isqrt(product.get()));
        if founding < MIN_INITIAL_SHARES {
            return Err(AmmError::InvalidInitialDeposit(
                "founding deposit below minimum share threshold",
            ));
        }
        let ledger = Self {
            fee_rate: config.fee_rate(),
            reserve_a: config.initial_a(),
            reserve_b: config.initial_b(),
            total_shares: founding,
        };
        tracing::debug!(
            reserve_a = %ledger.reserve_a,
            reserve_b = %ledger.reserve_b,
            shares = %founding,
            "pool initialized"
        );
        Ok((ledger, founding))
    }

    /// Returns the pool's fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Returns the token A reserve.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the token B reserve.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the total share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the reserves oriented for a swap: `(reserve_in, reserve_out)`.
    #[must_use]
    pub const fn oriented_reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        if direction.is_a_to_b() {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Quotes an exact-input swap against the current reserves without
    /// mutating anything.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`quote::quote_exact_in`].
    pub fn quote_exact_in(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        tolerance: BasisPoints,
    ) -> crate::error::Result<Quote> {
        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        quote::quote_exact_in(reserve_in, reserve_out, self.fee_rate, amount_in, tolerance)
    }

    /// Quotes the token B amount required to pair with `desired_a` at the
    /// current reserve ratio.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`quote::proportional_deposit`].
    pub fn proportional_amount_b(&self, desired_a: Amount) -> crate::error::Result<Amount> {
        quote::proportional_deposit(self.reserve_a, self.reserve_b, desired_a)
    }

    /// Commits an exact-input swap.
    ///
    /// The output is recomputed from the live reserves at commit time, so a
    /// stale quote can never execute at a better price than the pool
    /// currently offers — it either clears `min_amount_out` or the swap
    /// fails with no state change.
    ///
    /// # Errors
    ///
    /// - The quoting errors of [`quote::swap_exact_in`].
    /// - [`AmmError::SlippageExceeded`] if the recomputed output falls
    ///   below `min_amount_out`.
    /// - [`AmmError::InvariantViolation`] if the staged reserves would
    ///   shrink the constant product (never reachable from this formula;
    ///   kept as a commit-time re-validation).
    pub fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<SwapOutcome> {
        let (reserve_in, reserve_out) = self.oriented_reserves(direction);

        let amount_out = quote::swap_exact_in(reserve_in, reserve_out, self.fee_rate, amount_in)?;
        if amount_out < min_amount_out {
            return Err(AmmError::SlippageExceeded(
                "recomputed output below the caller's minimum",
            ));
        }

        // The fee is the input fraction the retained-share truncation left
        // behind; it stays in the input-side reserve.
        let after_fee = self
            .fee_rate
            .retained()
            .apply(amount_in, Rounding::Down)?;
        let fee = amount_in.safe_sub(&after_fee)?;

        let new_reserve_in = reserve_in.safe_add(&amount_in)?;
        let new_reserve_out = reserve_out.safe_sub(&amount_out)?;

        let k_before = reserve_in
            .checked_mul(&reserve_out)
            .ok_or(AmmError::Overflow("constant product overflow"))?;
        let k_after = new_reserve_in
            .checked_mul(&new_reserve_out)
            .ok_or(AmmError::Overflow("constant product overflow"))?;
        if k_after < k_before {
            return Err(AmmError::InvariantViolation);
        }

        let outcome = SwapOutcome::new(amount_in, amount_out, fee)?;

        if direction.is_a_to_b() {
            self.reserve_a = new_reserve_in;
            self.reserve_b = new_reserve_out;
        } else {
            self.reserve_b = new_reserve_in;
            self.reserve_a = new_reserve_out;
        }
        tracing::debug!(
            direction = %direction,
            %amount_in,
            %amount_out,
            %fee,
            "swap committed"
        );
        Ok(outcome)
    }

    /// Commits a liquidity deposit, trimming the desired amounts to the
    /// current reserve ratio and minting proportional shares.
    ///
    /// Exactly one desired side is taken in full; the other is reduced to
    /// keep the deposit on ratio. If every share has previously been
    /// withdrawn the pool is empty and the deposit re-founds it, taking
    /// both desired amounts in full.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either desired amount is zero or
    ///   the trimmed deposit is too small to mint a share.
    /// - [`AmmError::SlippageExceeded`] if a trimmed amount falls below
    ///   its `min_*` bound.
    /// - [`AmmError::InvalidInitialDeposit`] when re-founding an empty
    ///   pool below the minimum share threshold.
    /// - [`AmmError::Overflow`] on intermediate overflow.
    pub fn add_liquidity(
        &mut self,
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
        position: &mut LiquidityPosition,
    ) -> crate::error::Result<DepositOutcome> {
        if desired_a.is_zero() || desired_b.is_zero() {
            return Err(AmmError::InvalidAmount(
                "both sides of a deposit must be non-zero",
            ));
        }

        if self.total_shares.is_zero() {
            return self.refound(desired_a, desired_b, min_a, min_b, position);
        }

        let required_b = self.proportional_amount_b(desired_a)?;
        let (use_a, use_b) = if required_b <= desired_b {
            (desired_a, required_b)
        } else {
            let required_a =
                quote::proportional_deposit(self.reserve_b, self.reserve_a, desired_b)?;
            (required_a, desired_b)
        };
        if use_a < min_a || use_b < min_b {
            return Err(AmmError::SlippageExceeded(
                "ratio-trimmed deposit below the caller's minimum",
            ));
        }

        // Mint on the less favorable side so rounding never dilutes
        // existing holders.
        let total = self.total_shares.as_amount();
        let by_a = mul_div(use_a, total, self.reserve_a, Rounding::Down)?;
        let by_b = mul_div(use_b, total, self.reserve_b, Rounding::Down)?;
        let minted = Shares::new(by_a.min(by_b).get());
        if minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint a share"));
        }

        let new_reserve_a = self.reserve_a.safe_add(&use_a)?;
        let new_reserve_b = self.reserve_b.safe_add(&use_b)?;
        let new_total = self.total_shares.safe_add(&minted)?;

        position.credit(minted)?;
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        tracing::debug!(
            amount_a = %use_a,
            amount_b = %use_b,
            %minted,
            "liquidity added"
        );
        Ok(DepositOutcome {
            amount_a: use_a,
            amount_b: use_b,
            minted,
        })
    }

    /// Founding path for a pool whose shares were all withdrawn.
    fn refound(
        &mut self,
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
        position: &mut LiquidityPosition,
    ) -> crate::error::Result<DepositOutcome> {
        if desired_a < min_a || desired_b < min_b {
            return Err(AmmError::SlippageExceeded(
                "deposit below the caller's minimum",
            ));
        }
        let product = desired_a
            .checked_mul(&desired_b)
            .ok_or(AmmError::Overflow("founding deposit product overflow"))?;
        let minted = Shares::new(isqrt(product.get()));
        if minted < MIN_INITIAL_SHARES {
            return Err(AmmError::InvalidInitialDeposit(
                "founding deposit below minimum share threshold",
            ));
        }

        position.credit(minted)?;
        self.reserve_a = desired_a;
        self.reserve_b = desired_b;
        self.total_shares = minted;
        tracing::debug!(
            amount_a = %desired_a,
            amount_b = %desired_b,
            %minted,
            "empty pool re-founded"
        );
        Ok(DepositOutcome {
            amount_a: desired_a,
            amount_b: desired_b,
            minted,
        })
    }

    /// Commits a withdrawal: burns `shares` and returns the proportional
    /// slice of both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShares`] if `shares` exceeds the
    ///   position's balance.
    /// - [`AmmError::InsufficientLiquidity`] if the pool has no shares
    ///   outstanding.
    /// - [`AmmError::SlippageExceeded`] if a redeemed amount falls below
    ///   its `min_*` bound.
    pub fn remove_liquidity(
        &mut self,
        shares: Shares,
        min_a: Amount,
        min_b: Amount,
        position: &mut LiquidityPosition,
    ) -> crate::error::Result<WithdrawalOutcome> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("share amount must be non-zero"));
        }
        if shares > position.shares() {
            return Err(AmmError::InsufficientShares);
        }
        if self.total_shares.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let total = self.total_shares.as_amount();
        let amount_a = mul_div(self.reserve_a, shares.as_amount(), total, Rounding::Down)?;
        let amount_b = mul_div(self.reserve_b, shares.as_amount(), total, Rounding::Down)?;
        if amount_a < min_a || amount_b < min_b {
            return Err(AmmError::SlippageExceeded(
                "redeemed amounts below the caller's minimum",
            ));
        }

        let new_reserve_a = self.reserve_a.safe_sub(&amount_a)?;
        let new_reserve_b = self.reserve_b.safe_sub(&amount_b)?;
        let new_total = self.total_shares.safe_sub(&shares)?;

        position.debit(shares)?;
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        tracing::debug!(
            %amount_a,
            %amount_b,
            burned = %shares,
            "liquidity removed"
        );
        Ok(WithdrawalOutcome {
            amount_a,
            amount_b,
            burned: shares,
        })
    }
}

impl fmt::Display for ReserveLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReserveLedger(a={}, b={}, shares={}, fee={})",
            self.reserve_a, self.reserve_b, self.total_shares, self.fee_rate
        )
    }
}
