//! Property-based tests for pricing and accounting invariants.
//!
//! Covers the load-bearing guarantees:
//!
//! 1. **Invariant preservation** — the constant product never shrinks
//!    across a committed swap.
//! 2. **Swap reversibility** — a round-trip A→B→A returns ≤ the original.
//! 3. **Exact-out consistency** — buying an exact-in quote's output never
//!    costs more than the original input, and paying that cost really
//!    buys it.
//! 4. **No drain** — a swap always leaves both reserves positive.
//! 5. **Liquidity conservation** — deposit then full withdrawal never
//!    returns more than was deposited.
//! 6. **Price impact bounds** — impact stays within `[0, 10_000]` bp and
//!    slippage bounds stay on the safe side of the quote.
//! 7. **Fail-clean mutations** — a rejected operation leaves the ledger
//!    byte-identical.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, BasisPoints, FeeRate, LiquidityPosition, PoolId, Rounding, Shares, SwapDirection,
};
use crate::ledger::ReserveLedger;
use crate::quote;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn fee_rate(bps: u32) -> FeeRate {
    let Ok(rate) = FeeRate::new(BasisPoints::new(bps)) else {
        panic!("strategy keeps fees fractional");
    };
    rate
}

fn make_pool(ra: u128, rb: u128, fee_bps: u32) -> (ReserveLedger, LiquidityPosition) {
    let Ok(config) = PoolConfig::new(fee_rate(fee_bps), Amount::new(ra), Amount::new(rb)) else {
        panic!("strategy keeps deposits non-zero");
    };
    let Ok((ledger, founding)) = ReserveLedger::initialize(&config) else {
        panic!("strategy keeps deposits above the share threshold");
    };
    (
        ledger,
        LiquidityPosition::with_shares(PoolId::new(0), founding),
    )
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000] to avoid degenerate extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade sizes up to 1% of the smallest strategy reserve and beyond.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=100_000u128
}

/// Fee rates across the realistic tier range, zero included.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=100u32
}

/// Slippage tolerances strictly below 100%.
fn tolerance_strategy() -> impl Strategy<Value = u32> {
    0u32..=9_999u32
}

// ---------------------------------------------------------------------------
// Property 1: Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_shrinks_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
        fee_bps in fee_strategy(),
    ) {
        let (mut ledger, _) = make_pool(ra, rb, fee_bps);
        let k_before = ra * rb;

        let Ok(_) = ledger.swap(SwapDirection::AToB, Amount::new(amount_in), Amount::ZERO)
        else {
            return Ok(());
        };
        let k_after = ledger.reserve_a().get() * ledger.reserve_b().get();

        prop_assert!(
            k_after >= k_before,
            "constant product shrank: {} < {}",
            k_after, k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee_bps in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let (mut ledger, _) = make_pool(ra, rb, fee_bps);

        let Ok(forward) = ledger.swap(SwapDirection::AToB, Amount::new(swap_in), Amount::ZERO)
        else {
            return Ok(());
        };
        let Ok(back) = ledger.swap(SwapDirection::BToA, forward.amount_out(), Amount::ZERO)
        else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out().get() <= swap_in,
            "round-trip created value: final={} > original={}",
            back.amount_out().get(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Exact-out consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_never_exceeds_exact_in(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
        fee_bps in fee_strategy(),
    ) {
        let reserve_in = Amount::new(ra);
        let reserve_out = Amount::new(rb);
        let fee = fee_rate(fee_bps);

        let Ok(amount_out) =
            quote::swap_exact_in(reserve_in, reserve_out, fee, Amount::new(amount_in))
        else {
            return Ok(());
        };
        let Ok(required_in) = quote::swap_exact_out(reserve_in, reserve_out, fee, amount_out)
        else {
            return Ok(());
        };

        // The ceiling-rounded requirement can undercut but never overshoot
        // the input that produced this output.
        prop_assert!(
            required_in.get() <= amount_in,
            "exact-out overpriced: requires {} for output achievable with {}",
            required_in, amount_in
        );

        // And paying the requirement really buys at least that output.
        let Ok(bought) = quote::swap_exact_in(reserve_in, reserve_out, fee, required_in) else {
            return Ok(());
        };
        prop_assert!(
            bought >= amount_out,
            "paying the exact-out price bought {} < {}",
            bought, amount_out
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: No drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_leaves_both_reserves_positive(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=u128::from(u64::MAX),
        fee_bps in fee_strategy(),
    ) {
        let (mut ledger, _) = make_pool(ra, rb, fee_bps);

        let Ok(_) = ledger.swap(SwapDirection::AToB, Amount::new(amount_in), Amount::ZERO)
        else {
            return Ok(());
        };

        prop_assert!(!ledger.reserve_a().is_zero());
        prop_assert!(!ledger.reserve_b().is_zero());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Liquidity conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        desired_a in 100u128..=100_000u128,
    ) {
        let (mut ledger, _) = make_pool(ra, rb, 30);
        let mut depositor = LiquidityPosition::new(PoolId::new(0));

        // Offer plenty of B so only A's side anchors the deposit ratio.
        let Ok(outcome) = ledger.add_liquidity(
            Amount::new(desired_a),
            Amount::new(u128::from(u64::MAX)),
            Amount::ZERO,
            Amount::ZERO,
            &mut depositor,
        ) else {
            return Ok(());
        };

        let Ok(returned) = ledger.remove_liquidity(
            depositor.shares(),
            Amount::ZERO,
            Amount::ZERO,
            &mut depositor,
        ) else {
            return Ok(());
        };

        prop_assert!(
            returned.amount_a() <= outcome.amount_a(),
            "withdrawal profited on A: {} > {}",
            returned.amount_a(), outcome.amount_a()
        );
        prop_assert!(
            returned.amount_b() <= outcome.amount_b(),
            "withdrawal profited on B: {} > {}",
            returned.amount_b(), outcome.amount_b()
        );
        prop_assert!(depositor.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Price impact and slippage bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_bounds_are_consistent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
        fee_bps in fee_strategy(),
        tolerance in tolerance_strategy(),
    ) {
        let Ok(q) = quote::quote_exact_in(
            Amount::new(ra),
            Amount::new(rb),
            fee_rate(fee_bps),
            Amount::new(amount_in),
            BasisPoints::new(tolerance),
        ) else {
            return Ok(());
        };

        prop_assert!(q.price_impact_bps() <= BasisPoints::MAX_PERCENT);
        prop_assert!(q.minimum_amount_out() <= q.amount_out());

        let Ok(max_in) = quote::apply_slippage_tolerance(
            q.amount_in(),
            BasisPoints::new(tolerance),
            Rounding::Up,
        ) else {
            return Ok(());
        };
        prop_assert!(max_in >= q.amount_in());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Fail-clean mutations
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_swap_leaves_ledger_unchanged(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in trade_strategy(),
        fee_bps in fee_strategy(),
    ) {
        let (mut ledger, _) = make_pool(ra, rb, fee_bps);

        let Ok(expected) = quote::swap_exact_in(
            ledger.reserve_a(),
            ledger.reserve_b(),
            ledger.fee_rate(),
            Amount::new(amount_in),
        ) else {
            return Ok(());
        };
        let Some(unreachable_min) = expected.checked_add(&Amount::new(1)) else {
            return Ok(());
        };

        let before = ledger.clone();
        let result = ledger.swap(SwapDirection::AToB, Amount::new(amount_in), unreachable_min);

        prop_assert!(result.is_err());
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn prop_rejected_withdrawal_leaves_ledger_unchanged(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        extra in 1u128..=1_000u128,
    ) {
        let (mut ledger, mut founder) = make_pool(ra, rb, 30);
        let before = ledger.clone();
        let shares_before = founder.shares();

        let too_many = Shares::new(founder.shares().get() + extra);
        let result = ledger.remove_liquidity(
            too_many,
            Amount::ZERO,
            Amount::ZERO,
            &mut founder,
        );

        prop_assert!(result.is_err());
        prop_assert_eq!(ledger, before);
        prop_assert_eq!(founder.shares(), shares_before);
    }
}
