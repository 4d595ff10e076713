//! Arithmetic utilities for AMM calculations.
//!
//! Everything here is plain `u128` integer math: checked operations via
//! [`CheckedArithmetic`], the `a * b / c` primitive [`mul_div`], and the
//! integer square root used to derive founding shares.

mod checked;

pub use checked::{isqrt, mul_div, CheckedArithmetic};
