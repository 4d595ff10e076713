//! Fundamental domain value types used throughout the AMM core.
//!
//! All quantities are newtypes with validated constructors: token amounts
//! in integer base units, shares for pool ownership, basis points for fees
//! and tolerances, and a fixed-scale integer price for quote presentation.
//! No type in this module performs floating-point arithmetic.

mod amount;
mod basis_points;
mod direction;
mod fee_rate;
mod pool_id;
mod position;
mod price;
mod rounding;
mod shares;
mod swap_outcome;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use direction::SwapDirection;
pub use fee_rate::FeeRate;
pub use pool_id::PoolId;
pub use position::LiquidityPosition;
pub use price::Price;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_outcome::SwapOutcome;
