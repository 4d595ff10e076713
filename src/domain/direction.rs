//! Swap direction over a two-asset pool.

use core::fmt;

/// Which side of the pool is being sold.
///
/// A pool holds reserves of token A and token B; the direction orients the
/// constant-product formula by selecting which reserve is the input side.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::SwapDirection;
///
/// let d = SwapDirection::AToB;
/// assert_eq!(d.opposite(), SwapDirection::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token A, receive token B.
    AToB,
    /// Sell token B, receive token A.
    BToA,
}

impl SwapDirection {
    /// Returns `true` if token A is the input side.
    #[must_use]
    pub const fn is_a_to_b(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// Returns the reversed direction.
    pub const fn opposite(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}
