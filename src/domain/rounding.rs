//! Explicit rounding direction for integer division.

/// Rounding direction for division on domain types.
///
/// Every division in the core takes an explicit `Rounding` so the
/// direction of the truncation error is always a deliberate choice: the
/// protocol rounds its own payouts down and the caller's obligations up.
///
/// # Examples
///
/// ```
/// use defi_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
