//! Simulation step counter.
//!
//! Time is represented as a monotonically increasing `Step` counter — one
//! step per simulator stepping call.  The mapping to simulated seconds is the
//! simulator's business (SUMO-style engines default to 1 s per step); nothing
//! in this workspace depends on it.

use std::fmt;

/// An absolute simulation step counter.
///
/// Stored as `u64` to avoid overflow concerns for any conceivable run length.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// Return the step `n` after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
