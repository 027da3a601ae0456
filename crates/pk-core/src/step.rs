//! Simulation step counter.
//!
//! The simulator has no wall clock; one step is one park-or-pick decision.

use std::fmt;

/// An absolute simulation step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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

/// Steps elapsed from `rhs` to `self`; 0 if `rhs` is later.
impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0.saturating_sub(rhs.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
