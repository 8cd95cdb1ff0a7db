use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress marker for a lesson walk-through.
///
/// A step only ever moves forward, one unit at a time, and saturates at the
/// script's final step.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    /// Creates a step at the given position.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the underlying u8 value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The next step, clamped to `max`. At or beyond `max` this is a no-op.
    #[must_use]
    pub fn next_clamped(self, max: Step) -> Self {
        if self < max {
            Self(self.0 + 1)
        } else {
            self
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({})", self.0)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
