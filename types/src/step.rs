//! Animation step counter.

use thiserror::Error;

/// Number of animation phases every architecture walks through.
pub const STEP_COUNT: u8 = 4;

/// A discrete animation phase, always in `0..STEP_COUNT`.
///
/// The only ways to obtain a `Step` are [`Step::FIRST`], [`Step::next`] and the
/// checked constructors, so an out-of-range step cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Step(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step {0} is out of range (expected 0..=3)")]
pub struct StepOutOfRange(pub u8);

impl Step {
    pub const FIRST: Step = Step(0);
    pub const LAST: Step = Step(STEP_COUNT - 1);

    pub const fn new(value: u8) -> Result<Self, StepOutOfRange> {
        if value < STEP_COUNT {
            Ok(Self(value))
        } else {
            Err(StepOutOfRange(value))
        }
    }

    /// The following step, wrapping from the last back to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % STEP_COUNT)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based step number as shown in the step banner.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Whether a node with the given activation threshold is lit at this step.
    #[must_use]
    pub const fn reaches(self, threshold: u8) -> bool {
        self.0 >= threshold
    }

    pub fn all() -> impl Iterator<Item = Step> {
        (0..STEP_COUNT).map(Step)
    }
}

impl TryFrom<u8> for Step {
    type Error = StepOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}
