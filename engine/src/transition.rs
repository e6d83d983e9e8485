//! Highlight fade after a step change.

use std::time::Duration;

use embedscope_types::Step;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Fade from the highlight state of `from` to the current step.
#[derive(Debug, Clone)]
pub struct HighlightTransition {
    from: Step,
    elapsed: Duration,
    duration: Duration,
}

impl HighlightTransition {
    #[must_use]
    pub fn new(from: Step, duration: Duration) -> Self {
        Self {
            from,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Step whose highlights are fading out.
    #[must_use]
    pub fn from(&self) -> Step {
        self.from
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Animation progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
