//! Step counter and play/pause flag.
//!
//! The controller is pure state. Starting and stopping the repeating timer is
//! the owning [`App`](crate::App)'s job; the controller only decides whether a
//! tick or a manual advance is allowed.

use embedscope_types::Step;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationController {
    step: Step,
    playing: bool,
}

impl AnimationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip the play flag. Returns the new value.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Advance on a timer tick. Ticks that arrive while paused are ignored.
    pub fn on_tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.step = self.step.next();
        true
    }

    /// Manual advance. Disabled while playing.
    pub fn next_step(&mut self) -> bool {
        if self.playing {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn reset(&mut self) {
        self.step = Step::FIRST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: u8) -> AnimationController {
        let mut controller = AnimationController::new();
        for _ in 0..value {
            controller.next_step();
        }
        controller
    }

    #[test]
    fn next_step_wraps_from_every_step() {
        for value in 0..4u8 {
            let mut controller = at(value);
            assert_eq!(controller.step().value(), value);
            assert!(controller.next_step());
            assert_eq!(controller.step().value(), (value + 1) % 4);
        }
    }

    #[test]
    fn next_step_is_noop_while_playing() {
        let mut controller = at(2);
        controller.toggle_play();
        let before = controller;
        assert!(!controller.next_step());
        assert_eq!(controller, before);
    }

    #[test]
    fn tick_ignored_while_paused() {
        let mut controller = at(1);
        assert!(!controller.on_tick());
        assert_eq!(controller.step().value(), 1);
    }

    #[test]
    fn tick_advances_while_playing() {
        let mut controller = at(3);
        assert!(controller.toggle_play());
        assert!(controller.on_tick());
        assert_eq!(controller.step(), Step::FIRST);
    }

    #[test]
    fn toggle_play_flips() {
        let mut controller = AnimationController::new();
        assert!(controller.toggle_play());
        assert!(controller.is_playing());
        assert!(!controller.toggle_play());
        assert!(!controller.is_playing());
    }

    #[test]
    fn reset_keeps_play_state() {
        let mut controller = at(3);
        controller.toggle_play();
        controller.reset();
        assert_eq!(controller.step(), Step::FIRST);
        assert!(controller.is_playing());
    }
}
