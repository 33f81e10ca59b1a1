//! Input boundary
//!
//! Raw key events arrive asynchronously; the simulation only consumes them
//! at the start of a tick. `InputTracker` absorbs `key_down`/`key_up` and
//! produces one `TickInput` per frame: movement stays level-triggered
//! (held/not-held) while jump, pause, and confirm are rising edges, so the
//! tracker keeps the previous frame's key state to detect presses.

use crate::sim::TickInput;

/// Abstract key codes. Binding physical keys to these is a presentation
/// concern, not the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pause,
    Confirm,
}

/// Tracks held keys between frames and detects press edges.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    jump: bool,
    pause: bool,
    confirm: bool,
    jump_prev: bool,
    pause_prev: bool,
    confirm_prev: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Jump => self.jump = true,
            Key::Pause => self.pause = true,
            Key::Confirm => self.confirm = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Jump => self.jump = false,
            Key::Pause => self.pause = false,
            Key::Confirm => self.confirm = false,
        }
    }

    /// Snapshot the input for the next tick and roll the edge detectors.
    pub fn tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump && !self.jump_prev,
            pause: self.pause && !self.pause_prev,
            confirm: self.confirm && !self.confirm_prev,
        };
        self.jump_prev = self.jump;
        self.pause_prev = self.pause;
        self.confirm_prev = self.confirm;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_is_level_triggered() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Right);
        assert!(tracker.tick_input().right);
        assert!(tracker.tick_input().right, "held key must stay active");
        tracker.key_up(Key::Right);
        assert!(!tracker.tick_input().right);
    }

    #[test]
    fn test_jump_fires_only_on_the_press_edge() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Jump);
        assert!(tracker.tick_input().jump);
        // Still held: no repeat.
        assert!(!tracker.tick_input().jump);
        tracker.key_up(Key::Jump);
        assert!(!tracker.tick_input().jump);
        // Released and pressed again: a fresh edge.
        tracker.key_down(Key::Jump);
        assert!(tracker.tick_input().jump);
    }

    #[test]
    fn test_press_and_release_between_frames_still_registers() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Pause);
        let input = tracker.tick_input();
        assert!(input.pause);
        tracker.key_up(Key::Pause);
        assert!(!tracker.tick_input().pause);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Key::Left);
        tracker.key_down(Key::Jump);
        let input = tracker.tick_input();
        assert!(input.left);
        assert!(input.jump);
        assert!(!input.right);
        assert!(!input.pause);
        assert!(!input.confirm);
    }
}
