//! Frame counter driving the scripted actor motion.
//!
//! The clock counts rendered frames, not wall time. The motion tables are
//! keyed by `tick = frame mod 720`, so one full scripted cycle lasts 720
//! frames regardless of how fast they are produced.

use serde::Serialize;

/// Length of one scripted motion cycle in ticks.
pub const CYCLE_TICKS: u32 = 720;

/// Frame value before the first advance. The first advanced frame is 0.
pub const INITIAL_FRAME: i64 = -1;

/// Pausable frame counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimationClock {
    frame: i64,
    paused: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// A running clock positioned just before frame 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: INITIAL_FRAME,
            paused: false,
        }
    }

    /// Advance one frame unless paused. Returns whether the frame moved.
    pub fn advance(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.frame += 1;
        true
    }

    /// Current frame counter.
    #[must_use]
    pub fn frame(&self) -> i64 {
        self.frame
    }

    /// Position in the motion cycle, always in `[0, CYCLE_TICKS)`.
    #[must_use]
    pub fn tick(&self) -> u32 {
        self.frame.rem_euclid(i64::from(CYCLE_TICKS)) as u32
    }

    /// Whether the current frame starts a cycle after the first one.
    #[must_use]
    pub fn wrapped(&self) -> bool {
        self.frame > 0 && self.tick() == 0
    }

    /// Jump to an arbitrary frame (used by scripted viewpoints).
    pub fn set_frame(&mut self, frame: i64) {
        self.frame = frame;
    }

    /// Whether advancement is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend or resume advancement.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Flip the pause state, returning the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Back to the initial frame, running.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_advance_reaches_frame_zero() {
        let mut clock = AnimationClock::new();
        assert_eq!(clock.frame(), -1);
        assert!(clock.advance());
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.tick(), 0);
        assert!(!clock.wrapped());
    }

    #[test]
    fn tick_stays_in_cycle() {
        let mut clock = AnimationClock::new();
        for _ in 0..2000 {
            let _ = clock.advance();
            assert!(clock.tick() < CYCLE_TICKS);
        }
        assert_eq!(clock.frame(), 1999);
        assert_eq!(clock.tick(), 1999 % 720);
    }

    #[test]
    fn negative_frame_maps_into_cycle() {
        let mut clock = AnimationClock::new();
        clock.set_frame(-1);
        assert_eq!(clock.tick(), 719);
        clock.set_frame(-721);
        assert_eq!(clock.tick(), 719);
    }

    #[test]
    fn wrap_detected_on_cycle_boundary() {
        let mut clock = AnimationClock::new();
        clock.set_frame(719);
        assert!(!clock.wrapped());
        let _ = clock.advance();
        assert_eq!(clock.tick(), 0);
        assert!(clock.wrapped());
    }

    #[test]
    fn pause_freezes_frame() {
        let mut clock = AnimationClock::new();
        let _ = clock.advance();
        assert!(clock.toggle_pause());
        assert!(!clock.advance());
        assert!(!clock.advance());
        assert_eq!(clock.frame(), 0);
        assert!(!clock.toggle_pause());
        assert!(clock.advance());
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn reset_restores_initial_frame_and_unpauses() {
        let mut clock = AnimationClock::new();
        clock.set_frame(400);
        clock.set_paused(true);
        clock.reset();
        assert_eq!(clock, AnimationClock::new());
    }
}
