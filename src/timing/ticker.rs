/*
Tick Timer
==========

The frame loop only promises "you will run again next frame". There is no
blocking wait, so every delay, fade and play-wait is a countdown that the
owner decrements once per frame with that frame's delta time.

Usage pattern inside a state machine:

    timer.reset(0.25);   // arm
    ...                  // next frame: skip (the arm step)
    while timer.tick(dt) { ... }   // one call per frame

The arm step guarantees at least one frame passes even for a zero duration,
so a channel that was just told to play gets a frame to actually start.

  remaining   1.0 ┐╲
   fraction       │ ╲
                  │  ╲
              0.0 └───╲──→ frames
                  reset  expired (tick returned false)
*/

/// Restartable countdown driven by an external per-frame delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickTimer {
    duration: f32,
    remaining: f32,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting down from `duration` seconds.
    pub fn reset(&mut self, duration: f32) {
        self.duration = duration;
        self.remaining = duration;
    }

    /// Subtract one frame's worth of time.
    ///
    /// Returns true while time remains. The call that crosses zero returns
    /// false, and so does every call after it.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining > 0.0
    }

    /// 1.0 right after `reset`, falling towards (and past) 0.0.
    ///
    /// A zero-length timer reports 0.0 rather than dividing by zero.
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.remaining / self.duration
    }

    /// 0.0 right after `reset`, rising towards (and past) 1.0.
    pub fn elapsed_fraction(&self) -> f32 {
        1.0 - self.remaining_fraction()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_tick_keeps_running() {
        let mut timer = TickTimer::new();
        timer.reset(1.0);

        assert!(timer.tick(0.5));
        assert!((timer.remaining_fraction() - 0.5).abs() < 1e-6);
        assert!((timer.elapsed_fraction() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn crossing_tick_returns_false_exactly_once_per_crossing() {
        for duration in [0.016_f32, 0.2, 1.0, 3.75] {
            let mut timer = TickTimer::new();
            timer.reset(duration);

            assert!(timer.tick(duration / 2.0));
            assert!(!timer.tick(duration / 2.0 + 1e-4));
            assert!(timer.remaining_fraction() <= 0.0);
            assert!(timer.is_expired());
        }
    }

    #[test]
    fn exact_duration_counts_as_expired() {
        let mut timer = TickTimer::new();
        timer.reset(0.5);

        assert!(!timer.tick(0.5));
    }

    #[test]
    fn zero_duration_is_guarded() {
        let mut timer = TickTimer::new();
        timer.reset(0.0);

        assert_eq!(timer.remaining_fraction(), 0.0);
        assert_eq!(timer.elapsed_fraction(), 1.0);
        assert!(!timer.tick(0.016));
    }

    #[test]
    fn reset_restarts_a_spent_timer() {
        let mut timer = TickTimer::new();
        timer.reset(0.1);
        while timer.tick(0.03) {}

        timer.reset(0.3);
        assert_eq!(timer.remaining_fraction(), 1.0);
        assert!(timer.tick(0.1));
    }
}
