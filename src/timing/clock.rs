/// Monotonic frame clock fed by the host's per-frame delta.
///
/// `now` is what commands are stamped with when they are dispatched, and
/// what the same-frame instance limit compares against.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    now: f64,
    delta: f32,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by one frame.
    ///
    /// Negative or non-finite deltas count as zero so time never runs backwards.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.delta = dt;
        self.now += dt as f64;
        self.frame += 1;
    }

    /// Seconds since the clock was created.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Delta of the most recent frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_time_and_frames() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }

        assert_eq!(clock.frame(), 60);
        assert!((clock.now() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_backwards_and_nan_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        clock.advance(f32::NAN);

        assert_eq!(clock.frame(), 3);
        assert_eq!(clock.delta(), 0.0);
        assert!((clock.now() - 0.5).abs() < 1e-9);
    }
}
