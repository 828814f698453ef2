// Purpose: frame-driven time keeping
// Nothing here sleeps; everything counts down on the host's frame delta.

/// Monotonic clock used to stamp dispatches.
pub mod clock;
/// Countdown primitive behind every delay, fade and play-wait.
pub mod ticker;

pub use clock::FrameClock;
pub use ticker::TickTimer;
