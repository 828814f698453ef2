pub mod command; // Declarative play requests
pub mod dispatch; // Voice pool, limits and stop policies
pub mod engine;
pub mod mixer; // Bus mute/unmute through named mixer parameters
pub mod output;
pub mod timing;
pub mod voice; // Playback slot lifecycle

pub use engine::{Engine, EngineConfig};

/// Shortest time a non-looping clip holds its voice, in seconds.
/// Shorter clips could otherwise be stopped before the output starts.
pub const MIN_AUDIBLE_DURATION: f32 = 0.08;
/// Voices created up front.
pub const DEFAULT_PREWARM_VOICES: usize = 5;
/// Two dispatches closer than this count as the same frame. Well under one
/// frame at any realistic rate (16ms at 60fps).
pub const SAME_FRAME_TOLERANCE: f64 = 0.001;
