#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_PREWARM_VOICES, MIN_AUDIBLE_DURATION, SAME_FRAME_TOLERANCE};

/// Dispatcher tuning.
///
/// ```
/// use saavy_cue::EngineConfig;
///
/// let config = EngineConfig::default().prewarm_voices(8).log_warnings(true);
/// assert_eq!(config.prewarm_voices, 8);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Voices created before the first dispatch.
    pub prewarm_voices: usize,
    /// Play-wait floor for non-looping clips (seconds).
    pub min_audible: f32,
    /// Dispatch-time tolerance for the per-frame instance limit (seconds).
    pub same_frame_tolerance: f64,
    /// Log when a command is dropped by an instance or frame limit.
    pub log_warnings: bool,
    /// Log every successful dispatch.
    pub log_plays: bool,
    /// Seed for random clip selection. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn prewarm_voices(mut self, count: usize) -> Self {
        self.prewarm_voices = count;
        self
    }

    pub fn min_audible(mut self, seconds: f32) -> Self {
        self.min_audible = seconds.max(0.0);
        self
    }

    pub fn same_frame_tolerance(mut self, seconds: f64) -> Self {
        self.same_frame_tolerance = seconds.max(0.0);
        self
    }

    pub fn log_warnings(mut self, enabled: bool) -> Self {
        self.log_warnings = enabled;
        self
    }

    pub fn log_plays(mut self, enabled: bool) -> Self {
        self.log_plays = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prewarm_voices: DEFAULT_PREWARM_VOICES,
            min_audible: MIN_AUDIBLE_DURATION,
            same_frame_tolerance: SAME_FRAME_TOLERANCE,
            log_warnings: false,
            log_plays: false,
            seed: None,
        }
    }
}
