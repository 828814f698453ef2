#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ClipCategory, CommandId};

/// How a voice sustains its clip once the output is running.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopPolicy {
    /// Play once, then free the voice.
    #[default]
    Off,
    /// Loop until explicitly stopped.
    Infinite,
    /// Loop for `n` clip lengths, then stop. `Repeat(0)` behaves like `Infinite`.
    Repeat(u32),
}

impl LoopPolicy {
    pub fn is_looping(self) -> bool {
        !matches!(self, LoopPolicy::Off)
    }

    /// Number of clip lengths to play before stopping, if bounded.
    pub fn repeat_count(self) -> Option<u32> {
        match self {
            LoopPolicy::Repeat(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}

/// How the output starts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StartPolicy {
    /// Seconds before the output starts.
    pub delay: f32,
    /// Seconds of linear volume ramp after the output starts.
    pub fade_in: f32,
}

/// Stop voices playing specific commands.
#[derive(Debug, Clone, PartialEq)]
pub struct StopOthers {
    pub commands: Vec<CommandId>,
    pub fade_out: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopCategory {
    pub category: ClipCategory,
    pub fade_out: f32,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAll {
    pub fade_out: f32,
}
