use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A playable clip as far as the dispatcher is concerned: a name for the
/// output channel to resolve, and its length in seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub name: Arc<str>,
    pub length: f32,
}

impl Clip {
    pub fn new(name: &str, length: f32) -> Self {
        Self {
            name: Arc::from(name),
            length: length.max(0.0),
        }
    }
}

/// Output routing group a channel is attached to (a mixer group).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusId(pub Arc<str>);

impl BusId {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Broad category of a clip, used for category-wide stops.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClipCategory {
    #[default]
    Sfx,
    Bgm,
}

/// Which clip a command plays.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipSelection {
    /// Always the same clip.
    Fixed(Clip),
    /// Uniformly random pick among alternatives on every play.
    Random(Vec<Clip>),
}

impl ClipSelection {
    /// Resolve the clip for one play. `None` for an empty random set.
    pub fn pick(&self, rng: &mut fastrand::Rng) -> Option<&Clip> {
        match self {
            ClipSelection::Fixed(clip) => Some(clip),
            ClipSelection::Random(clips) if clips.is_empty() => None,
            ClipSelection::Random(clips) => clips.get(rng.usize(..clips.len())),
        }
    }
}
