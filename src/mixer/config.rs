#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MixerBus;

/// Where the bus volumes live on the mixer, and what on/off/muted mean.
///
/// Defaults follow the usual mixer range of [-80, 0] dB. The mute anchor is
/// explicit: it defaults to `min_db`, but a mixer whose "off" gain is not the
/// floor of its range can point it elsewhere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct GainConfig {
    pub master_param: Option<String>,
    pub bgm_param: Option<String>,
    pub sfx_param: Option<String>,
    /// Gain written when a bus is activated.
    pub max_db: f32,
    /// Gain written when a bus is deactivated.
    pub min_db: f32,
    /// A bus reads as muted when its gain is within `tolerance` of this.
    pub mute_anchor_db: f32,
    pub tolerance: f32,
}

impl GainConfig {
    pub fn params(master: &str, bgm: &str, sfx: &str) -> Self {
        Self {
            master_param: Some(master.to_string()),
            bgm_param: Some(bgm.to_string()),
            sfx_param: Some(sfx.to_string()),
            ..Self::default()
        }
    }

    /// Set the on/off gains. The mute anchor follows `min_db`.
    pub fn range(mut self, min_db: f32, max_db: f32) -> Self {
        self.min_db = min_db;
        self.max_db = max_db;
        self.mute_anchor_db = min_db;
        self
    }

    pub fn mute_anchor(mut self, db: f32, tolerance: f32) -> Self {
        self.mute_anchor_db = db;
        self.tolerance = tolerance.abs();
        self
    }

    /// Parameter name for `bus`, if configured and non-empty.
    pub fn param_name(&self, bus: MixerBus) -> Option<&str> {
        let name = match bus {
            MixerBus::Master => &self.master_param,
            MixerBus::Bgm => &self.bgm_param,
            MixerBus::Sfx => &self.sfx_param,
        };
        name.as_deref().filter(|n| !n.is_empty())
    }

    /// Buses with no usable parameter name.
    pub fn missing_params(&self) -> Vec<MixerBus> {
        MixerBus::ALL
            .into_iter()
            .filter(|&bus| self.param_name(bus).is_none())
            .collect()
    }
}

impl Default for GainConfig {
    fn default() -> Self {
        Self {
            master_param: None,
            bgm_param: None,
            sfx_param: None,
            max_db: 0.0,
            min_db: -80.0,
            mute_anchor_db: -80.0,
            tolerance: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no audio mixer attached")]
    MissingMixer,
    #[error("missing volume parameter name for {}", list_buses(.0))]
    MissingParams(Vec<MixerBus>),
}

fn list_buses(buses: &[MixerBus]) -> String {
    buses
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
