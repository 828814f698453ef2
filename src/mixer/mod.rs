// Purpose: bus mute/unmute through named mixer parameters

pub mod config;
pub mod params;

use float_cmp::approx_eq;

pub use config::{ConfigError, GainConfig};
pub use params::{MixerParams, ParamTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mixer buses with a user-facing on/off switch.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixerBus {
    Master,
    Bgm,
    Sfx,
}

impl MixerBus {
    pub const ALL: [MixerBus; 3] = [MixerBus::Master, MixerBus::Bgm, MixerBus::Sfx];
}

impl std::fmt::Display for MixerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MixerBus::Master => "master",
            MixerBus::Bgm => "bgm",
            MixerBus::Sfx => "sfx",
        };
        f.write_str(name)
    }
}

/// Mute flags of all three buses at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MuteState {
    pub master: bool,
    pub bgm: bool,
    pub sfx: bool,
}

/// Switches bus volumes between their on and off gains.
///
/// Every call is a no-op on an incomplete configuration; `validate` reports
/// what is missing.
pub struct GainController<M: MixerParams> {
    mixer: Option<M>,
    config: GainConfig,
}

impl<M: MixerParams> GainController<M> {
    /// A controller with no mixer attached yet.
    pub fn new(config: GainConfig) -> Self {
        Self {
            mixer: None,
            config,
        }
    }

    pub fn with_mixer(config: GainConfig, mixer: M) -> Self {
        Self {
            mixer: Some(mixer),
            config,
        }
    }

    pub fn attach(&mut self, mixer: M) {
        self.mixer = Some(mixer);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mixer.is_none() {
            return Err(ConfigError::MissingMixer);
        }
        let missing = self.config.missing_params();
        if !missing.is_empty() {
            return Err(ConfigError::MissingParams(missing));
        }
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Write the bus gain: `max_db` when active, `min_db` otherwise.
    pub fn set_active(&mut self, bus: MixerBus, active: bool) {
        if let Err(err) = self.validate() {
            log::warn!("cannot switch {bus} bus: {err}");
            return;
        }
        let value = if active {
            self.config.max_db
        } else {
            self.config.min_db
        };
        let (Some(mixer), Some(name)) = (self.mixer.as_mut(), self.config.param_name(bus)) else {
            return;
        };
        if !mixer.set_param(name, value) {
            log::warn!("mixer does not expose '{name}' ({bus} volume)");
        }
    }

    /// True when the bus gain sits on the mute anchor.
    ///
    /// Reads as unmuted when the controller is not configured or the mixer
    /// cannot report the parameter.
    pub fn is_muted(&self, bus: MixerBus) -> bool {
        let Some(gain) = self.gain(bus) else {
            return false;
        };
        approx_eq!(
            f32,
            gain,
            self.config.mute_anchor_db,
            epsilon = self.config.tolerance
        )
    }

    /// Current gain of `bus` in dB.
    pub fn gain(&self, bus: MixerBus) -> Option<f32> {
        if !self.is_configured() {
            return None;
        }
        let name = self.config.param_name(bus)?;
        self.mixer.as_ref()?.param(name)
    }

    /// Snapshot for UI bindings; `None` when not configured.
    pub fn mute_state(&self) -> Option<MuteState> {
        if !self.is_configured() {
            return None;
        }
        Some(MuteState {
            master: self.is_muted(MixerBus::Master),
            bgm: self.is_muted(MixerBus::Bgm),
            sfx: self.is_muted(MixerBus::Sfx),
        })
    }

    pub fn config(&self) -> &GainConfig {
        &self.config
    }

    pub fn mixer(&self) -> Option<&M> {
        self.mixer.as_ref()
    }
}
