use std::collections::HashMap;

/// Named float parameters exposed by an audio mixer (volumes in dB).
pub trait MixerParams {
    /// Returns false if the mixer does not expose `name`.
    fn set_param(&mut self, name: &str, value: f32) -> bool;

    fn param(&self, name: &str) -> Option<f32>;
}

/// In-memory mixer with a fixed set of exposed parameters.
#[derive(Debug, Clone, Default)]
pub struct ParamTable {
    values: HashMap<String, f32>,
}

impl ParamTable {
    /// Expose `names`, each starting at 0 dB.
    pub fn exposing(names: &[&str]) -> Self {
        Self {
            values: names.iter().map(|n| (n.to_string(), 0.0)).collect(),
        }
    }
}

impl MixerParams for ParamTable {
    fn set_param(&mut self, name: &str, value: f32) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn param(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }
}
