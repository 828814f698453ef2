use crate::command::{BusId, Clip};

use super::OutputChannel;

/// A channel that tracks a playhead instead of producing sound.
///
/// It behaves like an engine audio source: `play` starts from the top,
/// a non-looping clip stops by itself once its length has elapsed, and a
/// looping clip wraps around.
#[derive(Debug, Clone)]
pub struct SimulatedChannel {
    clip: Option<Clip>,
    bus: Option<BusId>,
    volume: f32,
    looping: bool,
    playing: bool,
    position: f32,
    starts: u32,
}

impl SimulatedChannel {
    pub fn new() -> Self {
        Self {
            clip: None,
            bus: None,
            volume: 1.0,
            looping: false,
            playing: false,
            position: 0.0,
            starts: 0,
        }
    }

    pub fn clip(&self) -> Option<&Clip> {
        self.clip.as_ref()
    }

    pub fn bus(&self) -> Option<&BusId> {
        self.bus.as_ref()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Playhead in seconds from the top of the clip.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// How many times `play` actually started a clip.
    pub fn starts(&self) -> u32 {
        self.starts
    }
}

impl Default for SimulatedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputChannel for SimulatedChannel {
    fn set_clip(&mut self, clip: Option<Clip>) {
        self.clip = clip;
    }

    fn set_bus(&mut self, bus: Option<BusId>) {
        self.bus = bus;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn play(&mut self) {
        if self.clip.is_none() {
            return;
        }
        self.playing = true;
        self.position = 0.0;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn clip_length(&self) -> f32 {
        self.clip.as_ref().map_or(0.0, |c| c.length)
    }

    fn advance(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let length = self.clip_length();
        self.position += dt;
        if self.position >= length {
            if self.looping && length > 0.0 {
                self.position %= length;
            } else {
                self.playing = false;
                self.position = 0.0;
            }
        }
    }
}
