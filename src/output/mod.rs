// Purpose: boundary to the platform audio channel
// The dispatcher never renders audio; it drives channels through this trait.

pub mod simulated;

use crate::{
    command::{BusId, Clip},
    voice::VoiceId,
};

pub use simulated::SimulatedChannel;

/// One hardware/engine audio channel, owned by exactly one voice.
pub trait OutputChannel {
    fn set_clip(&mut self, clip: Option<Clip>);

    fn set_bus(&mut self, bus: Option<BusId>);

    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    fn set_loop(&mut self, looping: bool);

    /// Start the assigned clip from the top. No-op without a clip.
    fn play(&mut self);

    fn stop(&mut self);

    fn is_playing(&self) -> bool;

    /// Length of the assigned clip in seconds, 0.0 without a clip.
    fn clip_length(&self) -> f32;

    /// Advance channels that render in lockstep with the frame clock.
    ///
    /// Channels backed by a real audio thread keep the default no-op.
    fn advance(&mut self, _dt: f32) {}
}

/// Creates the channel for a new voice when the pool grows.
pub trait ChannelFactory {
    type Channel: OutputChannel;

    fn create_channel(&mut self, voice: VoiceId) -> Self::Channel;
}

impl<F, C> ChannelFactory for F
where
    F: FnMut(VoiceId) -> C,
    C: OutputChannel,
{
    type Channel = C;

    fn create_channel(&mut self, voice: VoiceId) -> Self::Channel {
        self(voice)
    }
}
