//! Benchmarks for voice stepping and dispatch.

mod dispatch;
mod update;

pub use dispatch::bench_dispatch;
pub use update::bench_update;

use saavy_cue::{
    dispatch::Dispatcher,
    output::{ChannelFactory, SimulatedChannel},
    voice::VoiceId,
    EngineConfig,
};

pub const DT: f32 = 1.0 / 60.0;

/// A dispatcher prewarmed to `size` voices backed by simulated channels.
pub fn pool(size: usize) -> Dispatcher<impl ChannelFactory<Channel = SimulatedChannel>> {
    Dispatcher::new(
        EngineConfig::default().prewarm_voices(size).seed(1),
        |_: VoiceId| SimulatedChannel::new(),
    )
}
