//! Frame-driven front door: one `update(dt)` per frame runs the whole core.
//!
//! The engine owns the clock, the voice pool and the mixer switches, and is
//! passed explicitly to whoever needs it. Other threads talk to it through a
//! wait-free queue instead of touching its state.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use saavy_cue::{
//!     command::{Clip, Command},
//!     mixer::{GainConfig, GainController, ParamTable},
//!     output::SimulatedChannel,
//!     voice::VoiceId,
//!     Engine, EngineConfig,
//! };
//!
//! let gain = GainController::with_mixer(
//!     GainConfig::params("Master", "Bgm", "Sfx"),
//!     ParamTable::exposing(&["Master", "Bgm", "Sfx"]),
//! );
//! let mut engine = Engine::new(
//!     EngineConfig::default(),
//!     |_: VoiceId| SimulatedChannel::new(),
//!     gain,
//! );
//!
//! let click = Arc::new(Command::new("click", Clip::new("click.wav", 0.1)));
//! assert!(engine.play(&click).is_played());
//! engine.update(1.0 / 60.0);
//! ```

mod config;
mod message;

use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::{Producer, RingBuffer};

use crate::{
    command::Command,
    dispatch::{Dispatcher, PlayOutcome},
    mixer::{GainController, MixerBus, MixerParams},
    output::ChannelFactory,
    timing::FrameClock,
};

pub use config::EngineConfig;
pub use message::{CueMessage, MessageReceiver};

pub struct Engine<F: ChannelFactory, M: MixerParams> {
    clock: FrameClock,
    dispatcher: Dispatcher<F>,
    gain: GainController<M>,
    rx: Option<Box<dyn MessageReceiver + Send>>,
}

impl<F: ChannelFactory, M: MixerParams> Engine<F, M> {
    pub fn new(config: EngineConfig, factory: F, gain: GainController<M>) -> Self {
        if let Err(err) = gain.validate() {
            log::warn!("audio mixer misconfigured: {err}");
        }
        Self {
            clock: FrameClock::new(),
            dispatcher: Dispatcher::new(config, factory),
            gain,
            rx: None,
        }
    }

    /// Build an engine fed by a queue of `capacity` messages.
    ///
    /// The returned producer may live on another thread; messages take
    /// effect on the next `update`.
    #[cfg(feature = "rtrb")]
    pub fn with_queue(
        config: EngineConfig,
        factory: F,
        gain: GainController<M>,
        capacity: usize,
    ) -> (Self, Producer<CueMessage>) {
        let (tx, rx) = RingBuffer::<CueMessage>::new(capacity);
        let mut engine = Self::new(config, factory, gain);
        engine.set_receiver(rx);
        (engine, tx)
    }

    pub fn set_receiver(&mut self, rx: impl MessageReceiver + Send + 'static) {
        self.rx = Some(Box::new(rx));
    }

    /// Run one frame: advance the clock, step every voice, then apply
    /// queued requests at the new frame time.
    pub fn update(&mut self, dt: f32) {
        self.clock.advance(dt);
        self.dispatcher.update(self.clock.delta());

        if let Some(mut rx) = self.rx.take() {
            while let Some(msg) = rx.pop() {
                self.apply(msg);
            }
            self.rx = Some(rx);
        }
    }

    /// Dispatch `command` at the current frame time.
    pub fn play(&mut self, command: &Arc<Command>) -> PlayOutcome {
        self.dispatcher.play(command, self.clock.now())
    }

    pub fn set_bus_active(&mut self, bus: MixerBus, active: bool) {
        self.gain.set_active(bus, active);
    }

    pub fn is_muted(&self, bus: MixerBus) -> bool {
        self.gain.is_muted(bus)
    }

    pub fn stop_all(&mut self, fade_out: f32) {
        self.dispatcher.stop_all(fade_out);
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn dispatcher(&self) -> &Dispatcher<F> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<F> {
        &mut self.dispatcher
    }

    pub fn gain(&self) -> &GainController<M> {
        &self.gain
    }

    pub fn gain_mut(&mut self) -> &mut GainController<M> {
        &mut self.gain
    }

    fn apply(&mut self, msg: CueMessage) {
        match msg {
            CueMessage::Play(command) => {
                self.play(&command);
            }
            CueMessage::SetBusActive { bus, active } => self.set_bus_active(bus, active),
            CueMessage::StopAll { fade_out } => self.stop_all(fade_out),
        }
    }
}
