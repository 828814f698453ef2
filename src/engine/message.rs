use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::{command::Command, mixer::MixerBus};

/// Requests sent to the engine from other threads (UI, game logic).
#[derive(Debug, Clone)]
pub enum CueMessage {
    Play(Arc<Command>),
    SetBusActive { bus: MixerBus, active: bool },
    StopAll { fade_out: f32 },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<CueMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<CueMessage> {
    fn pop(&mut self) -> Option<CueMessage> {
        Consumer::pop(self).ok()
    }
}
