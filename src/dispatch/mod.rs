// Purpose: resolve commands to voices
// Enforces instance limits, applies stop policies, and grows the pool one
// voice at a time when nothing is free.

mod outcome;

use std::sync::Arc;

use crate::{
    command::{Command, CommandId},
    engine::EngineConfig,
    output::ChannelFactory,
    voice::{Voice, VoiceId},
};

pub use outcome::PlayOutcome;

/// Owns the voice pool. Voices are appended, never removed or reordered.
pub struct Dispatcher<F: ChannelFactory> {
    factory: F,
    voices: Vec<Voice<F::Channel>>,
    rng: fastrand::Rng,
    config: EngineConfig,
}

impl<F: ChannelFactory> Dispatcher<F> {
    pub fn new(config: EngineConfig, factory: F) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut dispatcher = Self {
            factory,
            voices: Vec::with_capacity(config.prewarm_voices),
            rng,
            config,
        };
        dispatcher.expand(dispatcher.config.prewarm_voices);
        dispatcher
    }

    /// Dispatch an optional command; a missing one is logged and ignored.
    pub fn play_slot(&mut self, command: Option<&Arc<Command>>, now: f64) -> PlayOutcome {
        match command {
            Some(command) => self.play(command, now),
            None => {
                log::warn!("play requested without a command; nothing will sound");
                PlayOutcome::Missing
            }
        }
    }

    /// Dispatch `command` at clock time `now`.
    ///
    /// Limits are checked first and abort the whole dispatch. Stop policies
    /// then run in order (others, category, all) before a voice is acquired,
    /// even when the command itself plays nothing.
    pub fn play(&mut self, command: &Arc<Command>, now: f64) -> PlayOutcome {
        let id = command.id();

        if command.instance_limit > 0 {
            let active = self.assigned_count(id);
            if active >= command.instance_limit {
                if self.config.log_warnings {
                    log::info!(
                        "cue '{}' at instance limit ({}), skipped",
                        command.name,
                        active
                    );
                }
                return PlayOutcome::InstanceLimited { active };
            }
        }

        if let Some(max) = command.frame_limit {
            let tolerance = self.config.same_frame_tolerance;
            let active = self
                .voices
                .iter()
                .filter(|v| v.is_assigned_to(id) && v.is_same_play_time(now, tolerance))
                .count() as u32;
            if active >= max {
                if self.config.log_warnings {
                    log::info!(
                        "cue '{}' at frame limit ({}), skipped",
                        command.name,
                        active
                    );
                }
                return PlayOutcome::FrameLimited { active };
            }
        }

        if let Some(stop) = &command.stop_others {
            for voice in &mut self.voices {
                voice.stop_if_playing_any(&stop.commands, stop.fade_out);
            }
        }
        if let Some(stop) = command.stop_category {
            for voice in &mut self.voices {
                voice.stop_if_category(stop.category, stop.fade_out);
            }
        }
        if let Some(stop) = command.stop_all {
            self.stop_all(stop.fade_out);
        }

        if !command.play_audio {
            return PlayOutcome::StopOnly;
        }

        let idx = self.ready_index();
        let voice = &mut self.voices[idx];
        if !voice.play(command, now, &mut self.rng) {
            return PlayOutcome::NoClip;
        }
        if self.config.log_plays {
            log::info!("cue '{}' at {:.3}s on voice {}", command.name, now, idx);
        }
        PlayOutcome::Played(voice.id())
    }

    /// Would `play` be dropped by the instance limit right now?
    pub fn is_at_instance_limit(&self, command: &Command) -> bool {
        command.instance_limit > 0 && self.assigned_count(command.id()) >= command.instance_limit
    }

    /// The voice the next play will land on, growing the pool if needed.
    ///
    /// Stop policies of the next command may free an earlier voice, so this
    /// is exact only for commands without them.
    pub fn ready_voice_id(&mut self) -> VoiceId {
        let idx = self.ready_index();
        self.voices[idx].id()
    }

    /// Advance every voice by one frame.
    pub fn update(&mut self, dt: f32) {
        for voice in &mut self.voices {
            voice.update(dt);
        }
    }

    pub fn stop_all(&mut self, fade_out: f32) {
        for voice in &mut self.voices {
            voice.stop(fade_out);
        }
    }

    /// Voices currently working on `command`.
    pub fn assigned_count(&self, command: CommandId) -> u32 {
        self.voices
            .iter()
            .filter(|v| v.is_assigned_to(command))
            .count() as u32
    }

    pub fn working_count(&self) -> usize {
        self.voices.iter().filter(|v| v.is_working()).count()
    }

    pub fn voices(&self) -> &[Voice<F::Channel>] {
        &self.voices
    }

    pub fn voice(&self, id: VoiceId) -> Option<&Voice<F::Channel>> {
        self.voices.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// First idle voice in pool order; if none, add exactly one and retry.
    fn ready_index(&mut self) -> usize {
        if let Some(idx) = self.find_idle() {
            return idx;
        }
        self.expand(1);
        // The voice just appended is idle.
        self.find_idle().unwrap_or(self.voices.len() - 1)
    }

    fn find_idle(&self) -> Option<usize> {
        self.voices.iter().position(|v| !v.is_working())
    }

    fn expand(&mut self, amount: usize) {
        for _ in 0..amount {
            let id = VoiceId(self.voices.len());
            let channel = self.factory.create_channel(id);
            self.voices
                .push(Voice::new(id, channel).with_min_audible(self.config.min_audible));
        }
        if amount > 0 {
            log::debug!("voice pool grew to {}", self.voices.len());
        }
    }
}
