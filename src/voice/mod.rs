// Purpose: one playback slot and its lifecycle
// A voice owns one output channel and walks a command through
// delay -> fade-in -> play/loop -> fade-out, one frame at a time.

mod state;

use std::sync::Arc;

use crate::{
    command::{ClipCategory, Command, CommandId, LoopPolicy},
    output::OutputChannel,
    timing::TickTimer,
    MIN_AUDIBLE_DURATION,
};

pub use state::VoicePhase;

/// Position of a voice in its pool. Pools only grow, so ids are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoiceId(pub usize);

/// A single playback slot bound to one output channel.
pub struct Voice<C: OutputChannel> {
    id: VoiceId,
    channel: C,
    command: Option<Arc<Command>>,
    category: ClipCategory,
    play_time: f64,
    phase: VoicePhase,
    timer: TickTimer,
    /// Next step is the no-op step that follows every timer reset.
    armed: bool,
    /// Bounded loop: `Looping` also waits on the timer.
    timed_loop: bool,
    output_started: bool,
    /// Seconds the output has been running for the current play.
    since_output: f32,
    /// Volume when the fade-out began.
    fade_from: f32,
    min_audible: f32,
}

impl<C: OutputChannel> Voice<C> {
    pub fn new(id: VoiceId, channel: C) -> Self {
        let mut voice = Self {
            id,
            channel,
            command: None,
            category: ClipCategory::default(),
            play_time: 0.0,
            phase: VoicePhase::Idle,
            timer: TickTimer::new(),
            armed: false,
            timed_loop: false,
            output_started: false,
            since_output: 0.0,
            fade_from: 1.0,
            min_audible: MIN_AUDIBLE_DURATION,
        };
        voice.reset_output();
        voice
    }

    /// Floor for the play-wait of non-looping clips.
    pub fn with_min_audible(mut self, seconds: f32) -> Self {
        self.min_audible = seconds.max(0.0);
        self
    }

    /// Assign `command` and start its lifecycle.
    ///
    /// `now` is the dispatch time used by the same-frame limit. Returns false,
    /// leaving the voice untouched, when no clip can be selected.
    pub fn play(&mut self, command: &Arc<Command>, now: f64, rng: &mut fastrand::Rng) -> bool {
        let Some(clip) = command.clip_for_play(rng).cloned() else {
            log::warn!(
                "voice {}: command '{}' has no clip to play",
                self.id.0,
                command.name
            );
            return false;
        };

        // Cancel whatever was running; a reassigned voice starts clean.
        self.channel.stop();
        self.clear_process();
        self.reset_output();

        self.command = Some(Arc::clone(command));
        self.category = command.category;
        self.play_time = now;
        self.channel.set_bus(command.bus.clone());
        self.channel.set_clip(Some(clip));

        if command.start.delay > 0.0 {
            self.wait(command.start.delay, VoicePhase::Delaying);
        } else {
            self.start_output();
        }

        log::debug!(
            "voice {}: '{}' at {:.3}s ({:?})",
            self.id.0,
            command.name,
            now,
            self.phase
        );
        true
    }

    /// Advance the lifecycle by one frame.
    pub fn update(&mut self, dt: f32) {
        self.channel.advance(dt);

        if self.phase == VoicePhase::Idle {
            return;
        }
        if self.output_started {
            self.since_output += dt;
        }
        if self.armed {
            self.armed = false;
            return;
        }

        match self.phase {
            VoicePhase::Idle => {}
            VoicePhase::Delaying => {
                if !self.timer.tick(dt) {
                    self.start_output();
                }
            }
            VoicePhase::FadingIn => {
                if self.timer.tick(dt) {
                    self.channel.set_volume(self.timer.elapsed_fraction());
                } else {
                    self.channel.set_volume(1.0);
                    self.begin_sustain();
                }
            }
            VoicePhase::Playing => {
                if !self.timer.tick(dt) {
                    self.halt();
                }
            }
            VoicePhase::Looping => {
                if self.timed_loop && !self.timer.tick(dt) {
                    self.halt();
                }
            }
            VoicePhase::FadingOut => {
                if self.timer.tick(dt) {
                    self.channel
                        .set_volume(self.fade_from * self.timer.remaining_fraction());
                } else {
                    self.halt();
                }
            }
        }
    }

    /// Stop playback, fading out over `fade_out` seconds when positive.
    ///
    /// A faded stop cancels the pending play process and fades from the
    /// current volume. A second faded stop keeps the fade already running.
    pub fn stop(&mut self, fade_out: f32) {
        if !self.is_working() {
            return;
        }
        if fade_out > 0.0 {
            if self.phase == VoicePhase::FadingOut {
                return;
            }
            self.fade_from = self.channel.volume();
            self.timed_loop = false;
            self.wait(fade_out, VoicePhase::FadingOut);
        } else {
            self.halt();
        }
    }

    pub fn stop_if_playing_any(&mut self, commands: &[CommandId], fade_out: f32) {
        if !self.is_working() || commands.is_empty() {
            return;
        }
        let assigned = self.command.as_ref().map(|c| c.id());
        if assigned.is_some_and(|id| commands.contains(&id)) {
            self.stop(fade_out);
        }
    }

    pub fn stop_if_category(&mut self, category: ClipCategory, fade_out: f32) {
        if self.is_working() && self.category == category {
            self.stop(fade_out);
        }
    }

    /// Output is sounding, or a delay/fade/play-wait is still pending.
    pub fn is_working(&self) -> bool {
        self.channel.is_playing() || self.phase != VoicePhase::Idle
    }

    pub fn is_assigned_to(&self, command: CommandId) -> bool {
        self.is_working() && self.command.as_ref().is_some_and(|c| c.id() == command)
    }

    /// Dispatched at `time`, within `tolerance` seconds.
    pub fn is_same_play_time(&self, time: f64, tolerance: f64) -> bool {
        (self.play_time - time).abs() <= tolerance
    }

    pub fn id(&self) -> VoiceId {
        self.id
    }

    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    pub fn volume(&self) -> f32 {
        self.channel.volume()
    }

    /// The assigned command, only while the voice is working.
    pub fn command(&self) -> Option<&Arc<Command>> {
        self.command.as_ref().filter(|_| self.is_working())
    }

    /// Category of the most recently assigned clip.
    pub fn category(&self) -> ClipCategory {
        self.category
    }

    pub fn play_time(&self) -> f64 {
        self.play_time
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    fn start_output(&mut self) {
        let Some(fade_in) = self.command.as_ref().map(|c| c.start.fade_in) else {
            return;
        };
        self.channel.play();
        self.output_started = true;
        self.since_output = 0.0;

        if fade_in > 0.0 {
            self.channel.set_volume(0.0);
            self.wait(fade_in, VoicePhase::FadingIn);
        } else {
            self.begin_sustain();
        }
    }

    /// Hold the output after the fade-in: loop forever, loop `n` times, or
    /// play out the clip. Waits are measured from the output start.
    fn begin_sustain(&mut self) {
        let Some(looping) = self.command.as_ref().map(|c| c.looping) else {
            return;
        };
        let length = self.channel.clip_length();

        match looping {
            LoopPolicy::Off => {
                let wait = length.max(self.min_audible) - self.since_output;
                self.wait(wait.max(0.0), VoicePhase::Playing);
            }
            LoopPolicy::Repeat(n) if n > 0 => {
                self.channel.set_loop(true);
                self.timed_loop = true;
                let wait = length * n as f32 - self.since_output;
                self.wait(wait.max(0.0), VoicePhase::Looping);
            }
            LoopPolicy::Infinite | LoopPolicy::Repeat(_) => {
                self.channel.set_loop(true);
                self.timed_loop = false;
                self.armed = false;
                self.phase = VoicePhase::Looping;
            }
        }
    }

    fn wait(&mut self, seconds: f32, phase: VoicePhase) {
        self.timer.reset(seconds);
        self.armed = true;
        self.phase = phase;
    }

    /// Unconditional stop: halt the output and free the slot.
    fn halt(&mut self) {
        self.channel.stop();
        if !self.channel.is_playing() {
            self.command = None;
        }
        self.clear_process();
        self.reset_output();
    }

    fn clear_process(&mut self) {
        self.phase = VoicePhase::Idle;
        self.armed = false;
        self.timed_loop = false;
        self.output_started = false;
        self.since_output = 0.0;
        self.fade_from = 1.0;
    }

    fn reset_output(&mut self) {
        self.channel.set_loop(false);
        self.channel.set_volume(1.0);
        self.channel.set_clip(None);
        self.channel.set_bus(None);
    }
}
