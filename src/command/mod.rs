// Purpose: declarative play requests
// A Command describes what to play and under which policies; the dispatcher
// and voices only ever read it.

pub mod clip;
pub mod policy;

use std::sync::atomic::{AtomicU64, Ordering};

pub use clip::{BusId, Clip, ClipCategory, ClipSelection};
pub use policy::{LoopPolicy, StartPolicy, StopAll, StopCategory, StopOthers};

static NEXT_COMMAND_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a command, unique for the life of the process.
///
/// Two commands with identical settings are still different commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(u64);

impl CommandId {
    fn next() -> Self {
        Self(NEXT_COMMAND_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// An immutable play request, shared between callers and voices as
/// `Arc<Command>`.
///
/// Not `Clone`: a copy would share the id and count against the same
/// instance limits.
///
/// # Example
///
/// ```
/// use saavy_cue::command::{Clip, Command, LoopPolicy};
///
/// let music = Command::new("theme", Clip::new("theme.ogg", 92.0))
///     .bgm()
///     .looping(LoopPolicy::Infinite)
///     .fade_in(1.5)
///     .instance_limit(1);
/// assert_eq!(music.instance_limit, 1);
/// ```
#[derive(Debug)]
pub struct Command {
    id: CommandId,
    pub name: String,
    pub clips: ClipSelection,
    pub bus: Option<BusId>,
    pub category: ClipCategory,
    /// False turns the command into a pure stop signal.
    pub play_audio: bool,
    pub looping: LoopPolicy,
    pub start: StartPolicy,
    /// Max voices playing this command at once. 0 = unlimited.
    pub instance_limit: u32,
    /// Max voices started for this command within one frame.
    pub frame_limit: Option<u32>,
    pub stop_others: Option<StopOthers>,
    pub stop_category: Option<StopCategory>,
    pub stop_all: Option<StopAll>,
}

impl Command {
    /// A one-shot command for a single clip, one start per frame.
    pub fn new(name: impl Into<String>, clip: Clip) -> Self {
        Self::with_selection(name, ClipSelection::Fixed(clip))
    }

    /// A command picking uniformly among `clips` on every play.
    pub fn random(name: impl Into<String>, clips: Vec<Clip>) -> Self {
        Self::with_selection(name, ClipSelection::Random(clips))
    }

    /// A command that plays nothing and only applies its stop policies.
    pub fn stop_signal(name: impl Into<String>) -> Self {
        let mut cmd = Self::with_selection(name, ClipSelection::Random(Vec::new()));
        cmd.play_audio = false;
        cmd
    }

    fn with_selection(name: impl Into<String>, clips: ClipSelection) -> Self {
        Self {
            id: CommandId::next(),
            name: name.into(),
            clips,
            bus: None,
            category: ClipCategory::Sfx,
            play_audio: true,
            looping: LoopPolicy::Off,
            start: StartPolicy::default(),
            instance_limit: 0,
            frame_limit: Some(1),
            stop_others: None,
            stop_category: None,
            stop_all: None,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn bus(mut self, bus: BusId) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn category(mut self, category: ClipCategory) -> Self {
        self.category = category;
        self
    }

    /// Shorthand for `category(ClipCategory::Bgm)`.
    pub fn bgm(self) -> Self {
        self.category(ClipCategory::Bgm)
    }

    pub fn looping(mut self, looping: LoopPolicy) -> Self {
        self.looping = looping;
        self
    }

    /// Seconds to wait before the output starts.
    pub fn delay(mut self, seconds: f32) -> Self {
        self.start.delay = seconds.max(0.0);
        self
    }

    /// Seconds to ramp the volume from 0 to 1 once the output starts.
    pub fn fade_in(mut self, seconds: f32) -> Self {
        self.start.fade_in = seconds.max(0.0);
        self
    }

    pub fn instance_limit(mut self, max: u32) -> Self {
        self.instance_limit = max;
        self
    }

    /// `None` lifts the per-frame limit entirely.
    pub fn frame_limit(mut self, max: Option<u32>) -> Self {
        self.frame_limit = max;
        self
    }

    /// Stop voices playing any of `others` before this command plays.
    pub fn stop_others(mut self, others: &[&Command], fade_out: f32) -> Self {
        self.stop_others = Some(StopOthers {
            commands: others.iter().map(|c| c.id()).collect(),
            fade_out: fade_out.max(0.0),
        });
        self
    }

    /// Stop every voice of `category` before this command plays.
    pub fn stop_category(mut self, category: ClipCategory, fade_out: f32) -> Self {
        self.stop_category = Some(StopCategory {
            category,
            fade_out: fade_out.max(0.0),
        });
        self
    }

    /// Stop every voice before this command plays.
    pub fn stop_all(mut self, fade_out: f32) -> Self {
        self.stop_all = Some(StopAll {
            fade_out: fade_out.max(0.0),
        });
        self
    }

    /// Turn playback off or on without touching the stop policies.
    pub fn play_audio(mut self, play: bool) -> Self {
        self.play_audio = play;
        self
    }

    /// Resolve the clip for one play.
    pub fn clip_for_play(&self, rng: &mut fastrand::Rng) -> Option<&Clip> {
        self.clips.pick(rng)
    }
}
