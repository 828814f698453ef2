//! CueMonitor - runs the engine on its own frame thread and the TUI on main

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::{eyre, Result as EyreResult};
use rtrb::{Consumer, Producer, RingBuffer};

use saavy_cue::{
    engine::CueMessage,
    mixer::{GainConfig, GainController, MixerBus, ParamTable},
    output::SimulatedChannel,
    voice::VoiceId,
    Engine, EngineConfig,
};

use super::cues::Cue;
use super::ui::{PoolSnapshot, UiApp, VoiceRow};

const MASTER_PARAM: &str = "MasterVolume";
const BGM_PARAM: &str = "BgmVolume";
const SFX_PARAM: &str = "SfxVolume";

/// Main application builder
pub struct CueMonitor {
    cues: Vec<Cue>,
    fps: f64,
    config: EngineConfig,
}

impl CueMonitor {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self {
            cues,
            fps: 60.0,
            config: EngineConfig::default().log_warnings(true).log_plays(true),
        }
    }

    /// Engine frame rate
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = fps.max(1.0);
        self
    }

    /// Run until the user quits
    pub fn run(self) -> EyreResult<()> {
        let (cue_tx, cue_rx) = RingBuffer::<CueMessage>::new(64);
        let (state_tx, state_rx) = RingBuffer::<PoolSnapshot>::new(4);
        let quit = Arc::new(AtomicBool::new(false));

        let frame = Duration::from_secs_f64(1.0 / self.fps);
        let config = self.config.clone();
        let engine_quit = Arc::clone(&quit);
        let engine_thread = thread::Builder::new()
            .name("cue-engine".into())
            .spawn(move || run_engine(config, frame, cue_rx, state_tx, engine_quit))?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(self.cues, cue_tx, state_rx).run(&mut terminal);
        ratatui::restore();

        quit.store(true, Ordering::Relaxed);
        engine_thread
            .join()
            .map_err(|_| eyre!("engine thread panicked"))?;
        result
    }
}

/// Frame loop: one engine update per frame, one snapshot out per frame.
fn run_engine(
    config: EngineConfig,
    frame: Duration,
    cue_rx: Consumer<CueMessage>,
    mut state_tx: Producer<PoolSnapshot>,
    quit: Arc<AtomicBool>,
) {
    let gain = GainController::with_mixer(
        GainConfig::params(MASTER_PARAM, BGM_PARAM, SFX_PARAM),
        ParamTable::exposing(&[MASTER_PARAM, BGM_PARAM, SFX_PARAM]),
    );
    let mut engine = Engine::new(config, |_: VoiceId| SimulatedChannel::new(), gain);
    engine.set_receiver(cue_rx);

    let mut last = Instant::now();
    while !quit.load(Ordering::Relaxed) {
        thread::sleep(frame);
        let now = Instant::now();
        engine.update((now - last).as_secs_f32());
        last = now;

        // Drop the snapshot if the UI is behind; the next one supersedes it
        let _ = state_tx.push(snapshot(&engine));
    }
}

fn snapshot<F>(engine: &Engine<F, ParamTable>) -> PoolSnapshot
where
    F: saavy_cue::output::ChannelFactory<Channel = SimulatedChannel>,
{
    let voices = engine
        .dispatcher()
        .voices()
        .iter()
        .map(|voice| {
            let channel = voice.channel();
            VoiceRow {
                id: voice.id().0,
                phase: voice.phase(),
                cue: voice.command().map(|c| c.name.clone()),
                clip: channel.clip().map(|c| c.name.to_string()),
                volume: voice.volume(),
                position: channel.position(),
                length: channel.clip().map_or(0.0, |c| c.length),
            }
        })
        .collect();

    PoolSnapshot {
        time: engine.now(),
        frame: engine.clock().frame(),
        voices,
        master_muted: engine.is_muted(MixerBus::Master),
        bgm_muted: engine.is_muted(MixerBus::Bgm),
        sfx_muted: engine.is_muted(MixerBus::Sfx),
    }
}
