use std::sync::Arc;

use saavy_cue::{
    command::{Clip, Command, LoopPolicy},
    dispatch::PlayOutcome,
    mixer::{GainConfig, GainController, MixerBus, ParamTable},
    output::{ChannelFactory, OutputChannel, SimulatedChannel},
    voice::{VoiceId, VoicePhase},
    Engine, EngineConfig,
};

const DT: f32 = 1.0 / 60.0;

fn engine() -> Engine<impl ChannelFactory<Channel = SimulatedChannel>, ParamTable> {
    let gain = GainController::with_mixer(
        GainConfig::params("MasterVolume", "BgmVolume", "SfxVolume"),
        ParamTable::exposing(&["MasterVolume", "BgmVolume", "SfxVolume"]),
    );
    Engine::new(
        EngineConfig::default().seed(5),
        |_: VoiceId| SimulatedChannel::new(),
        gain,
    )
}

#[test]
fn fade_in_one_shot_on_a_fresh_pool() {
    let mut engine = engine();
    let cmd = Arc::new(Command::new("swell", Clip::new("swell", 1.0)).fade_in(0.2));

    let voice = engine.play(&cmd).voice().expect("played");
    assert_eq!(voice, VoiceId(0));
    assert_eq!(engine.dispatcher().len(), 5, "no expansion needed");
    assert_eq!(engine.dispatcher().working_count(), 1);

    let v = engine.dispatcher().voice(voice).expect("voice exists");
    assert_eq!(v.phase(), VoicePhase::FadingIn);
    assert_eq!(v.volume(), 0.0);

    let mut elapsed = 0.0_f32;
    let mut last_volume = 0.0;
    let mut full_at = None;
    loop {
        engine.update(DT);
        elapsed += DT;
        let v = engine.dispatcher().voice(voice).expect("voice exists");
        if !v.is_working() {
            break;
        }
        assert!(v.is_assigned_to(cmd.id()));
        if full_at.is_none() {
            assert!(v.volume() >= last_volume, "volume must rise during fade-in");
            last_volume = v.volume();
            if v.volume() >= 1.0 {
                full_at = Some(elapsed);
            }
        }
        assert!(elapsed < 2.0, "voice never finished");
    }

    let full_at = full_at.expect("fade-in completed");
    assert!((0.18..0.3).contains(&full_at), "full volume at {full_at}s");
    assert!((0.95..1.1).contains(&elapsed), "voice freed at {elapsed}s");
    assert_eq!(engine.dispatcher().working_count(), 0);
}

#[test]
fn full_pool_grows_by_one() {
    let mut engine = engine();
    let cmds: Vec<_> = (0..5)
        .map(|i| Arc::new(Command::new(format!("busy{i}"), Clip::new("busy", 5.0))))
        .collect();
    for cmd in &cmds {
        assert!(engine.play(cmd).is_played());
    }
    engine.update(DT);

    let sixth = Arc::new(Command::new("sixth", Clip::new("sixth", 5.0)));
    assert_eq!(engine.play(&sixth), PlayOutcome::Played(VoiceId(5)));
    assert_eq!(engine.dispatcher().len(), 6);

    for (cmd, voice) in cmds.iter().zip(engine.dispatcher().voices()) {
        assert!(voice.is_assigned_to(cmd.id()));
        assert_eq!(voice.phase(), VoicePhase::Playing);
    }
}

#[test]
fn bounded_loop_stops_after_three_lengths() {
    let mut engine = engine();
    let cmd = Arc::new(
        Command::new("triple", Clip::new("triple", 0.5)).looping(LoopPolicy::Repeat(3)),
    );
    let voice = engine.play(&cmd).voice().expect("played");

    let mut elapsed = 0.0_f32;
    while engine
        .dispatcher()
        .voice(voice)
        .is_some_and(|v| v.is_working())
    {
        engine.update(DT);
        elapsed += DT;
        if elapsed < 1.4 {
            let v = engine.dispatcher().voice(voice).expect("voice exists");
            assert_eq!(v.phase(), VoicePhase::Looping);
            assert!(v.channel().is_looping());
            assert!(v.channel().is_playing());
        }
        assert!(elapsed < 3.0, "bounded loop never stopped");
    }
    assert!((1.45..1.6).contains(&elapsed), "loop stopped at {elapsed}s");
}

#[test]
fn instance_cap_holds_across_frames() {
    let mut engine = engine();
    let cmd = Arc::new(Command::new("capped", Clip::new("capped", 0.4)).instance_limit(2));

    let mut limited = 0;
    for _ in 0..120 {
        match engine.play(&cmd) {
            PlayOutcome::InstanceLimited { active } => {
                assert_eq!(active, 2);
                limited += 1;
            }
            outcome => assert!(outcome.is_played(), "unexpected {outcome:?}"),
        }
        assert!(engine.dispatcher().assigned_count(cmd.id()) <= 2);
        engine.update(DT);
    }
    assert!(limited > 0);
    assert_eq!(engine.dispatcher().len(), 5, "capped command never grows the pool");
}

#[test]
fn stop_all_leaves_no_voice_sustaining_old_commands() {
    let mut engine = engine();
    let music = Arc::new(
        Command::new("music", Clip::new("music", 3.0))
            .bgm()
            .looping(LoopPolicy::Infinite),
    );
    let steps = Arc::new(
        Command::new("steps", Clip::new("steps", 2.0)).fade_in(0.5),
    );
    let late = Arc::new(Command::new("late", Clip::new("late", 2.0)).delay(1.0));
    engine.play(&music);
    engine.play(&steps);
    engine.play(&late);
    for _ in 0..10 {
        engine.update(DT);
    }

    let reset = Arc::new(Command::stop_signal("reset").stop_all(0.25));
    assert_eq!(engine.play(&reset), PlayOutcome::StopOnly);

    for voice in engine.dispatcher().voices() {
        assert!(
            matches!(voice.phase(), VoicePhase::Idle | VoicePhase::FadingOut),
            "voice {:?} still {:?}",
            voice.id(),
            voice.phase()
        );
    }

    for _ in 0..30 {
        engine.update(DT);
    }
    assert_eq!(engine.dispatcher().working_count(), 0);
    let late_voice = &engine.dispatcher().voices()[2];
    assert_eq!(
        late_voice.channel().starts(),
        0,
        "a stopped delay must never start its output"
    );
}

#[test]
fn music_crossfade_by_category() {
    let mut engine = engine();
    let theme_a = Arc::new(
        Command::new("theme_a", Clip::new("a", 30.0))
            .bgm()
            .looping(LoopPolicy::Infinite)
            .instance_limit(1),
    );
    let theme_b = Arc::new(
        Command::new("theme_b", Clip::new("b", 30.0))
            .bgm()
            .looping(LoopPolicy::Infinite)
            .instance_limit(1)
            .fade_in(1.0)
            .stop_category(saavy_cue::command::ClipCategory::Bgm, 1.0),
    );

    engine.play(&theme_a);
    engine.update(DT);
    let b_voice = engine.play(&theme_b).voice().expect("played");

    let a_voice = &engine.dispatcher().voices()[0];
    assert_eq!(a_voice.phase(), VoicePhase::FadingOut);
    assert_eq!(b_voice, VoiceId(1));

    for _ in 0..90 {
        engine.update(DT);
    }
    assert_eq!(engine.dispatcher().assigned_count(theme_a.id()), 0);
    let b = engine.dispatcher().voice(b_voice).expect("voice exists");
    assert_eq!(b.phase(), VoicePhase::Looping);
    assert_eq!(b.volume(), 1.0);
}

#[test]
fn mute_round_trip_through_the_engine() {
    let mut engine = engine();

    engine.set_bus_active(MixerBus::Master, false);
    assert!(engine.is_muted(MixerBus::Master));
    assert!(!engine.is_muted(MixerBus::Sfx));

    engine.set_bus_active(MixerBus::Master, true);
    assert!(!engine.is_muted(MixerBus::Master));
    assert_eq!(engine.gain().gain(MixerBus::Master), Some(0.0));
}

#[test]
fn random_command_plays_one_of_its_clips() {
    let mut engine = engine();
    let cmd = Arc::new(
        Command::random(
            "footstep",
            vec![
                Clip::new("step_1", 0.3),
                Clip::new("step_2", 0.3),
                Clip::new("step_3", 0.3),
            ],
        )
        .frame_limit(None),
    );

    for _ in 0..3 {
        let voice = engine.play(&cmd).voice().expect("played");
        let channel = engine.dispatcher().voice(voice).expect("voice exists").channel();
        let name = channel.clip().map(|c| c.name.to_string()).expect("clip set");
        assert!(name.starts_with("step_"), "picked {name}");
        assert!(channel.is_playing());
        assert!(channel.clip_length() > 0.0);
    }
}
