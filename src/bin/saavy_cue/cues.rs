//! Demo cue set bound to the number keys.

use std::sync::Arc;

use saavy_cue::command::{BusId, Clip, ClipCategory, Command, LoopPolicy};

/// A key-bound cue shown in the help bar.
pub struct Cue {
    pub key: char,
    pub command: Arc<Command>,
}

pub fn demo_set() -> Vec<Cue> {
    let sfx = BusId::new("sfx");
    let music = BusId::new("music");

    let click = Command::new("click", Clip::new("ui_click.wav", 0.04)).bus(sfx.clone());
    let footstep = Command::random(
        "footstep",
        vec![
            Clip::new("step_01.wav", 0.3),
            Clip::new("step_02.wav", 0.35),
            Clip::new("step_03.wav", 0.28),
        ],
    )
    .bus(sfx.clone())
    .instance_limit(3);
    let alarm = Command::new("alarm", Clip::new("alarm.wav", 0.6))
        .bus(sfx.clone())
        .looping(LoopPolicy::Repeat(4))
        .delay(0.25)
        .instance_limit(1);
    let theme = Command::new("theme", Clip::new("theme.ogg", 12.0))
        .bus(music.clone())
        .bgm()
        .looping(LoopPolicy::Infinite)
        .fade_in(2.0)
        .instance_limit(1)
        .stop_category(ClipCategory::Bgm, 2.0);
    let battle = Command::new("battle", Clip::new("battle.ogg", 8.0))
        .bus(music)
        .bgm()
        .looping(LoopPolicy::Infinite)
        .fade_in(0.5)
        .instance_limit(1)
        .stop_category(ClipCategory::Bgm, 0.5);
    let silence = Command::stop_signal("silence").stop_others(&[&alarm, &footstep], 0.3);
    let reset = Command::stop_signal("reset").stop_all(1.0);

    [click, footstep, alarm, theme, battle, silence, reset]
        .into_iter()
        .zip('1'..='9')
        .map(|(command, key)| Cue {
            key,
            command: Arc::new(command),
        })
        .collect()
}
