//! saavy-cue - terminal monitor for the cue dispatcher
//!
//! Run with: cargo run
//! Logs go to saavy_cue.log (filter with RUST_LOG).

mod app;
mod cues;
mod ui;

use std::fs::File;

use app::CueMonitor;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let log_file = File::create("saavy_cue.log")?;
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    CueMonitor::new(cues::demo_set()).fps(60.0).run()
}
