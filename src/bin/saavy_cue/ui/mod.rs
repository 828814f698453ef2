//! TUI module for saavy-cue
//!
//! Shows the voice pool live and turns key presses into engine messages.

mod pool;
pub mod state;
mod status;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use saavy_cue::{engine::CueMessage, mixer::MixerBus};
use std::time::Duration;

pub use state::{PoolSnapshot, VoiceRow};

use super::cues::Cue;
use pool::render_pool;
use status::render_status;

/// Fade applied by the stop-all key
const STOP_ALL_FADE: f32 = 0.5;

/// UI application state
pub struct UiApp {
    cues: Vec<Cue>,
    /// Messages to the engine thread
    cue_tx: Producer<CueMessage>,
    /// Per-frame snapshots from the engine thread
    state_rx: Consumer<PoolSnapshot>,
    current_state: PoolSnapshot,
    should_quit: bool,
}

impl UiApp {
    pub fn new(cues: Vec<Cue>, cue_tx: Producer<CueMessage>, state_rx: Consumer<PoolSnapshot>) -> Self {
        Self {
            cues,
            cue_tx,
            state_rx,
            current_state: PoolSnapshot::default(),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep only the latest snapshot
    fn poll_state(&mut self) {
        while let Ok(state) = self.state_rx.pop() {
            self.current_state = state;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('m') => self.toggle_bus(MixerBus::Master),
            KeyCode::Char('b') => self.toggle_bus(MixerBus::Bgm),
            KeyCode::Char('s') => self.toggle_bus(MixerBus::Sfx),
            KeyCode::Char('x') => self.send(CueMessage::StopAll {
                fade_out: STOP_ALL_FADE,
            }),
            KeyCode::Char(c) => {
                if let Some(cue) = self.cues.iter().find(|cue| cue.key == c) {
                    let message = CueMessage::Play(cue.command.clone());
                    self.send(message);
                }
            }
            _ => {}
        }
    }

    fn toggle_bus(&mut self, bus: MixerBus) {
        let muted = match bus {
            MixerBus::Master => self.current_state.master_muted,
            MixerBus::Bgm => self.current_state.bgm_muted,
            MixerBus::Sfx => self.current_state.sfx_muted,
        };
        self.send(CueMessage::SetBusActive { bus, active: muted });
    }

    fn send(&mut self, message: CueMessage) {
        if self.cue_tx.push(message).is_err() {
            log::warn!("cue queue full, dropping message");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(4),    // Voice pool
                Constraint::Length(1), // Cue keys
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        render_status(frame, chunks[0], &self.current_state);

        let pool_block = Block::default().title(" Voices ").borders(Borders::ALL);
        let pool_inner = pool_block.inner(chunks[1]);
        frame.render_widget(pool_block, chunks[1]);
        render_pool(frame, pool_inner, &self.current_state);

        let keys: String = self
            .cues
            .iter()
            .map(|cue| format!(" [{}] {}", cue.key, cue.command.name))
            .collect();
        frame.render_widget(
            Paragraph::new(keys).style(Style::default().fg(Color::Cyan)),
            chunks[2],
        );

        let help = Paragraph::new(" [Q] Quit  [M/B/S] Mute master/bgm/sfx  [X] Stop all")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
