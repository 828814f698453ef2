//! Status bar widget - engine time, pool occupancy and bus mute flags

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::PoolSnapshot;

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, state: &PoolSnapshot) {
    let block = Block::default().title(" saavy-cue ").borders(Borders::ALL);

    let mut spans = vec![
        Span::styled(
            format!(" t {:8.2}s  ", state.time),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("frame {:<8} ", state.frame),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("voices {}/{}  ", state.working(), state.voices.len()),
            Style::default().fg(Color::White),
        ),
    ];
    for (name, muted) in [
        ("master", state.master_muted),
        ("bgm", state.bgm_muted),
        ("sfx", state.sfx_muted),
    ] {
        let (label, color) = if muted {
            ("muted", Color::Red)
        } else {
            ("on", Color::Green)
        };
        spans.push(Span::styled(
            format!("{name}: {label}  "),
            Style::default().fg(color),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
