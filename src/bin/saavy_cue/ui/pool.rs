//! Pool widget - one line per voice with phase, cue, volume bar and playhead

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use saavy_cue::voice::VoicePhase;

use super::{PoolSnapshot, VoiceRow};

const BAR_WIDTH: usize = 20;

/// Render the voice pool
pub fn render_pool(frame: &mut Frame, area: Rect, state: &PoolSnapshot) {
    if area.height < 1 || area.width < 40 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            " {:>3}  {:<9} {:<10} {:<14} {:<w$}  pos",
            "#",
            "phase",
            "cue",
            "clip",
            "volume",
            w = BAR_WIDTH + 5
        ),
        Style::default().fg(Color::DarkGray),
    ))];

    let visible = area.height.saturating_sub(1) as usize;
    lines.extend(state.voices.iter().take(visible).map(voice_line));

    frame.render_widget(Paragraph::new(lines), area);
}

fn voice_line(voice: &VoiceRow) -> Line<'static> {
    let color = phase_color(voice.phase);
    let filled = ((voice.volume.clamp(0.0, 1.0) * BAR_WIDTH as f32).round()) as usize;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "·".repeat(BAR_WIDTH - filled)
    );

    let position = if voice.length > 0.0 {
        format!("{:5.2}/{:.2}s", voice.position, voice.length)
    } else {
        String::from("-")
    };

    Line::from(vec![
        Span::raw(format!(" {:>3}  ", voice.id)),
        Span::styled(format!("{:<9} ", voice.phase.label()), Style::default().fg(color)),
        Span::styled(
            format!("{:<10.10} ", voice.cue.as_deref().unwrap_or("-")),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:<14.14} ", voice.clip.as_deref().unwrap_or("-")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(bar, Style::default().fg(color)),
        Span::raw(format!(" {:>3.0}%  ", voice.volume * 100.0)),
        Span::styled(position, Style::default().fg(Color::DarkGray)),
    ])
}

fn phase_color(phase: VoicePhase) -> Color {
    match phase {
        VoicePhase::Idle => Color::DarkGray,
        VoicePhase::Delaying => Color::Blue,
        VoicePhase::FadingIn => Color::Cyan,
        VoicePhase::Playing => Color::Green,
        VoicePhase::Looping => Color::Magenta,
        VoicePhase::FadingOut => Color::Yellow,
    }
}
