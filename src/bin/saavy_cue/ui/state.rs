//! Shared state types for UI communication
//!
//! The engine thread builds one snapshot per frame; the UI keeps only the latest.

use saavy_cue::voice::VoicePhase;

/// Per-voice row of the pool table
#[derive(Clone, Debug)]
pub struct VoiceRow {
    pub id: usize,
    pub phase: VoicePhase,
    /// Command currently driving the voice
    pub cue: Option<String>,
    /// Clip loaded on the channel
    pub clip: Option<String>,
    pub volume: f32,
    /// Playhead in seconds
    pub position: f32,
    /// Clip length in seconds
    pub length: f32,
}

/// Engine state sent to the UI every frame
#[derive(Clone, Debug, Default)]
pub struct PoolSnapshot {
    /// Engine time in seconds
    pub time: f64,
    pub frame: u64,
    pub voices: Vec<VoiceRow>,
    pub master_muted: bool,
    pub bgm_muted: bool,
    pub sfx_muted: bool,
}

impl PoolSnapshot {
    pub fn working(&self) -> usize {
        self.voices
            .iter()
            .filter(|v| v.phase != VoicePhase::Idle)
            .count()
    }
}
