use crate::voice::VoiceId;

/// What a dispatch did. Every variant other than `Played` is a no-op for
/// the voice pool's playback (stop policies may still have run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The command is playing on this voice.
    Played(VoiceId),
    /// Stop policies ran; the command does not play audio itself.
    StopOnly,
    /// `active` voices already play the command, at or above its limit.
    InstanceLimited { active: u32 },
    /// `active` voices started the command this frame, at or above its limit.
    FrameLimited { active: u32 },
    /// Stop policies ran but no clip could be selected.
    NoClip,
    /// No command was given.
    Missing,
}

impl PlayOutcome {
    pub fn voice(self) -> Option<VoiceId> {
        match self {
            PlayOutcome::Played(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_played(self) -> bool {
        matches!(self, PlayOutcome::Played(_))
    }
}
