/*
Voice lifecycle
===============

        play()
   ┌──────────────┐ delay > 0 ┌──────────┐
   │     Idle     │ ────────→ │ Delaying │
   └──────────────┘           └──────────┘
      ↑     │ no delay             │ timer expired
      │     ↓                      ↓
      │  ┌──────────────────────────────┐ fade_in > 0 ┌──────────┐
      │  │         output starts        │ ──────────→ │ FadingIn │
      │  └──────────────────────────────┘             └──────────┘
      │              │ no fade-in                          │ timer expired
      │              ↓                                     ↓
      │      ┌─────────────────────┐ ←─────────────────────┘
      │      │ Playing / Looping   │
      │      └─────────────────────┘
      │              │ play-wait or loop count expired
      └──────────────┘

stop(fade > 0) from any non-Idle phase enters FadingOut, which returns to
Idle when its timer expires. stop(0) goes straight to Idle.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoicePhase {
    #[default]
    Idle, // Free for allocation
    Delaying,  // Waiting for the start delay, output silent
    FadingIn,  // Output running, volume ramping 0 -> 1
    Playing,   // Non-looping clip, waiting for it to play out
    Looping,   // Looping clip, forever or for a number of lengths
    FadingOut, // Volume ramping down, then stop
}

impl VoicePhase {
    pub fn label(self) -> &'static str {
        match self {
            VoicePhase::Idle => "idle",
            VoicePhase::Delaying => "delay",
            VoicePhase::FadingIn => "fade-in",
            VoicePhase::Playing => "playing",
            VoicePhase::Looping => "looping",
            VoicePhase::FadingOut => "fade-out",
        }
    }
}
