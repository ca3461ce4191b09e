//! Session state types: phases and interaction prompts.

/// Key label shown in prompts (e.g. "[E] Sit down"). Change here to update
/// every interact prompt at once.
pub const INTERACT_KEY: &str = "E";
/// Key that rebuilds the whole park (only honored while sitting).
pub const RESET_KEY: &str = "R";

/// Session phase.
///
/// `Loading → Ready` is bootstrap-only; afterwards the walk alternates
/// `Strolling ⇄ Paused` with pointer lock, and `Strolling ⇄ Sitting` at the
/// bench. Sitting survives a pointer unlock (the pause overlay just covers
/// it), so interact keys are only honored while the pointer is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Assets still arriving; overlay shows the progress bar.
    Loading,
    /// Everything loaded; waiting for the start button / pointer lock.
    Ready,
    /// Walking the park with the pointer locked.
    Strolling,
    /// Pointer lock released mid-walk.
    Paused,
    /// Pinned to the bench seat.
    Sitting,
}

impl Phase {
    /// Whether the movement integrator runs this frame.
    pub fn integrates(&self) -> bool {
        matches!(self, Phase::Strolling)
    }
}

/// One on-screen interaction prompt: "[key] action".
#[derive(Debug, Clone)]
pub struct InteractPrompt {
    pub key: &'static str,
    pub action: String,
}

impl InteractPrompt {
    /// Build the full prompt string for the overlay (e.g. "[E] Sit down").
    pub fn display_text(&self) -> String {
        format!("[{}] {}", self.key, self.action)
    }
}
