//! Overlay view-model: the state an embedding page renders.
//!
//! The core only toggles visibility and text; nothing here draws. One field
//! per overlay element: loading bar, start button, help text, bench
//! interaction prompt.

use crate::state::{InteractPrompt, Phase, INTERACT_KEY, RESET_KEY};

/// What the overlay should show this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayModel {
    pub loading_visible: bool,
    /// Loading-bar fill in `0.0..=1.0`.
    pub loading_fraction: f32,
    pub start_button_visible: bool,
    pub help_visible: bool,
    /// Bench prompt text, when one applies.
    pub bench_prompt: Option<String>,
}

/// Assemble the overlay state for the current frame.
pub fn assemble(phase: Phase, loading_fraction: f32, near_bench: bool) -> OverlayModel {
    let mut model = OverlayModel {
        loading_visible: phase == Phase::Loading,
        loading_fraction,
        start_button_visible: matches!(phase, Phase::Ready | Phase::Paused),
        help_visible: matches!(phase, Phase::Ready | Phase::Paused),
        bench_prompt: None,
    };

    match phase {
        Phase::Strolling if near_bench => {
            let prompt = InteractPrompt {
                key: INTERACT_KEY,
                action: "Sit down".to_string(),
            };
            model.bench_prompt = Some(prompt.display_text());
        }
        Phase::Sitting => {
            let stand = InteractPrompt {
                key: INTERACT_KEY,
                action: "Stand up".to_string(),
            };
            let reset = InteractPrompt {
                key: RESET_KEY,
                action: "Reset the park".to_string(),
            };
            model.bench_prompt = Some(format!("{}  {}", stand.display_text(), reset.display_text()));
        }
        _ => {}
    }

    model
}
