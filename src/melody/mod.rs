//! Note memory
//!
//! Listen to a growing note sequence, then play it back key by key. A miss
//! costs a life and replays the same sequence; running out of lives ends the
//! run but keeps the level for a continue.
//!
//! This is the one game with real suspension between steps: every playback
//! delay is an explicit countdown advanced by the driver, so the whole replay
//! loop stays cancellable by session reset and nothing ever blocks.

pub mod playback;
pub mod state;

pub use playback::{MelodyIntent, advance, apply};
pub use state::{MelodyPhase, MelodyState};

use crate::core::{OverlayKind, Presenter};

/// Overlay matching the current phase, if any.
pub fn overlay_for(phase: MelodyPhase) -> Option<OverlayKind> {
    match phase {
        MelodyPhase::Idle => Some(OverlayKind::Start),
        MelodyPhase::GameOver => Some(OverlayKind::GameOver),
        _ => None,
    }
}

/// The scoreboard shows the level in the score slot.
pub fn present<P: Presenter>(state: &MelodyState, presenter: &mut P) {
    presenter.update_scoreboard(state.level, state.lives);
    presenter.render();
}
