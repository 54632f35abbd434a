//! Endless runner
//!
//! Jump over scrolling obstacles, collect hearts, survive. Frame-paced at a
//! fixed 60 Hz step; score is distance travelled.

pub mod state;
pub mod tick;

pub use state::{Character, Obstacle, ObstacleKind, Player, Powerup, RunnerPhase, RunnerState};
pub use tick::{RunnerInput, tick};

use crate::core::{OverlayKind, Presenter};

/// Overlay matching the current phase, if any.
pub fn overlay_for(phase: RunnerPhase) -> Option<OverlayKind> {
    match phase {
        RunnerPhase::Menu => Some(OverlayKind::Start),
        RunnerPhase::Playing => None,
        RunnerPhase::Paused => Some(OverlayKind::Pause),
        RunnerPhase::GameOver => Some(OverlayKind::GameOver),
    }
}

/// Push current session state at the presentation adapter. Called after every
/// tick; while paused this keeps re-rendering the frozen frame.
pub fn present<P: Presenter>(state: &RunnerState, presenter: &mut P) {
    presenter.update_scoreboard(state.final_score(), state.lives);
    presenter.render();
}
