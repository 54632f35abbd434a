//! Math balloon
//!
//! Balloons carrying arithmetic problems rise against a 30-second clock.
//! Popping one opens an answer prompt; correct answers buy points, streak
//! and time. Green trap balloons punish the greedy with a penalty cooldown.

pub mod problem;
pub mod state;
pub mod tick;

pub use problem::{Op, Problem};
pub use state::{ActiveBalloon, Balloon, BalloonPhase, BalloonState};
pub use tick::{BalloonIntent, advance, apply};

use crate::core::{OverlayKind, Presenter};

/// Overlay matching the current phase, if any.
pub fn overlay_for(phase: BalloonPhase) -> Option<OverlayKind> {
    match phase {
        BalloonPhase::Menu => Some(OverlayKind::Start),
        BalloonPhase::Playing => None,
        BalloonPhase::AwaitingAnswer => Some(OverlayKind::Question),
        BalloonPhase::Penalty => Some(OverlayKind::Penalty),
        BalloonPhase::GameOver => Some(OverlayKind::GameOver),
    }
}

/// The scoreboard's small-counter slot shows the streak dots here.
pub fn present<P: Presenter>(state: &BalloonState, presenter: &mut P) {
    presenter.update_scoreboard(state.score, state.streak);
    presenter.render();
}
