//! Quiz snake
//!
//! Classic grid snake where food is gated behind a quiz question. Correct
//! answers score and refill lives; every 50 points is a milestone that
//! speeds the snake up and offers a victory exit.

pub mod questions;
pub mod state;
pub mod tick;

pub use state::{
    AnswerOutcome, Cell, Direction, Grade, Question, SnakePhase, SnakeState,
};
pub use tick::{SnakeIntent, advance, apply};

use crate::core::{OverlayKind, Presenter};

/// Overlay matching the current phase, if any. The answer cooldown keeps the
/// question overlay up so the feedback and countdown stay visible.
pub fn overlay_for(phase: SnakePhase) -> Option<OverlayKind> {
    match phase {
        SnakePhase::Menu => Some(OverlayKind::Start),
        SnakePhase::Playing => None,
        SnakePhase::AwaitingAnswer | SnakePhase::Cooldown => Some(OverlayKind::Question),
        SnakePhase::Victory => Some(OverlayKind::Victory),
        SnakePhase::GameOver => Some(OverlayKind::GameOver),
    }
}

pub fn present<P: Presenter>(state: &SnakeState, presenter: &mut P) {
    presenter.update_scoreboard(state.score, state.lives);
    presenter.render();
}
