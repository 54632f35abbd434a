//! Snake tick and intent dispatch
//!
//! Movement runs on a fixed-period timer that only advances while the phase
//! is Playing; the quiz gate and its cooldown are driven by the same
//! `advance` call so there is exactly one timer source per session.

use super::state::{
    ANSWER_COOLDOWN, AnswerOutcome, Cell, CORRECT_POINTS, Direction, GRID_CELLS,
    MILESTONE_POINTS, MIN_PERIOD, PERIOD_STEP, START_LIVES, SnakePhase, SnakeState,
};

/// One-shot intents from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeIntent {
    /// Start or restart a run at the current grade.
    Start,
    /// Latch a direction change for the next movement step.
    SetDirection(Direction),
    /// Answer the on-screen question by choice index.
    Answer(usize),
    /// Keep playing after a milestone.
    Continue,
    /// Stop at a milestone and return to the menu.
    Stop,
}

/// Dispatch a single intent against the session.
pub fn apply(state: &mut SnakeState, intent: SnakeIntent) {
    match intent {
        SnakeIntent::Start => match state.phase {
            SnakePhase::Menu | SnakePhase::GameOver => state.start_run(),
            _ => {}
        },
        SnakeIntent::SetDirection(dir) => {
            if state.phase == SnakePhase::Playing && dir.is_perpendicular(state.dir) {
                state.next_dir = dir;
            }
        }
        SnakeIntent::Answer(choice) => {
            // The cooldown rejects late answers outright.
            if state.phase == SnakePhase::AwaitingAnswer {
                answer(state, choice);
            }
        }
        SnakeIntent::Continue => {
            if state.phase == SnakePhase::Victory {
                state.spawn_food();
                state.timer.reset();
                state.phase = SnakePhase::Playing;
            }
        }
        SnakeIntent::Stop => {
            if state.phase == SnakePhase::Victory {
                state.phase = SnakePhase::Menu;
            }
        }
    }
}

/// Advance the session clock by `dt` seconds.
pub fn advance(state: &mut SnakeState, dt: f32) {
    match state.phase {
        SnakePhase::Playing => {
            let steps = state.timer.fire(dt);
            for _ in 0..steps {
                step(state);
                if state.phase != SnakePhase::Playing {
                    break;
                }
            }
        }
        SnakePhase::Cooldown => {
            if state.cooldown.tick(dt) {
                resolve_gate(state);
            }
        }
        _ => {}
    }
}

/// One movement step.
fn step(state: &mut SnakeState) {
    state.dir = state.next_dir;
    let (dx, dy) = state.dir.delta();
    let head = Cell {
        x: state.head().x + dx,
        y: state.head().y + dy,
    };

    let out_of_bounds =
        head.x < 0 || head.x >= GRID_CELLS || head.y < 0 || head.y >= GRID_CELLS;
    if out_of_bounds || state.body.contains(&head) {
        die(state);
        return;
    }

    state.body.insert(0, head);
    if head == state.food {
        // Grown by one (no tail pop); suspend into the quiz gate.
        match state.bank.draw(&mut state.rng) {
            Some(question) => {
                state.question = Some(question);
                state.last_outcome = None;
                state.phase = SnakePhase::AwaitingAnswer;
            }
            // Empty bank: skip the gate rather than fail.
            None => state.spawn_food(),
        }
    } else {
        state.body.pop();
    }
}

fn die(state: &mut SnakeState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = SnakePhase::GameOver;
    } else {
        state.respawn_body();
    }
}

fn answer(state: &mut SnakeState, choice: usize) {
    let Some(question) = state.question.as_ref() else {
        return;
    };
    if choice == question.correct {
        state.score += CORRECT_POINTS;
        state.lives = START_LIVES;
        state.last_outcome = Some(AnswerOutcome::Correct);
    } else {
        // Wrong answers shrink the snake instead of costing a life.
        if state.body.len() > 1 {
            state.body.pop();
        }
        state.last_outcome = Some(AnswerOutcome::Wrong);
    }
    state.cooldown.start(ANSWER_COOLDOWN);
    state.phase = SnakePhase::Cooldown;
}

/// Resolve the quiz gate once the cooldown expires: either celebrate a newly
/// crossed milestone or drop straight back into play.
fn resolve_gate(state: &mut SnakeState) {
    state.question = None;

    let crossed = state.score / MILESTONE_POINTS;
    if state.score > 0 && crossed > state.milestones_fired {
        state.milestones_fired = crossed;
        let period = (state.timer.period() - PERIOD_STEP).max(MIN_PERIOD);
        state.timer.set_period(period);
        state.phase = SnakePhase::Victory;
    } else {
        state.spawn_food();
        state.timer.reset();
        state.phase = SnakePhase::Playing;
    }
}
