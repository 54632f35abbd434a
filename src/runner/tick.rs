//! Runner tick
//!
//! One fixed step: sample input, advance the player and the scroll, run the
//! spawners, resolve collisions in collection order.

use rand::Rng;

use super::state::{
    GRAVITY, GROUND_Y, MAX_LIVES, POWERUP_PERIOD, RunnerPhase, RunnerState, SCORE_GAIN,
    SPAWN_PERIOD_MAX, SPAWN_PERIOD_MIN, SPEED_GAIN,
};

/// Input for a single tick. `jump` is latched key state; the rest are
/// one-shot intents the driver clears after each tick.
#[derive(Debug, Clone, Default)]
pub struct RunnerInput {
    /// Jump key currently held.
    pub jump: bool,
    /// Pause toggle.
    pub pause: bool,
    /// Start or restart a run.
    pub start: bool,
}

/// Advance the session by one fixed step.
pub fn tick(state: &mut RunnerState, input: &RunnerInput) {
    if input.start {
        match state.phase {
            RunnerPhase::Menu | RunnerPhase::GameOver => state.start_run(),
            _ => {}
        }
    }

    if input.pause {
        match state.phase {
            RunnerPhase::Playing => {
                state.phase = RunnerPhase::Paused;
                return;
            }
            RunnerPhase::Paused => state.phase = RunnerPhase::Playing,
            _ => {}
        }
    }

    // Paused still renders a frozen frame; the simulation itself is inert.
    if state.phase != RunnerPhase::Playing {
        return;
    }

    state.frames += 1;
    state.speed += SPEED_GAIN;
    state.score += SCORE_GAIN;

    // Player physics: jump is sampled from the latch, then gravity applies.
    if input.jump {
        state.player.jump();
    }
    let player = &mut state.player;
    player.body.y += player.dy;
    if player.body.y + player.body.h < GROUND_Y {
        player.dy += GRAVITY;
        player.grounded = false;
    } else {
        player.dy = 0.0;
        player.grounded = true;
        player.body.y = GROUND_Y - player.body.h;
    }

    // Spawn gate. The period is re-drawn every tick, not once per spawn,
    // which skews gaps shorter than a plain uniform draw (see DESIGN.md).
    let period = state
        .rng
        .random_range(SPAWN_PERIOD_MIN..=SPAWN_PERIOD_MAX);
    if state.frames % period == 0 {
        state.spawn_obstacle();
    }
    if state.frames % POWERUP_PERIOD == 0 {
        state.spawn_powerup();
    }

    // Obstacles: advance, resolve hits in collection order, cull off-screen.
    let mut i = 0;
    while i < state.obstacles.len() {
        state.obstacles[i].body.x -= state.speed;
        let body = state.obstacles[i].body;

        if state.player.body.intersects(&body) {
            // Remove first so the same obstacle can't hit twice.
            state.obstacles.remove(i);
            state.lives = state.lives.saturating_sub(1);
            if state.lives == 0 {
                state.phase = RunnerPhase::GameOver;
                return;
            }
            continue;
        }
        if body.x + body.w < 0.0 {
            state.obstacles.remove(i);
            continue;
        }
        i += 1;
    }

    // Hearts: collect on overlap, cap at max lives.
    let mut i = 0;
    while i < state.powerups.len() {
        state.powerups[i].body.x -= state.speed;
        let body = state.powerups[i].body;

        if state.player.body.intersects(&body) {
            state.powerups.remove(i);
            state.lives = (state.lives + 1).min(MAX_LIVES);
            continue;
        }
        if body.x + body.w < 0.0 {
            state.powerups.remove(i);
            continue;
        }
        i += 1;
    }
}
