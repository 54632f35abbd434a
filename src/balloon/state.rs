//! Balloon session state

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::{Countdown, IntervalTimer};

use super::problem::Problem;

/// Session clock at the start of a run, in seconds.
pub const START_CLOCK: f32 = 30.0;
/// Spawner period in seconds.
pub const SPAWN_PERIOD: f32 = 1.2;
/// Trap probability is `score / TRAP_PROB_SCALE`, capped.
pub const TRAP_PROB_CAP: f64 = 0.3;
pub const TRAP_PROB_SCALE: f64 = 200.0;
pub const CORRECT_POINTS: u32 = 5;
/// Seconds added to the clock per correct answer.
pub const TIME_BONUS: f32 = 5.0;
/// Streak length that converts to a bonus and resets.
pub const STREAK_TARGET: u8 = 3;
pub const STREAK_BONUS: u32 = 10;
/// Penalty cooldown after a wrong answer or a trap.
pub const PENALTY_SECS: f32 = 3.0;
/// A balloon crosses the field (y: -0.1 to 1.1) in this many seconds.
pub const RISE_SECS_MIN: f32 = 4.0;
pub const RISE_SECS_MAX: f32 = 6.0;
/// Horizontal spawn band, as a fraction of field width.
pub const SPAWN_X_MIN: f32 = 0.10;
pub const SPAWN_X_MAX: f32 = 0.90;

/// A rising balloon. Positions are normalized to the field: x in [0, 1],
/// y from -0.1 (just below) to 1.1 (gone off the top).
#[derive(Debug, Clone)]
pub struct Balloon {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub problem: Problem,
    /// Trap balloons carry no answerable prompt; popping one is a penalty.
    pub trap: bool,
}

/// The balloon whose problem is currently being answered. A copy, so the
/// balloon drifting off the top mid-answer cannot invalidate the prompt.
#[derive(Debug, Clone, Copy)]
pub struct ActiveBalloon {
    pub id: u32,
    pub problem: Problem,
}

/// Current phase of a balloon session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalloonPhase {
    Menu,
    Playing,
    /// Answer prompt open; the clock and balloons keep moving.
    AwaitingAnswer,
    /// Penalty cooldown; spawning is gated off, the clock keeps running.
    Penalty,
    GameOver,
}

/// Complete balloon session state.
#[derive(Debug, Clone)]
pub struct BalloonState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: BalloonPhase,
    pub score: u32,
    pub streak: u8,
    /// Remaining time in seconds.
    pub clock: f32,
    pub balloons: Vec<Balloon>,
    pub active: Option<ActiveBalloon>,
    pub spawn_timer: IntervalTimer,
    pub penalty: Countdown,
    next_id: u32,
}

impl BalloonState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: BalloonPhase::Menu,
            score: 0,
            streak: 0,
            clock: START_CLOCK,
            balloons: Vec::new(),
            active: None,
            spawn_timer: IntervalTimer::new(SPAWN_PERIOD),
            penalty: Countdown::new(),
            next_id: 1,
        }
    }

    /// Begin (or restart) a run.
    pub fn start_run(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.clock = START_CLOCK;
        self.balloons.clear();
        self.active = None;
        self.spawn_timer.reset();
        self.penalty.cancel();
        self.phase = BalloonPhase::Playing;
    }

    pub fn final_score(&self) -> u32 {
        self.score
    }

    /// Trap chance for the next spawn; grows with score, capped.
    pub fn trap_probability(&self) -> f64 {
        (self.score as f64 / TRAP_PROB_SCALE).min(TRAP_PROB_CAP)
    }

    /// Append one balloon at the bottom of the field.
    pub(crate) fn spawn_balloon(&mut self, trap: bool) {
        let problem = Problem::generate(&mut self.rng);
        let x = self
            .rng
            .random_range(SPAWN_X_MIN..SPAWN_X_MAX);
        let rise_secs = self.rng.random_range(RISE_SECS_MIN..RISE_SECS_MAX);
        let id = self.next_id;
        self.next_id += 1;
        self.balloons.push(Balloon {
            id,
            pos: Vec2::new(x, -0.1),
            // Full crossing is 1.2 field heights.
            vel: Vec2::new(0.0, 1.2 / rise_secs),
            problem,
            trap,
        });
    }
}
