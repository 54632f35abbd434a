//! Balloon tick and intent dispatch
//!
//! The session clock runs through answering and penalties; only the spawner
//! is gated during a penalty. Balloons keep rising whatever the phase.

use rand::Rng;

use super::state::{
    ActiveBalloon, BalloonPhase, BalloonState, CORRECT_POINTS, PENALTY_SECS, STREAK_BONUS,
    STREAK_TARGET, TIME_BONUS,
};

/// One-shot intents from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalloonIntent {
    /// Start or restart a run.
    Start,
    /// A balloon was clicked.
    Pop(u32),
    /// Submit an answer for the active problem.
    Submit(i32),
    /// Close the answer prompt without answering.
    Cancel,
}

/// Dispatch a single intent against the session.
pub fn apply(state: &mut BalloonState, intent: BalloonIntent) {
    match intent {
        BalloonIntent::Start => match state.phase {
            BalloonPhase::Menu | BalloonPhase::GameOver => state.start_run(),
            _ => {}
        },
        BalloonIntent::Pop(id) => {
            if state.phase != BalloonPhase::Playing {
                return;
            }
            let Some(idx) = state.balloons.iter().position(|b| b.id == id) else {
                return;
            };
            if state.balloons[idx].trap {
                state.balloons.remove(idx);
                state.streak = 0;
                state.penalty.start(PENALTY_SECS);
                state.phase = BalloonPhase::Penalty;
            } else {
                let balloon = &state.balloons[idx];
                state.active = Some(ActiveBalloon {
                    id: balloon.id,
                    problem: balloon.problem,
                });
                state.phase = BalloonPhase::AwaitingAnswer;
            }
        }
        BalloonIntent::Submit(value) => {
            if state.phase != BalloonPhase::AwaitingAnswer {
                return;
            }
            let Some(active) = state.active.take() else {
                return;
            };
            state.balloons.retain(|b| b.id != active.id);
            if value == active.problem.answer() {
                state.score += CORRECT_POINTS;
                state.streak += 1;
                state.clock += TIME_BONUS;
                if state.streak == STREAK_TARGET {
                    state.score += STREAK_BONUS;
                    state.streak = 0;
                }
                state.phase = BalloonPhase::Playing;
            } else {
                state.streak = 0;
                state.penalty.start(PENALTY_SECS);
                state.phase = BalloonPhase::Penalty;
            }
        }
        BalloonIntent::Cancel => {
            if state.phase == BalloonPhase::AwaitingAnswer {
                state.active = None;
                state.phase = BalloonPhase::Playing;
            }
        }
    }
}

/// Advance the session clock by `dt` seconds.
pub fn advance(state: &mut BalloonState, dt: f32) {
    match state.phase {
        BalloonPhase::Playing | BalloonPhase::AwaitingAnswer | BalloonPhase::Penalty => {}
        _ => return,
    }

    // Session clock keeps running through answers and penalties.
    state.clock -= dt;
    if state.clock <= 0.0 {
        state.clock = 0.0;
        state.active = None;
        state.penalty.cancel();
        state.phase = BalloonPhase::GameOver;
        return;
    }

    // Balloons rise in every live phase; gone once past the top.
    for balloon in &mut state.balloons {
        balloon.pos += balloon.vel * dt;
    }
    state.balloons.retain(|b| b.pos.y <= 1.1);

    if state.phase == BalloonPhase::Penalty && state.penalty.tick(dt) {
        state.phase = BalloonPhase::Playing;
    }

    // Spawner: gated off while a penalty runs.
    if matches!(
        state.phase,
        BalloonPhase::Playing | BalloonPhase::AwaitingAnswer
    ) {
        let fired = state.spawn_timer.fire(dt);
        for _ in 0..fired {
            let p = state.trap_probability();
            let trap = state.rng.random_bool(p);
            state.spawn_balloon(trap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balloon::problem::{Op, Problem};
    use crate::balloon::state::{Balloon, SPAWN_PERIOD, START_CLOCK};
    use glam::Vec2;

    fn playing_state(seed: u64) -> BalloonState {
        let mut state = BalloonState::new(seed);
        state.start_run();
        state
    }

    fn plant_balloon(state: &mut BalloonState, id: u32, problem: Problem, trap: bool) {
        state.balloons.push(Balloon {
            id,
            pos: Vec2::new(0.5, 0.2),
            vel: Vec2::new(0.0, 0.25),
            problem,
            trap,
        });
    }

    fn answer_correctly(state: &mut BalloonState, id: u32) {
        let problem = Problem { a: 3, b: 4, op: Op::Add };
        plant_balloon(state, id, problem, false);
        apply(state, BalloonIntent::Pop(id));
        apply(state, BalloonIntent::Submit(problem.answer()));
    }

    #[test]
    fn correct_answer_scores_streaks_and_buys_time() {
        let mut state = playing_state(1);
        plant_balloon(&mut state, 100, Problem { a: 3, b: 4, op: Op::Add }, false);

        apply(&mut state, BalloonIntent::Pop(100));
        assert_eq!(state.phase, BalloonPhase::AwaitingAnswer);

        apply(&mut state, BalloonIntent::Submit(7));
        assert_eq!(state.score, 5);
        assert_eq!(state.streak, 1);
        assert_eq!(state.clock, START_CLOCK + TIME_BONUS);
        assert_eq!(state.phase, BalloonPhase::Playing);
        assert!(state.balloons.is_empty());
    }

    #[test]
    fn streak_of_three_pays_the_bonus_and_resets() {
        let mut state = playing_state(2);
        answer_correctly(&mut state, 1);
        answer_correctly(&mut state, 2);
        assert_eq!(state.streak, 2);
        answer_correctly(&mut state, 3);
        // 3 x 5 points plus the streak bonus.
        assert_eq!(state.score, 25);
        assert_eq!(state.streak, 0);
    }

    #[test]
    fn wrong_answer_resets_streak_and_starts_the_penalty() {
        let mut state = playing_state(3);
        state.streak = 2;
        plant_balloon(&mut state, 7, Problem { a: 9, b: 4, op: Op::Sub }, false);

        apply(&mut state, BalloonIntent::Pop(7));
        apply(&mut state, BalloonIntent::Submit(99));
        assert_eq!(state.streak, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, BalloonPhase::Penalty);

        // Spawner stays quiet for the whole penalty.
        advance(&mut state, SPAWN_PERIOD * 2.0);
        assert!(state.balloons.is_empty());

        advance(&mut state, 1.0);
        assert_eq!(state.phase, BalloonPhase::Playing);
    }

    #[test]
    fn trap_pops_straight_into_the_penalty() {
        let mut state = playing_state(4);
        state.streak = 1;
        plant_balloon(&mut state, 9, Problem { a: 1, b: 1, op: Op::Add }, true);

        apply(&mut state, BalloonIntent::Pop(9));
        assert_eq!(state.phase, BalloonPhase::Penalty);
        assert_eq!(state.streak, 0);
        assert!(state.balloons.is_empty());
        assert!(state.active.is_none());
    }

    #[test]
    fn cancel_releases_the_balloon_unharmed() {
        let mut state = playing_state(5);
        plant_balloon(&mut state, 3, Problem { a: 2, b: 2, op: Op::Mul }, false);

        apply(&mut state, BalloonIntent::Pop(3));
        apply(&mut state, BalloonIntent::Cancel);
        assert_eq!(state.phase, BalloonPhase::Playing);
        assert_eq!(state.balloons.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn clock_expiry_ends_the_game_once() {
        let mut state = playing_state(6);
        state.clock = 0.5;
        advance(&mut state, 1.0);
        assert_eq!(state.phase, BalloonPhase::GameOver);
        assert_eq!(state.clock, 0.0);

        let score = state.final_score();
        advance(&mut state, 10.0);
        assert_eq!(state.phase, BalloonPhase::GameOver);
        assert_eq!(state.final_score(), score);
    }

    #[test]
    fn spawner_fires_on_its_period() {
        let mut state = playing_state(7);
        advance(&mut state, SPAWN_PERIOD * 3.0);
        assert_eq!(state.balloons.len(), 3);
    }

    #[test]
    fn spawning_continues_while_answering() {
        let mut state = playing_state(8);
        plant_balloon(&mut state, 50, Problem { a: 1, b: 2, op: Op::Add }, false);
        apply(&mut state, BalloonIntent::Pop(50));
        assert_eq!(state.phase, BalloonPhase::AwaitingAnswer);

        advance(&mut state, SPAWN_PERIOD);
        assert_eq!(state.balloons.len(), 2);
    }

    #[test]
    fn balloons_despawn_off_the_top() {
        let mut state = playing_state(9);
        plant_balloon(&mut state, 1, Problem { a: 1, b: 1, op: Op::Add }, false);
        state.balloons[0].pos.y = 1.05;
        advance(&mut state, 1.0);
        assert!(state.balloons.is_empty());
    }

    #[test]
    fn late_answer_for_a_drifted_balloon_still_counts() {
        let mut state = playing_state(10);
        plant_balloon(&mut state, 4, Problem { a: 3, b: 4, op: Op::Add }, false);
        apply(&mut state, BalloonIntent::Pop(4));

        // The balloon escapes off the top while the prompt is open.
        state.balloons[0].pos.y = 2.0;
        advance(&mut state, 0.1);
        assert!(state.balloons.is_empty());

        apply(&mut state, BalloonIntent::Submit(7));
        assert_eq!(state.score, 5);
    }
}
