//! Snake session state

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::core::{Countdown, IntervalTimer, PromptBank};

use super::questions;

/// Board size in cells (square).
pub const GRID_CELLS: i32 = 20;
/// Food never spawns within this many cells of the border.
pub const FOOD_MARGIN: i32 = 2;
/// Movement period at the start of a run, in seconds.
pub const BASE_PERIOD: f32 = 0.15;
/// Period reduction per milestone, and the floor it never drops below.
pub const PERIOD_STEP: f32 = 0.015;
pub const MIN_PERIOD: f32 = 0.05;
/// Score threshold whose multiples trigger the victory milestone.
pub const MILESTONE_POINTS: u32 = 50;
/// Cooldown after an answer during which new answers are rejected.
pub const ANSWER_COOLDOWN: f32 = 3.0;
pub const START_LIVES: u8 = 3;
pub const CORRECT_POINTS: u32 = 10;

const START_HEAD: Cell = Cell { x: 8, y: 10 };
const START_LEN: usize = 3;

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// A turn is only accepted at a right angle to current motion, which
    /// also rules out instant reversals.
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}

/// Difficulty grade selecting the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    #[default]
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Three,
        Grade::Four,
        Grade::Five,
        Grade::Six,
        Grade::Seven,
    ];
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    /// Index of the correct choice.
    pub correct: usize,
}

/// Current phase of a snake session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakePhase {
    Menu,
    Playing,
    /// Movement suspended, question on screen.
    AwaitingAnswer,
    /// Post-answer countdown; further answers are rejected.
    Cooldown,
    /// Milestone reached; continue or stop.
    Victory,
    GameOver,
}

/// Feedback for the last answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

/// Complete snake session state.
#[derive(Debug, Clone)]
pub struct SnakeState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: SnakePhase,
    pub grade: Grade,
    pub bank: PromptBank<Question>,
    /// Body cells, head first.
    pub body: Vec<Cell>,
    pub dir: Direction,
    /// Latched direction applied at the next movement step.
    pub next_dir: Direction,
    pub food: Cell,
    pub score: u32,
    pub lives: u8,
    /// Movement step timer; its period shrinks at milestones.
    pub timer: IntervalTimer,
    pub cooldown: Countdown,
    /// Question currently on screen (kept up through the cooldown).
    pub question: Option<Question>,
    pub last_outcome: Option<AnswerOutcome>,
    /// Highest `score / MILESTONE_POINTS` already celebrated.
    pub(crate) milestones_fired: u32,
}

impl SnakeState {
    pub fn new(seed: u64, grade: Grade) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SnakePhase::Menu,
            grade,
            bank: PromptBank::new(questions::bank(grade)),
            body: start_body(START_LEN),
            dir: Direction::Right,
            next_dir: Direction::Right,
            food: Cell { x: 0, y: 0 },
            score: 0,
            lives: START_LIVES,
            timer: IntervalTimer::new(BASE_PERIOD),
            cooldown: Countdown::new(),
            question: None,
            last_outcome: None,
            milestones_fired: 0,
        }
    }

    /// Begin (or restart) a run at the selected grade.
    pub fn start_run(&mut self) {
        self.body = start_body(START_LEN);
        self.dir = Direction::Right;
        self.next_dir = Direction::Right;
        self.score = 0;
        self.lives = START_LIVES;
        self.timer = IntervalTimer::new(BASE_PERIOD);
        self.cooldown.cancel();
        self.question = None;
        self.last_outcome = None;
        self.milestones_fired = 0;
        self.bank.reset_cycle();
        self.spawn_food();
        self.phase = SnakePhase::Playing;
    }

    pub fn final_score(&self) -> u32 {
        self.score
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Place food on a free cell inside the margin. Re-rolls while it lands
    /// on the snake; falls back to a scan if the board is nearly full.
    pub(crate) fn spawn_food(&mut self) {
        let lo = FOOD_MARGIN;
        let hi = GRID_CELLS - FOOD_MARGIN;
        for _ in 0..1024 {
            let candidate = Cell {
                x: self.rng.random_range(lo..hi),
                y: self.rng.random_range(lo..hi),
            };
            if !self.body.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
        for y in lo..hi {
            for x in lo..hi {
                let candidate = Cell { x, y };
                if !self.body.contains(&candidate) {
                    self.food = candidate;
                    return;
                }
            }
        }
        // Board is full; leave the food where it was.
    }

    /// Rebuild the body at the start row, preserving its current length.
    pub(crate) fn respawn_body(&mut self) {
        let len = self.body.len();
        self.body = start_body(len);
        self.dir = Direction::Right;
        self.next_dir = Direction::Right;
    }
}

fn start_body(len: usize) -> Vec<Cell> {
    (0..len)
        .map(|i| Cell {
            x: START_HEAD.x - i as i32,
            y: START_HEAD.y,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_turns_only() {
        assert!(Direction::Right.is_perpendicular(Direction::Up));
        assert!(Direction::Up.is_perpendicular(Direction::Left));
        assert!(!Direction::Right.is_perpendicular(Direction::Left));
        assert!(!Direction::Up.is_perpendicular(Direction::Up));
    }

    #[test]
    fn start_body_trails_left_of_the_head() {
        let state = SnakeState::new(1, Grade::Three);
        assert_eq!(state.body.len(), START_LEN);
        assert_eq!(state.head(), START_HEAD);
        assert_eq!(state.body[1], Cell { x: 7, y: 10 });
        assert_eq!(state.body[2], Cell { x: 6, y: 10 });
    }

    #[test]
    fn food_spawns_inside_margin_and_off_the_snake() {
        let mut state = SnakeState::new(3, Grade::Four);
        for _ in 0..50 {
            state.spawn_food();
            let f = state.food;
            assert!(f.x >= FOOD_MARGIN && f.x < GRID_CELLS - FOOD_MARGIN);
            assert!(f.y >= FOOD_MARGIN && f.y < GRID_CELLS - FOOD_MARGIN);
            assert!(!state.body.contains(&f));
        }
    }

    #[test]
    fn respawn_preserves_length() {
        let mut state = SnakeState::new(4, Grade::Five);
        state.body.push(Cell { x: 5, y: 10 });
        state.body.push(Cell { x: 4, y: 10 });
        let len = state.body.len();
        state.respawn_body();
        assert_eq!(state.body.len(), len);
        assert_eq!(state.head(), START_HEAD);
        assert_eq!(state.dir, Direction::Right);
    }
}
