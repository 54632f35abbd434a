//! Runner session state and entities

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::core::Aabb;

/// Downward acceleration per tick while airborne.
pub const GRAVITY: f32 = 0.6;
/// Vertical impulse applied on a grounded jump.
pub const JUMP_IMPULSE: f32 = -10.0;
/// Ground line in playfield coordinates (y grows downward).
pub const GROUND_Y: f32 = 350.0;
/// Playfield extent.
pub const ARENA_W: f32 = 800.0;
pub const ARENA_H: f32 = 400.0;
/// Scroll speed at the start of a run, and its per-tick gain.
pub const START_SPEED: f32 = 5.0;
pub const SPEED_GAIN: f32 = 0.001;
/// Distance score gained per tick.
pub const SCORE_GAIN: f32 = 0.1;
/// Obstacle spawn period bounds, in ticks.
pub const SPAWN_PERIOD_MIN: u64 = 60;
pub const SPAWN_PERIOD_MAX: u64 = 120;
/// A heart drops every this many ticks.
pub const POWERUP_PERIOD: u64 = 1000;
pub const START_LIVES: u8 = 3;
pub const MAX_LIVES: u8 = 5;

/// Current phase of a runner session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerPhase {
    Menu,
    Playing,
    /// Frozen frame with a pause overlay; the tick does nothing.
    Paused,
    GameOver,
}

/// Selectable characters. Each has its own hitbox; the cat additionally gets
/// narrower ground obstacles (inherited quirk, kept).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    #[default]
    Boy,
    Girl,
    Cat,
}

impl Character {
    /// Hitbox (width, height).
    pub fn hitbox(self) -> (f32, f32) {
        match self {
            Character::Boy => (40.0, 60.0),
            Character::Girl => (40.0, 55.0),
            Character::Cat => (50.0, 30.0),
        }
    }

    fn ground_obstacle_width(self) -> f32 {
        match self {
            Character::Cat => 20.0,
            _ => 30.0,
        }
    }
}

/// The player avatar.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Aabb,
    /// Vertical velocity (positive is down).
    pub dy: f32,
    pub grounded: bool,
}

impl Player {
    pub fn new(character: Character) -> Self {
        let (w, h) = character.hitbox();
        Self {
            body: Aabb::new(50.0, GROUND_Y - h, w, h),
            dy: 0.0,
            grounded: true,
        }
    }

    /// Apply the jump impulse, once per grounded contact. Airborne requests
    /// are ignored until the player lands again.
    pub fn jump(&mut self) {
        if self.grounded {
            self.dy = JUMP_IMPULSE;
            self.grounded = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Low obstacle on the ground line.
    Ground,
    /// Flying obstacle at jump height.
    Air,
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub body: Aabb,
    pub kind: ObstacleKind,
}

/// Extra-life heart.
#[derive(Debug, Clone)]
pub struct Powerup {
    pub body: Aabb,
}

/// Complete runner session state.
#[derive(Debug, Clone)]
pub struct RunnerState {
    /// Run seed for reproducibility.
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: RunnerPhase,
    pub character: Character,
    /// Ticks since the run started.
    pub frames: u64,
    /// Distance score; floored for display and persistence.
    pub score: f32,
    pub lives: u8,
    /// Current scroll speed in px/tick.
    pub speed: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub powerups: Vec<Powerup>,
}

impl RunnerState {
    pub fn new(seed: u64, character: Character) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunnerPhase::Menu,
            character,
            frames: 0,
            score: 0.0,
            lives: START_LIVES,
            speed: START_SPEED,
            player: Player::new(character),
            obstacles: Vec::new(),
            powerups: Vec::new(),
        }
    }

    /// Begin (or restart) a run from the current character selection.
    pub fn start_run(&mut self) {
        self.phase = RunnerPhase::Playing;
        self.frames = 0;
        self.score = 0.0;
        self.lives = START_LIVES;
        self.speed = START_SPEED;
        self.player = Player::new(self.character);
        self.obstacles.clear();
        self.powerups.clear();
    }

    pub fn final_score(&self) -> u32 {
        debug_assert!(self.score >= 0.0, "negative score {}", self.score);
        self.score.max(0.0) as u32
    }

    /// Spawn one obstacle at the right edge. 70% ground, 30% air.
    pub(crate) fn spawn_obstacle(&mut self) {
        let kind = if self.rng.random::<f32>() < 0.7 {
            ObstacleKind::Ground
        } else {
            ObstacleKind::Air
        };
        let body = match kind {
            ObstacleKind::Ground => {
                let w = self.character.ground_obstacle_width();
                Aabb::new(ARENA_W, GROUND_Y - 50.0, w, 50.0)
            }
            ObstacleKind::Air => Aabb::new(ARENA_W, GROUND_Y - 120.0, 40.0, 30.0),
        };
        self.obstacles.push(Obstacle { body, kind });
    }

    /// Spawn one heart at the right edge, floating above jump height.
    pub(crate) fn spawn_powerup(&mut self) {
        let y = GROUND_Y - 150.0 - self.rng.random::<f32>() * 50.0;
        self.powerups.push(Powerup {
            body: Aabb::new(ARENA_W, y, 20.0, 20.0),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_menu() {
        let state = RunnerState::new(1, Character::Boy);
        assert_eq!(state.phase, RunnerPhase::Menu);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.player.grounded);
    }

    #[test]
    fn character_hitboxes_differ() {
        assert_eq!(Character::Boy.hitbox(), (40.0, 60.0));
        assert_eq!(Character::Cat.hitbox(), (50.0, 30.0));
    }

    #[test]
    fn cat_narrows_ground_obstacles() {
        let mut state = RunnerState::new(9, Character::Cat);
        // Ground obstacles for the cat are 20 wide; air obstacles unaffected.
        for _ in 0..20 {
            state.spawn_obstacle();
        }
        for obstacle in &state.obstacles {
            match obstacle.kind {
                ObstacleKind::Ground => assert_eq!(obstacle.body.w, 20.0),
                ObstacleKind::Air => assert_eq!(obstacle.body.w, 40.0),
            }
        }
    }

    #[test]
    fn start_run_resets_everything() {
        let mut state = RunnerState::new(2, Character::Girl);
        state.start_run();
        state.score = 123.0;
        state.lives = 1;
        state.spawn_obstacle();
        state.start_run();
        assert_eq!(state.final_score(), 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, RunnerPhase::Playing);
    }
}
