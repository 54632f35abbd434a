//! Melody session state

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::Note;
use crate::core::Countdown;

/// Gap between intro notes, and the pause before the first sequence.
pub const INTRO_GAP: f32 = 0.4;
pub const INTRO_PAUSE: f32 = 0.5;
/// Slot per sequence element during playback.
pub const PLAYBACK_GAP: f32 = 0.8;
/// Pause before replaying the sequence after a miss.
pub const RETRY_DELAY: f32 = 1.0;
/// Pause between clearing a level and the next sequence.
pub const NEXT_LEVEL_DELAY: f32 = 1.5;
pub const START_LIVES: u8 = 3;
/// Levels at or below this draw from the white keys only.
pub const WHITE_KEYS_MAX_LEVEL: u32 = 10;

/// Current phase of a melody session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MelodyPhase {
    Idle,
    /// Playing the full alphabet once, as orientation.
    Intro,
    /// Playing the sequence back, one element per slot.
    PlayingBack,
    /// Waiting for player input.
    Listening,
    /// Sequence completed; next level after a short pause.
    LevelClear,
    /// Wrong note; same sequence replays after a short pause.
    Missed,
    /// Out of lives. The level survives for a continue.
    GameOver,
}

/// Complete melody session state.
#[derive(Debug, Clone)]
pub struct MelodyState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: MelodyPhase,
    pub level: u32,
    pub lives: u8,
    /// The sequence for the current level.
    pub sequence: Vec<Note>,
    /// Player input position within the sequence.
    pub cursor: usize,
    /// Index of the element most recently played back.
    pub playback_pos: usize,
    /// Index of the intro note most recently played.
    pub intro_pos: usize,
    /// The single pending suspension point.
    pub delay: Countdown,
}

impl MelodyState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: MelodyPhase::Idle,
            level: 1,
            lives: START_LIVES,
            sequence: Vec::new(),
            cursor: 0,
            playback_pos: 0,
            intro_pos: 0,
            delay: Countdown::new(),
        }
    }

    /// Full reset, or a continue that keeps the reached level.
    pub fn reset(&mut self, keep_level: bool) {
        if !keep_level {
            self.level = 1;
        }
        self.lives = START_LIVES;
        self.sequence.clear();
        self.cursor = 0;
        self.playback_pos = 0;
        self.intro_pos = 0;
        self.delay.cancel();
        self.phase = MelodyPhase::Idle;
    }

    /// Notes available at the current level.
    pub fn alphabet(&self) -> &'static [Note] {
        if self.level > WHITE_KEYS_MAX_LEVEL {
            &Note::ALL
        } else {
            &Note::WHITE
        }
    }

    /// Draw a fresh sequence of length `level` from the active alphabet.
    pub(crate) fn generate_sequence(&mut self) {
        let alphabet = self.alphabet();
        self.sequence = (0..self.level)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())])
            .collect();
    }

    /// The level doubles as the persisted score.
    pub fn final_score(&self) -> u32 {
        self.level
    }
}
