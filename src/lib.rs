//! Mini Arcade - four small casual games on one simulation skeleton
//!
//! Core modules:
//! - `core`: the shared tick-driven skeleton (geometry, input latching,
//!   scheduling, prompt banks, presentation seam)
//! - `runner`: endless runner (jump over obstacles, grab hearts)
//! - `snake`: grid snake gated by quiz questions
//! - `balloon`: arithmetic balloons against a countdown clock
//! - `melody`: listen-and-repeat note sequences
//! - `storage`/`highscores`/`settings`: key-value persistence
//! - `audio`: fire-and-forget tone synthesis
//!
//! Each game module is pure and deterministic: fixed timestep, seeded RNG,
//! no rendering or platform dependencies. Platform glue lives at the crate
//! root and behind `cfg(target_arch = "wasm32")`.

pub mod audio;
pub mod balloon;
pub mod core;
pub mod highscores;
pub mod melody;
pub mod runner;
pub mod settings;
pub mod snake;
pub mod storage;

pub use audio::{Note, ToneSink};
pub use highscores::{BestScores, GameId};
pub use settings::Settings;
pub use storage::KeyValueStore;

/// Browser-side init: panic messages and the log facade go to the console.
#[cfg(target_arch = "wasm32")]
mod wasm_init {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
}
