//! Shared simulation skeleton
//!
//! The pieces every game is built from. This module must be pure and
//! deterministic:
//! - Fixed timestep or fixed-period logic ticks only
//! - Seeded RNG only (passed in by the owning session)
//! - No rendering or platform dependencies

pub mod bank;
pub mod geom;
pub mod input;
pub mod present;
pub mod sched;

pub use bank::PromptBank;
pub use geom::Aabb;
pub use input::{IntentQueue, KeyLatch};
pub use present::{NullPresenter, OverlayKind, Presenter, sync_overlay};
pub use sched::{Countdown, FixedTimestep, IntervalTimer};
