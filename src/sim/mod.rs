//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Seeded RNG only (owned by the round)
//! - Stable iteration order (entities keep spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod hud;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{autopilot, intent_toward};
pub use collision::{Rect, rects_overlap};
pub use spawn::{spawn_fish, spawn_log, spawn_mines};
pub use state::{Arena, Facing, Fish, GamePhase, Log, LossCause, Mine, Player, Round};
pub use tick::{GameEvent, Intent, advance};
