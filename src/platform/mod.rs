//! Platform abstraction layer
//!
//! Adapters between the host and the simulation:
//! - Frame clock (timestamps -> per-frame delta)
//! - Keyboard state (key events -> per-frame intent)

pub mod input;
pub mod time;

pub use input::KeyState;
pub use time::Clock;
