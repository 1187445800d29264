//! Fox Dive - An underwater fish-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, per-frame step, round state)
//! - `platform`: Frame clock and keyboard input adapters
//! - `settings`: Runtime settings for the native runner

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;
    /// Surface line: the player breathes while its top edge is above this y
    pub const SURFACE_HEIGHT: f32 = 60.0;

    /// Player defaults - spawns on land
    pub const PLAYER_SIZE: f32 = 39.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 10.0;
    /// Movement speed (pixels/s). 2.6 px per frame at 60 fps.
    pub const PLAYER_SPEED: f32 = 156.0;

    /// Fish
    pub const TOTAL_FISH: u32 = 12;
    pub const FISH_WIDTH: f32 = 24.0;
    pub const FISH_HEIGHT: f32 = 16.0;
    pub const FISH_PADDING: f32 = 12.0;

    /// Oxygen tank
    pub const OXYGEN_MAX: f32 = 100.0;
    /// Drain per second while underwater
    pub const DRAIN_RATE: f32 = 18.0;
    /// Refill per second while on land
    pub const REFILL_RATE: f32 = 55.0;

    /// Mines
    pub const MINE_COUNT: u32 = 6;
    pub const MINE_SIZE_MIN: i32 = 22;
    pub const MINE_SIZE_MAX: i32 = 30;
    pub const MINE_PADDING: f32 = 14.0;
    /// Keeps mines away from the surface line
    pub const MINE_TOP_INSET: f32 = 40.0;
    /// Seconds before a mine becomes lethal
    pub const MINE_ARM_DELAY: f32 = 1.0;

    /// Logs (horizontal current)
    pub const LOG_SPAWN_EVERY: f32 = 2.0;
    pub const LOG_SPEED_MIN: f32 = 70.0;
    pub const LOG_SPEED_MAX: f32 = 120.0;
    pub const LOG_WIDTH_MIN: i32 = 55;
    pub const LOG_WIDTH_MAX: i32 = 95;
    pub const LOG_HEIGHT_MIN: i32 = 14;
    pub const LOG_HEIGHT_MAX: i32 = 18;
    /// Logs spawn this far past the edge they enter from
    pub const LOG_SPAWN_OFFSET: f32 = 10.0;
    /// Logs are culled this far past the edge they leave through
    pub const LOG_DESPAWN_MARGIN: f32 = 40.0;
    pub const LOG_TOP_INSET: f32 = 34.0;
    pub const LOG_BOTTOM_PADDING: f32 = 12.0;
    /// Cosmetic vertical wobble amplitude (pixels)
    pub const LOG_WOBBLE_AMPLITUDE: f32 = 3.0;

    /// Largest frame delta the clock will hand to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Component-wise signum that maps 0.0 to 0.0 (unlike `f32::signum`)
#[inline]
pub fn axis_sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Center point of an axis-aligned box given its top-left corner and size
#[inline]
pub fn box_center(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size * 0.5
}
