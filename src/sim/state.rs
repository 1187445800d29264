//! Round state and core simulation types
//!
//! Everything the per-frame step mutates lives in [`Round`]. The render side
//! only ever reads it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::{spawn_fish, spawn_mines};
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Round lost, frozen until restart
    Lost,
    /// Every fish collected, frozen until restart
    Won,
}

impl GamePhase {
    /// Lost and Won freeze the simulation
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Oxygen ran out
    Suffocated,
    /// Touched an armed mine
    Mine,
    /// Hit by a drifting log
    Log,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The fixed play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Boundary between land (y < surface_y) and water
    pub surface_y: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            surface_y: SURFACE_HEIGHT,
        }
    }
}

impl Arena {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when a box whose top edge sits at `y` is on land
    #[inline]
    pub fn is_breathable(&self, y: f32) -> bool {
        y < self.surface_y
    }
}

/// The player-controlled fox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    /// Pixels per second
    pub speed: f32,
    /// Whether directional input was held this frame (drives the swim animation)
    pub moving: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: Vec2::splat(PLAYER_SIZE),
            facing: Facing::Right,
            speed: PLAYER_SPEED,
            moving: false,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_at_surface(&self, arena: &Arena) -> bool {
        arena.is_breathable(self.pos.y)
    }

    /// Keep the whole sprite inside the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        let max = (arena.size() - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

/// A collectible fish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Vec2,
    pub size: Vec2,
    /// Goes false exactly once, when collected
    pub alive: bool,
    /// Animation phase offset (cosmetic only)
    pub phase_seed: f32,
}

impl Fish {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A static sea mine that becomes lethal after a short delay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mine {
    pub pos: Vec2,
    /// Side length (mines are square)
    pub size: f32,
    /// Seconds since spawn
    pub age: f32,
    pub armed: bool,
}

impl Mine {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            age: 0.0,
            armed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, Vec2::splat(self.size))
    }

    /// Age the mine. Returns true on the frame it arms.
    pub fn age_by(&mut self, dt: f32, arm_delay: f32) -> bool {
        self.age += dt;
        if !self.armed && self.age >= arm_delay {
            self.armed = true;
            return true;
        }
        false
    }
}

/// A log drifting horizontally across the water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (pixels/s); positive travels left to right
    pub vel_x: f32,
    /// Phase offset for the cosmetic bob
    pub wobble_seed: f32,
}

impl Log {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Whether the log is fully past the edge opposite the one it entered from
    pub fn has_exited(&self, arena: &Arena) -> bool {
        if self.vel_x > 0.0 {
            self.pos.x > arena.width + LOG_DESPAWN_MARGIN
        } else if self.vel_x < 0.0 {
            self.pos.x < -self.size.x - LOG_DESPAWN_MARGIN
        } else {
            false
        }
    }
}

/// One play session from spawn to Lost/Won (deterministic per seed)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    /// Seed this round was spawned from
    pub seed: u64,
    pub arena: Arena,
    pub phase: GamePhase,
    /// Set together with `GamePhase::Lost`
    pub loss_cause: Option<LossCause>,
    pub player: Player,
    pub fish: Vec<Fish>,
    /// Number of fish with `alive == false`
    pub fish_collected: u32,
    /// Fish spawned for this round
    pub total_fish: u32,
    pub mines: Vec<Mine>,
    pub logs: Vec<Log>,
    pub oxygen: f32,
    /// Seconds of Playing time
    pub elapsed: f32,
    /// Seconds since the last log spawned
    pub log_spawn_timer: f32,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl Round {
    /// Spawn a fresh round in the default arena
    pub fn new(seed: u64) -> Self {
        Self::with_arena(seed, Arena::default())
    }

    /// Spawn a fresh round in the given arena
    pub fn with_arena(seed: u64, arena: Arena) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let fish = spawn_fish(TOTAL_FISH, &arena, &mut rng);
        let mines = spawn_mines(MINE_COUNT, &arena, &mut rng);

        log::debug!(
            "Round spawned (seed {}): {} fish, {} mines",
            seed,
            fish.len(),
            mines.len()
        );

        Self {
            seed,
            arena,
            phase: GamePhase::Playing,
            loss_cause: None,
            player: Player::default(),
            total_fish: fish.len() as u32,
            fish,
            fish_collected: 0,
            mines,
            logs: Vec::new(),
            oxygen: OXYGEN_MAX,
            elapsed: 0.0,
            log_spawn_timer: 0.0,
            rng,
        }
    }

    /// Replace this round with a freshly spawned one in the same arena.
    /// The next seed comes from this round's RNG so sessions replay exactly.
    pub fn restart(&mut self) {
        let seed = self.rng.random::<u64>();
        *self = Self::with_arena(seed, self.arena);
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Playing -> Lost. Ignored once the round is over.
    pub fn lose(&mut self, cause: LossCause) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Lost;
            self.loss_cause = Some(cause);
        }
    }

    /// Playing -> Won. Ignored once the round is over.
    pub fn win(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Won;
        }
    }
}
