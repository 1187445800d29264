//! Per-frame simulation step
//!
//! Advances a [`Round`] by one variable-length frame. Sub-steps run in a fixed
//! order because later ones read positions written by earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_log;
use super::state::{Facing, LossCause, Round};
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Horizontal direction: -1 left, 0 none, 1 right
    pub dx: i8,
    /// Vertical direction: -1 up, 0 none, 1 down
    pub dy: i8,
    /// Start a new round (only honoured once the current one is over)
    pub restart: bool,
}

impl Intent {
    /// Directional intent; components are reduced to their sign
    pub fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: dx.signum(),
            dy: dy.signum(),
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }

    /// Movement direction, normalized so diagonals are not faster
    pub fn direction(&self) -> Vec2 {
        let dir = Vec2::new(self.dx.signum() as f32, self.dy.signum() as f32);
        if dir.x != 0.0 && dir.y != 0.0 {
            dir * std::f32::consts::FRAC_1_SQRT_2
        } else {
            dir
        }
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

/// Gameplay events emitted by a frame (for logging, audio, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fish was picked up (index into `Round::fish`)
    FishCollected { index: usize, collected: u32 },
    /// A mine finished its arming delay (index into `Round::mines`)
    MineArmed { index: usize },
    /// A new log entered from the left (`rightward`) or right edge
    LogSpawned { rightward: bool },
    /// A log left the arena and was culled
    LogDespawned,
    Lost(LossCause),
    Won,
    /// A new round replaced a finished one
    Restarted { seed: u64 },
}

/// Advance the round by one frame of `dt` seconds.
///
/// Non-positive (or NaN) `dt` leaves a playing round untouched.
pub fn advance(round: &mut Round, intent: &Intent, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Finished rounds stay frozen until restart
    if round.is_terminal() {
        if intent.restart {
            round.restart();
            log::info!("Round restarted (seed {})", round.seed);
            events.push(GameEvent::Restarted { seed: round.seed });
        }
        return events;
    }

    if dt.is_nan() || dt <= 0.0 {
        return events;
    }

    round.elapsed += dt;

    // Facing only changes on horizontal input
    if intent.dx < 0 {
        round.player.facing = Facing::Left;
    } else if intent.dx > 0 {
        round.player.facing = Facing::Right;
    }

    // Movement
    round.player.moving = intent.is_moving();
    let step = intent.direction() * round.player.speed * dt;
    round.player.pos += step;
    let arena = round.arena;
    round.player.clamp_to(&arena);

    // Oxygen
    if round.player.is_at_surface(&arena) {
        round.oxygen += REFILL_RATE * dt;
    } else {
        round.oxygen -= DRAIN_RATE * dt;
    }
    round.oxygen = round.oxygen.clamp(0.0, OXYGEN_MAX);
    if round.oxygen <= 0.0 {
        finish_lost(round, LossCause::Suffocated, &mut events);
        return events;
    }

    let player_rect = round.player.rect();

    // Mines: age, arm, then test armed ones
    for (index, mine) in round.mines.iter_mut().enumerate() {
        if mine.age_by(dt, MINE_ARM_DELAY) {
            log::debug!("Mine {} armed", index);
            events.push(GameEvent::MineArmed { index });
        }
    }
    if round
        .mines
        .iter()
        .any(|m| m.armed && m.rect().overlaps(&player_rect))
    {
        finish_lost(round, LossCause::Mine, &mut events);
        return events;
    }

    // Logs: spawn on a timer, drift, collide, cull
    round.log_spawn_timer += dt;
    if round.log_spawn_timer >= LOG_SPAWN_EVERY {
        round.log_spawn_timer = 0.0;
        let drift = spawn_log(&round.arena, &mut round.rng);
        log::debug!(
            "Log spawned at ({}, {}) vx={}",
            drift.pos.x,
            drift.pos.y,
            drift.vel_x
        );
        events.push(GameEvent::LogSpawned {
            rightward: drift.vel_x > 0.0,
        });
        round.logs.push(drift);
    }
    for drift in &mut round.logs {
        drift.pos.x += drift.vel_x * dt;
    }
    if round.logs.iter().any(|l| l.rect().overlaps(&player_rect)) {
        finish_lost(round, LossCause::Log, &mut events);
        return events;
    }
    let before = round.logs.len();
    round.logs.retain(|l| !l.has_exited(&arena));
    for _ in round.logs.len()..before {
        events.push(GameEvent::LogDespawned);
    }

    // Fish collection
    for (index, fish) in round.fish.iter_mut().enumerate() {
        if fish.alive && fish.rect().overlaps(&player_rect) {
            fish.alive = false;
            round.fish_collected += 1;
            log::debug!(
                "Fish {} collected ({}/{})",
                index,
                round.fish_collected,
                round.total_fish
            );
            events.push(GameEvent::FishCollected {
                index,
                collected: round.fish_collected,
            });
        }
    }

    // Win check
    if round.fish_collected >= round.total_fish {
        round.win();
        log::info!(
            "Round won: {} fish in {:.1}s",
            round.fish_collected,
            round.elapsed
        );
        events.push(GameEvent::Won);
    }

    events
}

fn finish_lost(round: &mut Round, cause: LossCause, events: &mut Vec<GameEvent>) {
    round.lose(cause);
    log::info!(
        "Round lost ({:?}) after {:.1}s with {}/{} fish",
        cause,
        round.elapsed,
        round.fish_collected,
        round.total_fish
    );
    events.push(GameEvent::Lost(cause));
}
