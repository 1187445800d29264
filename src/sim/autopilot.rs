//! Idle/demo mode - a simple AI that plays the round
//!
//! Surfaces before the tank runs dry, otherwise swims at the nearest fish.
//! It ignores hazards, so it loses often enough to exercise restarts.

use glam::Vec2;

use super::state::Round;
use super::tick::Intent;
use crate::axis_sign;
use crate::consts::*;

/// Oxygen kept in reserve on top of what the trip up costs
const SURFACING_MARGIN: f32 = 5.0;
/// Don't jitter around a target that is this close on an axis
const DEAD_ZONE: f32 = 2.0;
/// Frame length assumed when keeping a safe distance from the surface line
const SURFACE_STEP: f32 = 1.0 / 30.0;

/// Directional intent steering `from` toward `to`
pub fn intent_toward(from: Vec2, to: Vec2, dead_zone: f32) -> Intent {
    let delta = to - from;
    let dx = if delta.x.abs() > dead_zone { axis_sign(delta.x) } else { 0.0 };
    let dy = if delta.y.abs() > dead_zone { axis_sign(delta.y) } else { 0.0 };
    Intent::new(dx as i8, dy as i8)
}

/// Pick this frame's intent for the demo player
pub fn autopilot(round: &Round) -> Intent {
    if round.is_terminal() {
        return Intent::restart();
    }

    let player = &round.player;
    let arena = &round.arena;
    let center = player.rect().center();

    let target = round
        .fish
        .iter()
        .filter(|f| f.alive)
        .map(|f| f.rect().center())
        .min_by(|a, b| {
            a.distance_squared(center)
                .partial_cmp(&b.distance_squared(center))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if player.is_at_surface(arena) {
        // Refill and line up above the next fish before diving straight down
        let aligned = target.is_none_or(|t| (t.x - center.x).abs() <= DEAD_ZONE);
        if round.oxygen < OXYGEN_MAX || !aligned {
            let mut intent = target
                .map(|t| intent_toward(center, t, DEAD_ZONE))
                .unwrap_or_default();
            let next_y = player.pos.y + player.speed * SURFACE_STEP;
            intent.dy = if next_y >= arena.surface_y { -1 } else { 0 };
            return intent;
        }
    } else {
        let climb = player.pos.y - arena.surface_y + 1.0;
        let needed = climb / player.speed * DRAIN_RATE + SURFACING_MARGIN;
        if round.oxygen < needed {
            return Intent::new(0, -1);
        }
    }

    target
        .map(|t| intent_toward(center, t, DEAD_ZONE))
        .unwrap_or_default()
}
