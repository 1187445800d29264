//! Procedural entity placement
//!
//! Pure functions of the RNG handed in, so a seeded round always lays out the
//! same fish, mines and logs.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, Fish, Log, Mine};
use crate::consts::*;

/// Uniform integer in `[lo, hi]` (both ends inclusive), as a float.
/// A range that does not fit collapses onto `lo`.
fn rand_int<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let lo = lo.ceil() as i32;
    let hi = (hi.floor() as i32).max(lo);
    rng.random_range(lo..=hi) as f32
}

/// Place `count` live fish strictly inside the water, clear of the edges
pub fn spawn_fish<R: Rng>(count: u32, arena: &Arena, rng: &mut R) -> Vec<Fish> {
    let size = Vec2::new(FISH_WIDTH, FISH_HEIGHT);
    (0..count)
        .map(|_| {
            let x = rand_int(
                rng,
                FISH_PADDING,
                arena.width - FISH_WIDTH - FISH_PADDING,
            );
            let y = rand_int(
                rng,
                arena.surface_y + FISH_PADDING,
                arena.height - FISH_HEIGHT - FISH_PADDING,
            );
            Fish {
                pos: Vec2::new(x, y),
                size,
                alive: true,
                phase_seed: rng.random_range(0.0..10.0),
            }
        })
        .collect()
}

/// Place `count` unarmed mines in the water, well below the surface line
pub fn spawn_mines<R: Rng>(count: u32, arena: &Arena, rng: &mut R) -> Vec<Mine> {
    (0..count)
        .map(|_| {
            let size = rng.random_range(MINE_SIZE_MIN..=MINE_SIZE_MAX) as f32;
            let x = rand_int(rng, MINE_PADDING, arena.width - size - MINE_PADDING);
            let y = rand_int(
                rng,
                arena.surface_y + MINE_TOP_INSET,
                arena.height - size - MINE_PADDING,
            );
            Mine::new(Vec2::new(x, y), size)
        })
        .collect()
}

/// Spawn one log just off a random side edge, heading across the arena
pub fn spawn_log<R: Rng>(arena: &Arena, rng: &mut R) -> Log {
    let w = rng.random_range(LOG_WIDTH_MIN..=LOG_WIDTH_MAX) as f32;
    let h = rng.random_range(LOG_HEIGHT_MIN..=LOG_HEIGHT_MAX) as f32;

    let rightward = rng.random_bool(0.5);
    let (x, dir) = if rightward {
        (-w - LOG_SPAWN_OFFSET, 1.0)
    } else {
        (arena.width + LOG_SPAWN_OFFSET, -1.0)
    };

    let y = rand_int(
        rng,
        arena.surface_y + LOG_TOP_INSET,
        arena.height - h - LOG_BOTTOM_PADDING,
    );

    Log {
        pos: Vec2::new(x, y),
        size: Vec2::new(w, h),
        vel_x: dir * rng.random_range(LOG_SPEED_MIN..LOG_SPEED_MAX),
        wobble_seed: rng.random_range(0.0..10.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_fish_inside_water() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..50 {
            let fish = spawn_fish(TOTAL_FISH, &arena, &mut rng);
            assert_eq!(fish.len(), TOTAL_FISH as usize);
            for f in &fish {
                assert!(f.alive);
                assert!(f.pos.x >= FISH_PADDING);
                assert!(f.pos.x + f.size.x <= arena.width - FISH_PADDING);
                assert!(f.pos.y >= arena.surface_y + FISH_PADDING);
                assert!(f.pos.y + f.size.y <= arena.height - FISH_PADDING);
                assert!((0.0..10.0).contains(&f.phase_seed));
            }
        }
    }

    #[test]
    fn test_mines_below_surface_and_unarmed() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..50 {
            for m in spawn_mines(MINE_COUNT, &arena, &mut rng) {
                assert!(!m.armed);
                assert_eq!(m.age, 0.0);
                assert!(m.size >= MINE_SIZE_MIN as f32 && m.size <= MINE_SIZE_MAX as f32);
                assert!(m.pos.x >= MINE_PADDING);
                assert!(m.pos.x + m.size <= arena.width - MINE_PADDING);
                assert!(m.pos.y >= arena.surface_y + MINE_TOP_INSET);
                assert!(m.pos.y + m.size <= arena.height - MINE_PADDING);
            }
        }
    }

    #[test]
    fn test_logs_spawn_off_screen_heading_inward() {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let (mut saw_left, mut saw_right) = (false, false);
        for _ in 0..200 {
            let log = spawn_log(&arena, &mut rng);
            let speed = log.vel_x.abs();
            assert!((LOG_SPEED_MIN..LOG_SPEED_MAX).contains(&speed));
            if log.vel_x > 0.0 {
                saw_right = true;
                // Fully off the left edge
                assert!(log.pos.x + log.size.x < 0.0);
                assert_eq!(log.pos.x, -log.size.x - LOG_SPAWN_OFFSET);
            } else {
                saw_left = true;
                assert!(log.pos.x > arena.width);
            }
            assert!(log.pos.y >= arena.surface_y + LOG_TOP_INSET);
            assert!(log.pos.y + log.size.y <= arena.height - LOG_BOTTOM_PADDING);
            assert!(!log.has_exited(&arena));
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let arena = Arena::default();
        let mut a = Pcg32::seed_from_u64(55);
        let mut b = Pcg32::seed_from_u64(55);
        assert_eq!(
            spawn_fish(TOTAL_FISH, &arena, &mut a),
            spawn_fish(TOTAL_FISH, &arena, &mut b)
        );
        assert_eq!(spawn_log(&arena, &mut a), spawn_log(&arena, &mut b));
    }

    #[test]
    fn test_cramped_arena_collapses_ranges() {
        // Too small for the insets; placement pins to the lower bound
        let arena = Arena {
            width: 20.0,
            height: 40.0,
            surface_y: 30.0,
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let fish = spawn_fish(3, &arena, &mut rng);
        assert!(fish.iter().all(|f| f.pos == Vec2::new(FISH_PADDING, 30.0 + FISH_PADDING)));
        let mines = spawn_mines(2, &arena, &mut rng);
        assert!(mines.iter().all(|m| m.pos.x == MINE_PADDING));
    }
}
