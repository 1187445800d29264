//! Frame clock
//!
//! Turns the host's monotonic frame timestamps into the non-negative delta the
//! simulation consumes.

use crate::consts::MAX_FRAME_DT;

/// Converts frame callback timestamps into per-frame deltas
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last: Option<f64>,
    elapsed: f64,
    frames: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame at `now` seconds and return the delta to simulate.
    ///
    /// The first frame yields 0. Timestamps that go backwards yield 0, and
    /// long stalls are capped at `MAX_FRAME_DT`.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) if now > last => ((now - last) as f32).min(MAX_FRAME_DT),
            _ => 0.0,
        };
        if self.last.is_none_or(|last| now > last) {
            self.last = Some(now);
        }
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    /// Convenience for hosts that report milliseconds (e.g. requestAnimationFrame)
    pub fn tick_millis(&mut self, now_ms: f64) -> f32 {
        self.tick(now_ms / 1000.0)
    }

    /// Total simulated seconds handed out so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
