//! Read-only view helpers for the render adapter
//!
//! Everything here is a pure function of a [`Round`]; nothing feeds back into
//! gameplay.

use super::state::{GamePhase, Log, Round};
use crate::consts::*;

/// Oxygen bar switches to the warning colour at or below this fraction
pub const LOW_OXYGEN_FRACTION: f32 = 0.35;

/// Label drawn over the land strip
pub const LAND_LABEL: &str = "LAND (breathe here)";

/// Text for the end-of-round overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub prompt: &'static str,
}

/// All text the HUD draws for a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    pub land: &'static str,
    pub fish: String,
    pub overlay: Option<Overlay>,
}

/// Land, fish and overlay text for one frame
pub fn hud_text(round: &Round) -> HudText {
    HudText {
        land: LAND_LABEL,
        fish: fish_label(round),
        overlay: overlay(round),
    }
}

/// Tank level in [0, 1]
pub fn oxygen_fraction(round: &Round) -> f32 {
    (round.oxygen / OXYGEN_MAX).clamp(0.0, 1.0)
}

pub fn oxygen_low(round: &Round) -> bool {
    oxygen_fraction(round) <= LOW_OXYGEN_FRACTION
}

/// Filled width of an oxygen bar `bar_width` pixels wide
pub fn oxygen_bar_fill(round: &Round, bar_width: f32) -> f32 {
    (bar_width * oxygen_fraction(round)).round()
}

pub fn fish_label(round: &Round) -> String {
    format!("Fish: {} / {}", round.fish_collected, round.total_fish)
}

/// Overlay shown while the round is frozen
pub fn overlay(round: &Round) -> Option<Overlay> {
    match round.phase {
        GamePhase::Playing => None,
        GamePhase::Lost => Some(Overlay {
            title: "GAME OVER",
            prompt: "Press R to Restart",
        }),
        GamePhase::Won => Some(Overlay {
            title: "YOU WIN!",
            prompt: "Press R to Play Again",
        }),
    }
}

/// Vertical bob to draw a log with. Collision always uses the unbobbed box.
pub fn log_wobble(log: &Log, elapsed: f32) -> f32 {
    (elapsed * 2.0 + log.wobble_seed).sin() * LOG_WOBBLE_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::LossCause;
    use glam::Vec2;

    #[test]
    fn test_oxygen_readout() {
        let mut round = Round::new(5);
        assert_eq!(oxygen_fraction(&round), 1.0);
        assert!(!oxygen_low(&round));
        assert_eq!(oxygen_bar_fill(&round, 180.0), 180.0);

        round.oxygen = 35.0;
        assert!(oxygen_low(&round));
        assert_eq!(oxygen_bar_fill(&round, 180.0), 63.0);
    }

    #[test]
    fn test_fish_label() {
        let mut round = Round::new(5);
        round.fish_collected = 3;
        assert_eq!(fish_label(&round), "Fish: 3 / 12");
    }

    #[test]
    fn test_overlay_by_phase() {
        let mut round = Round::new(5);
        assert_eq!(overlay(&round), None);
        round.lose(LossCause::Suffocated);
        assert_eq!(overlay(&round).map(|o| o.title), Some("GAME OVER"));

        let mut round = Round::new(5);
        round.win();
        assert_eq!(overlay(&round).map(|o| o.prompt), Some("Press R to Play Again"));
    }

    #[test]
    fn test_hud_text_bundles_labels() {
        let mut round = Round::new(5);
        let text = hud_text(&round);
        assert_eq!(text.land, "LAND (breathe here)");
        assert_eq!(text.fish, "Fish: 0 / 12");
        assert_eq!(text.overlay, None);

        round.lose(LossCause::Mine);
        assert_eq!(hud_text(&round).overlay.map(|o| o.prompt), Some("Press R to Restart"));
    }

    #[test]
    fn test_log_wobble_is_bounded() {
        let log = Log {
            pos: Vec2::new(0.0, 200.0),
            size: Vec2::new(60.0, 16.0),
            vel_x: 80.0,
            wobble_seed: 1.3,
        };
        for i in 0..100 {
            assert!(log_wobble(&log, i as f32 * 0.1).abs() <= LOG_WOBBLE_AMPLITUDE);
        }
    }
}
