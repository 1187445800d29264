//! Runner settings
//!
//! Controls the native headless session only. Gameplay constants are fixed and
//! not exposed here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

/// Settings for a headless session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Session seed (None = derive from the system clock)
    pub seed: Option<u64>,
    /// Simulated frames per second
    pub frame_rate: f32,
    /// Hard stop after this many frames
    pub max_frames: u64,
    /// Stop once this many rounds have finished
    pub max_rounds: u32,
    /// Print the final round as JSON
    pub print_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            frame_rate: 60.0,
            max_frames: 60 * 60 * 10,
            max_rounds: 3,
            print_snapshot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace values the runner cannot use with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            log::warn!("frame_rate {} out of range, using {}", self.frame_rate, defaults.frame_rate);
            self.frame_rate = defaults.frame_rate;
        }
        // Slower rates would have every frame cut short by the clock cap
        let min_rate = 1.0 / MAX_FRAME_DT;
        if self.frame_rate < min_rate {
            log::warn!("frame_rate {} below {}, clamping", self.frame_rate, min_rate);
            self.frame_rate = min_rate;
        }
        if self.max_rounds == 0 {
            self.max_rounds = defaults.max_rounds;
        }
        self
    }

    /// Seconds between simulated frames
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }

    /// Configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "max_rounds": 5 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.max_rounds, 5);
        assert_eq!(settings.frame_rate, 60.0);
        assert!(!settings.print_snapshot);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            frame_rate: -5.0,
            max_rounds: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.frame_rate, 60.0);
        assert_eq!(settings.max_rounds, 3);
    }

    #[test]
    fn test_slow_frame_rate_clamped_to_clock_cap() {
        let settings = Settings {
            frame_rate: 2.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.frame_rate, 1.0 / MAX_FRAME_DT);
        assert!(settings.frame_dt() <= MAX_FRAME_DT as f64 + 1e-9);

        let settings = Settings {
            frame_rate: 30.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.frame_rate, 30.0);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/fox-dive-settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("fox-dive-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "seed": 7, "frame_rate": 30.0, "print_snapshot": true }"#).unwrap();
        let settings = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.resolve_seed(), 7);
        assert!((settings.frame_dt() - 1.0 / 30.0).abs() < 1e-9);
        assert!(settings.print_snapshot);
    }
}
