//! Data-driven session knobs
//!
//! Balance values that vary by build or playtest live here; fixed per-weapon
//! and per-obstacle constants stay in `consts`. Loading falls back to the
//! defaults with a logged warning, never an abort.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical window size
    pub screen_w: f32,
    pub screen_h: f32,
    /// Live-entity caps
    pub max_obstacles: usize,
    pub max_projectiles: usize,
    /// Obstacle spawn interval range (seconds)
    pub spawn_min: f32,
    pub spawn_max: f32,
    /// Score past which destroyed obstacles may split in two
    pub split_score_threshold: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_w: consts::SCREEN_W,
            screen_h: consts::SCREEN_H,
            max_obstacles: consts::MAX_OBSTACLES,
            max_projectiles: consts::MAX_PROJECTILES,
            spawn_min: consts::SPAWN_MIN,
            spawn_max: consts::SPAWN_MAX,
            split_score_threshold: consts::SPLIT_SCORE_THRESHOLD,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match Self::from_json(&text) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("bad tuning file {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("could not read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
