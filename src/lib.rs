//! Skyshard - an arcade survival shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `render`: Rendering boundary (capability trait + per-frame command emission)
//! - `tuning`: Data-driven session knobs

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Advisory frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Logical window size
    pub const SCREEN_W: f32 = 800.0;
    pub const SCREEN_H: f32 = 800.0;

    /// Live-entity caps
    pub const MAX_OBSTACLES: usize = 150;
    pub const MAX_PROJECTILES: usize = 10_000;

    /// Obstacle spawn interval range (seconds)
    pub const SPAWN_MIN: f32 = 0.5;
    pub const SPAWN_MAX: f32 = 3.0;

    /// Obstacle speed range (units/sec)
    pub const OBSTACLE_SPEED_MIN: f32 = 125.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 250.0;
    /// Obstacle rotational speed range (deg/sec)
    pub const OBSTACLE_ROT_MIN: f32 = 50.0;
    pub const OBSTACLE_ROT_MAX: f32 = 240.0;
    /// Aim-point jitter radius as a fraction of min(screen_w, screen_h)
    pub const AIM_JITTER_FRAC: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_START_HP: i32 = 100;
    pub const PLAYER_SPEED: f32 = 250.0;
    /// Collision radius: sprite half-extent at the fixed render scale
    pub const PLAYER_RADIUS: f32 = 32.0;
    /// Fire-rate gain per point of cumulative damage dealt
    pub const FIRE_RATE_MULTIPLIER: f32 = 0.001;

    /// Score threshold past which destroyed obstacles may split in two
    pub const SPLIT_SCORE_THRESHOLD: i32 = 500;
}
