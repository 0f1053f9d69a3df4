//! Obstacle variants, size classes and the spawn factory
//!
//! Obstacles enter from just outside a random screen edge, converge on a
//! jittered point near screen center, and are culled once their bounding
//! circle leaves the screen rectangle on any side.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::motion::Kinematics;
use crate::consts::*;

/// Discrete size class; multiplies both radius and damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub fn multiplier(self) -> i32 {
        match self {
            SizeClass::Small => 1,
            SizeClass::Medium => 2,
            SizeClass::Large => 4,
        }
    }

    /// Uniform draw over the three classes (a bit-shift of a 0-2 draw).
    pub fn sample(rng: &mut Pcg32) -> Self {
        match 1 << rng.random_range(0..3) {
            1 => SizeClass::Small,
            2 => SizeClass::Medium,
            _ => SizeClass::Large,
        }
    }
}

/// Concrete obstacle variants. Healing carries a negative base damage:
/// contact with the ship heals instead of hurting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Triangle,
    Square,
    Pentagon,
    Healing,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Triangle,
        ObstacleKind::Square,
        ObstacleKind::Pentagon,
        ObstacleKind::Healing,
    ];

    pub fn base_damage(self) -> i32 {
        match self {
            ObstacleKind::Triangle => 5,
            ObstacleKind::Square => 10,
            ObstacleKind::Pentagon => 15,
            ObstacleKind::Healing => -2,
        }
    }
}

/// Shape filter used by the spawn step: either a fixed kind, or a fresh
/// uniform draw among the four concrete kinds on every spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSelector {
    Fixed(ObstacleKind),
    Random,
}

impl ShapeSelector {
    pub fn resolve(self, rng: &mut Pcg32) -> ObstacleKind {
        match self {
            ShapeSelector::Fixed(kind) => kind,
            ShapeSelector::Random => ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())],
        }
    }
}

/// A hazard entity drifting across the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub size: SizeClass,
    pub body: Kinematics,
}

impl Obstacle {
    /// Spawn just outside a uniformly chosen screen edge, aimed at a jittered
    /// point near screen center.
    pub fn spawn(rng: &mut Pcg32, selector: ShapeSelector, bounds: Vec2) -> Self {
        let kind = selector.resolve(rng);
        let size = SizeClass::sample(rng);
        let radius = 32.0 + 15.0 * size.multiplier() as f32;

        let pos = match rng.random_range(0..4) {
            0 => Vec2::new(rng.random_range(0.0..=bounds.x), -radius),
            1 => Vec2::new(bounds.x + radius, rng.random_range(0.0..=bounds.y)),
            2 => Vec2::new(rng.random_range(0.0..=bounds.x), bounds.y + radius),
            _ => Vec2::new(-radius, rng.random_range(0.0..=bounds.y)),
        };

        Self::with_trajectory(rng, kind, size, pos, bounds)
    }

    /// Spawn at an explicit position (the split mechanic), with the same
    /// aim-jitter, speed and rotation sampling as an edge spawn.
    pub fn spawn_at(rng: &mut Pcg32, selector: ShapeSelector, pos: Vec2, bounds: Vec2) -> Self {
        let kind = selector.resolve(rng);
        let size = SizeClass::sample(rng);
        Self::with_trajectory(rng, kind, size, pos, bounds)
    }

    fn with_trajectory(
        rng: &mut Pcg32,
        kind: ObstacleKind,
        size: SizeClass,
        pos: Vec2,
        bounds: Vec2,
    ) -> Self {
        // Aim near center but not at it, so paths converge without a single
        // choke point.
        let max_off = bounds.x.min(bounds.y) * AIM_JITTER_FRAC;
        let ang = rng.random_range(0.0..TAU);
        let rad = rng.random_range(0.0..=max_off);
        let aim = bounds * 0.5 + Vec2::new(ang.cos(), ang.sin()) * rad;

        let dir = (aim - pos).normalize_or_zero();
        let speed = rng.random_range(OBSTACLE_SPEED_MIN..=OBSTACLE_SPEED_MAX);

        let mut body = Kinematics::new(pos, dir * speed);
        body.rotation = rng.random_range(0.0..360.0);
        body.rotation_speed = rng.random_range(OBSTACLE_ROT_MIN..=OBSTACLE_ROT_MAX);

        Self { kind, size, body }
    }

    pub fn radius(&self) -> f32 {
        32.0 + 15.0 * self.size.multiplier() as f32
    }

    pub fn damage(&self) -> i32 {
        self.kind.base_damage() * self.size.multiplier()
    }

    /// Advance one frame. Returns false once the bounding circle is fully
    /// outside the screen rectangle on any axis; the caller removes it.
    pub fn update(&mut self, dt: f32, bounds: Vec2) -> bool {
        self.body.integrate(dt);
        let r = self.radius();
        let p = self.body.pos;
        !(p.x < -r || p.x > bounds.x + r || p.y < -r || p.y > bounds.y + r)
    }
}
