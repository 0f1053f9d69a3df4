//! Shared kinematics for everything that moves

use glam::Vec2;

/// Position/velocity/rotation record shared by every moving entity.
///
/// Rotation is in degrees, rotational speed in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Kinematics {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            rotation_speed: 0.0,
        }
    }

    /// Advance one frame: pos += vel * dt, rotation += rotation_speed * dt.
    ///
    /// dt is assumed non-negative; the tick boundary clamps it.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.rotation += self.rotation_speed * dt;
    }
}
