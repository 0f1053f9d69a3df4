//! Projectile variants and weapon kinds
//!
//! All three weapons fire from the ship's nose with velocity `(0, -speed)`;
//! what happens after that is per-kind.

use glam::Vec2;

use super::motion::Kinematics;

/// Selectable firing modes. Damage, hitbox radius, base fire rate and
/// projectile spacing are fixed per kind; fire-rate progression is tracked
/// per broad category on the ship (Crate shares the Bullet slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Laser,
    Bullet,
    Crate,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Laser, WeaponKind::Bullet, WeaponKind::Crate];

    pub fn damage(self) -> i32 {
        match self {
            WeaponKind::Laser => 20,
            WeaponKind::Bullet => 10,
            WeaponKind::Crate => 50,
        }
    }

    /// Gameplay hitbox, independent of any rendered sprite size.
    pub fn radius(self) -> f32 {
        match self {
            WeaponKind::Laser => 20.0,
            WeaponKind::Bullet => 5.0,
            WeaponKind::Crate => 100.0,
        }
    }

    /// Starting shots/sec before any progression.
    pub fn base_fire_rate(self) -> f32 {
        match self {
            WeaponKind::Laser => 5.0,
            WeaponKind::Bullet => 15.0,
            WeaponKind::Crate => 3.0,
        }
    }

    /// Distance between consecutive shots (px); projectile speed is
    /// spacing * fire rate, so spacing stays constant as the rate grows.
    pub fn spacing(self) -> f32 {
        match self {
            WeaponKind::Laser => 40.0,
            WeaponKind::Bullet => 20.0,
            WeaponKind::Crate => 800.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeaponKind::Laser => "LASER",
            WeaponKind::Bullet => "BULLET",
            WeaponKind::Crate => "CRATE",
        }
    }

    /// Round-robin weapon cycling.
    pub fn next(self) -> Self {
        match self {
            WeaponKind::Laser => WeaponKind::Bullet,
            WeaponKind::Bullet => WeaponKind::Crate,
            WeaponKind::Crate => WeaponKind::Laser,
        }
    }
}

/// A player-fired entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub kind: WeaponKind,
    pub body: Kinematics,
}

impl Projectile {
    /// Fired straight up at the given speed.
    pub fn new(kind: WeaponKind, pos: Vec2, speed: f32) -> Self {
        Self {
            kind,
            body: Kinematics::new(pos, Vec2::new(0.0, -speed)),
        }
    }

    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    pub fn damage(&self) -> i32 {
        self.kind.damage()
    }

    /// Advance one frame. Returns false once any coordinate exits the screen
    /// rectangle; the caller removes it.
    ///
    /// Lasers drift sideways while a steer key is held, using the velocity's
    /// swapped-component perpendicular. Crates travel opposite to their
    /// nominal velocity: dropped below the ship rather than fired above it.
    pub fn update(&mut self, dt: f32, steer_left: bool, steer_right: bool, bounds: Vec2) -> bool {
        match self.kind {
            WeaponKind::Laser => {
                self.body.integrate(dt);
                let lateral = Vec2::new(self.body.vel.y, self.body.vel.x);
                if steer_left {
                    self.body.pos += lateral * dt;
                }
                if steer_right {
                    self.body.pos -= lateral * dt;
                }
            }
            WeaponKind::Bullet => self.body.integrate(dt),
            WeaponKind::Crate => {
                self.body.pos -= self.body.vel * dt;
                self.body.rotation += self.body.rotation_speed * dt;
            }
        }

        let p = self.body.pos;
        !(p.x < 0.0 || p.x > bounds.x || p.y < 0.0 || p.y > bounds.y)
    }
}
