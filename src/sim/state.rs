//! Game state and the player ship
//!
//! `GameState` owns every live collection, the session RNG and the spawn and
//! shot timers; nothing outside the tick mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ShapeSelector};
use super::projectile::{Projectile, WeaponKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Held movement keys for one frame. The four axes are independent;
/// diagonals sum both axes without normalization, so diagonal travel is
/// intentionally faster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAxes {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player-controlled ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerShip {
    pub pos: Vec2,
    pub hp: i32,
    /// Cumulative damage dealt; doubles as the score.
    pub damage_dealt: i32,
    pub alive: bool,
    fire_rate_laser: f32,
    fire_rate_bullet: f32,
    fire_rate_crate: f32,
}

impl PlayerShip {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            pos: bounds * 0.5,
            hp: PLAYER_START_HP,
            damage_dealt: 0,
            alive: true,
            fire_rate_laser: WeaponKind::Laser.base_fire_rate(),
            fire_rate_bullet: WeaponKind::Bullet.base_fire_rate(),
            fire_rate_crate: WeaponKind::Crate.base_fire_rate(),
        }
    }

    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }

    /// Movement while alive; a downward death drift otherwise, ignoring
    /// all movement input.
    pub fn update(&mut self, dt: f32, axes: MoveAxes) {
        if self.alive {
            if axes.up {
                self.pos.y -= PLAYER_SPEED * dt;
            }
            if axes.down {
                self.pos.y += PLAYER_SPEED * dt;
            }
            if axes.left {
                self.pos.x -= PLAYER_SPEED * dt;
            }
            if axes.right {
                self.pos.x += PLAYER_SPEED * dt;
            }
        } else {
            self.pos.y += PLAYER_SPEED * dt;
        }
    }

    /// Apply obstacle contact. Negative damage heals, but never above the
    /// starting HP. The alive flag flips at hp <= 0, exactly once; dead
    /// ships ignore further contact until an external restart.
    pub fn take_damage(&mut self, dmg: i32) {
        if !self.alive {
            return;
        }
        self.hp = (self.hp - dmg).min(PLAYER_START_HP);
        if self.hp <= 0 {
            self.alive = false;
        }
    }

    /// Credit a destroyed obstacle and advance the fire-rate progression for
    /// the weapon's broad category. Laser has its own slot; Bullet and Crate
    /// share the bullet slot. Healing kills (negative damage) award nothing,
    /// keeping the score monotone.
    pub fn deal_damage(&mut self, dmg: i32, weapon: WeaponKind) {
        self.damage_dealt += dmg.max(0);
        let gain = FIRE_RATE_MULTIPLIER * self.damage_dealt as f32;
        match weapon {
            WeaponKind::Laser => {
                self.fire_rate_laser = WeaponKind::Laser.base_fire_rate() + gain;
            }
            WeaponKind::Bullet | WeaponKind::Crate => {
                self.fire_rate_bullet = WeaponKind::Bullet.base_fire_rate() + gain;
            }
        }
    }

    /// Current shots/sec for a weapon. Three independently tracked slots;
    /// the Crate slot never progresses (its kills feed the bullet slot).
    pub fn fire_rate(&self, weapon: WeaponKind) -> f32 {
        match weapon {
            WeaponKind::Laser => self.fire_rate_laser,
            WeaponKind::Bullet => self.fire_rate_bullet,
            WeaponKind::Crate => self.fire_rate_crate,
        }
    }

    pub fn spacing(&self, weapon: WeaponKind) -> f32 {
        weapon.spacing()
    }
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, for reproducibility.
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub player: PlayerShip,
    pub obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    pub spawn_timer: f32,
    /// Next spawn delay, resampled uniformly after every spawn.
    pub spawn_interval: f32,
    /// Shot accumulator; drained one fire interval per emitted projectile.
    pub shot_timer: f32,
    pub current_shape: ShapeSelector,
    pub current_weapon: WeaponKind,
    /// Best score seen this process; survives restarts, not the process.
    pub high_score: i32,
    /// Wall-clock seconds since session start (drives the death blink).
    pub elapsed: f32,
}

impl GameState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = rng.random_range(tuning.spawn_min..=tuning.spawn_max);
        let bounds = Vec2::new(tuning.screen_w, tuning.screen_h);
        log::info!("new session (seed {seed})");
        Self {
            seed,
            rng,
            player: PlayerShip::new(bounds),
            obstacles: Vec::with_capacity(tuning.max_obstacles),
            projectiles: Vec::new(),
            spawn_timer: 0.0,
            spawn_interval,
            shot_timer: 0.0,
            current_shape: ShapeSelector::Random,
            current_weapon: WeaponKind::Laser,
            high_score: 0,
            elapsed: 0.0,
            tuning,
        }
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.tuning.screen_w, self.tuning.screen_h)
    }

    /// Commit the score to the high score if it beats it, then reset to a
    /// fresh session. Weapon and shape selections persist; so does the RNG.
    pub fn restart(&mut self) {
        if self.player.damage_dealt > self.high_score {
            self.high_score = self.player.damage_dealt;
            log::info!("new high score: {}", self.high_score);
        }
        self.player = PlayerShip::new(self.bounds());
        self.obstacles.clear();
        self.projectiles.clear();
        self.spawn_timer = 0.0;
        self.spawn_interval = self
            .rng
            .random_range(self.tuning.spawn_min..=self.tuning.spawn_max);
        self.shot_timer = 0.0;
        log::info!("session restarted");
    }
}
