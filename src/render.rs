//! Rendering boundary
//!
//! The core never draws. Each frame it emits sprite roles and text overlays
//! through the [`Canvas`] capability; a backend maps roles to whatever assets
//! it has. The core supplies world position, rotation and radius only.

use glam::Vec2;

use crate::sim::{GameState, ObstacleKind, WeaponKind};

/// Which asset a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteRole {
    Ship,
    TriangleObstacle,
    SquareObstacle,
    PentagonObstacle,
    HealingObstacle,
    LaserShot,
    BulletShot,
    CrateShot,
}

fn obstacle_role(kind: ObstacleKind) -> SpriteRole {
    match kind {
        ObstacleKind::Triangle => SpriteRole::TriangleObstacle,
        ObstacleKind::Square => SpriteRole::SquareObstacle,
        ObstacleKind::Pentagon => SpriteRole::PentagonObstacle,
        ObstacleKind::Healing => SpriteRole::HealingObstacle,
    }
}

fn shot_role(kind: WeaponKind) -> SpriteRole {
    match kind {
        WeaponKind::Laser => SpriteRole::LaserShot,
        WeaponKind::Bullet => SpriteRole::BulletShot,
        WeaponKind::Crate => SpriteRole::CrateShot,
    }
}

/// Minimal drawing capability the core needs from a backend.
pub trait Canvas {
    fn clear(&mut self);
    /// Rotation in degrees; radius is the world-space half-extent.
    fn draw_sprite(&mut self, role: SpriteRole, pos: Vec2, rotation: f32, radius: f32);
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32);
    fn present(&mut self);
}

/// Emit one frame's draw commands for the current state.
pub fn draw_frame(state: &GameState, canvas: &mut impl Canvas) {
    canvas.clear();

    let w = state.tuning.screen_w;
    let h = state.tuning.screen_h;
    let player = &state.player;

    // HUD
    canvas.draw_text(&format!("HP: {}", player.hp), Vec2::new(10.0, 10.0), 20.0);
    canvas.draw_text(
        &format!("Score: {}", player.damage_dealt),
        Vec2::new(10.0, 30.0),
        20.0,
    );
    canvas.draw_text(
        &format!("Weapon: {}", state.current_weapon.label()),
        Vec2::new(10.0, 50.0),
        20.0,
    );
    canvas.draw_text("Highscore", Vec2::new(w - 100.0, 10.0), 15.0);
    canvas.draw_text(&state.high_score.to_string(), Vec2::new(w - 85.0, 25.0), 15.0);

    for p in &state.projectiles {
        canvas.draw_sprite(shot_role(p.kind), p.body.pos, p.body.rotation, p.radius());
    }
    for ob in &state.obstacles {
        canvas.draw_sprite(obstacle_role(ob.kind), ob.body.pos, ob.body.rotation, ob.radius());
    }

    if !player.alive {
        // Banners follow the drifting ship on purpose.
        let anchor = player.pos + Vec2::new(-player.radius(), player.radius());
        canvas.draw_text("GAME OVER", anchor, 40.0);
        canvas.draw_text(
            &format!("SCORE: {}", player.damage_dealt),
            anchor - Vec2::new(0.0, 40.0),
            20.0,
        );
        if player.damage_dealt > state.high_score {
            canvas.draw_text("NEW HIGHSCORE", anchor + Vec2::new(0.0, 45.0), 30.0);
        }
        if player.pos.y > h {
            canvas.draw_text("Press R to restart", Vec2::new(w / 4.0, h / 2.0), 40.0);
        }
    }

    // Dead ship blinks on a 0.4 s cycle.
    if player.alive || state.elapsed % 0.4 <= 0.2 {
        canvas.draw_sprite(SpriteRole::Ship, player.pos, 0.0, player.radius());
    }

    canvas.present();
}

/// A recorded sprite draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCmd {
    pub role: SpriteRole,
    pub pos: Vec2,
    pub rotation: f32,
    pub radius: f32,
}

/// A recorded text draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
}

/// Records one frame's commands; used by the headless binary and tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub sprites: Vec<SpriteCmd>,
    pub texts: Vec<TextCmd>,
    pub frames_presented: u64,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
    }

    fn draw_sprite(&mut self, role: SpriteRole, pos: Vec2, rotation: f32, radius: f32) {
        self.sprites.push(SpriteCmd { role, pos, rotation, radius });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32) {
        self.texts.push(TextCmd { text: text.to_string(), pos, size });
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

impl RecordingCanvas {
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }
}
