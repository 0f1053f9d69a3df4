//! Per-frame simulation step
//!
//! One call to [`tick`] advances the whole session by one frame, in a fixed
//! order. The ordering is the sole concurrency contract: projectile-obstacle
//! collisions resolve before obstacle-ship collisions, so an obstacle shot
//! down this frame cannot also damage the ship this frame.

use glam::Vec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::obstacle::{Obstacle, ShapeSelector};
use super::projectile::Projectile;
use super::state::{GameState, MoveAxes};

/// Input observed for a single frame. Movement/fire/steer flags reflect
/// currently held keys; the rest are one-shot pressed events the platform
/// layer clears after the tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub movement: MoveAxes,
    pub fire: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub restart: bool,
    pub cycle_weapon: bool,
    pub select_shape: Option<ShapeSelector>,
}

/// Advance the session by one frame.
///
/// Negative dt is clamped to zero; a zero-dt tick still resolves collisions
/// and discrete inputs but moves nothing.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.max(0.0);
    let bounds = state.bounds();
    state.elapsed += dt;
    state.spawn_timer += dt;

    // 1. Advance the player (movement or death drift).
    state.player.update(dt, input.movement);

    // 2. Restart, only observable while dead.
    if !state.player.alive && input.restart {
        state.restart();
    }

    // 3. Discrete selections.
    if let Some(selector) = input.select_shape {
        state.current_shape = selector;
    }
    if input.cycle_weapon {
        state.current_weapon = state.current_weapon.next();
    }

    // 4. Firing. The accumulator can emit several shots in one large frame,
    // preserving the average rate under variable frame time.
    let weapon = state.current_weapon;
    let interval = 1.0 / state.player.fire_rate(weapon);
    if state.player.alive && input.fire {
        state.shot_timer += dt;
        let speed = state.player.spacing(weapon) * state.player.fire_rate(weapon);
        while state.shot_timer >= interval {
            if state.projectiles.len() < state.tuning.max_projectiles {
                let mut pos = state.player.pos;
                pos.y -= state.player.radius();
                state.projectiles.push(Projectile::new(weapon, pos, speed));
            }
            state.shot_timer -= interval;
        }
    } else if state.shot_timer > interval {
        // A release must not bank a burst for the next press.
        state.shot_timer %= interval;
    }

    // 5. Spawn one obstacle when the timer elapses and the cap allows.
    if state.spawn_timer >= state.spawn_interval
        && state.obstacles.len() < state.tuning.max_obstacles
    {
        let obstacle = Obstacle::spawn(&mut state.rng, state.current_shape, bounds);
        state.obstacles.push(obstacle);
        state.spawn_timer = 0.0;
        state.spawn_interval = state
            .rng
            .random_range(state.tuning.spawn_min..=state.tuning.spawn_max);
    }

    // 6. Advance projectiles; drop the ones that exited the screen.
    let (steer_left, steer_right) = (input.steer_left, input.steer_right);
    state
        .projectiles
        .retain_mut(|p| p.update(dt, steer_left, steer_right, bounds));

    // 7. Projectile-obstacle collisions, O(projectiles x obstacles).
    // First obstacle in collection order consumes the projectile; each
    // projectile resolves at most once per frame. Splits are deferred so the
    // new obstacles cannot be hit in the same pass.
    let mut split_spawns: Vec<Vec2> = Vec::new();
    let mut pi = 0;
    while pi < state.projectiles.len() {
        let projectile = state.projectiles[pi];
        let hit = state.obstacles.iter().position(|ob| {
            circles_overlap(projectile.body.pos, projectile.radius(), ob.body.pos, ob.radius())
        });
        match hit {
            Some(oi) => {
                let obstacle = state.obstacles.remove(oi);
                state.player.deal_damage(obstacle.damage(), weapon);
                let score = state.player.damage_dealt;
                if score > state.tuning.split_score_threshold && score % 5 != 0 {
                    split_spawns.push(obstacle.body.pos);
                    split_spawns.push(obstacle.body.pos);
                }
                state.projectiles.remove(pi);
            }
            None => pi += 1,
        }
    }
    for pos in split_spawns {
        if state.obstacles.len() >= state.tuning.max_obstacles {
            break;
        }
        let obstacle = Obstacle::spawn_at(&mut state.rng, state.current_shape, pos, bounds);
        state.obstacles.push(obstacle);
    }

    // 8. Obstacle-ship collisions and off-screen culling.
    let player = &mut state.player;
    state.obstacles.retain_mut(|ob| {
        if player.alive
            && circles_overlap(player.pos, player.radius(), ob.body.pos, ob.radius())
        {
            player.take_damage(ob.damage());
            return false;
        }
        ob.update(dt, bounds)
    });

    // 9. Render pass: the caller hands the state to the rendering boundary.
}
