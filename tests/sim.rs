//! End-to-end simulation tests: whole-session behavior driven only through
//! `tick`, plus property tests for the pairwise invariants.

use glam::Vec2;
use proptest::prelude::*;

use skyshard::consts::{PLAYER_START_HP, SPAWN_MAX, SPAWN_MIN};
use skyshard::sim::{
    GameState, Kinematics, MoveAxes, Obstacle, ObstacleKind, PlayerShip, Projectile,
    ShapeSelector, SizeClass, TickInput, WeaponKind, circles_overlap, tick,
};
use skyshard::tuning::Tuning;

/// A session that never spawns obstacles on its own.
fn quiet_state(seed: u64) -> GameState {
    let tuning = Tuning { max_obstacles: 0, ..Tuning::default() };
    GameState::new(seed, tuning)
}

fn obstacle_at(pos: Vec2, kind: ObstacleKind, size: SizeClass) -> Obstacle {
    Obstacle { kind, size, body: Kinematics::new(pos, Vec2::ZERO) }
}

/// Hold fire for `total` seconds split into frames of `dt`, plus one tiny
/// settling frame so exact-boundary shots are not lost to float noise.
fn fire_for(state: &mut GameState, total: f32, dt: f32) {
    let input = TickInput { fire: true, ..Default::default() };
    let frames = (total / dt).round() as usize;
    for _ in 0..frames {
        tick(state, &input, dt);
    }
    tick(state, &input, 0.001);
}

#[test]
fn fire_interval_conservation_across_frame_splits() {
    // Bullet: 15 shots/sec. One second of held fire must emit 15 shots no
    // matter how the second is split across frames.
    let mut counts = Vec::new();
    for dt in [1.0 / 60.0, 1.0 / 30.0, 1.0] {
        let mut state = quiet_state(5);
        state.current_weapon = WeaponKind::Bullet;
        fire_for(&mut state, 1.0, dt);
        counts.push(state.projectiles.len());
    }
    assert_eq!(counts, vec![15, 15, 15]);
}

#[test]
fn shots_spawn_at_the_ships_nose() {
    let mut state = quiet_state(5);
    state.current_weapon = WeaponKind::Bullet;
    let interval = 1.0 / state.player.fire_rate(WeaponKind::Bullet);
    let input = TickInput { fire: true, ..Default::default() };
    tick(&mut state, &input, interval + 1e-4);

    assert_eq!(state.projectiles.len(), 1);
    let p = &state.projectiles[0];
    // Spawned one player-radius above the ship, then advanced one frame.
    assert_eq!(p.body.pos.x, state.player.pos.x);
    assert!(p.body.pos.y < state.player.pos.y - state.player.radius() + 1e-3);
    // Speed = spacing * fire rate.
    let expected = state.player.spacing(WeaponKind::Bullet) * state.player.fire_rate(WeaponKind::Bullet);
    assert!((p.body.vel.y + expected).abs() < 1e-3);
}

#[test]
fn split_mechanic_spawns_two_when_score_allows() {
    // Post-kill score 501: > 500 and not a multiple of 5.
    let mut state = quiet_state(9);
    state.tuning.max_obstacles = 150;
    state.spawn_interval = f32::MAX; // keep background spawning out of it
    state.player.deal_damage(496, WeaponKind::Bullet);

    let pos = Vec2::new(200.0, 200.0);
    state.obstacles.push(obstacle_at(pos, ObstacleKind::Triangle, SizeClass::Small));
    state.projectiles.push(Projectile::new(WeaponKind::Bullet, pos, 0.0));

    tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(state.player.damage_dealt, 501);
    assert_eq!(state.obstacles.len(), 2, "one destroyed, two replacements");
    for ob in &state.obstacles {
        assert_eq!(ob.body.pos, pos, "splits spawn at the destroyed position");
    }
}

#[test]
fn split_mechanic_skips_multiples_of_five() {
    // Post-kill score 505: multiple of 5, no splits.
    let mut state = quiet_state(9);
    state.tuning.max_obstacles = 150;
    state.spawn_interval = f32::MAX;
    state.player.deal_damage(500, WeaponKind::Bullet);

    let pos = Vec2::new(200.0, 200.0);
    state.obstacles.push(obstacle_at(pos, ObstacleKind::Triangle, SizeClass::Small));
    state.projectiles.push(Projectile::new(WeaponKind::Bullet, pos, 0.0));

    tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(state.player.damage_dealt, 505);
    assert!(state.obstacles.is_empty());
}

#[test]
fn split_mechanic_respects_the_obstacle_cap() {
    let mut state = quiet_state(9);
    state.tuning.max_obstacles = 1;
    state.spawn_interval = f32::MAX;
    state.player.deal_damage(496, WeaponKind::Bullet);

    let pos = Vec2::new(200.0, 200.0);
    state.obstacles.push(obstacle_at(pos, ObstacleKind::Triangle, SizeClass::Small));
    state.projectiles.push(Projectile::new(WeaponKind::Bullet, pos, 0.0));

    tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(state.obstacles.len(), 1, "only one replacement fits the cap");
}

#[test]
fn spawn_timer_creates_obstacles_within_the_interval_range() {
    let mut state = GameState::new(11, Tuning::default());
    assert!((SPAWN_MIN..=SPAWN_MAX).contains(&state.spawn_interval));

    // After SPAWN_MAX seconds at least one obstacle must have spawned.
    // A spawn may later be consumed by ship contact, so watch the whole run.
    let dt = 1.0 / 60.0;
    let frames = (SPAWN_MAX / dt).ceil() as usize + 1;
    let mut saw_any = false;
    for _ in 0..frames {
        tick(&mut state, &TickInput::default(), dt);
        saw_any |= !state.obstacles.is_empty();
        assert!(state.obstacles.len() <= state.tuning.max_obstacles);
    }
    assert!(saw_any);
}

#[test]
fn long_session_against_squares_keeps_invariants() {
    // Damage monotonicity, score monotonicity and the one-way death flip,
    // observed over a real session (no healing obstacles in the mix).
    let mut state = GameState::new(1234, Tuning::default());
    let input = TickInput {
        fire: true,
        select_shape: Some(ShapeSelector::Fixed(ObstacleKind::Square)),
        ..Default::default()
    };

    let mut last_hp = state.player.hp;
    let mut last_score = state.player.damage_dealt;
    let mut died = false;
    for _ in 0..(120 * 60) {
        tick(&mut state, &input, 1.0 / 60.0);

        if state.player.alive {
            assert!(state.player.hp <= last_hp, "hp increased while alive");
            last_hp = state.player.hp;
        } else {
            died = true;
        }
        if died {
            assert!(!state.player.alive, "death flip reversed without restart");
        }
        assert!(state.player.damage_dealt >= last_score, "score decreased");
        last_score = state.player.damage_dealt;

        assert!(state.obstacles.len() <= state.tuning.max_obstacles);
        assert!(state.projectiles.len() <= state.tuning.max_projectiles);
    }
}

#[test]
fn death_drift_carries_the_ship_below_the_screen() {
    let mut state = quiet_state(2);
    state.player.take_damage(PLAYER_START_HP);
    let input = TickInput {
        movement: MoveAxes { up: true, ..Default::default() },
        ..Default::default()
    };
    let mut frames = 0;
    while state.player.pos.y <= state.tuning.screen_h {
        tick(&mut state, &input, 1.0 / 60.0);
        frames += 1;
        assert!(frames < 10_000, "ship never drifted off screen");
    }
    // 400 units at 250 units/sec: about 1.6 seconds.
    assert!((90..=100).contains(&frames), "drifted for {frames} frames");
}

#[test]
fn restart_after_game_over_preserves_selections_and_high_score() {
    let mut state = quiet_state(2);
    let cycle = TickInput { cycle_weapon: true, ..Default::default() };
    tick(&mut state, &cycle, 0.0); // Laser -> Bullet

    state.player.deal_damage(77, WeaponKind::Bullet);
    state.player.take_damage(PLAYER_START_HP);
    let restart = TickInput { restart: true, ..Default::default() };
    tick(&mut state, &restart, 0.0);

    assert_eq!(state.high_score, 77);
    assert_eq!(state.current_weapon, WeaponKind::Bullet);
    assert!(state.player.alive);
    assert!((SPAWN_MIN..=SPAWN_MAX).contains(&state.spawn_interval));
}

proptest! {
    #[test]
    fn collision_is_symmetric(
        ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
        bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ra in 0.1f32..200.0, rb in 0.1f32..200.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        prop_assert_eq!(circles_overlap(a, ra, b, rb), circles_overlap(b, rb, a, ra));
    }

    #[test]
    fn collision_matches_euclidean_distance(
        ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
        bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
        ra in 0.1f32..200.0, rb in 0.1f32..200.0,
    ) {
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        let expected = a.distance(b) < ra + rb;
        // distance() and distance_squared() round differently at the exact
        // boundary; only assert where the comparison is unambiguous.
        let margin = (a.distance(b) - (ra + rb)).abs();
        if margin > 1e-3 {
            prop_assert_eq!(circles_overlap(a, ra, b, rb), expected);
        }
    }

    #[test]
    fn fire_rate_is_nondecreasing_in_score(
        damages in proptest::collection::vec(0i32..200, 0..64),
    ) {
        let mut ship = PlayerShip::new(Vec2::new(800.0, 800.0));
        for weapon in WeaponKind::ALL {
            let mut last = ship.fire_rate(weapon);
            for &dmg in &damages {
                ship.deal_damage(dmg, weapon);
                let rate = ship.fire_rate(weapon);
                prop_assert!(rate >= last, "{weapon:?} rate regressed");
                last = rate;
            }
        }
    }

    #[test]
    fn score_never_decreases_even_for_healing_kills(
        damages in proptest::collection::vec(-10i32..200, 0..64),
    ) {
        let mut ship = PlayerShip::new(Vec2::new(800.0, 800.0));
        let mut last = 0;
        for &dmg in &damages {
            ship.deal_damage(dmg, WeaponKind::Laser);
            prop_assert!(ship.damage_dealt >= last);
            last = ship.damage_dealt;
        }
    }
}
