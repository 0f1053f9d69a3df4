//! Skyshard entry point
//!
//! There is no bundled rendering backend; the binary runs a headless scripted
//! session at the advisory frame rate and logs the outcome. A real frontend
//! supplies a `Canvas` implementation and live input instead.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use skyshard::consts::FRAME_DT;
use skyshard::render::{RecordingCanvas, draw_frame};
use skyshard::sim::{GameState, TickInput, tick};
use skyshard::tuning::Tuning;

fn main() {
    env_logger::init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_or_default(Path::new(&path)),
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::new(seed, tuning);
    let mut canvas = RecordingCanvas::default();

    // 60 scripted seconds: hold fire, sweep left and right, restart on death.
    let frames = 60 * 60;
    for frame in 0..frames {
        let sweep_left = (frame / 120) % 2 == 0;
        let mut input = TickInput::default();
        input.fire = true;
        input.movement.left = sweep_left;
        input.movement.right = !sweep_left;
        input.steer_left = sweep_left;
        input.restart = !state.player.alive;

        tick(&mut state, &input, FRAME_DT);
        draw_frame(&state, &mut canvas);
    }

    log::info!(
        "smoke run done: score {}, hp {}, {} obstacles / {} projectiles live, {} frames drawn",
        state.player.damage_dealt,
        state.player.hp,
        state.obstacles.len(),
        state.projectiles.len(),
        canvas.frames_presented,
    );
    println!(
        "final score: {} (best {})",
        state.player.damage_dealt,
        state.high_score.max(state.player.damage_dealt)
    );
}
