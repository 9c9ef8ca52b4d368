//! Drag Pong headless demo
//!
//! Runs the simulation without a window: lays out a phone-sized field, pulls
//! back and releases to launch, then lets an autopilot steer the paddle.
//!
//! Usage: `drag-pong [tuning.json]`

use anyhow::{Context, Result};

use drag_pong::sim::{GameEvent, InputEvent};
use drag_pong::{GameSimulation, Tuning};

const FIELD_WIDTH: f32 = 1080.0;
const FIELD_HEIGHT: f32 = 1920.0;
/// Give up after this many frames (the ball can settle into a loop)
const MAX_FRAMES: u32 = 20_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Drag Pong (headless) starting...");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning file {path}"))?;
            Tuning::from_json_str(&json).with_context(|| format!("loading tuning from {path}"))?
        }
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut sim = GameSimulation::new(tuning, seed)?;
    sim.resize(FIELD_WIDTH, FIELD_HEIGHT)
        .context("laying out the playfield")?;

    demo_game(&mut sim);
    Ok(())
}

/// Play one game to completion (or the frame cap)
fn demo_game(sim: &mut GameSimulation) {
    log::info!("=== Starting Demo Game ===");

    // Pull back down-left of the ball and release above-right of the press
    let ball = sim.snapshot().ball_pos;
    sim.handle_input(InputEvent::PressStart {
        x: ball.x,
        y: ball.y,
    });
    sim.handle_input(InputEvent::PressEnd {
        x: ball.x + 60.0,
        y: ball.y - 180.0,
    });

    let mut frame = 0;
    while !sim.phase().is_terminal() && frame < MAX_FRAMES {
        // Autopilot: chase the ball's x with the paddle center
        let snap = sim.snapshot();
        sim.handle_input(InputEvent::PressMove {
            x: snap.ball_pos.x,
            y: snap.paddle.top,
        });

        sim.advance();
        frame += 1;

        for event in sim.drain_events() {
            match event {
                GameEvent::BlockDestroyed { id } => {
                    log::info!("Frame {}: block {} destroyed (score {})", frame, id, sim.score());
                }
                GameEvent::Launched { vel } => {
                    log::info!("Launched at ({:.1}, {:.1})", vel.x, vel.y);
                }
                _ => {}
            }
        }
    }

    let snap = sim.snapshot();
    log::info!(
        "=== Demo finished after {} frames: {:?}, score {}, {} blocks left ===",
        frame,
        snap.phase,
        snap.score,
        snap.blocks.len()
    );
}
