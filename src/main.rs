//! Rebound entry point
//!
//! The native build ships no window or GPU backend, so this runs the
//! full lifecycle headless: scripted input, traced draws, logged result.
//! Useful as a smoke run and for soak-testing tuning changes.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use rebound::platform::headless::{HeadlessTextures, ScriptedInput, TraceBatch};
use rebound::platform::input::{InputSnapshot, InputSource};
use rebound::{Host, HostError, Tuning};

/// Simulated wall clock: a 60 fps host frame feeding the 30 Hz gate
const FRAME_DT: f32 = 1.0 / 60.0;
/// Script length in host frames (ten simulated seconds)
const DEMO_FRAMES: usize = 600;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("rebound starting, demo seed {seed}");

    let mut host = Host::new(Tuning::load());
    if let Err(err) = run(&mut host, seed) {
        log::error!("demo run failed: {err}");
        std::process::exit(1);
    }
}

fn run(host: &mut Host, seed: u64) -> Result<(), HostError> {
    host.initialize()?;

    let mut textures = HeadlessTextures::new();
    host.load_content(&mut textures)?;
    log::debug!("resolved assets: {:?}", textures.loaded());

    let mut input = ScriptedInput::new(demo_script(seed));
    let mut batch = TraceBatch::new();

    loop {
        let snapshot = input.poll();
        let report = host.frame(FRAME_DT, &snapshot)?;
        if report.exit {
            break;
        }
        host.draw(&mut batch)?;
    }

    let state = host.state();
    log::info!(
        "demo finished: {} ticks, paddle x {:.1}, ball ({:.1}, {:.1}), {} frames drawn",
        state.time_ticks,
        state.paddle.pos.x,
        state.ball.pos.x,
        state.ball.pos.y,
        batch.frame_count()
    );
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("final state: {json}"),
        Err(err) => log::warn!("could not serialize final state: {err}"),
    }
    Ok(())
}

/// Seeded input script: bursts of left/right/idle, then escape.
fn demo_script(seed: u64) -> Vec<InputSnapshot> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut frames = Vec::with_capacity(DEMO_FRAMES + 1);

    while frames.len() < DEMO_FRAMES {
        // Hold one direction (or nothing) for a short burst, like a
        // player nudging the paddle around.
        let held = match rng.random_range(0..3u8) {
            0 => InputSnapshot {
                left: true,
                ..Default::default()
            },
            1 => InputSnapshot {
                right: true,
                ..Default::default()
            },
            _ => InputSnapshot::default(),
        };
        let burst = rng.random_range(6..30usize).min(DEMO_FRAMES - frames.len());
        frames.extend(std::iter::repeat_n(held, burst));
    }

    frames.push(InputSnapshot {
        escape: true,
        ..Default::default()
    });
    frames
}
