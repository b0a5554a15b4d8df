//! Data-driven game balance
//!
//! Every number the simulation consumes lives here so play feel can be
//! adjusted without a recompile. Defaults reproduce the classic layout;
//! the binary loads JSON overrides from the file named by the
//! `REBOUND_TUNING` environment variable. Partial files are fine - any
//! missing field keeps its default.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::gate::GatePolicy;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddle ===
    /// Paddle size in pixels
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle and the bottom edge
    pub paddle_padding: f32,
    /// Base movement per tick while a direction is held
    pub paddle_speed: f32,
    /// Momentum gained per held tick and shed per coasting tick
    pub paddle_inertia: f32,

    // === Ball ===
    /// Ball sprite is square, this many pixels per side
    pub ball_size: f32,
    /// Launch velocity in pixels per tick
    pub ball_velocity: [f32; 2],

    // === Block grid ===
    pub block_cols: u32,
    pub block_rows: u32,
    pub block_width: f32,
    pub block_height: f32,
    /// Gap between neighboring blocks and above the top row
    pub block_padding: f32,
    /// When set, the ball removes blocks it touches; off keeps the grid
    /// as pure scenery.
    pub breakable_blocks: bool,

    // === Step gating ===
    pub gate: GatePolicy,
    /// Seconds of real time per fixed step
    pub step_interval: f32,
    /// Carry gate only: most steps allowed per frame
    pub max_catch_up: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Paddle
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_padding: PADDLE_PADDING,
            paddle_speed: PADDLE_SPEED,
            paddle_inertia: PADDLE_INERTIA,

            // Ball
            ball_size: BALL_SIZE,
            ball_velocity: [BALL_VELOCITY_X, BALL_VELOCITY_Y],

            // Block grid
            block_cols: BLOCK_COLS,
            block_rows: BLOCK_ROWS,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_padding: BLOCK_PADDING,
            breakable_blocks: false,

            // Step gating
            gate: GatePolicy::Reset,
            step_interval: STEP_INTERVAL,
            max_catch_up: MAX_CATCH_UP_STEPS,
        }
    }
}

impl Tuning {
    /// Environment variable naming the JSON overrides file
    pub const ENV_PATH: &'static str = "REBOUND_TUNING";

    /// Launch velocity as a vector
    pub fn ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_velocity[0], self.ball_velocity[1])
    }

    /// Load overrides from the file named by `REBOUND_TUNING`, falling
    /// back to defaults (and saying so) when unset or unreadable.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("using default tuning");
            return Self::default();
        };
        let path = std::path::PathBuf::from(path);

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("could not read tuning file {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
