//! Rebound - a classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle/ball physics, collisions, block grid)
//! - `platform`: Input and video collaborator traits plus headless backends
//! - `scene`: Projection of game state into an ordered sprite list
//! - `host`: Explicit construct/initialize/load/run lifecycle
//! - `tuning`: Data-driven game balance

pub mod host;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use host::{FrameReport, Host, HostError, HostPhase};
pub use sim::{GameState, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step interval (30 Hz gate)
    pub const STEP_INTERVAL: f32 = 1.0 / 30.0;
    /// Maximum catch-up steps per frame under the carry gate
    pub const MAX_CATCH_UP_STEPS: u32 = 8;

    /// Playfield dimensions (pixels)
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Paddle defaults - rests PADDLE_PADDING above the bottom edge
    pub const PADDLE_WIDTH: f32 = VIEWPORT_WIDTH / 10.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_PADDING: f32 = 10.0;
    /// Base paddle movement per tick while a direction is held
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Velocity gained per held tick, shed per coasting tick
    pub const PADDLE_INERTIA: f32 = 1.0;

    /// Ball defaults - a square sprite launched up and to the right
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_VELOCITY_X: f32 = 1.0;
    pub const BALL_VELOCITY_Y: f32 = -2.0;

    /// Block grid defaults
    pub const BLOCK_COLS: u32 = 7;
    pub const BLOCK_ROWS: u32 = 3;
    pub const BLOCK_WIDTH: f32 = 45.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    /// Gap between neighboring blocks and between the grid and the top edge
    pub const BLOCK_PADDING: f32 = 20.0;
}
