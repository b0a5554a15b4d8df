//! Game state and core simulation types
//!
//! All state the fixed-step simulation reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::video::TextureId;
use crate::tuning::Tuning;

/// An axis-aligned box entity: the paddle, the ball, or a block.
///
/// Plain data with public fields. Entities never reference each other;
/// every interaction is a per-tick geometric comparison in `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovableBox {
    /// Top-left corner in playfield pixels
    pub pos: Vec2,
    /// Width and height in pixels
    pub size: Vec2,
    /// Velocity in pixels per fixed tick
    pub vel: Vec2,
    /// Handle resolved by the texture loader during load-content
    #[serde(default)]
    pub texture: TextureId,
}

impl MovableBox {
    /// A stationary box with a default (unresolved) texture handle
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            texture: TextureId::default(),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Position this box will occupy after its next integration step
    #[inline]
    pub fn predicted(&self) -> Vec2 {
        self.pos + self.vel
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Player paddle, clamped to the playfield every tick
    pub paddle: MovableBox,
    /// The ball; frozen above the paddle until the first direction input
    pub ball: MovableBox,
    /// Block field in column-major creation order
    pub blocks: Vec<MovableBox>,
    /// Latched by the first left/right input; ball motion starts with it
    pub started: bool,
    /// Fixed ticks simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// Build the starting state: paddle centered against the bottom edge,
    /// ball resting centered just above it, blocks laid out in the grid.
    pub fn new(tuning: &Tuning) -> Self {
        let paddle_size = Vec2::new(tuning.paddle_width, tuning.paddle_height);
        let paddle = MovableBox::new(
            Vec2::new(
                (VIEWPORT_WIDTH - paddle_size.x) / 2.0,
                VIEWPORT_HEIGHT - tuning.paddle_padding - paddle_size.y,
            ),
            paddle_size,
        );

        let ball_size = Vec2::splat(tuning.ball_size);
        let mut ball = MovableBox::new(
            Vec2::new((VIEWPORT_WIDTH - ball_size.x) / 2.0, paddle.top() - ball_size.y),
            ball_size,
        );
        ball.vel = tuning.ball_velocity();

        Self {
            paddle,
            ball,
            blocks: super::grid::build(tuning),
            started: false,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&Tuning::default());

        assert_eq!(state.paddle.pos, Vec2::new(288.0, 460.0));
        assert_eq!(state.paddle.size, Vec2::new(64.0, 10.0));
        assert_eq!(state.paddle.vel, Vec2::ZERO);

        assert_eq!(state.ball.pos, Vec2::new(310.0, 440.0));
        assert_eq!(state.ball.size, Vec2::new(20.0, 20.0));
        assert_eq!(state.ball.vel, Vec2::new(1.0, -2.0));

        assert_eq!(state.blocks.len(), 21);
        assert!(!state.started);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_ball_rests_on_paddle_top() {
        let state = GameState::new(&Tuning::default());
        assert_eq!(state.ball.bottom(), state.paddle.top());
    }

    #[test]
    fn test_box_edges() {
        let b = MovableBox::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_predicted_position() {
        let mut b = MovableBox::new(Vec2::new(5.0, 5.0), Vec2::splat(2.0));
        b.vel = Vec2::new(-1.0, 3.0);
        assert_eq!(b.predicted(), Vec2::new(4.0, 8.0));
    }
}
