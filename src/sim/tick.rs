//! Fixed timestep simulation step
//!
//! Advances the game deterministically, one 30 Hz tick at a time. All
//! distances are pixels per tick; real elapsed time never enters here.

use crate::sim::collision;
use crate::sim::state::GameState;
use crate::tuning::Tuning;

/// Input held during a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left direction held
    pub left: bool,
    /// Right direction held
    pub right: bool,
}

impl TickInput {
    /// True when either direction is held
    pub fn any_direction(&self) -> bool {
        self.left || self.right
    }
}

/// Advance the game state by one fixed tick.
///
/// Order matters: paddle dynamics and clamping first, then ball
/// integration, then reflection checks against predicted next positions.
/// A flip always lands the tick before the move that would cross the
/// boundary, so the ball can overlap a wall for one visible tick.
pub fn step(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    state.time_ticks += 1;

    move_paddle(state, input, tuning);

    if input.any_direction() {
        state.started = true;
    }
    if !state.started {
        return;
    }

    state.ball.pos += state.ball.vel;

    if collision::crosses_ceiling(&state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if collision::crosses_side_walls(&state.ball) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if collision::paddle_returns_ball(&state.paddle, &state.ball) {
        state.ball.vel.y = -state.ball.vel.y;
    }

    if tuning.breakable_blocks {
        break_first_hit_block(state);
    }
}

/// Paddle dynamics: held input adds base speed plus momentum and grows
/// the momentum; idle ticks coast on the momentum and bleed it off
/// linearly. A residual below the inertia threshold never decays, so a
/// released paddle can drift indefinitely until steered or clamped.
fn move_paddle(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    let paddle = &mut state.paddle;

    if input.right {
        paddle.pos.x += tuning.paddle_speed + paddle.vel.x;
        paddle.vel.x += tuning.paddle_inertia;
    } else if input.left {
        paddle.pos.x += -tuning.paddle_speed + paddle.vel.x;
        paddle.vel.x -= tuning.paddle_inertia;
    } else {
        paddle.pos.x += paddle.vel.x;
        if paddle.vel.x.abs() > tuning.paddle_inertia {
            paddle.vel.x -= tuning.paddle_inertia * paddle.vel.x.signum();
        }
    }

    // Reaching either edge parks the paddle and kills its momentum.
    if paddle.pos.x <= 0.0 {
        paddle.pos.x = 0.0;
        paddle.vel.x = 0.0;
    } else if paddle.right() >= crate::consts::VIEWPORT_WIDTH {
        paddle.pos.x = crate::consts::VIEWPORT_WIDTH - paddle.size.x;
        paddle.vel.x = 0.0;
    }
}

/// Remove the first block the ball's predicted position touches and
/// reflect: vertically when the spans already overlap in x (hit from
/// above or below), horizontally otherwise. At most one block per tick.
fn break_first_hit_block(state: &mut GameState) {
    let ball = state.ball;
    let hit = state
        .blocks
        .iter()
        .position(|block| collision::predicted_overlap(&ball, block));
    if let Some(idx) = hit {
        let block = state.blocks.remove(idx);
        if collision::overlap_x(&ball, &block) {
            state.ball.vel.y = -state.ball.vel.y;
        } else {
            state.ball.vel.x = -state.ball.vel.x;
        }
    }
}
