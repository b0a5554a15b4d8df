//! Predicted-position collision tests for axis-aligned boxes
//!
//! Every check looks one tick ahead (`pos + vel`): velocity flips land
//! on the tick before the move that would cross a boundary, and nothing
//! here ever clamps a position. A reflected box can therefore sit
//! visibly past a wall for a single tick.

use crate::consts::VIEWPORT_WIDTH;
use crate::sim::state::MovableBox;

/// True when the box's predicted horizontal span leaves the playfield
/// through either side wall.
pub fn crosses_side_walls(b: &MovableBox) -> bool {
    let x = b.pos.x + b.vel.x;
    x < 0.0 || x + b.size.x > VIEWPORT_WIDTH
}

/// True when the box's predicted top edge leaves through the ceiling.
pub fn crosses_ceiling(b: &MovableBox) -> bool {
    b.pos.y + b.vel.y < 0.0
}

/// Exact-containment paddle return test on predicted positions: the
/// paddle's top edge must sit above the ball's predicted bottom edge,
/// and the paddle's predicted span must fully contain the ball's
/// predicted span. A ball hanging over either paddle edge falls through.
pub fn paddle_returns_ball(paddle: &MovableBox, ball: &MovableBox) -> bool {
    let ball_next = ball.predicted();
    let paddle_next = paddle.predicted();

    let reaches_paddle = paddle.top() < ball_next.y + ball.size.y;
    let contained = paddle_next.x <= ball_next.x
        && ball_next.x + ball.size.x <= paddle_next.x + paddle.size.x;

    reaches_paddle && contained
}

/// Axis-aligned overlap between one box's predicted position and another
/// box's current position.
pub fn predicted_overlap(moving: &MovableBox, fixed: &MovableBox) -> bool {
    let next = moving.predicted();
    next.x < fixed.right()
        && fixed.left() < next.x + moving.size.x
        && next.y < fixed.bottom()
        && fixed.top() < next.y + moving.size.y
}

/// Horizontal span overlap at current positions. Used to decide whether
/// a block hit came from above/below (spans overlap) or from the side.
pub fn overlap_x(a: &MovableBox, b: &MovableBox) -> bool {
    a.left() < b.right() && b.left() < a.right()
}
