//! Draw-list projection of the game state
//!
//! Pure: reads `GameState`, returns the sprite list the video
//! collaborator consumes. List order is occlusion order - background
//! first, ball last. Positions truncate to integer pixels.

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::platform::video::{PixelRect, Sprite, TextureId, Tint};
use crate::sim::state::{GameState, MovableBox};

fn sprite_for(entity: &MovableBox) -> Sprite {
    Sprite {
        texture: entity.texture,
        dest: PixelRect::new(
            entity.pos.x as i32,
            entity.pos.y as i32,
            entity.size.x as i32,
            entity.size.y as i32,
        ),
        tint: Tint::WHITE,
    }
}

/// Ordered draw list: full-screen background, paddle, blocks, ball.
pub fn draw_list(state: &GameState, background: TextureId) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(state.blocks.len() + 3);
    sprites.push(Sprite {
        texture: background,
        dest: PixelRect::new(0, 0, VIEWPORT_WIDTH as i32, VIEWPORT_HEIGHT as i32),
        tint: Tint::WHITE,
    });
    sprites.push(sprite_for(&state.paddle));
    sprites.extend(state.blocks.iter().map(sprite_for));
    sprites.push(sprite_for(&state.ball));
    sprites
}
