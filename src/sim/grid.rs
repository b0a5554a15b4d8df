//! Block field layout

use glam::Vec2;

use crate::consts::VIEWPORT_WIDTH;
use crate::sim::state::MovableBox;
use crate::tuning::Tuning;

/// Lay out the block field: `cols x rows` boxes separated by one padding
/// on each axis, the whole group centered horizontally, the top row one
/// padding below the top edge. Creation order is column-major, so the
/// block at (col, row) is `blocks[col * rows + row]`.
pub fn build(tuning: &Tuning) -> Vec<MovableBox> {
    let size = Vec2::new(tuning.block_width, tuning.block_height);
    let stride = size + Vec2::splat(tuning.block_padding);

    let group_width = tuning.block_cols as f32 * stride.x - tuning.block_padding;
    let origin = Vec2::new((VIEWPORT_WIDTH - group_width) / 2.0, tuning.block_padding);

    let mut blocks = Vec::with_capacity((tuning.block_cols * tuning.block_rows) as usize);
    for col in 0..tuning.block_cols {
        for row in 0..tuning.block_rows {
            let offset = Vec2::new(col as f32 * stride.x, row as f32 * stride.y);
            blocks.push(MovableBox::new(origin + offset, size));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_count_and_size() {
        let blocks = build(&Tuning::default());
        assert_eq!(blocks.len(), 21);
        for block in &blocks {
            assert_eq!(block.size, Vec2::new(45.0, 30.0));
            assert_eq!(block.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_grid_centered_horizontally() {
        let blocks = build(&Tuning::default());
        // 7 * 45 + 6 * 20 = 435 wide, leaving 102.5 on each side.
        let left = blocks.iter().map(|b| b.left()).fold(f32::MAX, f32::min);
        let right = blocks.iter().map(|b| b.right()).fold(f32::MIN, f32::max);
        assert_eq!(left, 102.5);
        assert_eq!(right, 537.5);
        assert_eq!(left, VIEWPORT_WIDTH - right);
    }

    #[test]
    fn test_grid_column_major_order() {
        let blocks = build(&Tuning::default());
        // First three entries walk down the leftmost column.
        assert_eq!(blocks[0].pos, Vec2::new(102.5, 20.0));
        assert_eq!(blocks[1].pos, Vec2::new(102.5, 70.0));
        assert_eq!(blocks[2].pos, Vec2::new(102.5, 120.0));
        // Fourth entry starts the next column, one stride right.
        assert_eq!(blocks[3].pos, Vec2::new(167.5, 20.0));
    }

    #[test]
    fn test_grid_top_row_offset() {
        let blocks = build(&Tuning::default());
        let top = blocks.iter().map(|b| b.top()).fold(f32::MAX, f32::min);
        assert_eq!(top, 20.0);
    }

    #[test]
    fn test_grid_respects_tuning_shape() {
        let tuning = Tuning {
            block_cols: 2,
            block_rows: 5,
            ..Tuning::default()
        };
        let blocks = build(&tuning);
        assert_eq!(blocks.len(), 10);
        // Column-major: entries 0..5 share an x coordinate.
        assert!(blocks[..5].iter().all(|b| b.left() == blocks[0].left()));
    }
}
