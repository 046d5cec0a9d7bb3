//! Game configuration
//!
//! The game has no runtime settings; `GameConfig` bundles the fixed constants
//! so a state can be built against a specific playfield.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playfield bounds. The origin is the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_x: BRICK_OFFSET_X,
            offset_y: BRICK_OFFSET_Y,
        }
    }
}

impl BrickLayout {
    /// Score modulus that triggers a refill.
    ///
    /// Row count squared, not rows * columns.
    pub fn refill_every(&self) -> u32 {
        (self.rows * self.rows) as u32
    }
}

/// Complete set of constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub bricks: BrickLayout,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_gap: f32,
    pub paddle_speed: f32,
    pub initial_lives: u32,
    pub color_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield::default(),
            bricks: BrickLayout::default(),
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_speed: PADDLE_SPEED,
            initial_lives: INITIAL_LIVES,
            color_seed: COLOR_SEED,
        }
    }
}

impl GameConfig {
    /// Default constants on a playfield of a different size
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield: Playfield { width, height },
            ..Self::default()
        }
    }

    /// Center of the playfield, where the ball serves from
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.playfield.width / 2.0, self.playfield.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_uses_rows_squared() {
        let layout = BrickLayout::default();
        assert_eq!(layout.refill_every(), 144);
    }

    #[test]
    fn test_with_playfield_keeps_other_constants() {
        let config = GameConfig::with_playfield(1000.0, 500.0);
        assert_eq!(config.center(), glam::Vec2::new(500.0, 250.0));
        assert_eq!(config.bricks, BrickLayout::default());
        assert_eq!(config.initial_lives, 3);
    }
}
