//! Game state and entity records
//!
//! Everything the simulation mutates lives in one owned `GameState`. Entities
//! are created once and reset in place on restart.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::{BrickLayout, GameConfig, Playfield};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first toggle
    #[default]
    Start,
    /// Active gameplay, the only phase that ticks
    Playing,
    /// Frozen until toggled again
    Paused,
    /// Out of lives
    Over,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "start",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Over => "over",
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random opaque color
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// Normalized RGBA
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// CSS `rgb(r,g,b)` form
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Fixed speed; a paddle bounce sets `vel.y` to exactly `-speed`
    pub speed: f32,
}

impl Ball {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.center(),
            vel: Vec2::new(config.ball_speed, -config.ball_speed),
            radius: config.ball_radius,
            speed: config.ball_speed,
        }
    }

    /// Bounding square used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }

    /// Recenter after a missed ball, heading back the other way vertically
    pub fn serve_from(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.y = -self.vel.y;
    }

    /// Back to the initial position and velocity
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Horizontal displacement per tick: `-speed`, `0` or `+speed`
    pub dx: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.playfield.width / 2.0 - config.paddle_width / 2.0,
                config.playfield.height - config.paddle_bottom_gap,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            dx: 0.0,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Move by `dx` and clamp inside the playfield
    pub fn advance(&mut self, field: &Playfield) {
        self.pos.x = super::geometry::clamp_span(self.pos.x + self.dx, self.width, field);
    }

    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub visible: bool,
    pub color: Color,
}

/// Fixed grid of bricks, built once and never resized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    /// Row-major: index = row * columns + column
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Lay out the grid. Colors come from a seeded generator so the same seed
    /// always paints the same grid.
    pub fn new(layout: &BrickLayout, color_seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(color_seed);
        let mut bricks = Vec::with_capacity(layout.rows * layout.columns);
        for row in 0..layout.rows {
            for column in 0..layout.columns {
                let x = row as f32 * (layout.width + layout.padding) + layout.offset_x;
                let y = column as f32 * (layout.height + layout.padding) + layout.offset_y;
                bricks.push(Brick {
                    rect: Rect::new(x, y, layout.width, layout.height),
                    visible: true,
                    color: Color::random(&mut rng),
                });
            }
        }
        Self {
            rows: layout.rows,
            columns: layout.columns,
            bricks,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get(row * self.columns + column)
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut Brick> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.bricks.get_mut(row * self.columns + column)
    }

    /// Bricks with their (row, column) coordinates, in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        let columns = self.columns;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i / columns, i % columns), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Brick)> {
        let columns = self.columns;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| ((i / columns, i % columns), b))
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// Make every brick visible again
    pub fn show_all(&mut self) {
        for brick in &mut self.bricks {
            brick.visible = true;
        }
    }
}

/// Something that happened during a tick, for hosts and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    BrickHit { row: usize, column: usize },
    /// All bricks shown again after a score threshold
    Refill,
    LifeLost { remaining: u32 },
    GameOver { score: u32, new_high_score: bool },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub score: u32,
    pub lives: u32,
    /// Best score seen, mirrored from the score store
    pub high_score: u32,
}

impl GameState {
    /// Fresh game in the `Start` phase
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            ball: Ball::new(&config),
            paddle: Paddle::new(&config),
            bricks: BrickGrid::new(&config.bricks, config.color_seed),
            score: 0,
            lives: config.initial_lives,
            high_score,
            config,
        }
    }

    /// Reset every entity and counter in place, keeping the high score
    pub fn restart(&mut self) {
        self.phase = GamePhase::Start;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.ball.reset(&self.config);
        self.paddle.reset(&self.config);
        self.bricks.show_all();
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
