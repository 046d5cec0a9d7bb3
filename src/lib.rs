//! Brick Breaker - a single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Simulation (collisions, entity state, tick, state machine)
//! - `renderer`: Draw intents and a renderer capability set
//! - `platform`: Key mapping and the browser bridge
//! - `persistence`: High score storage behind an injected capability
//! - `game`: Per-frame driver tying the above together

pub mod config;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use game::Game;
pub use persistence::{HIGH_SCORE_KEY, ScoreStore};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Brick grid. The row index advances horizontally, the column index vertically.
    pub const BRICK_ROWS: usize = 12;
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 40.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-tick speed on each axis
    pub const BALL_SPEED: f32 = 4.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Distance from the playfield bottom to the paddle top
    pub const PADDLE_BOTTOM_GAP: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    pub const INITIAL_LIVES: u32 = 3;

    /// Seed for brick colors
    pub const COLOR_SEED: u64 = 0x0095_dd00;
}
