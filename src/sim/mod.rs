//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per call, no clocks
//! - Stable brick iteration order (row-major)
//! - No rendering or platform dependencies

pub mod control;
pub mod geometry;
pub mod state;
pub mod tick;

pub use control::Command;
pub use geometry::Rect;
pub use state::{Ball, Brick, BrickGrid, Color, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{increase_score, tick};
