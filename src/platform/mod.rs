//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (DOM key names to commands)
//! - The browser entry point (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{KeyEdge, map_key};
#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
