//! Browser bridge (wasm32 only)
//!
//! The page owns the canvas, the animation loop and the DOM buttons. It calls
//! into `WebGame` for input and gets each frame's scene back as JSON to
//! paint.

use wasm_bindgen::prelude::*;

use super::input::KeyEdge;
use crate::config::GameConfig;
use crate::game::Game;
use crate::persistence::LocalStorage;
use crate::sim::Command;

/// Install the console logger and panic hook once
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second init fails harmlessly when several games share a page
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorage>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        init_logging();
        log::info!("Brick Breaker starting...");
        WebGame {
            game: Game::new(GameConfig::default(), LocalStorage::new()),
        }
    }

    /// Forward a `keydown` event's `key`
    pub fn key_down(&mut self, key: &str) -> bool {
        self.game.key(key, KeyEdge::Down)
    }

    /// Forward a `keyup` event's `key`
    pub fn key_up(&mut self, key: &str) -> bool {
        self.game.key(key, KeyEdge::Up)
    }

    /// Restart button handler. Does nothing unless the game is over.
    pub fn restart(&mut self) {
        self.game.command(Command::Restart);
    }

    /// Current phase name: "start", "playing", "paused" or "over"
    pub fn phase(&self) -> String {
        self.game.state().phase.as_str().to_string()
    }

    /// Step one animation frame and return the scene as JSON
    pub fn frame(&mut self) -> String {
        let scene = self.game.frame();
        match serde_json::to_string(&scene) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Scene encoding failed: {}", e);
                String::from("null")
            }
        }
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
