//! Draw intents
//!
//! The simulation never paints. Each frame it is turned into a `Scene`: what
//! to draw (sprite id, bounds, color) and which text to show. A `Renderer`
//! chosen by the host decides how those intents become pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vertex::colors;
use crate::sim::{Color, GamePhase, GameState, Rect};

/// What an intent depicts; renderers map these to shapes or images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ball,
    Paddle,
    Brick,
}

/// One entity to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawIntent {
    pub sprite: Sprite,
    pub bounds: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    /// Score and lives (20px)
    Hud,
    /// Phase overlays (40px)
    Message,
}

impl TextSize {
    pub fn px(self) -> f32 {
        match self {
            TextSize::Hud => 20.0,
            TextSize::Message => 40.0,
        }
    }
}

/// A line of text, positioned at its left baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextIntent {
    pub text: String,
    pub pos: Vec2,
    pub size: TextSize,
    pub color: Color,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub sprites: Vec<DrawIntent>,
    pub texts: Vec<TextIntent>,
    /// The host's restart button should be shown
    pub show_restart: bool,
}

/// Capability set of a concrete renderer
pub trait Renderer {
    /// Start a frame, clearing the whole surface
    fn clear(&mut self, width: f32, height: f32);

    fn draw(&mut self, intent: &DrawIntent);

    fn text(&mut self, text: &TextIntent);

    /// Called once per frame with the restart button's visibility
    fn restart_button(&mut self, _visible: bool) {}
}

impl Scene {
    /// Build the scene for the current state.
    ///
    /// Entities are drawn in every phase; the HUD only while playing, and a
    /// message overlay in the other phases.
    pub fn build(state: &GameState) -> Self {
        let field = state.config.playfield;
        let (w, h) = (field.width, field.height);

        let mut sprites = Vec::with_capacity(2 + state.bricks.visible_count());
        sprites.push(DrawIntent {
            sprite: Sprite::Ball,
            bounds: state.ball.bounds(),
            color: colors::BALL,
        });
        sprites.push(DrawIntent {
            sprite: Sprite::Paddle,
            bounds: state.paddle.bounds(),
            color: colors::PADDLE,
        });
        sprites.extend(
            state
                .bricks
                .iter()
                .filter(|(_, b)| b.visible)
                .map(|(_, b)| DrawIntent {
                    sprite: Sprite::Brick,
                    bounds: b.rect,
                    color: b.color,
                }),
        );

        let hud = |text: String, x: f32| TextIntent {
            text,
            pos: Vec2::new(x, 30.0),
            size: TextSize::Hud,
            color: colors::HUD_TEXT,
        };
        let message = |text: String, x: f32, y: f32| TextIntent {
            text,
            pos: Vec2::new(x, y),
            size: TextSize::Message,
            color: colors::MESSAGE_TEXT,
        };

        let texts = match state.phase {
            GamePhase::Start => vec![message(
                "Press Spacebar to Start!".to_string(),
                w / 2.0 - 250.0,
                h / 2.0,
            )],
            GamePhase::Playing => vec![
                hud(format!("Score: {}", state.score), w - 100.0),
                hud(format!("Lives: {}", state.lives), 10.0),
            ],
            GamePhase::Paused => vec![message("Paused".to_string(), w / 2.0 - 70.0, h / 2.0)],
            GamePhase::Over => vec![
                message("Game Over!".to_string(), w / 2.0 - 120.0, h / 2.0 - 40.0),
                message(format!("Score: {}", state.score), w / 2.0 - 70.0, h / 2.0),
                message(
                    format!("Highest Score: {}", state.high_score),
                    w / 2.0 - 130.0,
                    h / 2.0 + 40.0,
                ),
            ],
        };

        Self {
            width: w,
            height: h,
            phase: state.phase,
            sprites,
            texts,
            show_restart: state.phase == GamePhase::Over,
        }
    }

    /// Hand every intent to `renderer`, in paint order
    pub fn present(&self, renderer: &mut impl Renderer) {
        renderer.clear(self.width, self.height);
        for intent in &self.sprites {
            renderer.draw(intent);
        }
        for text in &self.texts {
            renderer.text(text);
        }
        renderer.restart_button(self.show_restart);
    }
}
