//! Triangle-list renderer
//!
//! Turns a scene into a vertex buffer a GPU host can upload as-is. Text is
//! not tessellated; it is passed through as labels for the host's font path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::scene::{DrawIntent, Renderer, Sprite, TextIntent};
use super::shapes::{self, UvRect};
use super::vertex::Vertex;

/// Segments used for the flat ball
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Where each sprite lives in a texture atlas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteAtlas {
    regions: HashMap<Sprite, UvRect>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sprite: Sprite, region: UvRect) -> Self {
        self.regions.insert(sprite, region);
        self
    }

    pub fn region(&self, sprite: Sprite) -> Option<&UvRect> {
        self.regions.get(&sprite)
    }
}

/// How sprites are painted
#[derive(Debug, Clone, Default)]
pub enum Skin {
    /// Ball as a circle, everything else as a colored box
    #[default]
    Flat,
    /// Textured quads; sprites missing from the atlas fall back to flat
    Atlas(SpriteAtlas),
}

/// Renderer collecting a triangle list for one frame
#[derive(Debug, Default)]
pub struct MeshRenderer {
    skin: Skin,
    size: (f32, f32),
    vertices: Vec<Vertex>,
    labels: Vec<TextIntent>,
    restart_visible: bool,
}

impl MeshRenderer {
    pub fn new(skin: Skin) -> Self {
        Self {
            skin,
            ..Self::default()
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex data ready for a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn labels(&self) -> &[TextIntent] {
        &self.labels
    }

    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    fn flat(intent: &DrawIntent) -> Vec<Vertex> {
        let color = intent.color.to_rgba();
        match intent.sprite {
            Sprite::Ball => {
                let radius = intent.bounds.size().x / 2.0;
                shapes::circle(intent.bounds.center(), radius, color, CIRCLE_SEGMENTS)
            }
            Sprite::Paddle | Sprite::Brick => shapes::rect(&intent.bounds, color),
        }
    }
}

impl Renderer for MeshRenderer {
    fn clear(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        self.vertices.clear();
        self.labels.clear();
        self.restart_visible = false;
    }

    fn draw(&mut self, intent: &DrawIntent) {
        let verts = match &self.skin {
            Skin::Atlas(atlas) => match atlas.region(intent.sprite) {
                Some(uv) => shapes::textured_rect(&intent.bounds, uv, intent.color.to_rgba()),
                None => Self::flat(intent),
            },
            Skin::Flat => Self::flat(intent),
        };
        self.vertices.extend(verts);
    }

    fn text(&mut self, text: &TextIntent) {
        self.labels.push(text.clone());
    }

    fn restart_button(&mut self, visible: bool) {
        self.restart_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::Scene;
    use crate::sim::{GamePhase, GameState};

    fn scene() -> Scene {
        Scene::build(&GameState::new(GameConfig::default(), 0))
    }

    #[test]
    fn test_flat_mesh_sizes() {
        let mut renderer = MeshRenderer::new(Skin::Flat);
        scene().present(&mut renderer);
        // Ball fan + paddle quad + 84 brick quads
        let expected = (CIRCLE_SEGMENTS * 3) as usize + 6 + 84 * 6;
        assert_eq!(renderer.vertices().len(), expected);
        assert_eq!(renderer.vertex_bytes().len(), expected * 32);
        assert_eq!(renderer.labels().len(), 1);
        assert_eq!(renderer.size(), (800.0, 600.0));
    }

    #[test]
    fn test_atlas_skin_uses_quads() {
        let region = UvRect {
            min: [0.0, 0.0],
            max: [0.5, 0.5],
        };
        let atlas = SpriteAtlas::new()
            .with(Sprite::Ball, region)
            .with(Sprite::Paddle, region)
            .with(Sprite::Brick, region);
        let mut renderer = MeshRenderer::new(Skin::Atlas(atlas));
        scene().present(&mut renderer);
        assert_eq!(renderer.vertices().len(), 86 * 6);
        assert_eq!(renderer.vertices()[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_atlas_falls_back_to_flat() {
        let region = UvRect {
            min: [0.0, 0.0],
            max: [1.0, 1.0],
        };
        let atlas = SpriteAtlas::new().with(Sprite::Brick, region);
        let mut renderer = MeshRenderer::new(Skin::Atlas(atlas));
        scene().present(&mut renderer);
        let expected = (CIRCLE_SEGMENTS * 3) as usize + 6 + 84 * 6;
        assert_eq!(renderer.vertices().len(), expected);
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut renderer = MeshRenderer::new(Skin::Flat);
        let mut state = GameState::new(GameConfig::default(), 0);
        state.phase = GamePhase::Over;
        Scene::build(&state).present(&mut renderer);
        assert!(renderer.restart_visible());

        state.restart();
        Scene::build(&state).present(&mut renderer);
        assert!(!renderer.restart_visible());
        assert_eq!(renderer.labels().len(), 1);
    }
}
