//! Rendering module
//!
//! The core emits draw intents (`scene`); concrete renderers decide how to
//! paint them. `mesh` builds triangle lists with a flat or atlas skin.

pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshRenderer, Skin, SpriteAtlas};
pub use scene::{DrawIntent, Renderer, Scene, Sprite, TextIntent, TextSize};
pub use vertex::Vertex;
