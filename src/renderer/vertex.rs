//! Vertex type for 2D meshes

use bytemuck::{Pod, Zeroable};

/// 2D vertex in playfield pixels with a color and texture coordinate.
///
/// Flat-colored geometry leaves `uv` at zero.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
            uv: [0.0, 0.0],
        }
    }

    pub const fn textured(x: f32, y: f32, color: [f32; 4], u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            color,
            uv: [u, v],
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::sim::Color;

    pub const BALL: Color = Color::rgb(255, 255, 255);
    pub const PADDLE: Color = Color::rgb(0x00, 0x95, 0xdd);
    pub const HUD_TEXT: Color = Color::rgb(0x00, 0x95, 0xdd);
    pub const MESSAGE_TEXT: Color = Color::rgb(255, 255, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 8 * 4);
        let verts = [Vertex::new(1.0, 2.0, [1.0; 4])];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 32);
    }
}
