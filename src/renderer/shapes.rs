//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Texture region in normalized atlas coordinates
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UvRect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle sampling an atlas region
pub fn textured_rect(r: &Rect, uv: &UvRect, tint: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (r.left(), r.top(), r.right(), r.bottom());
    let ([u0, v0], [u1, v1]) = (uv.min, uv.max);
    vec![
        Vertex::textured(x0, y0, tint, u0, v0),
        Vertex::textured(x1, y0, tint, u1, v0),
        Vertex::textured(x0, y1, tint, u0, v1),
        Vertex::textured(x0, y1, tint, u0, v1),
        Vertex::textured(x1, y0, tint, u1, v0),
        Vertex::textured(x1, y1, tint, u1, v1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 50.0);
        let verts = circle(center, 10.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 48);
        for v in verts {
            let p = Vec2::from(v.position);
            assert!((p - center).length() <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let verts = rect(&r, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_textured_rect_maps_uv_corners() {
        let r = Rect::new(0.0, 0.0, 8.0, 8.0);
        let uv = UvRect {
            min: [0.25, 0.0],
            max: [0.5, 0.5],
        };
        let verts = textured_rect(&r, &uv, [1.0; 4]);
        assert_eq!(verts[0].uv, [0.25, 0.0]);
        assert_eq!(verts[5].uv, [0.5, 0.5]);
        assert_eq!(verts[5].position, [8.0, 8.0]);
    }
}
