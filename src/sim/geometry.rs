//! Axis-aligned bounding box tests
//!
//! Every collision in the game is a rectangle test. The ball is never treated
//! as a circle here: it is the square of side `2 * radius` centered on its
//! position. Corner hits therefore register slightly early, which is the
//! game's known approximation.
//!
//! All comparisons are strict, so touching edges never count as contact.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::Playfield;

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Square bounding box around a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Horizontal span of `self` lies strictly inside that of `outer`
    #[inline]
    pub fn within_span(&self, outer: &Rect) -> bool {
        self.left() > outer.left() && self.right() < outer.right()
    }

    /// Vertical extents overlap strictly
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() > other.top() && self.top() < other.bottom()
    }
}

/// Ball box against a brick.
///
/// Horizontally the ball must sit inside the brick's span, vertically the two
/// boxes only need to overlap.
#[inline]
pub fn ball_hits_brick(ball: &Rect, brick: &Rect) -> bool {
    ball.within_span(brick) && ball.overlaps_vertically(brick)
}

/// Ball box against the paddle.
///
/// There is no lower bound: a ball under the paddle's top edge and inside its
/// span counts as a hit.
#[inline]
pub fn ball_hits_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.within_span(paddle) && ball.bottom() > paddle.top()
}

/// Ball box pokes through the left or right wall
#[inline]
pub fn crosses_side_wall(ball: &Rect, field: &Playfield) -> bool {
    ball.right() > field.width || ball.left() < 0.0
}

/// Ball box pokes through the ceiling or the floor
#[inline]
pub fn crosses_top_or_bottom(ball: &Rect, field: &Playfield) -> bool {
    ball.bottom() > field.height || ball.top() < 0.0
}

/// Ball box has dropped past the floor
#[inline]
pub fn below_floor(ball: &Rect, field: &Playfield) -> bool {
    ball.bottom() > field.height
}

/// Clamp a left edge so a span of `width` stays inside the playfield
#[inline]
pub fn clamp_span(x: f32, width: f32, field: &Playfield) -> f32 {
    x.min(field.width - width).max(0.0)
}
