//! Tree shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};

use super::fill_transformed;

/// Trunk base half-width and height in local coordinates.
const TRUNK: [Point; 4] = [
    Point::new(-8.0, 0.0),
    Point::new(8.0, 0.0),
    Point::new(8.0, 30.0),
    Point::new(-8.0, 30.0),
];

/// Three stacked foliage triangles, narrowing toward the top.
const FOLIAGE: [[Point; 3]; 3] = [
    [
        Point::new(-40.0, 30.0),
        Point::new(40.0, 30.0),
        Point::new(0.0, 90.0),
    ],
    [
        Point::new(-30.0, 50.0),
        Point::new(30.0, 50.0),
        Point::new(0.0, 110.0),
    ],
    [
        Point::new(-20.0, 70.0),
        Point::new(20.0, 70.0),
        Point::new(0.0, 130.0),
    ],
];

/// A tree: trunk plus three stacked foliage triangles, uniformly scaled
/// about the trunk base.
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    x: f32,
    y: f32,
    scale: f32,
}

impl Tree {
    /// Create a tree with its trunk base at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, scale: 1.0 }
    }

    /// Set the uniform scale factor.
    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Render the tree through the scene transform.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let place = Transform::scale(self.scale, self.scale)
            .then(Transform::translate(self.x, self.y))
            .then(*world);

        let trunk = Rgba::from_f32(0.45, 0.26, 0.07);
        fill_transformed(fb, &place, &TRUNK, trunk);

        let foliage = Rgba::from_f32(0.13, 0.55, 0.13);
        for triangle in &FOLIAGE {
            fill_transformed(fb, &place, triangle, foliage);
        }
    }
}
