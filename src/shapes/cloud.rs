//! Cloud shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};
use crate::render::draw_circle_outline;

/// Circle lobes making up one cloud: (dx, dy, radius) about the anchor.
const LOBES: [(f32, f32, i32); 4] = [
    (0.0, 0.0, 22),
    (25.0, 6.0, 20),
    (-25.0, 6.0, 20),
    (55.0, 0.0, 18),
];

/// A cloud: four overlapping white circle outlines.
///
/// Outlines, not disks — the wispy look comes from leaving the lobes
/// unfilled against the sky.
#[derive(Debug, Clone, Copy)]
pub struct Cloud {
    cx: f32,
    cy: f32,
}

impl Cloud {
    /// Create a cloud anchored at `(cx, cy)`.
    #[must_use]
    pub const fn new(cx: f32, cy: f32) -> Self {
        Self { cx, cy }
    }

    /// Render the cloud through the scene transform.
    ///
    /// Only the lobe centers go through the transform; radii are in
    /// pixels, so cloud placement is limited to translation and flips.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        for &(dx, dy, r) in &LOBES {
            let c = world.apply(Point::new(self.cx + dx, self.cy + dy));
            draw_circle_outline(fb, c.x.round() as i32, c.y.round() as i32, r, Rgba::WHITE);
        }
    }
}
