//! Sun shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};
use crate::render::draw_disk_concentric;

/// The sun: a golden disk filled by concentric circle outlines.
#[derive(Debug, Clone, Copy)]
pub struct Sun {
    cx: f32,
    cy: f32,
    r: i32,
}

impl Sun {
    /// Create a sun centered at `(cx, cy)` with radius `r` pixels.
    #[must_use]
    pub const fn new(cx: f32, cy: f32, r: i32) -> Self {
        Self { cx, cy, r }
    }

    /// Render the sun through the scene transform.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let c = world.apply(Point::new(self.cx, self.cy));
        let gold = Rgba::from_f32(1.0, 0.85, 0.0);
        draw_disk_concentric(fb, c.x.round() as i32, c.y.round() as i32, self.r, gold);
    }
}
