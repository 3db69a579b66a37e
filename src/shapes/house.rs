//! House shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};

use super::{dda_edge, fill_transformed};

/// A house: body, roof with rasterized edges, door, and one window.
///
/// Positioned by its bottom-left corner in scene coordinates.
#[derive(Debug, Clone, Copy)]
pub struct House {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl House {
    /// Create a house at `(x, y)` with body size `w × h`.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Render the house through the scene transform.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let Self { x, y, w, h } = *self;

        let body = Rgba::from_f32(0.78, 0.60, 0.40);
        fill_transformed(
            fb,
            world,
            &[
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ],
            body,
        );

        // Roof overhangs the body by 10 on each side
        let roof = Rgba::from_f32(0.55, 0.0, 0.0);
        let eave_l = Point::new(x - 10.0, y + h);
        let eave_r = Point::new(x + w + 10.0, y + h);
        let ridge = Point::new(x + w / 2.0, y + h + h / 2.0);
        fill_transformed(fb, world, &[eave_l, eave_r, ridge], roof);

        dda_edge(fb, world, eave_l, ridge, Rgba::BLACK);
        dda_edge(fb, world, eave_r, ridge, Rgba::BLACK);

        let door = Rgba::from_f32(0.35, 0.20, 0.10);
        fill_transformed(
            fb,
            world,
            &[
                Point::new(x + w / 3.0, y),
                Point::new(x + w * 2.0 / 3.0, y),
                Point::new(x + w * 2.0 / 3.0, y + h / 2.0),
                Point::new(x + w / 3.0, y + h / 2.0),
            ],
            door,
        );

        let window = Rgba::from_f32(0.20, 0.60, 0.90);
        fill_transformed(
            fb,
            world,
            &[
                Point::new(x + 10.0, y + h - 30.0),
                Point::new(x + 35.0, y + h - 30.0),
                Point::new(x + 35.0, y + h - 5.0),
                Point::new(x + 10.0, y + h - 5.0),
            ],
            window,
        );
    }
}
