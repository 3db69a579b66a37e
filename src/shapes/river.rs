//! River shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};

use super::{dda_edge, fill_transformed};

/// The river: a filled quad across the bottom of the scene with two
/// DDA-rasterized bank edges. The far bank slopes from 160 down to 130.
#[derive(Debug, Clone, Copy)]
pub struct River {
    width: f32,
}

impl River {
    /// Create a river spanning the scene width.
    #[must_use]
    pub const fn new(width: f32) -> Self {
        Self { width }
    }

    /// Render the river through the scene transform.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let w = self.width;

        let water = Rgba::from_f32(0.07, 0.53, 0.75);
        fill_transformed(
            fb,
            world,
            &[
                Point::new(0.0, 160.0),
                Point::new(w, 130.0),
                Point::new(w, 0.0),
                Point::new(0.0, 0.0),
            ],
            water,
        );

        let bank = Rgba::from_f32(0.0, 0.30, 0.20);
        dda_edge(fb, world, Point::new(0.0, 160.0), Point::new(w, 130.0), bank);
        dda_edge(fb, world, Point::new(0.0, 0.0), Point::new(w, 0.0), bank);
    }
}
