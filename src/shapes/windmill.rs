//! Windmill shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};

use super::fill_transformed;

/// Tower height; the hub and blades sit on top of it.
const TOWER_HEIGHT: f32 = 100.0;

/// Hub disk radius, approximated as a 12-gon.
const HUB_RADIUS: f32 = 6.0;

/// One blade in hub-local coordinates, pointing along +x.
const BLADE: [Point; 3] = [
    Point::new(6.0, 0.0),
    Point::new(140.0, 20.0),
    Point::new(140.0, -20.0),
];

/// A windmill: tower, hub, and three blades at 120° separation rotated
/// about the hub by the current blade angle.
#[derive(Debug, Clone, Copy)]
pub struct Windmill {
    x: f32,
    y: f32,
    blade_angle: f32,
}

impl Windmill {
    /// Create a windmill with its tower base centered at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            blade_angle: 0.0,
        }
    }

    /// Set the blade rotation angle in degrees.
    #[must_use]
    pub const fn blade_angle(mut self, degrees: f32) -> Self {
        self.blade_angle = degrees;
        self
    }

    /// Render the windmill through the scene transform.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let tower = Rgba::from_f32(0.80, 0.80, 0.80);
        fill_transformed(
            fb,
            world,
            &[
                Point::new(self.x - 10.0, self.y),
                Point::new(self.x + 10.0, self.y),
                Point::new(self.x + 10.0, self.y + TOWER_HEIGHT),
                Point::new(self.x - 10.0, self.y + TOWER_HEIGHT),
            ],
            tower,
        );

        let hub_center = Point::new(self.x, self.y + TOWER_HEIGHT);
        let hub = Rgba::from_f32(0.30, 0.30, 0.30);
        let ring: Vec<Point> = (0..12)
            .map(|i| {
                let rad = (i as f32 * 30.0).to_radians();
                Point::new(
                    hub_center.x + rad.cos() * HUB_RADIUS,
                    hub_center.y + rad.sin() * HUB_RADIUS,
                )
            })
            .collect();
        fill_transformed(fb, world, &ring, hub);

        let blade = Rgba::from_f32(0.95, 0.95, 0.95);
        for i in 0..3 {
            let angle = self.blade_angle + 120.0 * i as f32;
            let place = Transform::rotate_deg(angle)
                .then(Transform::translate(hub_center.x, hub_center.y))
                .then(*world);
            fill_transformed(fb, &place, &BLADE, blade);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windmill_tower_and_hub() {
        let mut fb = Framebuffer::new(700, 500).unwrap();
        fb.clear(Rgba::WHITE);
        Windmill::new(300.0, 100.0).render(&mut fb, &Transform::IDENTITY);

        assert_eq!(fb.get_pixel(300, 150), Some(Rgba::from_f32(0.80, 0.80, 0.80)));
        assert_eq!(fb.get_pixel(300, 200), Some(Rgba::from_f32(0.30, 0.30, 0.30)));
    }

    #[test]
    fn test_blades_follow_angle() {
        let blade = Rgba::from_f32(0.95, 0.95, 0.95);

        // Angle 0: one blade points along +x from the hub at (300, 200)
        let mut fb = Framebuffer::new(700, 500).unwrap();
        fb.clear(Rgba::WHITE);
        Windmill::new(300.0, 100.0).render(&mut fb, &Transform::IDENTITY);
        assert_eq!(fb.get_pixel(420, 200), Some(blade));

        // Rotated 90°: that blade now points along +y
        let mut fb = Framebuffer::new(700, 500).unwrap();
        fb.clear(Rgba::WHITE);
        Windmill::new(300.0, 100.0)
            .blade_angle(90.0)
            .render(&mut fb, &Transform::IDENTITY);
        assert_eq!(fb.get_pixel(300, 320), Some(blade));
        assert_eq!(fb.get_pixel(420, 200), Some(Rgba::WHITE));
    }
}
