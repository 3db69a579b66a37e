//! Boat shape builder.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};

use super::{dda_edge, fill_transformed};

/// Hull quad in boat-local coordinates (waterline at y = 20).
const HULL: [Point; 4] = [
    Point::new(-60.0, 40.0),
    Point::new(60.0, 40.0),
    Point::new(40.0, 20.0),
    Point::new(-40.0, 20.0),
];

const CABIN: [Point; 4] = [
    Point::new(-20.0, 50.0),
    Point::new(20.0, 50.0),
    Point::new(20.0, 75.0),
    Point::new(-20.0, 75.0),
];

const SAIL: [Point; 3] = [
    Point::new(0.0, 100.0),
    Point::new(40.0, 80.0),
    Point::new(0.0, 60.0),
];

/// Reflection opacity (40%).
const REFLECTION_ALPHA: u8 = 102;

/// The boat, built in local coordinates; the composer supplies the world
/// position as a translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boat;

impl Boat {
    /// Create a boat.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render hull, cabin, mast, sail, and gunwale line.
    pub fn render(&self, fb: &mut Framebuffer, world: &Transform) {
        let hull = Rgba::from_f32(0.55, 0.27, 0.07);
        fill_transformed(fb, world, &HULL, hull);

        let cabin = Rgba::from_f32(0.80, 0.10, 0.10);
        fill_transformed(fb, world, &CABIN, cabin);

        let mast = Rgba::from_f32(0.35, 0.20, 0.10);
        dda_edge(fb, world, Point::new(0.0, 75.0), Point::new(0.0, 100.0), mast);

        fill_transformed(fb, world, &SAIL, Rgba::WHITE);

        // Gunwale decoration line along the top of the hull
        dda_edge(
            fb,
            world,
            Point::new(-60.0, 40.0),
            Point::new(60.0, 40.0),
            Rgba::BLACK,
        );
    }

    /// Render the boat's water reflection: the hull polygon only, blended
    /// at 40% opacity. The caller's transform carries the vertical mirror
    /// and offset; cabin, mast, and sail are deliberately not mirrored.
    pub fn render_reflection(&self, fb: &mut Framebuffer, world: &Transform) {
        let ghost = Rgba::from_f32(0.55, 0.27, 0.07).with_alpha(REFLECTION_ALPHA);
        fill_transformed(fb, world, &HULL, ghost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_parts() {
        let mut fb = Framebuffer::new(300, 200).unwrap();
        fb.clear(Rgba::WHITE);
        Boat::new().render(&mut fb, &Transform::translate(150.0, 0.0));

        // Hull midship
        assert_eq!(fb.get_pixel(150, 30), Some(Rgba::from_f32(0.55, 0.27, 0.07)));
        // Cabin
        assert_eq!(fb.get_pixel(150, 60), Some(Rgba::from_f32(0.80, 0.10, 0.10)));
        // Sail interior, right of the mast
        assert_eq!(fb.get_pixel(160, 80), Some(Rgba::WHITE));
        // Gunwale line caps the hull in black
        assert_eq!(fb.get_pixel(150, 40), Some(Rgba::BLACK));
    }

    #[test]
    fn test_reflection_blends_hull_only() {
        let mut fb = Framebuffer::new(300, 200).unwrap();
        fb.clear(Rgba::WHITE);

        // Mirror about y = 0, then lift by 100 so the ghost stays in frame
        let tf = Transform::scale(1.0, -1.0).then(Transform::translate(150.0, 100.0));
        Boat::new().render_reflection(&mut fb, &tf);

        // Mirrored hull interior: blended, neither white nor full hull color
        let px = fb.get_pixel(150, 70).unwrap();
        assert!(px.r < 255 && px.r > 140);
        // Where the mirrored cabin would sit there is nothing
        assert_eq!(fb.get_pixel(150, 40), Some(Rgba::WHITE));
    }
}
