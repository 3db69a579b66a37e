//! Scene composition and draw ordering.
//!
//! [`VillageScene`] produces one complete frame: every shape is rebuilt
//! from constants and drawn back-to-front, with no depth testing. Scene
//! coordinates have their origin at the bottom-left; the device transform
//! composed in front of every placement flips Y onto the row-major
//! framebuffer.

use crate::animation::SceneState;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};
use crate::render::fill_polygon;
use crate::shapes::{Boat, Cloud, House, River, Sun, Tree, Windmill};

/// The fixed-composition village scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct VillageScene;

impl VillageScene {
    /// Scene width in pixels.
    pub const WIDTH: u32 = 800;
    /// Scene height in pixels.
    pub const HEIGHT: u32 = 600;

    /// Create the scene.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Scene width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        Self::WIDTH
    }

    /// Scene height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        Self::HEIGHT
    }

    /// Map scene coordinates (origin bottom-left) onto framebuffer rows.
    fn device() -> Transform {
        Transform::scale(1.0, -1.0).then(Transform::translate(0.0, Self::HEIGHT as f32 - 1.0))
    }

    /// Render one complete frame into `fb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `fb` does not match the
    /// scene dimensions.
    pub fn render(&self, state: &SceneState, fb: &mut Framebuffer) -> Result<()> {
        if fb.width() != Self::WIDTH || fb.height() != Self::HEIGHT {
            return Err(Error::InvalidDimensions {
                width: fb.width(),
                height: fb.height(),
            });
        }

        let device = Self::device();
        let w = Self::WIDTH as f32;
        let h = Self::HEIGHT as f32;

        fb.clear(Rgba::from_f32(0.50, 0.80, 0.95));

        // Sky over the upper half
        fill_polygon(
            fb,
            &device.apply_all(&[
                Point::new(0.0, h),
                Point::new(w, h),
                Point::new(w, 300.0),
                Point::new(0.0, 300.0),
            ]),
            Rgba::from_f32(0.53, 0.81, 0.98),
        );

        Sun::new(680.0, 520.0, 40).render(fb, &device);

        // Clouds drift together
        let cloud_drift = Transform::translate(state.cloud_x, 0.0).then(device);
        Cloud::new(120.0, 520.0).render(fb, &cloud_drift);
        Cloud::new(260.0, 560.0).render(fb, &cloud_drift);

        // Distant hills
        let hill = Rgba::from_f32(0.22, 0.47, 0.20);
        fill_polygon(
            fb,
            &device.apply_all(&[
                Point::new(0.0, 300.0),
                Point::new(200.0, 380.0),
                Point::new(350.0, 300.0),
            ]),
            hill,
        );
        fill_polygon(
            fb,
            &device.apply_all(&[
                Point::new(300.0, 300.0),
                Point::new(450.0, 420.0),
                Point::new(600.0, 300.0),
            ]),
            hill,
        );

        River::new(w).render(fb, &device);

        // Grass bank between river and horizon
        fill_polygon(
            fb,
            &device.apply_all(&[
                Point::new(0.0, 300.0),
                Point::new(w, 300.0),
                Point::new(w, 160.0),
                Point::new(0.0, 160.0),
            ]),
            Rgba::from_f32(0.20, 0.70, 0.20),
        );

        House::new(70.0, 180.0, 110.0, 90.0).render(fb, &device);
        House::new(220.0, 190.0, 100.0, 80.0).render(fb, &device);
        House::new(360.0, 185.0, 120.0, 90.0).render(fb, &device);

        Tree::new(520.0, 180.0).scale(0.9).render(fb, &device);
        Tree::new(620.0, 170.0).scale(0.7).render(fb, &device);
        Tree::new(720.0, 170.0).scale(0.8).render(fb, &device);

        Windmill::new(470.0, 180.0)
            .blade_angle(state.blade_angle)
            .render(fb, &device);

        let boat = Boat::new();
        boat.render(fb, &Transform::translate(state.boat_x, 0.0).then(device));

        // Mirror image under the waterline; lands mostly below the frame
        // and clips there, exactly like the composition it reproduces
        let mirror = Transform::scale(1.0, -1.0)
            .then(Transform::translate(state.boat_x, 10.0))
            .then(device);
        boat.render_reflection(fb, &mirror);

        Ok(())
    }

    /// Allocate a framebuffer and render one frame into it.
    ///
    /// # Errors
    ///
    /// Returns an error if allocation fails.
    pub fn to_framebuffer(&self, state: &SceneState) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(Self::WIDTH, Self::HEIGHT)?;
        self.render(state, &mut fb)?;
        Ok(fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Probe a pixel by scene coordinates (origin bottom-left).
    fn probe(fb: &Framebuffer, x: u32, y: u32) -> Rgba {
        fb.get_pixel(x, VillageScene::HEIGHT - 1 - y)
            .expect("probe in bounds")
    }

    #[test]
    fn test_render_rejects_mismatched_buffer() {
        let scene = VillageScene::new();
        let mut fb = Framebuffer::new(100, 100).unwrap();
        let result = scene.render(&SceneState::new(), &mut fb);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions {
                width: 100,
                height: 100
            })
        ));
    }

    #[test]
    fn test_static_backdrop() {
        let fb = VillageScene::new()
            .to_framebuffer(&SceneState::new())
            .unwrap();

        // Sky band
        assert_eq!(probe(&fb, 400, 550), Rgba::from_f32(0.53, 0.81, 0.98));
        // Open water
        assert_eq!(probe(&fb, 400, 50), Rgba::from_f32(0.07, 0.53, 0.75));
        // Grass, clear of houses and trees
        assert_eq!(probe(&fb, 30, 290), Rgba::from_f32(0.20, 0.70, 0.20));
        // First hill peak region
        assert_eq!(probe(&fb, 200, 370), Rgba::from_f32(0.22, 0.47, 0.20));
        // Sun ring
        assert_eq!(probe(&fb, 700, 520), Rgba::from_f32(1.0, 0.85, 0.0));
    }

    #[test]
    fn test_village_fixtures() {
        let fb = VillageScene::new()
            .to_framebuffer(&SceneState::new())
            .unwrap();

        // First house body
        assert_eq!(probe(&fb, 90, 200), Rgba::from_f32(0.78, 0.60, 0.40));
        // Windmill tower
        assert_eq!(probe(&fb, 470, 200), Rgba::from_f32(0.80, 0.80, 0.80));
        // Tree canopy above the third trunk
        assert_eq!(probe(&fb, 720, 230), Rgba::from_f32(0.13, 0.55, 0.13));
    }

    #[test]
    fn test_boat_follows_state() {
        let mut state = SceneState::new();
        state.boat_x = 400.0;

        let fb = VillageScene::new().to_framebuffer(&state).unwrap();
        // Hull midship at the boat's translated position
        assert_eq!(probe(&fb, 400, 30), Rgba::from_f32(0.55, 0.27, 0.07));
        // Cabin above it
        assert_eq!(probe(&fb, 400, 60), Rgba::from_f32(0.80, 0.10, 0.10));

        // Fresh state leaves the boat off-screen to the left
        let fb = VillageScene::new()
            .to_framebuffer(&SceneState::new())
            .unwrap();
        assert_eq!(probe(&fb, 400, 30), Rgba::from_f32(0.07, 0.53, 0.75));
    }

    #[test]
    fn test_clouds_follow_state() {
        let mut state = SceneState::new();
        state.cloud_x = 0.0;

        let fb = VillageScene::new().to_framebuffer(&state).unwrap();
        // Rightmost point of the first cloud's main lobe (120 + 22, 520)
        assert_eq!(probe(&fb, 142, 520), Rgba::WHITE);
    }
}
