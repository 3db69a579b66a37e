//! Animation state advanced once per tick.
//!
//! Three scalars drive everything that moves: the boat and cloud offsets
//! and the windmill blade angle. A tick advances all three by fixed
//! increments — there is no delta-time scaling, so the animation rate is
//! tied to the tick period the driver chooses.

/// Nominal tick period in milliseconds (≈60 updates per second).
pub const TICK_MILLIS: u64 = 16;

/// Boat drift per tick, in pixels.
const BOAT_SPEED: f32 = 1.5;

/// Cloud drift per tick, in pixels.
const CLOUD_SPEED: f32 = 0.6;

/// Blade rotation per tick, in degrees.
const BLADE_STEP: f32 = 4.0;

/// Mutable animation state, owned by the driver.
///
/// Mutated only by [`tick`](SceneState::tick); the composer reads it and
/// never writes. After every tick `blade_angle` is in `[0, 360)`, and the
/// two offsets wrap to fixed restart positions once past the
/// width-relative bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneState {
    /// Boat translation along x; starts left of the frame.
    pub boat_x: f32,
    /// Cloud translation along x.
    pub cloud_x: f32,
    /// Windmill blade rotation in degrees, `[0, 360)`.
    pub blade_angle: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    /// Create the initial animation state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boat_x: -200.0,
            cloud_x: -100.0,
            blade_angle: 0.0,
        }
    }

    /// Advance one tick.
    ///
    /// `scene_width` keeps the wrap bounds screen-relative: each offset
    /// resets once it passes `scene_width + 200`.
    pub fn tick(&mut self, scene_width: f32) {
        self.boat_x += BOAT_SPEED;
        if self.boat_x > scene_width + 200.0 {
            self.boat_x = -300.0;
        }

        self.cloud_x += CLOUD_SPEED;
        if self.cloud_x > scene_width + 200.0 {
            self.cloud_x = -400.0;
        }

        self.blade_angle += BLADE_STEP;
        if self.blade_angle >= 360.0 {
            self.blade_angle -= 360.0;
        }
    }
}
