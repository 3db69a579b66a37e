//! Shape builders for the village scene.
//!
//! Each builder is a pure emitter: a fixed set of filled polygons and
//! DDA-rasterized edges, parameterized by position/scale where the shape
//! calls for it. Placement happens through an explicit [`Transform`]
//! supplied by the composer; builders compose their own local placement
//! in front of it. None of them hold state or can fail.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Transform};
use crate::render::{draw_dda_line, fill_polygon};

mod boat;
mod cloud;
mod house;
mod river;
mod sun;
mod tree;
mod windmill;

pub use boat::Boat;
pub use cloud::Cloud;
pub use house::House;
pub use river::River;
pub use sun::Sun;
pub use tree::Tree;
pub use windmill::Windmill;

/// Fill a polygon after running its vertices through a transform.
pub(crate) fn fill_transformed(
    fb: &mut Framebuffer,
    tf: &Transform,
    vertices: &[Point],
    color: Rgba,
) {
    fill_polygon(fb, &tf.apply_all(vertices), color);
}

/// Draw a DDA edge between two transformed points.
///
/// Endpoints are rounded to integers after the transform so the rasterizer
/// stays integer-native.
pub(crate) fn dda_edge(fb: &mut Framebuffer, tf: &Transform, a: Point, b: Point, color: Rgba) {
    let a = tf.apply(a);
    let b = tf.apply(b);
    draw_dda_line(
        fb,
        a.x.round() as i32,
        a.y.round() as i32,
        b.x.round() as i32,
        b.y.round() as i32,
        color,
    );
}
