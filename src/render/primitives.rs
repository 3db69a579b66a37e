//! Primitive rendering functions.
//!
//! Implements the two classic rasterization algorithms the scene is built
//! on, plus the polygon fill used for every solid shape.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

// ============================================================================
// DDA Line
// ============================================================================

/// Rasterize a line segment with the DDA algorithm.
///
/// Returns the ordered sequence of pixel coordinates approximating the
/// segment, inclusive of both endpoints: `max(|dx|, |dy|) + 1` samples,
/// each rounded to the nearest integer. A zero-length segment yields the
/// single point.
#[must_use]
pub fn dda_line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![(x0, y0)];
    }

    let x_inc = dx as f32 / steps as f32;
    let y_inc = dy as f32 / steps as f32;

    let mut x = x0 as f32;
    let mut y = y0 as f32;
    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        points.push((x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }
    points
}

/// Draw a DDA-rasterized line into the framebuffer.
pub fn draw_dda_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    for (x, y) in dda_line_points(x0, y0, x1, y1) {
        plot(fb, x, y, color);
    }
}

// ============================================================================
// Midpoint Circle
// ============================================================================

/// Rasterize a circle circumference with the midpoint algorithm.
///
/// Starts at `x = 0, y = r` with decision variable `d = 1 - r` and emits
/// the 8 symmetric points per step until `x > y`. Octant-boundary points
/// appear more than once, as the raw algorithm emits them; a zero radius
/// yields the center point.
#[must_use]
pub fn midpoint_circle_points(cx: i32, cy: i32, r: i32) -> Vec<(i32, i32)> {
    if r <= 0 {
        return vec![(cx, cy)];
    }

    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;
    let mut points = Vec::new();

    while x <= y {
        points.push((cx + x, cy + y));
        points.push((cx - x, cy + y));
        points.push((cx + x, cy - y));
        points.push((cx - x, cy - y));
        points.push((cx + y, cy + x));
        points.push((cx - y, cy + x));
        points.push((cx + y, cy - x));
        points.push((cx - y, cy - x));

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    points
}

/// Draw a circle outline into the framebuffer.
pub fn draw_circle_outline(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32, color: Rgba) {
    for (x, y) in midpoint_circle_points(cx, cy, r) {
        plot(fb, x, y, color);
    }
}

/// Fill a disk by drawing concentric circle outlines from `r` down to 1.
///
/// This is an O(r²) approximation of a filled disk, not a scanline fill:
/// the multi-pass ring texture is part of the scene's look, and gaps at
/// very small radii (the center pixel among them) are a known limitation.
pub fn draw_disk_concentric(fb: &mut Framebuffer, cx: i32, cy: i32, r: i32, color: Rgba) {
    for rr in (1..=r).rev() {
        draw_circle_outline(fb, cx, cy, rr, color);
    }
}

// ============================================================================
// Polygon Fill
// ============================================================================

/// Fill a polygon with a scanline algorithm.
///
/// Vertices are taken in order, closing back to the first; scanlines are
/// sampled at pixel centers and spans filled between even-odd intersection
/// pairs. A translucent color is alpha-blended per pixel instead of
/// overwriting.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for v in vertices {
        min_y = min_y.min(v.y);
        max_y = max_y.max(v.y);
    }

    let min_y = (min_y.floor() as i32).max(0);
    let max_y = (max_y.ceil() as i32).min(fb.height() as i32 - 1);

    let n = vertices.len();
    let mut intersections: Vec<i32> = Vec::with_capacity(n);

    for y in min_y..=max_y {
        intersections.clear();
        let yf = y as f32 + 0.5;

        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];

            // Edge crosses this scanline (half-open to dodge double counts)
            if (a.y <= yf && b.y > yf) || (b.y <= yf && a.y > yf) {
                let x = a.x + (yf - a.y) / (b.y - a.y) * (b.x - a.x);
                intersections.push(x.round() as i32);
            }
        }

        intersections.sort_unstable();
        for pair in intersections.chunks_exact(2) {
            fill_span(fb, pair[0], pair[1], y, color);
        }
    }
}

/// Fill one horizontal span, clipped to the framebuffer.
#[inline]
fn fill_span(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 {
        return;
    }

    let x_start = x1.max(0);
    let x_end = x2.min(fb.width() as i32 - 1);
    if x_start > x_end {
        return;
    }

    if color.is_translucent() {
        for x in x_start..=x_end {
            fb.blend_pixel(x as u32, y as u32, color);
        }
    } else {
        fb.fill_rect(x_start as u32, y as u32, (x_end - x_start + 1) as u32, 1, color);
    }
}

/// Plot a single pixel with bounds checking.
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        fb.set_pixel(x as u32, y as u32, color);
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// DDA output is inclusive of both endpoints and has exactly
        /// max(|dx|, |dy|) + 1 samples.
        #[test]
        fn prop_dda_endpoints_and_length(
            x0 in -500i32..500,
            y0 in -500i32..500,
            x1 in -500i32..500,
            y1 in -500i32..500,
        ) {
            let points = dda_line_points(x0, y0, x1, y1);
            let steps = (x1 - x0).abs().max((y1 - y0).abs());

            prop_assert_eq!(points.len(), steps as usize + 1);
            prop_assert_eq!(points[0], (x0, y0));
            prop_assert_eq!(*points.last().expect("non-empty"), (x1, y1));
        }

        /// Consecutive DDA samples never jump more than one pixel on
        /// either axis.
        #[test]
        fn prop_dda_steps_are_connected(
            x0 in -200i32..200,
            y0 in -200i32..200,
            x1 in -200i32..200,
            y1 in -200i32..200,
        ) {
            let points = dda_line_points(x0, y0, x1, y1);
            for pair in points.windows(2) {
                prop_assert!((pair[1].0 - pair[0].0).abs() <= 1);
                prop_assert!((pair[1].1 - pair[0].1).abs() <= 1);
            }
        }

        /// Every circumference point lies within ±1 of the radius.
        #[test]
        fn prop_circle_points_near_radius(
            cx in -300i32..300,
            cy in -300i32..300,
            r in 1i32..150,
        ) {
            for (x, y) in midpoint_circle_points(cx, cy, r) {
                let dx = f64::from(x - cx);
                let dy = f64::from(y - cy);
                let dist = (dx * dx + dy * dy).sqrt();
                prop_assert!(
                    (dist - f64::from(r)).abs() <= 1.0,
                    "({}, {}) lies {} from center, radius {}", x, y, dist, r
                );
            }
        }

        /// The emitted point set is closed under the 8 reflections
        /// (x,y) ↔ (±x,±y) ↔ (±y,±x).
        #[test]
        fn prop_circle_eightfold_symmetry(r in 1i32..150) {
            let set: HashSet<(i32, i32)> =
                midpoint_circle_points(0, 0, r).into_iter().collect();

            for &(x, y) in &set {
                for mirrored in [
                    (x, -y), (-x, y), (-x, -y),
                    (y, x), (y, -x), (-y, x), (-y, -x),
                ] {
                    prop_assert!(set.contains(&mirrored));
                }
            }
        }
    }
}
