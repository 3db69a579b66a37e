//! Rasterization primitives.
//!
//! # Algorithms
//!
//! - **DDA Line**: incremental line rasterization advancing by constant
//!   per-step deltas, endpoints inclusive
//! - **Midpoint Circle**: integer-arithmetic circle rasterization using
//!   8-way symmetry
//! - **Scanline Polygon Fill**: even-odd span fill with optional alpha
//!   blending
//!
//! The point-emitting variants (`dda_line_points`, `midpoint_circle_points`)
//! expose the raw pixel sequences; the `draw_*` wrappers plot them into a
//! [`Framebuffer`](crate::framebuffer::Framebuffer), clipping silently at
//! the buffer edges.

mod primitives;

pub use primitives::{
    dda_line_points, draw_circle_outline, draw_dda_line, draw_disk_concentric, fill_polygon,
    midpoint_circle_points,
};
