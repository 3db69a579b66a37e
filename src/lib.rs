//! # Aldea
//!
//! A CPU-rasterized, animated 2D village scene: sky, sun, hills, river,
//! houses, trees, a windmill, and a boat drifting down the river.
//!
//! The crate implements its own rasterization primitives — a DDA line
//! rasterizer and the integer midpoint circle algorithm — and places every
//! shape with explicit 2D affine transforms. Frames are composed into an
//! RGBA [`Framebuffer`](framebuffer::Framebuffer) and can be encoded as PNG.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aldea::prelude::*;
//!
//! let scene = VillageScene::new();
//! let mut state = SceneState::new();
//!
//! state.tick(scene.width() as f32);
//! let fb = scene.to_framebuffer(&state)?;
//! write_png(&fb, "frame.png")?;
//! ```
//!
//! The library is headless: any host loop can drive
//! [`SceneState::tick`](animation::SceneState::tick) and
//! [`VillageScene::render`](scene::VillageScene::render). The `aldea-frames`
//! binary is one such host, writing a PNG frame sequence at the nominal
//! 16 ms tick cadence.
//!
//! ## Algorithm References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." (midpoint circle family)
//! - Digital Differential Analyzer line rasterization, as presented in
//!   Hearn & Baker, *Computer Graphics*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and palette helpers.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives and 2D affine transforms.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives (DDA line, midpoint circle, polygon fill).
pub mod render;

/// Shape builders for the village scene.
pub mod shapes;

/// Scene composition and draw ordering.
pub mod scene;

/// Animation state advanced once per tick.
pub mod animation;

/// PNG output encoding.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for aldea operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use aldea::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::SceneState;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Transform};
    pub use crate::output::{encode_png, write_png};
    pub use crate::scene::VillageScene;
}

// ============================================================================
// Tests
// ============================================================================
