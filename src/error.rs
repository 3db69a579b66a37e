//! Error types for aldea operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing or encoding frames.
///
/// The rasterizers and shape builders themselves have no failure modes:
/// out-of-bounds plotting clips silently. Errors arise only at the edges —
/// buffer allocation, composer/target mismatch, and PNG output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (frame file creation, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer, or a render target that does
    /// not match the scene dimensions.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
