//! PNG output encoding.
//!
//! Pure Rust PNG encoding of composed frames using the `png` crate.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Encode a framebuffer as PNG into any writer.
fn encode_into<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    // Compact pixels strip the row stride padding
    writer.write_image_data(&fb.to_compact_pixels())?;
    Ok(())
}

/// Write a framebuffer to a PNG file.
///
/// # Errors
///
/// Returns an error if file creation or PNG encoding fails.
pub fn write_png<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path)?;
    encode_into(fb, BufWriter::new(file))
}

/// Encode a framebuffer to PNG bytes in memory.
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode_png(fb: &Framebuffer) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_into(fb, &mut buffer)?;
    Ok(buffer)
}
