//! PNG import and export for the packed-colour canvas.
//!
//! Import truncates 8-bit channels to 5/6/5; export re-expands them.
//! Both directions validate fully before touching caller state.

use std::path::Path;

use image::{Rgb, RgbImage};
use log::debug;

use crate::canvas::PixelBuffer;
use crate::error::{PxedError, Result};
use crate::types::Rgb565;

/// Decode a PNG into a packed-colour buffer.
pub fn import(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| PxedError::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PxedError::ImageLoad {
            path: path.to_path_buf(),
            message: "image has no pixels".to_string(),
        });
    }

    let pixels: Vec<Rgb565> = img
        .pixels()
        .map(|p| Rgb565::from_rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    debug!("imported {}x{} PNG from {}", width, height, path.display());
    PixelBuffer::from_flat(&pixels, width, height)
}

/// Encode the buffer as an 8-bit RGB PNG.
pub fn export(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let mut img = RgbImage::new(buffer.width(), buffer.height());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let (r, g, b) = buffer.get(x, y)?.to_rgb();
        *pixel = Rgb([r, g, b]);
    }

    img.save(path).map_err(|e| PxedError::ImageSave {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(
        "exported {}x{} PNG to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
