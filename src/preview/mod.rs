//! # Preview
//!
//! Optional observer for the dithered image, plus PNG helpers for looking at
//! what the printer will produce.
//!
//! The pipeline calls [`PreviewHook::on_dithered`] once, right after
//! dithering and before inversion. Tests and batch callers simply pass no
//! hook.
//!
//! ## Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use logobin::preview::to_png;
//!
//! let image = GrayImage::from_pixel(8, 8, Luma([255]));
//! let png = to_png(&image)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), logobin::LogoError>(())
//! ```

use std::fs;
use std::path::PathBuf;

use image::{GrayImage, ImageEncoder, Luma};
use log::info;

use crate::error::LogoError;
use crate::render::bitmap::MonoBitmap;

/// Observer invoked with the dithered (pre-inversion) image.
pub trait PreviewHook {
    fn on_dithered(&mut self, image: &GrayImage) -> Result<(), LogoError>;
}

/// Writes the dithered image to a PNG file.
#[derive(Debug, Clone)]
pub struct PngPreview {
    pub path: PathBuf,
}

impl PngPreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewHook for PngPreview {
    fn on_dithered(&mut self, image: &GrayImage) -> Result<(), LogoError> {
        fs::write(&self.path, to_png(image)?)?;
        info!("Preview saved to {}", self.path.display());
        Ok(())
    }
}

/// Encode a grayscale image as PNG bytes.
pub fn to_png(image: &GrayImage) -> Result<Vec<u8>, LogoError> {
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| LogoError::Preview(e.to_string()))?;
    Ok(png_bytes)
}

/// Unpack a 1-bit bitmap back into a viewable image (ink = black).
pub fn render_bitmap(bitmap: &MonoBitmap) -> GrayImage {
    let mut img = GrayImage::new(bitmap.width, bitmap.height);

    for y in 0..bitmap.height {
        for x in 0..bitmap.width {
            let color = if bitmap.is_set(x, y) == Some(true) { 0u8 } else { 255u8 };
            img.put_pixel(x, y, Luma([color]));
        }
    }

    img
}

// ============================================================================
// TESTS
// ============================================================================
