//! # Image Loading and Normalization
//!
//! Decodes an input image, converts it to 8-bit grayscale and rescales it to
//! the printer's dot width. Aspect ratio is preserved:
//!
//! ```text
//! height_out = round(width_out × height_in / width_in)
//! ```

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader, imageops::FilterType};
use log::{debug, info};

use crate::error::LogoError;

/// Interpolation used when rescaling (bilinear).
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Open and decode an image file. The format is guessed from content.
pub fn load(path: &Path) -> Result<DynamicImage, LogoError> {
    let reader = ImageReader::open(path)
        .map_err(|e| LogoError::Load(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| LogoError::Load(format!("{}: {}", path.display(), e)))?;

    let image = reader
        .decode()
        .map_err(|e| LogoError::Load(format!("{}: {}", path.display(), e)))?;

    info!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Height after scaling `width × height` to `target_width`, rounded.
///
/// ```
/// use logobin::render::normalize::scaled_height;
///
/// assert_eq!(scaled_height(800, 600, 384)?, 288);
/// assert_eq!(scaled_height(1000, 333, 384)?, 128); // 127.87 rounds up
/// # Ok::<(), logobin::LogoError>(())
/// ```
///
/// ## Errors
///
/// [`LogoError::Dimension`] if the result does not fit in a `u32`.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> Result<u32, LogoError> {
    if width == 0 {
        return Ok(0);
    }
    let exact = target_width as u64 * height as u64;
    // round-half-up in integer arithmetic
    let rounded = (2 * exact + width as u64) / (2 * width as u64);
    u32::try_from(rounded).map_err(|_| {
        LogoError::Dimension(format!(
            "{}x{} scaled to width {} gives {} rows",
            width, height, target_width, rounded
        ))
    })
}

/// Convert to grayscale and rescale to `target_width`.
///
/// ## Errors
///
/// [`LogoError::EmptyImage`] if the source has no pixels, or if scaling
/// leaves zero rows or columns.
pub fn normalize(image: &DynamicImage, target_width: u32) -> Result<GrayImage, LogoError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(LogoError::EmptyImage { width, height });
    }

    let target_height = scaled_height(width, height, target_width)?;
    if target_width == 0 || target_height == 0 {
        return Err(LogoError::EmptyImage {
            width: target_width,
            height: target_height,
        });
    }

    let gray = image.to_luma8();
    debug!("Converted to grayscale");

    let resized = if (width, height) == (target_width, target_height) {
        gray
    } else {
        image::imageops::resize(&gray, target_width, target_height, RESIZE_FILTER)
    };
    debug!(
        "Resized {}x{} -> {}x{}",
        width, height, target_width, target_height
    );

    Ok(resized)
}

/// [`load`] followed by [`normalize`].
pub fn load_grayscale(path: &Path, target_width: u32) -> Result<GrayImage, LogoError> {
    let image = load(path)?;
    normalize(&image, target_width)
}

// ============================================================================
// TESTS
// ============================================================================
