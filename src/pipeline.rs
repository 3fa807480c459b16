//! # Conversion Pipeline
//!
//! Wires the stages together:
//!
//! ```text
//! file ─► load ─► normalize ─► dither ─► (preview) ─► invert + pack ─► header ─► emit
//! ```
//!
//! Everything is built in memory first; the output file is only created once
//! the whole command is ready.

use image::{DynamicImage, GrayImage};
use log::info;

use crate::config::LogoConfig;
use crate::error::LogoError;
use crate::preview::{PngPreview, PreviewHook};
use crate::protocol::graphics::{RasterHeader, RasterImage, ScaleMode};
use crate::render::{bitmap::MonoBitmap, dither, normalize};
use crate::transport::FileTransport;

/// Dither, invert and pack an already-normalized grayscale image.
///
/// The header is validated before any work so bad dimensions fail fast.
pub fn rasterize(
    gray: &GrayImage,
    mode: ScaleMode,
    preview: Option<&mut dyn PreviewHook>,
) -> Result<RasterImage, LogoError> {
    let header = RasterHeader::new(mode, gray.width(), gray.height())?;

    info!("Commencing dithering...");
    let bilevel = dither::dither(gray);
    info!("Done dithering");

    if let Some(hook) = preview {
        hook.on_dithered(&bilevel)?;
    }

    let bitmap = MonoBitmap::from_gray(&bilevel)?;
    RasterImage::new(header, bitmap.data)
}

/// Normalize a decoded image to `config.target_width` and rasterize it.
pub fn render(
    image: &DynamicImage,
    config: &LogoConfig,
    preview: Option<&mut dyn PreviewHook>,
) -> Result<RasterImage, LogoError> {
    let gray = normalize::normalize(image, config.target_width)?;
    rasterize(&gray, config.scale_mode(), preview)
}

/// Full run: read `config.input_path`, write `config.output_path`.
pub fn convert(
    config: &LogoConfig,
    preview: Option<&mut dyn PreviewHook>,
) -> Result<RasterImage, LogoError> {
    info!(
        "Processing image: {} and saving to {}",
        config.input_path.display(),
        config.output_path.display()
    );

    let source = normalize::load(&config.input_path)?;
    let image = render(&source, config, preview)?;

    FileTransport::create(&config.output_path)?.send(&image)?;
    Ok(image)
}

/// [`convert`] with a PNG preview when `config.preview_path` is set.
pub fn run(config: &LogoConfig) -> Result<RasterImage, LogoError> {
    match &config.preview_path {
        Some(path) => {
            let mut hook = PngPreview::new(path);
            convert(config, Some(&mut hook))
        }
        None => convert(config, None),
    }
}

// ============================================================================
// TESTS
// ============================================================================
