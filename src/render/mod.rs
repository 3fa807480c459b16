//! # Rendering Module
//!
//! Image preparation stages, in data-flow order.
//!
//! ## Modules
//!
//! - [`normalize`]: Decode, grayscale and rescale to the printer width
//! - [`dither`]: Jarvis–Judice–Ninke error diffusion to black/white
//! - [`bitmap`]: Polarity inversion and 1-bit packing
//!
//! ## Usage Example
//!
//! ```
//! use image::{DynamicImage, GrayImage, Luma};
//! use logobin::render::{bitmap::MonoBitmap, dither, normalize};
//!
//! let source = DynamicImage::ImageLuma8(GrayImage::from_pixel(100, 50, Luma([90])));
//!
//! let gray = normalize::normalize(&source, 384)?;
//! let bilevel = dither::dither(&gray);
//! let bitmap = MonoBitmap::from_gray(&bilevel)?;
//!
//! assert_eq!(bitmap.data.len(), 48 * 192);
//! # Ok::<(), logobin::LogoError>(())
//! ```

pub mod bitmap;
pub mod dither;
pub mod normalize;
