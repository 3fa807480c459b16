//! # Raster Protocol Implementation
//!
//! Command builders for the `GS v 0` "print raster bit image" command
//! understood by ESC/POS-style 58mm thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Command prefix bytes and integer encoding
//! - [`graphics`]: Header, scale mode and full raster command
//!
//! ## Usage Example
//!
//! ```
//! use logobin::protocol::graphics::{RasterHeader, RasterImage, ScaleMode};
//!
//! let header = RasterHeader::new(ScaleMode::NORMAL, 384, 24)?;
//! let image = RasterImage::new(header, vec![0xAA; 48 * 24])?;
//!
//! // Send `image.to_bytes()` to the printer via any byte sink...
//! assert_eq!(image.to_bytes().len(), 8 + 48 * 24);
//! # Ok::<(), logobin::LogoError>(())
//! ```

pub mod commands;
pub mod graphics;
