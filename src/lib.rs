//! # logobin - Thermal Printer Logo Converter
//!
//! logobin turns an arbitrary image into a `GS v 0` raster bit image command
//! for 384-dot (58mm) thermal printers. It provides:
//!
//! - **Normalization**: decode, grayscale and rescale to the printer width
//! - **Dithering**: Jarvis–Judice–Ninke error diffusion to black/white
//! - **Packing**: polarity inversion, 1-bit MSB-first rows, 8-byte header
//! - **Output**: one contiguous write of header + bitmap
//!
//! ## Quick Start
//!
//! ```no_run
//! use logobin::{LogoConfig, pipeline};
//!
//! let config = LogoConfig::new("Logo_in.png", "Logo.bin");
//! let image = pipeline::convert(&config, None)?;
//!
//! println!("{} rows, {} bytes", image.header.height, image.data.len());
//!
//! # Ok::<(), logobin::LogoError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Normalization, dithering, packing |
//! | [`protocol`] | Raster command header and builder |
//! | [`pipeline`] | End-to-end conversion |
//! | [`preview`] | Optional preview hook and PNG helpers |
//! | [`transport`] | Output sinks |
//! | [`printer`] | Printer hardware profile |
//! | [`config`] | Per-run configuration |
//! | [`error`] | Error types |

pub mod config;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use config::LogoConfig;
pub use error::LogoError;
pub use printer::PrinterConfig;
pub use protocol::graphics::{RasterHeader, RasterImage, ScaleMode};
