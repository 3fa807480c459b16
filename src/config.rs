//! # Job Configuration
//!
//! [`LogoConfig`] carries everything a single conversion run needs. It is
//! built once (by the CLI or by library callers) and passed by reference
//! into [`crate::pipeline`].
//!
//! ```
//! use logobin::LogoConfig;
//!
//! let config = LogoConfig::new("logo.png", "logo.bin").double_height(true);
//! assert_eq!(config.target_width, 384);
//! assert_eq!(config.scale_mode().code(), 0b10);
//! ```

use std::path::PathBuf;

use crate::printer::PrinterConfig;
use crate::protocol::graphics::ScaleMode;

/// Default input file name
pub const DEFAULT_INPUT: &str = "Logo_in.png";

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "Logo.bin";

/// Configuration for one image → raster conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoConfig {
    /// Image to read (any format the `image` crate decodes)
    pub input_path: PathBuf,

    /// Where the header + bitmap blob is written
    pub output_path: PathBuf,

    /// Output width in dots; must be a multiple of 8
    pub target_width: u32,

    /// Ask the printer to double each dot horizontally
    pub double_width: bool,

    /// Ask the printer to double each dot vertically
    pub double_height: bool,

    /// Optional PNG snapshot of the dithered image
    pub preview_path: Option<PathBuf>,
}

impl LogoConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn target_width(mut self, width: u32) -> Self {
        self.target_width = width;
        self
    }

    pub fn double_width(mut self, on: bool) -> Self {
        self.double_width = on;
        self
    }

    pub fn double_height(mut self, on: bool) -> Self {
        self.double_height = on;
        self
    }

    pub fn preview_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview_path = Some(path.into());
        self
    }

    /// Scaling flags as they appear in the raster header
    pub fn scale_mode(&self) -> ScaleMode {
        ScaleMode {
            double_width: self.double_width,
            double_height: self.double_height,
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            target_width: PrinterConfig::THERMAL_58MM.width_dots as u32,
            double_width: false,
            double_height: false,
            preview_path: None,
        }
    }
}
