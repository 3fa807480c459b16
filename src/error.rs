//! # Error Types
//!
//! This module defines error types used throughout the logobin library.

use thiserror::Error;

/// Main error type for logobin operations
#[derive(Debug, Error)]
pub enum LogoError {
    /// Input image is missing or could not be decoded
    #[error("Load error: {0}")]
    Load(String),

    /// Decoded (or rescaled) image has no pixels
    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Dimensions cannot be packed or encoded in the raster header
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Bytes do not form a valid raster command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Preview hook failed
    #[error("Preview error: {0}")]
    Preview(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
