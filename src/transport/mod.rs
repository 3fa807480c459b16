//! # Output Transport Layer
//!
//! This module delivers finished raster commands to a byte sink.
//!
//! ## Available Transports
//!
//! - [`file`]: Plain file or device node
//!
//! Any [`std::io::Write`] works with [`file::emit`].

pub mod file;

pub use file::{FileTransport, emit};
