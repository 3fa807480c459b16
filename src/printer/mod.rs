//! # Printer Module
//!
//! Hardware profile of the target printer.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware specifications

pub mod config;

pub use config::PrinterConfig;
