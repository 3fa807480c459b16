//! # Printer Configuration
//!
//! This module defines hardware specifications for the target thermal printer.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Resolution | Bytes per row |
//! |-------|--------------|------------|---------------|
//! | Generic 58mm | 384 | 203 DPI | 48 |
//!
//! ## Usage
//!
//! ```
//! use logobin::printer::PrinterConfig;
//!
//! let config = PrinterConfig::THERMAL_58MM;
//! println!("Print width: {} dots ({} bytes)",
//!          config.width_dots,
//!          config.width_bytes);
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a thermal printer.
///
/// ## Physical Properties
///
/// - **width_dots**: Printable width in dots (pixels), always a multiple of 8
/// - **width_bytes**: Width in bytes (width_dots / 8)
/// - **dpi**: Resolution in dots per inch
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_mm = width_dots / dots_per_mm
///
/// For a 58mm printer:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   width_mm = 384 / 8 = 48mm
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Print width in dots (pixels)
    pub width_dots: u16,

    /// Print width in bytes (width_dots / 8)
    pub width_bytes: u16,

    /// Resolution in dots per inch
    pub dpi: u16,
}

impl PrinterConfig {
    /// # Generic 58mm Thermal Printer
    ///
    /// The common serial/TTL receipt printer found on hobby boards.
    ///
    /// ## Print Area
    ///
    /// ```text
    /// ├── 5mm ──┼──── 48mm printable ────┼── 5mm ──┤
    /// │ margin  │       384 dots         │ margin  │
    /// ```
    pub const THERMAL_58MM: Self = Self {
        name: "Generic 58mm",
        width_dots: 384,
        width_bytes: 48,
        dpi: 203,
    };

    /// Calculate dots per millimeter
    ///
    /// ## Example
    ///
    /// ```
    /// use logobin::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig::THERMAL_58MM;
    /// assert!((config.dots_per_mm() - 8.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Convert dots to millimeters
    #[inline]
    pub fn dots_to_mm(&self, dots: u32) -> f32 {
        dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::THERMAL_58MM
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_58mm_dimensions() {
        let config = PrinterConfig::THERMAL_58MM;
        assert_eq!(config.width_dots, 384);
        assert_eq!(config.width_bytes, 48);
        assert_eq!(config.width_dots, config.width_bytes * 8);
    }

    #[test]
    fn test_width_mm() {
        let config = PrinterConfig::THERMAL_58MM;
        // 384 dots / 8 dpmm = 48mm
        assert!((config.width_mm() - 48.0).abs() < 1.0);
    }

    #[test]
    fn test_dots_to_mm() {
        let config = PrinterConfig::THERMAL_58MM;
        // 80 dots ≈ 10mm
        assert!((config.dots_to_mm(80) - 10.0).abs() < 0.5);
    }

    #[test]
    fn test_default_is_58mm() {
        assert_eq!(PrinterConfig::default().name, PrinterConfig::THERMAL_58MM.name);
    }
}
