//! # Raster Bit Image Command (GS v 0)
//!
//! This module builds and decodes the single graphics command logobin emits.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal, 384 dots)
//!   │
//!   │   ████████  ← Each dot is ~0.125mm (203 DPI)
//!   │   ████████
//!   ▼
//!   Y (vertical, paper feed direction)
//! ```
//!
//! ## Bit Packing
//!
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use log::warn;

use super::commands::{RASTER_PREFIX, u16_from_le, u16_le};
use crate::error::LogoError;

/// Size of the fixed header preceding the bitmap
pub const HEADER_LEN: usize = 8;

/// Widest row (in bytes) that single-pass printers reliably accept.
/// Wider rows still encode through xH.
pub const SINGLE_PASS_MAX_WIDTH_BYTES: u16 = 255;

// ============================================================================
// SCALE MODE
// ============================================================================

/// Dot doubling flags carried in the header's `m` byte.
///
/// | code | Mode |
/// |------|------|
/// | 0 | Normal |
/// | 1 | Double width |
/// | 2 | Double height |
/// | 3 | Quadruple (both) |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleMode {
    pub double_width: bool,
    pub double_height: bool,
}

impl ScaleMode {
    pub const NORMAL: Self = Self {
        double_width: false,
        double_height: false,
    };

    /// Mode byte: bit0 = double width, bit1 = double height
    #[inline]
    pub const fn code(self) -> u8 {
        (self.double_width as u8) | (self.double_height as u8) << 1
    }

    /// Inverse of [`ScaleMode::code`]; rejects codes above 3.
    pub fn from_code(code: u8) -> Result<Self, LogoError> {
        if code > 0b11 {
            return Err(LogoError::InvalidCommand(format!(
                "Unknown raster mode code {:#04x}",
                code
            )));
        }
        Ok(Self {
            double_width: code & 0b01 != 0,
            double_height: code & 0b10 != 0,
        })
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// # Raster Header (GS v 0 m xL xH yL yH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Scale mode code (see [`ScaleMode`])
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height
///
/// ```text
/// width_bytes = xL + (xH × 256)
/// height_dots = yL + (yH × 256)
///
/// Example: 384 dots = 48 bytes = [0x30, 0x00]
/// Example: 300 rows = [0x2C, 0x01]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterHeader {
    pub mode: ScaleMode,
    pub width_bytes: u16,
    pub height: u16,
}

impl RasterHeader {
    /// Build a header for an image `width_dots` × `height`.
    ///
    /// ## Errors
    ///
    /// [`LogoError::Dimension`] when the width is not a multiple of 8, when
    /// either dimension is zero, or when width_bytes / height overflow 16 bits.
    ///
    /// ## Example
    ///
    /// ```
    /// use logobin::protocol::graphics::{RasterHeader, ScaleMode};
    ///
    /// let header = RasterHeader::new(ScaleMode::NORMAL, 384, 100)?;
    /// assert_eq!(header.to_bytes(), [0x1D, 0x76, 0x30, 0x00, 0x30, 0x00, 0x64, 0x00]);
    /// # Ok::<(), logobin::LogoError>(())
    /// ```
    pub fn new(mode: ScaleMode, width_dots: u32, height: u32) -> Result<Self, LogoError> {
        if width_dots % 8 != 0 {
            return Err(LogoError::Dimension(format!(
                "Width {} is not a multiple of 8",
                width_dots
            )));
        }
        if width_dots == 0 || height == 0 {
            return Err(LogoError::Dimension(format!(
                "Raster {}x{} has no pixels",
                width_dots, height
            )));
        }

        let width_bytes = u16::try_from(width_dots / 8).map_err(|_| {
            LogoError::Dimension(format!(
                "Width {} dots exceeds {} bytes per row",
                width_dots,
                u16::MAX
            ))
        })?;
        let height = u16::try_from(height).map_err(|_| {
            LogoError::Dimension(format!("Height {} exceeds {} rows", height, u16::MAX))
        })?;

        if width_bytes > SINGLE_PASS_MAX_WIDTH_BYTES {
            warn!(
                "Row width of {} bytes needs xH > 0; many printers only accept up to {}",
                width_bytes, SINGLE_PASS_MAX_WIDTH_BYTES
            );
        }

        Ok(Self {
            mode,
            width_bytes,
            height,
        })
    }

    /// Width in dots (width_bytes × 8)
    #[inline]
    pub fn width_dots(&self) -> u32 {
        self.width_bytes as u32 * 8
    }

    /// Number of bitmap bytes that must follow this header
    #[inline]
    pub fn data_len(&self) -> usize {
        self.width_bytes as usize * self.height as usize
    }

    /// Serialize as the 8 header bytes
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let [xl, xh] = u16_le(self.width_bytes);
        let [yl, yh] = u16_le(self.height);
        let [p0, p1, p2] = RASTER_PREFIX;
        [p0, p1, p2, self.mode.code(), xl, xh, yl, yh]
    }

    /// Decode the header at the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<Self, LogoError> {
        if bytes.len() < HEADER_LEN {
            return Err(LogoError::InvalidCommand(format!(
                "Expected at least {} header bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }
        if bytes[..3] != RASTER_PREFIX {
            return Err(LogoError::InvalidCommand(format!(
                "Not a GS v 0 command: {:02X} {:02X} {:02X}",
                bytes[0], bytes[1], bytes[2]
            )));
        }

        Ok(Self {
            mode: ScaleMode::from_code(bytes[3])?,
            width_bytes: u16_from_le(bytes[4], bytes[5]),
            height: u16_from_le(bytes[6], bytes[7]),
        })
    }
}

// ============================================================================
// FULL COMMAND
// ============================================================================

/// A complete raster command: header plus packed bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub header: RasterHeader,
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Pair a header with its bitmap, checking the payload length.
    pub fn new(header: RasterHeader, data: Vec<u8>) -> Result<Self, LogoError> {
        if data.len() != header.data_len() {
            return Err(LogoError::Dimension(format!(
                "Bitmap length mismatch. Expected {} ({} bytes × {} rows), got {}",
                header.data_len(),
                header.width_bytes,
                header.height,
                data.len()
            )));
        }
        Ok(Self { header, data })
    }

    /// Total command length in bytes, header included.
    #[inline]
    pub fn byte_len(&self) -> usize {
        HEADER_LEN + self.data.len()
    }

    /// Header followed by bitmap, no delimiters
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut cmd = Vec::with_capacity(self.byte_len());
        cmd.extend_from_slice(&self.header.to_bytes());
        cmd.extend_from_slice(&self.data);
        cmd
    }

    /// Decode a complete blob as produced by [`RasterImage::to_bytes`].
    pub fn parse(bytes: &[u8]) -> Result<Self, LogoError> {
        let header = RasterHeader::parse(bytes)?;
        Self::new(header, bytes[HEADER_LEN..].to_vec())
    }
}

/// # Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
///
/// Convenience wrapper building the full command bytes in one call.
///
/// ## Example
///
/// ```
/// use logobin::protocol::graphics::{self, ScaleMode};
///
/// let data = vec![0xAA; 48 * 100]; // Vertical stripes
/// let cmd = graphics::raster(ScaleMode::NORMAL, 384, 100, &data)?;
///
/// assert_eq!(&cmd[0..3], &[0x1D, 0x76, 0x30]);
/// assert_eq!(cmd[4], 48);  // xL
/// assert_eq!(cmd[6], 100); // yL
/// assert_eq!(cmd.len(), 8 + 48 * 100);
/// # Ok::<(), logobin::LogoError>(())
/// ```
pub fn raster(
    mode: ScaleMode,
    width_dots: u32,
    height: u32,
    data: &[u8],
) -> Result<Vec<u8>, LogoError> {
    let header = RasterHeader::new(mode, width_dots, height)?;
    Ok(RasterImage::new(header, data.to_vec())?.to_bytes())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scale_mode_codes() {
        assert_eq!(ScaleMode::NORMAL.code(), 0);
        let wide = ScaleMode {
            double_width: true,
            double_height: false,
        };
        let tall = ScaleMode {
            double_width: false,
            double_height: true,
        };
        let both = ScaleMode {
            double_width: true,
            double_height: true,
        };
        assert_eq!(wide.code(), 1);
        assert_eq!(tall.code(), 2);
        assert_eq!(both.code(), 3);
        assert_eq!(ScaleMode::from_code(3).unwrap(), both);
        assert!(ScaleMode::from_code(4).is_err());
    }

    #[test]
    fn test_header_384x100() {
        let header = RasterHeader::new(ScaleMode::NORMAL, 384, 100).unwrap();
        assert_eq!(
            header.to_bytes(),
            [0x1D, 0x76, 0x30, 0x00, 0x30, 0x00, 0x64, 0x00]
        );
    }

    #[test]
    fn test_header_large_height() {
        // 500 = 0x01F4 -> [0xF4, 0x01]
        let header = RasterHeader::new(ScaleMode::NORMAL, 384, 500).unwrap();
        let bytes = header.to_bytes();
        assert_eq!(bytes[6], 0xF4);
        assert_eq!(bytes[7], 0x01);
    }

    #[test]
    fn test_header_wide_rows_use_xh() {
        // 2048 dots = 256 bytes -> xL = 0, xH = 1
        let header = RasterHeader::new(ScaleMode::NORMAL, 2048, 1).unwrap();
        let bytes = header.to_bytes();
        assert_eq!(bytes[4], 0x00);
        assert_eq!(bytes[5], 0x01);
    }

    #[test]
    fn test_header_mode_byte() {
        let mode = ScaleMode {
            double_width: true,
            double_height: true,
        };
        let header = RasterHeader::new(mode, 384, 10).unwrap();
        assert_eq!(header.to_bytes()[3], 3);
    }

    #[test]
    fn test_width_not_multiple_of_8() {
        let err = RasterHeader::new(ScaleMode::NORMAL, 385, 10).unwrap_err();
        assert!(matches!(err, LogoError::Dimension(_)));
    }

    #[test]
    fn test_dimensions_out_of_range() {
        let too_tall = RasterHeader::new(ScaleMode::NORMAL, 384, 65_536);
        assert!(matches!(too_tall, Err(LogoError::Dimension(_))));

        let too_wide = RasterHeader::new(ScaleMode::NORMAL, 8 * 65_536, 1);
        assert!(matches!(too_wide, Err(LogoError::Dimension(_))));

        let empty = RasterHeader::new(ScaleMode::NORMAL, 384, 0);
        assert!(matches!(empty, Err(LogoError::Dimension(_))));
    }

    #[test]
    fn test_header_parse() {
        let bytes = [0x1D, 0x76, 0x30, 0x02, 0x30, 0x00, 0x2C, 0x01];
        let header = RasterHeader::parse(&bytes).unwrap();
        assert!(header.mode.double_height);
        assert!(!header.mode.double_width);
        assert_eq!(header.width_dots(), 384);
        assert_eq!(header.height, 300);
    }

    #[test]
    fn test_header_parse_rejects_other_commands() {
        // ESC GS S (StarPRNT raster) is not GS v 0
        let bytes = [0x1B, 0x1D, 0x53, 0x01, 0x30, 0x00, 0x64, 0x00];
        assert!(matches!(
            RasterHeader::parse(&bytes),
            Err(LogoError::InvalidCommand(_))
        ));
        assert!(RasterHeader::parse(&[0x1D, 0x76]).is_err());
    }

    #[test]
    fn test_raster_total_length() {
        let data = vec![0x00; 48 * 100];
        let cmd = raster(ScaleMode::NORMAL, 384, 100, &data).unwrap();
        assert_eq!(cmd.len(), 8 + 48 * 100);
        assert_eq!(&cmd[8..], &data[..]);
    }

    #[test]
    fn test_image_byte_len_matches_encoding() {
        let header = RasterHeader::new(ScaleMode::NORMAL, 384, 3).unwrap();
        let image = RasterImage::new(header, vec![0xAA; 48 * 3]).unwrap();
        assert_eq!(image.byte_len(), 8 + 48 * 3);
        assert_eq!(image.byte_len(), image.to_bytes().len());
    }

    #[test]
    fn test_raster_length_mismatch() {
        let data = vec![0x00; 47];
        assert!(matches!(
            raster(ScaleMode::NORMAL, 384, 1, &data),
            Err(LogoError::Dimension(_))
        ));
    }

    #[test]
    fn test_image_parse_back() {
        let data: Vec<u8> = (0..48 * 3).map(|i| (i % 256) as u8).collect();
        let header = RasterHeader::new(ScaleMode::NORMAL, 384, 3).unwrap();
        let image = RasterImage::new(header, data).unwrap();

        let parsed = RasterImage::parse(&image.to_bytes()).unwrap();
        assert_eq!(parsed, image);
    }

    #[test]
    fn test_image_parse_truncated_payload() {
        let mut bytes = RasterHeader::new(ScaleMode::NORMAL, 384, 2)
            .unwrap()
            .to_bytes()
            .to_vec();
        bytes.extend_from_slice(&[0u8; 48]);
        assert!(matches!(
            RasterImage::parse(&bytes),
            Err(LogoError::Dimension(_))
        ));
    }
}
