//! # Command Bytes
//!
//! Byte constants and integer encoding shared by the raster command.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// GS (Group Separator) - Graphics command prefix
///
/// - Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// `v` - Raster bit image command byte (follows GS)
pub const RASTER_V: u8 = b'v';

/// `0` - Function selector for "print raster bit image" (follows GS v)
pub const RASTER_FN: u8 = b'0';

/// Full 3-byte prefix of the raster bit image command: `GS v 0`
pub const RASTER_PREFIX: [u8; 3] = [GS, RASTER_V, RASTER_FN];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// `low = value % 256`, `high = value / 256`.
///
/// ## Example
///
/// ```
/// use logobin::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(300), [0x2C, 0x01]); // 300 = 0x012C
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

/// Decode little-endian bytes [low, high] back into a u16
#[inline]
pub const fn u16_from_le(low: u8, high: u8) -> u16 {
    low as u16 | (high as u16) << 8
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_prefix() {
        assert_eq!(RASTER_PREFIX, [0x1D, 0x76, 0x30]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(48), [0x30, 0x00]); // 384 dots / 8
        assert_eq!(u16_le(256), [0x00, 0x01]);
    }

    #[test]
    fn test_u16_from_le() {
        assert_eq!(u16_from_le(0x34, 0x12), 0x1234);
        assert_eq!(u16_from_le(0xF4, 0x01), 500);
    }
}
