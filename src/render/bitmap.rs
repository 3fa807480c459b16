//! # Polarity and Bit Packing
//!
//! Turns a dithered grayscale image into the printer's 1-bit layout.
//!
//! Images use 0 = black, 255 = white. The print head wants the opposite:
//! a set bit fires a dot. Pixels are therefore inverted before packing.
//!
//! ## Bit Packing
//!
//! - Bit 7 (MSB) = leftmost pixel
//! - Bit 0 (LSB) = rightmost pixel
//! - 1 = ink, 0 = paper
//!
//! ## Example
//!
//! ```
//! use logobin::render::bitmap::pack_row;
//!
//! let row = vec![true, true, false, false, true, false, true, false];
//! assert_eq!(pack_row(&row), vec![0b11001010]); // 0xCA
//! ```

use image::GrayImage;
use log::debug;

use crate::error::LogoError;
use crate::render::dither::THRESHOLD;

/// Invert every pixel in place (black ↔ white).
pub fn invert(image: &mut GrayImage) {
    image::imageops::invert(image);
}

/// Pack a row of boolean pixel values into bytes.
///
/// If the row length is not a multiple of 8, the last byte is padded with
/// zeros (no ink) on the right.
///
/// ```
/// use logobin::render::bitmap::pack_row;
///
/// // 12 pixels pack into 2 bytes (4 bits padding)
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

/// # Monochrome Bitmap
///
/// Row-major packed 1-bit image. `data.len() == width_bytes * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl MonoBitmap {
    /// Invert a dithered image and pack it one bit per pixel.
    ///
    /// After inversion a pixel is ink when its value is above the dither
    /// threshold, so any stray gray is snapped the same way the ditherer
    /// snaps it.
    ///
    /// ## Errors
    ///
    /// [`LogoError::Dimension`] if the width is not a multiple of 8.
    pub fn from_gray(image: &GrayImage) -> Result<Self, LogoError> {
        let (width, height) = image.dimensions();
        if width % 8 != 0 {
            return Err(LogoError::Dimension(format!(
                "Width {} is not a multiple of 8; rows would not pack into whole bytes",
                width
            )));
        }

        let mut inverted = image.clone();
        invert(&mut inverted);

        let width_bytes = (width / 8) as usize;
        let mut data = Vec::with_capacity(width_bytes * height as usize);
        for row in inverted.rows() {
            let bits: Vec<bool> = row.map(|p| p[0] as i32 >= 255 - THRESHOLD).collect();
            data.extend(pack_row(&bits));
        }
        debug!("Inverted and packed {}x{} into {} bytes", width, height, data.len());

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width_bytes(&self) -> usize {
        (self.width / 8) as usize
    }

    /// Whether the dot at (x, y) is inked. `None` outside the bitmap.
    pub fn is_set(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.data.get(y as usize * self.width_bytes() + x as usize / 8)?;
        Some((byte >> (7 - x % 8)) & 1 == 1)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_pack_row_8_pixels() {
        assert_eq!(pack_row(&[true; 8]), vec![0xFF]);
        assert_eq!(pack_row(&[false; 8]), vec![0x00]);
        assert_eq!(
            pack_row(&[true, false, true, false, true, false, true, false]),
            vec![0xAA]
        );
        assert_eq!(
            pack_row(&[true, true, true, true, false, false, false, false]),
            vec![0xF0]
        );
    }

    #[test]
    fn test_pack_row_padding() {
        assert_eq!(pack_row(&[true, true, true, true]), vec![0xF0]);

        let packed = pack_row(&[true; 9]);
        assert_eq!(packed, vec![0xFF, 0x80]);
    }

    #[test]
    fn test_pack_row_empty() {
        assert_eq!(pack_row(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_invert() {
        let mut image = GrayImage::from_raw(3, 1, vec![0, 255, 100]).unwrap();
        invert(&mut image);
        assert_eq!(image.as_raw(), &vec![255, 0, 155]);
    }

    #[test]
    fn test_white_is_blank_black_is_ink() {
        let white = GrayImage::from_pixel(16, 2, Luma([255]));
        let bitmap = MonoBitmap::from_gray(&white).unwrap();
        assert_eq!(bitmap.data, vec![0x00; 4]);

        let black = GrayImage::from_pixel(16, 2, Luma([0]));
        let bitmap = MonoBitmap::from_gray(&black).unwrap();
        assert_eq!(bitmap.data, vec![0xFF; 4]);
    }

    #[test]
    fn test_msb_is_leftmost() {
        let mut image = GrayImage::from_pixel(8, 1, Luma([255]));
        image.put_pixel(0, 0, Luma([0]));
        image.put_pixel(7, 0, Luma([0]));
        let bitmap = MonoBitmap::from_gray(&image).unwrap();
        assert_eq!(bitmap.data, vec![0b1000_0001]);
        assert_eq!(bitmap.is_set(0, 0), Some(true));
        assert_eq!(bitmap.is_set(1, 0), Some(false));
        assert_eq!(bitmap.is_set(7, 0), Some(true));
    }

    #[test]
    fn test_is_set_out_of_range() {
        let bitmap = MonoBitmap::from_gray(&GrayImage::new(8, 2)).unwrap();
        assert_eq!(bitmap.is_set(8, 0), None);
        assert_eq!(bitmap.is_set(0, 2), None);

        // Short data never panics
        let short = MonoBitmap {
            width: 16,
            height: 2,
            data: vec![0xFF],
        };
        assert_eq!(short.is_set(0, 0), Some(true));
        assert_eq!(short.is_set(0, 1), None);
    }

    #[test]
    fn test_gray_snaps_like_the_ditherer() {
        // 128 is black in the ditherer, 129 is white
        let image = GrayImage::from_raw(8, 1, vec![128, 129, 0, 255, 0, 255, 0, 255]).unwrap();
        let bitmap = MonoBitmap::from_gray(&image).unwrap();
        assert_eq!(bitmap.data, vec![0b1010_1010]);
    }

    #[test]
    fn test_width_must_be_multiple_of_8() {
        let image = GrayImage::new(385, 1);
        assert!(matches!(
            MonoBitmap::from_gray(&image),
            Err(LogoError::Dimension(_))
        ));
    }

    #[test]
    fn test_length_is_width_bytes_times_height() {
        let image = GrayImage::new(384, 7);
        let bitmap = MonoBitmap::from_gray(&image).unwrap();
        assert_eq!(bitmap.width_bytes(), 48);
        assert_eq!(bitmap.data.len(), 48 * 7);
    }
}
