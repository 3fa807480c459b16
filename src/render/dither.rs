//! # Jarvis–Judice–Ninke Error Diffusion
//!
//! This module converts a continuous-tone grayscale image to binary
//! (black/white) output suitable for thermal printers.
//!
//! ## Error Diffusion
//!
//! Each pixel is thresholded and the difference between its value and the
//! chosen level is pushed onto twelve pixels that have not been visited
//! yet. Average tone is preserved while edges stay sharp.
//!
//! ```text
//!                 ┌───┬───┐
//!          X      │ 7 │ 5 │
//!  ┌───┬───┼───┼───┼───┤
//!  │ 3 │ 5 │ 7 │ 5 │ 3 │        all weights / 48
//!  ├───┼───┼───┼───┼───┤
//!  │ 1 │ 3 │ 5 │ 3 │ 1 │
//!  └───┴───┴───┴───┴───┘
//! ```
//!
//! ## Scan Boundaries
//!
//! The scan visits `x < width - 2` and `y < height - 2` only. The last two
//! columns and rows receive diffused error but are never thresholded during
//! the pass; [`IntensityGrid::snap`] forces them to black or white afterwards.
//! Kernel taps left of column 0 wrap to the right edge of the same row,
//! landing in the never-visited last two columns.
//!
//! ## Usage Example
//!
//! ```
//! use image::{GrayImage, Luma};
//! use logobin::render::dither;
//!
//! let gray = GrayImage::from_pixel(16, 16, Luma([200]));
//! let bilevel = dither::dither(&gray);
//! assert!(bilevel.pixels().all(|p| p[0] == 0 || p[0] == 255));
//! ```

use image::{GrayImage, Luma};

/// Intensity at or below this is quantized to black
pub const THRESHOLD: i32 = 128;

/// Denominator of every kernel weight
pub const KERNEL_DIVISOR: i32 = 48;

/// Kernel taps as `(dx, dy, weight)`, in the order they are applied.
pub const JJN_KERNEL: [(i32, i32, i32); 12] = [
    (1, 0, 7),
    (2, 0, 5),
    (-2, 1, 3),
    (-1, 1, 5),
    (0, 1, 7),
    (1, 1, 5),
    (2, 1, 3),
    (-2, 2, 1),
    (-1, 2, 3),
    (0, 2, 5),
    (1, 2, 3),
    (2, 2, 1),
];

/// Nearest of the two output levels: 255 above [`THRESHOLD`], else 0.
#[inline]
pub fn closest(value: i32) -> i32 {
    if value > THRESHOLD { 255 } else { 0 }
}

/// # Intensity Grid
///
/// Dense row-major buffer of signed intensities. Cells may drift outside
/// 0–255 while error is being diffused into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl IntensityGrid {
    pub fn new(width: usize, height: usize, fill: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn from_gray(image: &GrayImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            cells: image.as_raw().iter().map(|&v| v as i32).collect(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: i32) {
        self.cells[y * self.width + x] = value;
    }

    /// Add `error * weight / 48` to a cell, truncating the sum toward zero.
    /// Columns left of 0 wrap to `width + x + dx`; taps past the right or
    /// bottom edge are ignored.
    #[inline]
    fn diffuse(&mut self, x: usize, y: usize, dx: i32, dy: i32, error: i32, weight: i32) {
        let Some(ny) = y.checked_add_signed(dy as isize) else {
            return;
        };
        let column = x as isize + dx as isize;
        let nx = if column < 0 {
            (column + self.width as isize) as usize
        } else {
            column as usize
        };
        if nx >= self.width || ny >= self.height {
            return;
        }
        let current = self.get(nx, ny);
        self.set(
            nx,
            ny,
            (current * KERNEL_DIVISOR + error * weight) / KERNEL_DIVISOR,
        );
    }

    /// Force every cell to 0 or 255 and hand back an 8-bit image.
    pub fn snap(&self) -> GrayImage {
        let mut image = GrayImage::new(self.width as u32, self.height as u32);
        for (i, pixel) in image.pixels_mut().enumerate() {
            *pixel = Luma([closest(self.cells[i]) as u8]);
        }
        image
    }
}

/// Run one in-place Jarvis–Judice–Ninke pass over `grid`.
///
/// Writes land immediately, so a pixel read later in the scan sees every
/// error diffused into it so far.
pub fn jarvis_judice_ninke(grid: &mut IntensityGrid) {
    let scan_width = grid.width().saturating_sub(2);
    let scan_height = grid.height().saturating_sub(2);

    for y in 0..scan_height {
        for x in 0..scan_width {
            let old = grid.get(x, y);
            let new = closest(old);
            let error = old - new;
            grid.set(x, y, new);

            for &(dx, dy, weight) in &JJN_KERNEL {
                grid.diffuse(x, y, dx, dy, error, weight);
            }
        }
    }
}

/// Dither a grayscale image to pure black (0) and white (255).
pub fn dither(image: &GrayImage) -> GrayImage {
    let mut grid = IntensityGrid::from_gray(image);
    jarvis_judice_ninke(&mut grid);
    grid.snap()
}

// ============================================================================
// TESTS
// ============================================================================
