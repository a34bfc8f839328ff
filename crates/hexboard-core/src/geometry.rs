//! Pixel layout of the hex grid.
//!
//! Turns a pixel resolution and grid dimensions into a hex size and the
//! buffers that center the grid. Hex sizes are always a multiple of 8 so that
//! every vertex and edge midpoint lands on an integer pixel.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted margin percentage
pub const MAX_MARGIN: u32 = 50;

/// Largest accepted width or height.
///
/// Keeps every vertex coordinate and its intermediate products within `i32`.
pub const MAX_RESOLUTION: u32 = 1 << 24;

/// Pixel dimensions of the board area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both components must be positive multiples of 8, at most [`MAX_RESOLUTION`]
    pub fn validate(&self) -> Result<()> {
        let valid = |v: u32| v > 0 && v % 8 == 0;
        if !valid(self.width) || !valid(self.height) {
            return Err(BoardError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_RESOLUTION || self.height > MAX_RESOLUTION {
            return Err(BoardError::ResolutionTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_RESOLUTION,
            });
        }
        Ok(())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Number of hex rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub columns: u32,
}

impl GridSize {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(BoardError::InvalidGridDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Total number of hexes in the grid
    pub fn hex_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(7, 7)
    }
}

/// Margin must lie in `[0, 50]` percent
pub fn validate_margin(margin: u32) -> Result<()> {
    if margin > MAX_MARGIN {
        return Err(BoardError::InvalidMargin(margin));
    }
    Ok(())
}

/// Hex size allowed by the pixel height.
///
/// Rows overlap by a quarter hex, so `rows` hexes span `6 * rows + 2` eighths.
pub fn hex_size_for_height(pixel_height: u32, rows: u32) -> i32 {
    let eighths = rows as i64 * 6 + 2;
    (pixel_height as i64 / eighths * 8) as i32
}

/// Hex size allowed by the pixel width.
///
/// Odd rows are shifted half a hex, so `columns` hexes span `8 * columns + 4` eighths.
pub fn hex_size_for_width(pixel_width: u32, columns: u32) -> i32 {
    let eighths = columns as i64 * 8 + 4;
    (pixel_width as i64 / eighths * 8) as i32
}

/// Space left above the grid so it is vertically centered
pub fn top_buffer(pixel_height: u32, hex_size: i32, rows: u32) -> i32 {
    // (height - size * (3 * rows + 1) / 4) / 2, kept in integers
    let grid_height = hex_size as i64 * (3 * rows as i64 + 1);
    ((4 * pixel_height as i64 - grid_height) / 8) as i32
}

/// Space left of the grid so it is horizontally centered
pub fn left_buffer(pixel_width: u32, hex_size: i32, columns: u32) -> i32 {
    // (width - size * (2 * columns + 1) / 2) / 2, kept in integers
    let grid_width = hex_size as i64 * (2 * columns as i64 + 1);
    ((2 * pixel_width as i64 - grid_width) / 4) as i32
}

/// Largest pixel count inside the margin that is a multiple of `divisor`
pub fn display_area(pixels: u32, margin: u32, divisor: u32) -> u32 {
    let inside = pixels as u64 * margin as u64 / 100;
    (inside / divisor as u64 * divisor as u64) as u32
}

/// Computed layout of a hex grid inside a pixel area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexLayout {
    pub resolution: Resolution,
    pub grid: GridSize,
    pub margin: u32,
    /// Hex height in pixels, a multiple of 8
    pub hex_size: i32,
    pub top_buffer: i32,
    pub left_buffer: i32,
}

impl HexLayout {
    /// Validate the inputs and compute hex size and centering buffers
    pub fn compute(resolution: Resolution, grid: GridSize, margin: u32) -> Result<Self> {
        validate_margin(margin)?;
        resolution.validate()?;
        grid.validate()?;

        let hex_size = hex_size_for_height(resolution.height, grid.rows)
            .min(hex_size_for_width(resolution.width, grid.columns));
        if hex_size == 0 {
            return Err(BoardError::ResolutionTooSmall {
                width: resolution.width,
                height: resolution.height,
                rows: grid.rows,
                columns: grid.columns,
            });
        }

        Ok(Self {
            resolution,
            grid,
            margin,
            hex_size,
            top_buffer: top_buffer(resolution.height, hex_size, grid.rows),
            left_buffer: left_buffer(resolution.width, hex_size, grid.columns),
        })
    }

    /// Drawable `(width, height)` inside the margins, in multiples of 8
    pub fn display_area(&self) -> (u32, u32) {
        (
            display_area(self.resolution.width, self.margin, 8),
            display_area(self.resolution.height, self.margin, 8),
        )
    }
}
