//! Kitchen footprint and grid clamping.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kitchen footprint in grid units (1 unit = 1 foot).
///
/// `length` runs along the x axis, `width` along the y axis.
///
/// # Validation
///
/// - Both extents must be at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Extent along x
    pub length: u32,
    /// Extent along y
    pub width: u32,
}

impl CanvasBounds {
    /// Creates validated bounds.
    pub fn new(length: u32, width: u32) -> Result<Self> {
        if length == 0 || width == 0 {
            anyhow::bail!("Canvas bounds must be at least 1x1 grid units (got {length}x{width})");
        }
        Ok(Self { length, width })
    }

    /// Floor area in square grid units.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.length as u64 * self.width as u64
    }

    /// Largest x at which an item of `item_width` still fits.
    ///
    /// An item wider than the canvas is pinned to 0.
    #[must_use]
    pub const fn max_x(&self, item_width: u32) -> u32 {
        self.length.saturating_sub(item_width)
    }

    /// Largest y at which an item of `item_height` still fits.
    #[must_use]
    pub const fn max_y(&self, item_height: u32) -> u32 {
        self.width.saturating_sub(item_height)
    }

    /// Clamps a top-left position so a `width` x `height` box stays inside.
    #[must_use]
    pub fn clamp_position(&self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        (x.min(self.max_x(width)), y.min(self.max_y(height)))
    }

    /// Top-left position that centers a `width` x `height` box, rounding down.
    ///
    /// A box larger than the canvas is pinned to 0 on that axis.
    #[must_use]
    pub const fn centered_position(&self, width: u32, height: u32) -> (u32, u32) {
        (self.max_x(width) / 2, self.max_y(height) / 2)
    }

    /// Clamps a signed grid cell (e.g. from a drag past the left edge).
    #[must_use]
    pub fn clamp_cell(&self, x: i64, y: i64, width: u32, height: u32) -> (u32, u32) {
        let x = x.clamp(0, i64::from(self.max_x(width)));
        let y = y.clamp(0, i64::from(self.max_y(height)));
        (x as u32, y as u32)
    }

    /// Whether a box lies fully inside the bounds.
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        x as u64 + width as u64 <= self.length as u64 && y as u64 + height as u64 <= self.width as u64
    }
}
