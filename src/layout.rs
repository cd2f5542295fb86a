//! Page layout: image height and byte-to-pixel scale
//!
//! Scale is kept as an exact ratio (`usable_width / max_bytes`) rather than a
//! float so the largest block always lands on exactly the usable width.

use crate::constants::{
    GRID_MIN_SPACING, GRID_START_BYTES, IMG_MARGIN, IMG_SIZE_X, ROW_PITCH, TEXT_ROW, USABLE_WIDTH,
};
use crate::dump::Dump;
use crate::errors::{VisError, VisResult};
use log::info;

/// Derived layout for one rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Total image height in pixels
    pub image_height: u32,
    /// Size of the largest committed allocation or block, in bytes
    pub max_bytes: u64,
}

impl LayoutParams {
    /// Pixels per byte as a float, for display
    pub fn pixels_per_byte(&self) -> f64 {
        USABLE_WIDTH as f64 / self.max_bytes as f64
    }

    /// Horizontal pixel offset of a byte offset, truncated
    ///
    /// Offsets past the largest entity (suballocations overrunning their block)
    /// are clamped to the page width; anything beyond it is clipped when drawn.
    pub fn to_pixels(&self, bytes: u64) -> u32 {
        let px = bytes as u128 * USABLE_WIDTH as u128 / self.max_bytes as u128;
        px.min(IMG_SIZE_X as u128) as u32
    }

    /// Bytes between grid lines: doubles from 32 until lines are at least 64 px apart
    pub fn grid_step(&self) -> u64 {
        let mut step = GRID_START_BYTES;
        while self.to_pixels(step) < GRID_MIN_SPACING {
            match step.checked_mul(2) {
                Some(next) => step = next,
                None => break,
            }
        }
        step
    }
}

/// Height of a page with no heap types: top margin plus the grid legend row
pub const MIN_IMAGE_HEIGHT: u32 = IMG_MARGIN + TEXT_ROW;

/// Compute image height and scale for a dump
///
/// Fails with [`VisError::EmptyDump`] when no committed allocation or block has
/// a non-zero size, since there is nothing to scale against.
pub fn calc_params(dump: &Dump) -> VisResult<LayoutParams> {
    let mut image_height = MIN_IMAGE_HEIGHT;
    for section in dump.sections() {
        image_height += TEXT_ROW;
        image_height += section.row_count() as u32 * ROW_PITCH;
    }

    let max_bytes = dump.max_entity_size();
    if max_bytes == 0 {
        return Err(VisError::EmptyDump);
    }

    let params = LayoutParams {
        image_height,
        max_bytes,
    };
    info!(
        "Layout: {}px high, {:.6} px/byte (largest entity {} bytes)",
        params.image_height,
        params.pixels_per_byte(),
        params.max_bytes
    );
    Ok(params)
}
