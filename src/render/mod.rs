//! Rendering of a parsed dump into an RGB image
//!
//! - [`theme`]: palette and the allocation type → color rule
//! - [`formatting`]: byte count labels
//! - [`font`]: optional label typeface
//! - [`canvas`]: drawing surface over an [`image::RgbImage`]
//! - [`block`]: block and committed allocation bars
//! - [`page`]: grid ruler and heap type sections

pub mod block;
pub mod canvas;
pub mod font;
pub mod formatting;
pub mod page;
pub mod theme;

pub use block::{draw_block, draw_committed_allocation, plan_block, BarMark};
pub use canvas::Canvas;
pub use font::{resolve_typeface, Typeface};
pub use formatting::bytes_to_str;
pub use page::{grid_offsets, render_page};
pub use theme::{type_to_color, DEFAULT_THEME};

use crate::dump::Dump;
use crate::errors::VisResult;
use crate::layout::calc_params;
use image::RgbImage;
use std::path::Path;

/// Lay out and render a dump in one go
pub fn render_dump(dump: &Dump, typeface: Option<Typeface>) -> VisResult<RgbImage> {
    let params = calc_params(dump)?;
    Ok(render_page(dump, &params, typeface).into_image())
}

/// Encode the image to `path`; the format follows the file extension
pub fn save_image(image: &RgbImage, path: &Path) -> VisResult<()> {
    image.save(path)?;
    Ok(())
}
