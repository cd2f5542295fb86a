//! Page composition: grid ruler plus stacked heap type sections
//!
//! ```text
//! y = margin        grid legend ("0", "64 KB", "128 KB", ...)
//!                   DEFAULT
//!                   Committed allocation 0
//!                   [==========bar==========]
//!                   Default pool block 0
//!                   [====|===|   free  |===]
//!                   UPLOAD
//!                   ...
//! ```
//!
//! The vertical cursor only moves down; its final value equals
//! [`LayoutParams::image_height`].

use super::block::{draw_block, draw_committed_allocation};
use super::canvas::Canvas;
use super::font::Typeface;
use super::formatting::bytes_to_str;
use super::theme::DEFAULT_THEME;
use crate::constants::{IMG_MARGIN, IMG_SIZE_X, MAP_SIZE, TEXT_MARGIN, TEXT_ROW, USABLE_WIDTH};
use crate::dump::{Dump, HeapTypeSection};
use crate::layout::LayoutParams;
use log::debug;

/// Byte offsets that get a grid line, in order
pub fn grid_offsets(params: &LayoutParams) -> Vec<u64> {
    let step = params.grid_step();
    let mut offsets = Vec::new();
    let mut byte = 0u64;
    while params.to_pixels(byte) <= USABLE_WIDTH {
        offsets.push(byte);
        byte = match byte.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    offsets
}

/// Draw the full-height grid lines and their size legend at `y`
fn draw_grid(canvas: &mut Canvas, y: u32, params: &LayoutParams) {
    let offsets = grid_offsets(params);
    debug!(
        "Grid: {} lines every {}",
        offsets.len(),
        bytes_to_str(params.grid_step())
    );

    let bottom = canvas.height().saturating_sub(1);
    for byte in offsets {
        let x = IMG_MARGIN + params.to_pixels(byte);
        canvas.vline(x, 0, bottom, DEFAULT_THEME.grid_line);

        if byte == 0 {
            canvas.text(x as i32 + TEXT_MARGIN, y as i32, "0", DEFAULT_THEME.text_h2);
        } else {
            let text = bytes_to_str(byte);
            let width = canvas.text_width(&text) as i32;
            canvas.text(
                x as i32 - width - TEXT_MARGIN,
                y as i32,
                &text,
                DEFAULT_THEME.text_h2,
            );
        }
    }
}

/// Draw one heap type section starting at `y`, returning the cursor after it
fn draw_section(canvas: &mut Canvas, mut y: u32, section: &HeapTypeSection, params: &LayoutParams) -> u32 {
    canvas.text(IMG_MARGIN as i32, y as i32, &section.name, DEFAULT_THEME.text_h1);
    y += TEXT_ROW;

    for (index, alloc) in section.committed_allocations.iter().enumerate() {
        let label = format!("Committed allocation {}", index);
        canvas.text(IMG_MARGIN as i32, y as i32, &label, DEFAULT_THEME.text_h2);
        y += TEXT_ROW;
        draw_committed_allocation(canvas, y, alloc, params);
        y += MAP_SIZE + IMG_MARGIN;
    }

    for block in &section.blocks {
        canvas.text(IMG_MARGIN as i32, y as i32, &block.label(), DEFAULT_THEME.text_h2);
        y += TEXT_ROW;
        draw_block(canvas, y, block, params);
        y += MAP_SIZE + IMG_MARGIN;
    }

    y
}

/// Render the whole page for a dump
pub fn render_page(dump: &Dump, params: &LayoutParams, typeface: Option<Typeface>) -> Canvas {
    let mut canvas = Canvas::new(IMG_SIZE_X, params.image_height, typeface);

    let mut y = IMG_MARGIN;
    draw_grid(&mut canvas, y, params);
    y += TEXT_ROW;

    for section in dump.sections() {
        y = draw_section(&mut canvas, y, section, params);
    }
    debug_assert_eq!(y, params.image_height);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_offsets_cover_width() {
        // 1 px per byte: 64 B step, lines at 0..=1152
        let params = LayoutParams {
            image_height: 100,
            max_bytes: USABLE_WIDTH as u64,
        };
        let offsets = grid_offsets(&params);
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&1152));
        assert_eq!(offsets.len(), 19);
        assert!(offsets.windows(2).all(|w| w[1] - w[0] == 64));
    }

    #[test]
    fn test_grid_offsets_stop_at_largest_size() {
        let params = LayoutParams {
            image_height: 100,
            max_bytes: u64::MAX,
        };
        let step = params.grid_step();
        let offsets = grid_offsets(&params);
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.len() as u64, u64::MAX / step + 1);
        assert!(offsets.windows(2).all(|w| w[1] - w[0] == step));
    }

    #[test]
    fn test_grid_includes_right_edge_when_exact() {
        // 64 bytes at 18.5 px/byte: step 32 lands on 0, 32 and the 64 B edge
        let params = LayoutParams {
            image_height: 100,
            max_bytes: 64,
        };
        assert_eq!(grid_offsets(&params), vec![0, 32, 64]);
    }
}
