//! Block and committed allocation bars
//!
//! A block bar is painted in two steps. [`plan_block`] walks the
//! suballocations and turns byte ranges into [`BarMark`]s relative to the bar's
//! left edge; [`draw_block`] paints the FREE background and then the marks.
//!
//! # Sub-pixel suballocations
//!
//! A suballocation whose end pixel is not at least two columns past its start
//! cannot be shown as an outlined rectangle. It becomes a one-pixel black
//! "hard line" at its start column instead, so tiny allocations never vanish.
//! When a later rectangle starts on that same column its outline paints over
//! the hard line, so the line is emitted again right after the rectangle.

use super::canvas::Canvas;
use super::theme::{type_to_color, DEFAULT_THEME};
use crate::constants::{IMG_MARGIN, MAP_SIZE};
use crate::dump::{Allocation, Block};
use crate::layout::LayoutParams;
use image::Rgba;

/// One paint operation inside a bar, in pixels from the bar's left edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarMark {
    /// Outlined rectangle spanning columns `x0..=x1`
    Rect { x0: u32, x1: u32, color: Rgba<u8> },
    /// Single black column
    HardLine { x: u32 },
}

/// Compute the marks for a block's suballocations
pub fn plan_block(block: &Block, params: &LayoutParams) -> Vec<BarMark> {
    let mut marks = Vec::with_capacity(block.suballocations.len());
    let mut byte = 0u64;
    let mut x = 0u32;
    let mut last_hard_line: Option<u32> = None;

    for sub in &block.suballocations {
        let byte_end = byte.saturating_add(sub.size);
        let x_end = params.to_pixels(byte_end);

        if !sub.is_free() {
            if x_end > x + 1 {
                marks.push(BarMark::Rect {
                    x0: x,
                    x1: x_end,
                    color: type_to_color(&sub.kind, sub.flags, sub.layout),
                });
                if last_hard_line == Some(x) {
                    marks.push(BarMark::HardLine { x });
                }
            } else {
                marks.push(BarMark::HardLine { x });
                last_hard_line = Some(x);
            }
        }

        byte = byte_end;
        x = x_end;
    }

    marks
}

/// Paint a block bar with its top edge at `y`
pub fn draw_block(canvas: &mut Canvas, y: u32, block: &Block, params: &LayoutParams) {
    let width = params.to_pixels(block.size);
    canvas.rect(
        IMG_MARGIN,
        y,
        IMG_MARGIN + width,
        y + MAP_SIZE,
        DEFAULT_THEME.free,
        None,
    );

    for mark in plan_block(block, params) {
        match mark {
            BarMark::Rect { x0, x1, color } => canvas.rect(
                IMG_MARGIN + x0,
                y,
                IMG_MARGIN + x1,
                y + MAP_SIZE,
                color,
                Some(DEFAULT_THEME.outline),
            ),
            BarMark::HardLine { x } => {
                canvas.vline(IMG_MARGIN + x, y, y + MAP_SIZE, DEFAULT_THEME.outline_hard)
            }
        }
    }
}

/// Paint a committed allocation as a single outlined bar with its top edge at `y`
///
/// Nothing inside a committed allocation is free, so there is no background and
/// no sub-pixel handling: a tiny allocation is still a one-column rectangle.
pub fn draw_committed_allocation(
    canvas: &mut Canvas,
    y: u32,
    alloc: &Allocation,
    params: &LayoutParams,
) {
    let width = params.to_pixels(alloc.size);
    canvas.rect(
        IMG_MARGIN,
        y,
        IMG_MARGIN + width,
        y + MAP_SIZE,
        type_to_color(&alloc.kind, alloc.flags, alloc.layout),
        Some(DEFAULT_THEME.outline),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::USABLE_WIDTH;
    use crate::dump::PoolKind;
    use crate::render::theme::opaque;
    use image::Rgb;

    fn block(size: u64, subs: Vec<Allocation>) -> Block {
        Block {
            id: 0,
            size,
            pool: PoolKind::Default,
            suballocations: subs,
        }
    }

    fn params(max_bytes: u64) -> LayoutParams {
        LayoutParams {
            image_height: 200,
            max_bytes,
        }
    }

    #[test]
    fn test_plan_full_buffer() {
        let b = block(1024, vec![Allocation::new("BUFFER", 1024)]);
        let marks = plan_block(&b, &params(1024));
        assert_eq!(
            marks,
            vec![BarMark::Rect {
                x0: 0,
                x1: USABLE_WIDTH,
                color: DEFAULT_THEME.buffer
            }]
        );
    }

    #[test]
    fn test_plan_free_is_skipped_but_advances() {
        // 1 px per byte
        let b = block(
            1184,
            vec![
                Allocation::new("FREE", 100),
                Allocation::new("BUFFER", 50),
                Allocation::new("FREE", 1034),
            ],
        );
        let marks = plan_block(&b, &params(1184));
        assert_eq!(
            marks,
            vec![BarMark::Rect {
                x0: 100,
                x1: 150,
                color: DEFAULT_THEME.buffer
            }]
        );
    }

    #[test]
    fn test_plan_sub_pixel_becomes_hard_line() {
        // 1184 px for 1184 * 1024 bytes: 1 px per KB
        let max = 1184 * 1024;
        let b = block(
            max,
            vec![
                Allocation::new("BUFFER", 512),
                Allocation::new("FREE", 1536),
                Allocation::new("BUFFER", 1024),
                Allocation::new("FREE", max - 3072),
            ],
        );
        let marks = plan_block(&b, &params(max));
        // 0..512 B ends at px 0; 2048..3072 B covers px 2..3: both too narrow
        assert_eq!(
            marks,
            vec![BarMark::HardLine { x: 0 }, BarMark::HardLine { x: 2 }]
        );
    }

    #[test]
    fn test_plan_hard_line_redrawn_after_rect() {
        let max = 1184 * 1024;
        let b = block(
            max,
            vec![
                Allocation::new("TEXTURE2D", 100).with_layout(1),
                Allocation::new("BUFFER", 10 * 1024),
                Allocation::new("FREE", max - 100 - 10 * 1024),
            ],
        );
        let marks = plan_block(&b, &params(max));
        // Tiny texture ends at px 0, the buffer rect then starts on px 0 too
        assert_eq!(
            marks,
            vec![
                BarMark::HardLine { x: 0 },
                BarMark::Rect {
                    x0: 0,
                    x1: 10,
                    color: DEFAULT_THEME.buffer
                },
                BarMark::HardLine { x: 0 },
            ]
        );
    }

    #[test]
    fn test_plan_rect_widths_fit_in_block() {
        let max = 10_000;
        let sizes = [333u64, 1, 2, 1500, 7, 4000, 157, 4000];
        let subs: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if i % 3 == 2 {
                    Allocation::new("FREE", s)
                } else {
                    Allocation::new("TEXTURE3D", s)
                }
            })
            .collect();
        let b = block(sizes.iter().sum(), subs);
        let block_width = params(max).to_pixels(b.size);

        let rect_width: u32 = plan_block(&b, &params(max))
            .iter()
            .map(|m| match m {
                BarMark::Rect { x0, x1, .. } => x1 - x0,
                BarMark::HardLine { .. } => 0,
            })
            .sum();
        assert!(rect_width <= block_width);
    }

    #[test]
    fn test_draw_block_pixels() {
        let max = 1184;
        let b = block(
            592,
            vec![Allocation::new("BUFFER", 100), Allocation::new("FREE", 492)],
        );
        let p = params(max);
        let mut canvas = Canvas::new(1200, 60, None);
        draw_block(&mut canvas, 10, &b, &p);
        let img = canvas.image();

        let mid = 10 + MAP_SIZE / 2;
        // outline on the left edge, fill inside
        assert_eq!(*img.get_pixel(IMG_MARGIN, mid), opaque(DEFAULT_THEME.outline));
        assert_eq!(*img.get_pixel(IMG_MARGIN + 50, mid), opaque(DEFAULT_THEME.buffer));
        // free background after the buffer
        assert_eq!(*img.get_pixel(IMG_MARGIN + 300, mid), opaque(DEFAULT_THEME.free));
        assert_eq!(*img.get_pixel(IMG_MARGIN + 592, mid), opaque(DEFAULT_THEME.free));
        // past the block end the page is untouched
        assert_eq!(*img.get_pixel(IMG_MARGIN + 593, mid), opaque(DEFAULT_THEME.background));
        assert_eq!(*img.get_pixel(IMG_MARGIN + 50, 9), opaque(DEFAULT_THEME.background));
    }

    #[test]
    fn test_draw_committed_allocation_depth_stencil() {
        let alloc = Allocation::new("TEXTURE2D", 2048).with_flags(0x2);
        let mut canvas = Canvas::new(1200, 40, None);
        draw_committed_allocation(&mut canvas, 0, &alloc, &params(4096));
        let img = canvas.image();

        assert_eq!(*img.get_pixel(IMG_MARGIN + 100, 12), Rgb([246, 128, 255]));
        assert_eq!(*img.get_pixel(IMG_MARGIN + 592, 12), opaque(DEFAULT_THEME.outline));
        assert_eq!(*img.get_pixel(IMG_MARGIN + 593, 12), opaque(DEFAULT_THEME.background));
    }
}
