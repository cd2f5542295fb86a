//! Drawing surface for the page
//!
//! Coordinates follow the inclusive convention used throughout rendering: a
//! rectangle `(x0, y0)..=(x1, y1)` covers `x1 - x0 + 1` columns, so a
//! zero-byte allocation still occupies its start column.

use super::font::Typeface;
use super::theme::{opaque, DEFAULT_THEME};
use image::{Rgba, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

pub struct Canvas {
    image: RgbImage,
    typeface: Option<Typeface>,
}

impl Canvas {
    /// White page of the given size
    pub fn new(width: u32, height: u32, typeface: Option<Typeface>) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width, height, opaque(DEFAULT_THEME.background)),
            typeface,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Clamp an inclusive span to at most one past the last pixel; imageproc
    /// clips whatever still falls outside the page
    fn clamp_span(a: u32, b: u32, limit: u32) -> (u32, u32) {
        (a.min(b).min(limit), a.max(b).min(limit))
    }

    /// Filled rectangle with an optional one-pixel outline
    pub fn rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, fill: Rgba<u8>, outline: Option<Rgba<u8>>) {
        let (x0, x1) = Self::clamp_span(x0, x1, self.width());
        let (y0, y1) = Self::clamp_span(y0, y1, self.height());
        let rect = Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0 + 1, y1 - y0 + 1);
        draw_filled_rect_mut(&mut self.image, rect, opaque(fill));
        if let Some(outline) = outline {
            draw_hollow_rect_mut(&mut self.image, rect, opaque(outline));
        }
    }

    /// One-pixel vertical line from `y0` to `y1` inclusive
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, color: Rgba<u8>) {
        let x = x.min(self.width());
        let (y0, y1) = Self::clamp_span(y0, y1, self.height());
        let line = Rect::at(x as i32, y0 as i32).of_size(1, y1 - y0 + 1);
        draw_filled_rect_mut(&mut self.image, line, opaque(color));
    }

    /// Draw text with its top-left corner at `(x, y)`; no-op without a typeface
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        if let Some(typeface) = &self.typeface {
            draw_text_mut(
                &mut self.image,
                opaque(color),
                x,
                y,
                typeface.scale,
                &typeface.font,
                text,
            );
        }
    }

    /// Rendered width of `text` in pixels, 0 without a typeface
    pub fn text_width(&self, text: &str) -> u32 {
        match &self.typeface {
            Some(typeface) => text_size(typeface.scale, &typeface.font, text).0,
            None => 0,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
