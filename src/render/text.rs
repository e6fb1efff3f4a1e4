use image::RgbaImage;
use rusttype::{Font, Scale, point};

use crate::{foundation::core::Rgba8, render::composite};

/// Measured ink box of a laid-out string.
///
/// `left`/`top` are the bounding box's origin relative to the layout origin.
/// Font backends routinely report a non-zero origin (side bearings, ascender
/// overshoot); drawing subtracts it so the visible ink lands exactly at the
/// requested anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
}

/// Text measurement and glyph drawing for one font.
pub struct TextMetrics<'f> {
    font: &'f Font<'static>,
}

impl<'f> TextMetrics<'f> {
    pub fn new(font: &'f Font<'static>) -> Self {
        Self { font }
    }

    /// Measure the ink bounding box of `text` at `size_px`.
    ///
    /// Whitespace-only input has no ink and measures zero.
    pub fn measure(&self, text: &str, size_px: f32) -> TextExtent {
        let scale = Scale::uniform(size_px);
        let ascent = self.font.v_metrics(scale).ascent;

        let mut min_x = i32::MAX;
        let mut min_y = i32::MAX;
        let mut max_x = i32::MIN;
        let mut max_y = i32::MIN;
        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                min_x = min_x.min(bb.min.x);
                min_y = min_y.min(bb.min.y);
                max_x = max_x.max(bb.max.x);
                max_y = max_y.max(bb.max.y);
            }
        }
        if min_x > max_x {
            return TextExtent::default();
        }
        TextExtent {
            width: (max_x - min_x) as u32,
            height: (max_y - min_y) as u32,
            left: min_x,
            top: min_y,
        }
    }

    /// Draw `text` with its ink box's top-left corner at `(x, y)`.
    ///
    /// Glyph coverage is blended onto the canvas scaled by `color`'s alpha.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size_px: f32,
        x: i32,
        y: i32,
        color: Rgba8,
    ) {
        let ext = self.measure(text, size_px);
        let scale = Scale::uniform(size_px);
        let ascent = self.font.v_metrics(scale).ascent;

        for glyph in self.font.layout(text, scale, point(0.0, ascent)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, v| {
                let px = i64::from(gx as i32 + bb.min.x - ext.left + x);
                let py = i64::from(gy as i32 + bb.min.y - ext.top + y);
                let alpha = composite::mul_div255((v * 255.0).round() as u16, u16::from(color.a));
                if alpha == 0 {
                    return;
                }
                composite::blend_pixel(
                    canvas,
                    px,
                    py,
                    image::Rgba([color.r, color.g, color.b, alpha]),
                );
            });
        }
    }

    /// Ellipsis-truncate `text` so its measured width fits `max_width`.
    ///
    /// Returns the input unchanged when it already fits; otherwise the
    /// longest prefix that fits with `...` appended, or an empty string when
    /// not even one character does.
    pub fn truncate_to_width(&self, text: &str, size_px: f32, max_width: u32) -> String {
        if self.measure(text, size_px).width <= max_width {
            return text.to_string();
        }
        let chars: Vec<char> = text.chars().collect();
        for keep in (1..chars.len()).rev() {
            let mut candidate: String = chars[..keep].iter().collect();
            candidate.push_str("...");
            if self.measure(&candidate, size_px).width <= max_width {
                return candidate;
            }
        }
        String::new()
    }
}

/// Horizontal anchor that centers a block of `content_width` on the canvas.
pub fn centered_x(canvas_width: u32, content_width: u32) -> i32 {
    ((i64::from(canvas_width) - i64::from(content_width)) / 2) as i32
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
