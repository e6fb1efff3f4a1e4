use image::{Rgba, RgbaImage};

use crate::{
    config::CardConfig,
    foundation::core::Rgba8,
    render::{
        composite,
        text::{TextMetrics, centered_x},
    },
};

/// Resolved geometry of the "invited by" badge.
///
/// The content anchor row carries the label text, the small avatar, and the
/// inviter name left-to-right; the translucent panel extends past the content
/// by the configured paddings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeLayout {
    pub panel_x: i64,
    pub panel_y: i64,
    pub panel_w: u32,
    pub panel_h: u32,
    pub label_x: i32,
    pub avatar_x: i64,
    pub avatar_y: i64,
    pub name_x: i32,
    /// Content anchor row (label and name baseline-top).
    pub anchor_y: i32,
}

impl BadgeLayout {
    /// Compute the badge geometry for measured child widths.
    ///
    /// Content width is `label_w + content_gap + name_w`, with the content
    /// gap covering the small avatar plus padding; the whole content block is
    /// centered horizontally and anchored above the canvas bottom.
    pub fn compute(cfg: &CardConfig, canvas_w: u32, canvas_h: u32, label_w: u32, name_w: u32) -> Self {
        let content_w = label_w + cfg.badge_content_gap + name_w;
        let start_x = centered_x(canvas_w, content_w);
        let anchor_y = canvas_h as i32 - cfg.badge_bottom_margin as i32;

        Self {
            panel_x: i64::from(start_x) - i64::from(cfg.badge_padding_x),
            panel_y: i64::from(anchor_y) - i64::from(cfg.badge_padding_y),
            panel_w: content_w + 2 * cfg.badge_padding_x,
            panel_h: cfg.badge_height,
            label_x: start_x,
            avatar_x: i64::from(start_x) + i64::from(label_w) + i64::from(cfg.badge_avatar_gap),
            avatar_y: i64::from(anchor_y) - i64::from(cfg.badge_avatar_raise),
            name_x: start_x + label_w as i32 + cfg.badge_content_gap as i32
                + cfg.badge_avatar_gap as i32,
            anchor_y,
        }
    }
}

/// Draw the complete badge: panel, label, inviter avatar, inviter name.
///
/// The inviter name is truncated against the horizontal room left over after
/// the label, avatar slot, and paddings, so the badge never overflows the
/// canvas sides. `avatar` must already be circularly cropped to
/// `badge_avatar_size`.
pub fn draw_badge(
    canvas: &mut RgbaImage,
    cfg: &CardConfig,
    metrics: &TextMetrics<'_>,
    inviter_name: &str,
    avatar: &RgbaImage,
) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let label_w = metrics.measure(&cfg.badge_label_text, cfg.badge_size_px).width;

    let room = canvas_w
        .saturating_sub(2 * cfg.side_margin_px)
        .saturating_sub(2 * cfg.badge_padding_x)
        .saturating_sub(label_w + cfg.badge_content_gap);
    let name = metrics.truncate_to_width(inviter_name, cfg.badge_size_px, room);
    let name_w = metrics.measure(&name, cfg.badge_size_px).width;

    let layout = BadgeLayout::compute(cfg, canvas_w, canvas_h, label_w, name_w);

    let panel = render_panel(
        layout.panel_w,
        layout.panel_h,
        cfg.badge_corner_radius,
        cfg.badge_fill,
        cfg.badge_outline,
    );
    composite::overlay(canvas, &panel, layout.panel_x, layout.panel_y);

    metrics.draw(
        canvas,
        &cfg.badge_label_text,
        cfg.badge_size_px,
        layout.label_x,
        layout.anchor_y,
        cfg.badge_label_color,
    );
    composite::overlay(canvas, avatar, layout.avatar_x, layout.avatar_y);
    metrics.draw(
        canvas,
        &name,
        cfg.badge_size_px,
        layout.name_x,
        layout.anchor_y,
        cfg.badge_name_color,
    );
}

/// Rasterize the translucent rounded-rectangle panel with a 1px outline.
pub fn render_panel(width: u32, height: u32, radius: u32, fill: Rgba8, outline: Rgba8) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let (w, h, r) = (width as i32, height as i32, radius as i32);
    for y in 0..h {
        for x in 0..w {
            if !rounded_rect_contains(x, y, w, h, r) {
                continue;
            }
            let interior = rounded_rect_contains(x - 1, y - 1, w - 2, h - 2, (r - 1).max(0));
            let px = if interior { fill } else { outline };
            out.put_pixel(x as u32, y as u32, px.to_pixel());
        }
    }
    out
}

fn rounded_rect_contains(x: i32, y: i32, w: i32, h: i32, r: i32) -> bool {
    if x < 0 || y < 0 || x >= w || y >= h {
        return false;
    }
    if x >= r && x < w - r {
        return true;
    }
    if y >= r && y < h - r {
        return true;
    }
    let cx = if x < r { r - 1 } else { w - r };
    let cy = if y < r { r - 1 } else { h - r };
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
#[path = "../../tests/unit/render/badge.rs"]
mod tests;
