use image::{Rgba, RgbaImage};
use rusttype::Font;

use super::*;
use crate::foundation::core::Rgba8;

fn fixture_font() -> Font<'static> {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans.ttf").unwrap();
    Font::try_from_vec(bytes).unwrap()
}

fn ink_bounds(canvas: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in canvas.enumerate_pixels() {
        if px.0 == [0, 0, 0, 255] {
            continue; // untouched black background
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

#[test]
fn measure_reports_positive_ink_box_for_text() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    let ext = metrics.measure("Welcome to the Club", 35.0);
    assert!(ext.width > 0);
    assert!(ext.height > 0);
    assert!(ext.height <= 70, "ink height wildly off: {}", ext.height);
}

#[test]
fn measure_is_zero_for_empty_and_whitespace() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    assert_eq!(metrics.measure("", 40.0), TextExtent::default());
    assert_eq!(metrics.measure("   ", 40.0).width, 0);
}

#[test]
fn draw_places_ink_exactly_at_the_anchor() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    let mut canvas = RgbaImage::from_pixel(200, 100, Rgba([0, 0, 0, 255]));

    let ext = metrics.measure("Hi", 40.0);
    metrics.draw(&mut canvas, "Hi", 40.0, 20, 30, Rgba8::WHITE);

    let (x0, y0, x1, y1) = ink_bounds(&canvas).expect("text drew no pixels");
    // Origin normalization: the ink box lands at the anchor regardless of the
    // font's reported bbox origin, modulo zero-coverage border pixels.
    assert!(x0 >= 20 && x0 <= 21, "left ink at {x0}");
    assert!(y0 >= 30 && y0 <= 31, "top ink at {y0}");
    assert!(x1 < 20 + ext.width + 1);
    assert!(y1 < 30 + ext.height + 1);
}

#[test]
fn draw_is_deterministic() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    let mut a = RgbaImage::from_pixel(300, 80, Rgba([10, 10, 10, 255]));
    let mut b = a.clone();
    metrics.draw(&mut a, "alice", 40.0, 12, 8, Rgba8::opaque(0xa1, 0xc0, 0xde));
    metrics.draw(&mut b, "alice", 40.0, 12, 8, Rgba8::opaque(0xa1, 0xc0, 0xde));
    assert_eq!(a, b);
}

#[test]
fn centered_x_splits_the_remainder() {
    assert_eq!(centered_x(800, 200), 300);
    assert_eq!(centered_x(801, 200), 300);
    // Within 1px of the exact center for odd remainders.
    let x = centered_x(800, 33);
    assert!((i64::from(x) + 33 / 2 - 400).abs() <= 1);
}

#[test]
fn truncate_leaves_fitting_text_unchanged() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    assert_eq!(metrics.truncate_to_width("bob", 30.0, 10_000), "bob");
}

#[test]
fn truncate_caps_width_and_appends_ellipsis() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    let name: String = std::iter::repeat('W').take(32).collect();
    let max_w = 760;

    let fitted = metrics.truncate_to_width(&name, 40.0, max_w);
    assert!(fitted.ends_with("..."));
    assert!(fitted.len() < name.len() + 3);
    assert!(metrics.measure(&fitted, 40.0).width <= max_w);
}

#[test]
fn truncate_returns_empty_when_nothing_fits() {
    let font = fixture_font();
    let metrics = TextMetrics::new(&font);
    assert_eq!(metrics.truncate_to_width("anything", 40.0, 1), "");
}
