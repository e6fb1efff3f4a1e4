use image::{Rgba, RgbaImage};

use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = Rgba([10, 20, 30, 255]);
    let src = Rgba([255, 255, 255, 0]);
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = Rgba([0, 0, 0, 255]);
    let src = Rgba([255, 0, 0, 255]);
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_mixes_toward_src() {
    let dst = Rgba([0, 0, 0, 255]);
    let src = Rgba([255, 255, 255, 128]);
    let out = over(dst, src);
    assert!(out.0[0] >= 127 && out.0[0] <= 129);
    assert_eq!(out.0[3], 255);
}

#[test]
fn over_keeps_opaque_destination_opaque() {
    let dst = Rgba([40, 40, 40, 255]);
    let src = Rgba([200, 10, 10, 77]);
    assert_eq!(over(dst, src).0[3], 255);
}

#[test]
fn overlay_pastes_at_offset() {
    let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    let patch = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
    overlay(&mut canvas, &patch, 1, 1);
    assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(2, 2), &Rgba([255, 0, 0, 255]));
    assert_eq!(canvas.get_pixel(3, 3), &Rgba([0, 0, 0, 255]));
}

#[test]
fn overlay_clips_negative_offsets() {
    let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
    let patch = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]));
    overlay(&mut canvas, &patch, -1, -1);
    assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    assert_eq!(canvas.get_pixel(1, 1), &Rgba([0, 0, 0, 255]));
}

#[test]
fn overlay_fully_outside_leaves_canvas_untouched() {
    let mut canvas = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 255]));
    let reference = canvas.clone();
    let patch = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
    overlay(&mut canvas, &patch, 10, 10);
    overlay(&mut canvas, &patch, -5, -5);
    assert_eq!(canvas, reference);
}

#[test]
fn blend_pixel_ignores_out_of_bounds() {
    let mut canvas = RgbaImage::from_pixel(2, 2, Rgba([1, 1, 1, 255]));
    let reference = canvas.clone();
    blend_pixel(&mut canvas, -1, 0, Rgba([255, 255, 255, 255]));
    blend_pixel(&mut canvas, 0, 2, Rgba([255, 255, 255, 255]));
    assert_eq!(canvas, reference);
}
