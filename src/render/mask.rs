use image::{Rgba, RgbaImage, imageops};

/// Clip a bitmap to its inscribed circle.
///
/// Non-square input is center-cropped to a square first (fit-with-centering
/// semantics), then every pixel whose center lies outside the inscribed
/// circle gets alpha 0; pixels inside keep alpha 255.
pub fn circle_crop(img: &RgbaImage) -> RgbaImage {
    let side = img.width().min(img.height());
    let mut out = if img.width() == img.height() {
        img.clone()
    } else {
        let left = (img.width() - side) / 2;
        let top = (img.height() - side) / 2;
        imageops::crop_imm(img, left, top, side, side).to_image()
    };

    let c = side as f32 / 2.0;
    let r2 = c * c;
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let px = out.get_pixel_mut(x, y);
            if dx * dx + dy * dy > r2 {
                px.0[3] = 0;
            } else {
                px.0[3] = 255;
            }
        }
    }
    out
}

/// Soft drop-shadow layer for a circular avatar of side `avatar_size`.
///
/// The layer is `(avatar_size + 2 * offset)` square: `offset` concentric
/// rings whose alpha falls off linearly from 255 at the avatar's rim to
/// `255 / offset` at the outermost ring, black throughout. The composer
/// pastes this at `avatar_position - (offset, offset)` and then the avatar on
/// top, which occludes everything but the penumbra.
///
/// `offset` must be non-zero; callers skip the shadow entirely when the
/// configured offset is 0.
pub fn shadow_layer(avatar_size: u32, offset: u32) -> RgbaImage {
    debug_assert!(offset > 0);
    let side = avatar_size + 2 * offset;
    let mut out = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));

    let c = side as f32 / 2.0;
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 + 0.5 - c;
            let dy = y as f32 + 0.5 - c;
            let d = (dx * dx + dy * dy).sqrt();
            // Ring index of the innermost ring containing this pixel: ring i
            // spans radius c - i, with i = offset hugging the avatar's rim.
            let depth = (c - d).floor();
            if depth < 1.0 {
                continue;
            }
            let ring = depth.min(offset as f32) as u32;
            let alpha = (255 * ring / offset) as u8;
            out.put_pixel(x, y, Rgba([0, 0, 0, alpha]));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
