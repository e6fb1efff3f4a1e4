use image::{RgbaImage, imageops};

use crate::foundation::error::{CardError, CardResult};

/// Decode encoded avatar bytes into an RGBA bitmap.
pub fn decode_avatar(bytes: &[u8]) -> CardResult<RgbaImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| CardError::decode(format!("avatar bytes: {e}")))?;
    Ok(img.to_rgba8())
}

/// Center-crop to square and resize to `size` x `size`.
///
/// The filter is fixed (Lanczos3) so identical input bytes always produce
/// identical pixels.
pub fn fit_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let side = img.width().min(img.height());
    let left = (img.width() - side) / 2;
    let top = (img.height() - side) / 2;
    let square = if side == img.width() && side == img.height() {
        img.clone()
    } else {
        imageops::crop_imm(img, left, top, side, side).to_image()
    };
    if side == size {
        square
    } else {
        imageops::resize(&square, size, size, imageops::FilterType::Lanczos3)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
