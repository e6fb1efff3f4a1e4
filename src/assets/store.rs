use image::RgbaImage;
use rusttype::Font;

use crate::{
    config::CardConfig,
    foundation::error::{CardError, CardResult},
};

/// Immutable store of warm-up assets: the background raster and the font.
///
/// Loading front-loads all filesystem IO so per-request composition stays
/// pure over already-decoded data. Handles are read-only afterwards and safe
/// for unsynchronized concurrent reads; concurrent composer invocations share
/// one store by reference.
#[derive(Debug)]
pub struct AssetStore {
    background: RgbaImage,
    font: Font<'static>,
}

impl AssetStore {
    /// Load the background and font named by `cfg`.
    ///
    /// Failures here are fatal for card generation as a whole, not scoped to
    /// a request: [`CardError::AssetMissing`] for the background,
    /// [`CardError::FontLoad`] for the font.
    pub fn load(cfg: &CardConfig) -> CardResult<Self> {
        let background = image::open(&cfg.background_path)
            .map_err(|e| {
                CardError::asset_missing(format!(
                    "background '{}': {e}",
                    cfg.background_path.display()
                ))
            })?
            .to_rgba8();

        let font_bytes = std::fs::read(&cfg.font_path).map_err(|e| {
            CardError::font_load(format!("font '{}': {e}", cfg.font_path.display()))
        })?;
        let font = Font::try_from_vec(font_bytes).ok_or_else(|| {
            CardError::font_load(format!(
                "font '{}': not a parseable TrueType collection",
                cfg.font_path.display()
            ))
        })?;

        tracing::debug!(
            width = background.width(),
            height = background.height(),
            "asset store warmed up"
        );

        Ok(Self { background, font })
    }

    /// The background raster; cloned per request to become the canvas.
    pub fn background(&self) -> &RgbaImage {
        &self.background
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    /// Canvas dimensions every card produced from this store will have.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.background.width(), self.background.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
