use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{
    core::Rgba8,
    error::{CardError, CardResult},
};

/// Every tunable of the card layout in one immutable value.
///
/// The composer takes a reference at construction; nothing in the pipeline
/// reads module-level state. Defaults mirror the stock layout; deployments
/// override via JSON ([`CardConfig::from_path`]).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Background image; its dimensions become the canvas dimensions.
    pub background_path: PathBuf,
    /// TrueType font used for every text block.
    pub font_path: PathBuf,

    /// Username font size in px.
    pub username_size_px: f32,
    /// Greeting line font size in px.
    pub greeting_size_px: f32,
    /// Badge label/name font size in px.
    pub badge_size_px: f32,
    /// Member-count label font size in px.
    pub count_size_px: f32,

    /// Side length of the composited member avatar.
    pub avatar_size: u32,
    /// Top-left corner of the member avatar on the canvas.
    pub avatar_position: [i32; 2],
    /// Width of the shadow penumbra around the avatar; 0 disables the shadow.
    pub shadow_offset: u32,

    /// Greeting line drawn under the avatar.
    pub greeting_text: String,
    /// Gap between the avatar's bottom edge and the greeting line.
    pub greeting_gap_px: i32,
    /// Vertical step from the greeting anchor to the username anchor.
    pub username_gap_px: i32,
    /// Text wider than `canvas_width - 2 * side_margin_px` is truncated with
    /// an ellipsis before placement.
    pub side_margin_px: u32,

    pub greeting_color: Rgba8,
    pub username_color: Rgba8,
    pub count_color: Rgba8,

    /// Badge label drawn before the inviter's avatar.
    pub badge_label_text: String,
    /// Badge panel height.
    pub badge_height: u32,
    pub badge_corner_radius: u32,
    /// Horizontal panel padding on each side of the content.
    pub badge_padding_x: u32,
    /// Vertical offset from the content anchor up to the panel's top edge.
    pub badge_padding_y: u32,
    /// Horizontal room reserved between label and inviter name: the small
    /// avatar plus its trailing gap.
    pub badge_content_gap: u32,
    /// Gap between the label and the small avatar (and after the avatar).
    pub badge_avatar_gap: u32,
    /// Side length of the inviter's avatar inside the badge.
    pub badge_avatar_size: u32,
    /// How far the small avatar is raised above the text anchor.
    pub badge_avatar_raise: i32,
    /// Distance from the canvas bottom to the badge content anchor.
    pub badge_bottom_margin: u32,
    pub badge_fill: Rgba8,
    pub badge_outline: Rgba8,
    pub badge_label_color: Rgba8,
    pub badge_name_color: Rgba8,

    /// Right margin of the member-count label.
    pub count_right_margin: u32,
    /// Distance from the canvas bottom to the member-count anchor.
    pub count_bottom_margin: u32,

    /// Directory the published artifacts land in.
    pub output_dir: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            background_path: PathBuf::from("assets/background.png"),
            font_path: PathBuf::from("assets/GeistMono-Regular.ttf"),
            username_size_px: 40.0,
            greeting_size_px: 35.0,
            badge_size_px: 30.0,
            count_size_px: 25.0,
            avatar_size: 300,
            avatar_position: [370, 80],
            shadow_offset: 10,
            greeting_text: "Welcome to the Club".to_string(),
            greeting_gap_px: 20,
            username_gap_px: 50,
            side_margin_px: 20,
            greeting_color: Rgba8::WHITE,
            username_color: Rgba8::opaque(0xa1, 0xc0, 0xde),
            count_color: Rgba8::WHITE,
            badge_label_text: "Invited by".to_string(),
            badge_height: 60,
            badge_corner_radius: 20,
            badge_padding_x: 20,
            badge_padding_y: 10,
            badge_content_gap: 50,
            badge_avatar_gap: 10,
            badge_avatar_size: 40,
            badge_avatar_raise: 5,
            badge_bottom_margin: 80,
            badge_fill: Rgba8::new(0, 0, 0, 128),
            badge_outline: Rgba8::opaque(0x6f, 0x6f, 0x70),
            badge_label_color: Rgba8::opaque(0x6f, 0x6f, 0x70),
            badge_name_color: Rgba8::opaque(0xa3, 0xc2, 0xe0),
            count_right_margin: 20,
            count_bottom_margin: 40,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl CardConfig {
    /// Load a config from a JSON file. Absent fields keep their defaults.
    pub fn from_path(path: &Path) -> CardResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .map_err(|e| CardError::validation(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CardResult<()> {
        for (name, size) in [
            ("username_size_px", self.username_size_px),
            ("greeting_size_px", self.greeting_size_px),
            ("badge_size_px", self.badge_size_px),
            ("count_size_px", self.count_size_px),
        ] {
            if !size.is_finite() || size <= 0.0 {
                return Err(CardError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.avatar_size == 0 {
            return Err(CardError::validation("avatar_size must be > 0"));
        }
        if self.badge_avatar_size == 0 {
            return Err(CardError::validation("badge_avatar_size must be > 0"));
        }
        if self.badge_corner_radius * 2 > self.badge_height {
            return Err(CardError::validation(
                "badge_corner_radius must not exceed half the badge height",
            ));
        }
        if self.badge_content_gap < self.badge_avatar_size {
            return Err(CardError::validation(
                "badge_content_gap must leave room for the inviter avatar",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
