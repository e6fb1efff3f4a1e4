use image::RgbaImage;

use crate::{
    assets::{decode, store::AssetStore},
    config::CardConfig,
    encode::png,
    foundation::error::{CardError, CardResult},
    model::{Inviter, WelcomeCard, WelcomeCardRequest},
    render::{
        badge, composite, mask,
        text::{TextMetrics, centered_x},
    },
};

/// Pipeline stages that can fail mid-composition. Reported inside
/// [`CardError::Generation`] so callers see where a card died.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    AvatarComposite,
    BadgeDraw,
    Encode,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stage::AvatarComposite => "avatar compositing",
            Stage::BadgeDraw => "badge drawing",
            Stage::Encode => "png encoding",
        })
    }
}

/// Composes one welcome card per invocation.
///
/// Each request gets its own canvas cloned from the warm store's background,
/// mutated through a fixed stage sequence: avatar (shadow first, circle on
/// top), greeting/username stack, optional inviter badge, member-count label,
/// PNG encode. Stages never branch back; the first failure wraps into
/// [`CardError::Generation`] and no artifact is produced. The composer holds
/// only shared read-only state, so concurrent invocations need no locking.
pub struct CardComposer<'a> {
    assets: &'a AssetStore,
    cfg: &'a CardConfig,
}

impl<'a> CardComposer<'a> {
    pub fn new(assets: &'a AssetStore, cfg: &'a CardConfig) -> Self {
        Self { assets, cfg }
    }

    /// Compose a card and return the encoded PNG in memory.
    ///
    /// Persisting is a separate step ([`WelcomeCard::write_to_dir`]); holding
    /// the bytes here keeps failed requests free of partial artifacts.
    #[tracing::instrument(skip(self, req), fields(member_id = req.member_id))]
    pub fn compose(&self, req: &WelcomeCardRequest) -> CardResult<WelcomeCard> {
        let mut canvas = self.assets.background().clone();
        let metrics = TextMetrics::new(self.assets.font());

        self.composite_avatar(&mut canvas, &req.member_avatar)
            .map_err(|e| CardError::generation(Stage::AvatarComposite, e))?;
        self.draw_text_stack(&mut canvas, &metrics, &req.member_name);
        if let Some(inviter) = &req.inviter {
            self.draw_badge(&mut canvas, &metrics, inviter)
                .map_err(|e| CardError::generation(Stage::BadgeDraw, e))?;
        }
        self.draw_member_count(&mut canvas, &metrics, req.member_count);

        let bytes =
            png::encode_png(&canvas).map_err(|e| CardError::generation(Stage::Encode, e))?;
        Ok(WelcomeCard {
            member_id: req.member_id,
            width: canvas.width(),
            height: canvas.height(),
            png: bytes,
        })
    }

    fn composite_avatar(&self, canvas: &mut RgbaImage, avatar_bytes: &[u8]) -> CardResult<()> {
        let cfg = self.cfg;
        let decoded = decode::decode_avatar(avatar_bytes)?;
        let circle = mask::circle_crop(&decode::fit_square(&decoded, cfg.avatar_size));

        let [ax, ay] = cfg.avatar_position;
        if cfg.shadow_offset > 0 {
            // Shadow goes down first so the avatar occludes the inner rings
            // and only the penumbra stays visible.
            let shadow = mask::shadow_layer(cfg.avatar_size, cfg.shadow_offset);
            let off = i64::from(cfg.shadow_offset);
            composite::overlay(canvas, &shadow, i64::from(ax) - off, i64::from(ay) - off);
        }
        composite::overlay(canvas, &circle, i64::from(ax), i64::from(ay));
        Ok(())
    }

    fn draw_text_stack(&self, canvas: &mut RgbaImage, metrics: &TextMetrics<'_>, name: &str) {
        let cfg = self.cfg;
        let canvas_w = canvas.width();
        let max_w = canvas_w.saturating_sub(2 * cfg.side_margin_px);
        let greeting_y = cfg.avatar_position[1] + cfg.avatar_size as i32 + cfg.greeting_gap_px;

        let greeting = metrics.truncate_to_width(&cfg.greeting_text, cfg.greeting_size_px, max_w);
        let ext = metrics.measure(&greeting, cfg.greeting_size_px);
        metrics.draw(
            canvas,
            &greeting,
            cfg.greeting_size_px,
            centered_x(canvas_w, ext.width),
            greeting_y,
            cfg.greeting_color,
        );

        let username = metrics.truncate_to_width(name, cfg.username_size_px, max_w);
        let ext = metrics.measure(&username, cfg.username_size_px);
        metrics.draw(
            canvas,
            &username,
            cfg.username_size_px,
            centered_x(canvas_w, ext.width),
            greeting_y + cfg.username_gap_px,
            cfg.username_color,
        );
    }

    fn draw_badge(
        &self,
        canvas: &mut RgbaImage,
        metrics: &TextMetrics<'_>,
        inviter: &Inviter,
    ) -> CardResult<()> {
        let decoded = decode::decode_avatar(&inviter.avatar)?;
        let circle = mask::circle_crop(&decode::fit_square(&decoded, self.cfg.badge_avatar_size));
        badge::draw_badge(canvas, self.cfg, metrics, &inviter.name, &circle);
        Ok(())
    }

    fn draw_member_count(&self, canvas: &mut RgbaImage, metrics: &TextMetrics<'_>, count: u64) {
        let cfg = self.cfg;
        let (w, h) = canvas.dimensions();
        let label = format!("Member: #{count}");
        let ext = metrics.measure(&label, cfg.count_size_px);
        let x = w as i32 - ext.width as i32 - cfg.count_right_margin as i32;
        let y = h as i32 - cfg.count_bottom_margin as i32;
        metrics.draw(canvas, &label, cfg.count_size_px, x, y, cfg.count_color);
    }
}
