//! Welcard composes personalized welcome-card raster images.
//!
//! One [`WelcomeCardRequest`] (already-fetched avatar bytes plus plain member
//! data) goes in; one flattened PNG comes out. The pipeline over a single
//! owned canvas:
//!
//! 1. **Warm up**: [`AssetStore::load`] front-loads the background and font
//!    IO; handles are immutable afterwards.
//! 2. **Composite**: [`CardComposer::compose`] pastes the soft shadow, the
//!    circularly-masked avatar, the centered greeting/username stack, the
//!    optional "invited by" badge, and the member-count label.
//! 3. **Encode**: the canvas becomes PNG bytes held in memory;
//!    [`WelcomeCard::write_to_dir`] publishes them atomically.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical request bytes produce pixel-identical
//!   output; resampling and masking use fixed policies.
//! - **No IO in composition**: network fetching and inviter resolution are a
//!   collaborator's job; the core only does pixel math over decoded data.
//! - **No partial artifacts**: a request either yields a complete image or
//!   nothing observable on disk.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod encode;
mod foundation;
mod model;
mod render;

pub use assets::decode::{decode_avatar, fit_square};
pub use assets::store::AssetStore;
pub use config::CardConfig;
pub use encode::png::{encode_png, ensure_parent_dir, write_atomic};
pub use foundation::core::Rgba8;
pub use foundation::error::{CardError, CardResult};
pub use model::{Inviter, WelcomeCard, WelcomeCardRequest};
pub use render::badge::{BadgeLayout, draw_badge, render_panel};
pub use render::composite::{over, overlay};
pub use render::mask::{circle_crop, shadow_layer};
pub use render::pipeline::{CardComposer, Stage};
pub use render::text::{TextExtent, TextMetrics, centered_x};
