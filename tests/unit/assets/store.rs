use std::io::Cursor;

use image::{Rgba, RgbaImage};

use super::*;

const FONT_FIXTURE: &str = "tests/data/fonts/DejaVuSans.ttf";

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "welcard_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_background(dir: &std::path::Path, w: u32, h: u32) -> std::path::PathBuf {
    let path = dir.join("background.png");
    let img = RgbaImage::from_pixel(w, h, Rgba([7, 7, 7, 255]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(&path, &buf).unwrap();
    path
}

#[test]
fn load_exposes_background_and_canvas_size() {
    let tmp = temp_dir("store_load");
    std::fs::create_dir_all(&tmp).unwrap();
    let cfg = CardConfig {
        background_path: write_background(&tmp, 120, 80),
        font_path: FONT_FIXTURE.into(),
        ..CardConfig::default()
    };

    let store = AssetStore::load(&cfg).unwrap();
    assert_eq!(store.canvas_size(), (120, 80));
    assert_eq!(store.background().get_pixel(0, 0), &Rgba([7, 7, 7, 255]));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_background_is_fatal_asset_missing() {
    let cfg = CardConfig {
        background_path: "no/such/background.png".into(),
        font_path: FONT_FIXTURE.into(),
        ..CardConfig::default()
    };
    let err = AssetStore::load(&cfg).unwrap_err();
    assert!(matches!(err, CardError::AssetMissing(_)));
}

#[test]
fn unparsable_font_is_a_font_load_error() {
    let tmp = temp_dir("store_bad_font");
    std::fs::create_dir_all(&tmp).unwrap();
    let background = write_background(&tmp, 10, 10);
    let bogus_font = tmp.join("bogus.ttf");
    std::fs::write(&bogus_font, b"not a font").unwrap();

    let cfg = CardConfig {
        background_path: background,
        font_path: bogus_font,
        ..CardConfig::default()
    };
    let err = AssetStore::load(&cfg).unwrap_err();
    assert!(matches!(err, CardError::FontLoad(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_font_is_a_font_load_error() {
    let tmp = temp_dir("store_missing_font");
    std::fs::create_dir_all(&tmp).unwrap();
    let cfg = CardConfig {
        background_path: write_background(&tmp, 10, 10),
        font_path: "no/such/font.ttf".into(),
        ..CardConfig::default()
    };
    let err = AssetStore::load(&cfg).unwrap_err();
    assert!(matches!(err, CardError::FontLoad(_)));

    std::fs::remove_dir_all(&tmp).ok();
}
