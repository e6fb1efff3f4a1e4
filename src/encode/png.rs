use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::CardResult;

/// Encode a canvas as PNG bytes in memory.
pub fn encode_png(canvas: &RgbaImage) -> CardResult<Vec<u8>> {
    let mut buf = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

pub fn ensure_parent_dir(path: &Path) -> CardResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `bytes` to `path` through a temporary sibling and an atomic rename.
///
/// A crash mid-write leaves only the temp file behind; `path` itself is never
/// observable in a partial state.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> CardResult<()> {
    ensure_parent_dir(path)?;
    let tmp = tmp_sibling(path);
    std::fs::write(&tmp, bytes)
        .with_context(|| format!("write temp artifact '{}'", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(anyhow::Error::new(e)
            .context(format!("publish artifact '{}'", path.display()))
            .into());
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
