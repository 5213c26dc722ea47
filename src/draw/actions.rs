use crate::draw::error::DrawError;
use crate::draw::model::Color;
use crate::draw::surface::PixelSurface;
use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_FILENAME: &str = "whiteboard.png";

/// Fills the whole surface with `background`. There is no way back.
pub fn clear(surface: &mut PixelSurface, background: Color) {
    surface.fill(background);
}

/// Encodes the surface as an RGBA PNG of the same dimensions.
pub fn encode_png(surface: &PixelSurface) -> Result<Vec<u8>, DrawError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            surface.rgba_pixels(),
            surface.width(),
            surface.height(),
            ColorType::Rgba8,
        )
        .map_err(|e| DrawError::Export(e.to_string()))?;
    Ok(out)
}

pub fn export_path(output_dir: &Path) -> PathBuf {
    output_dir.join(EXPORT_FILENAME)
}

/// Writes encoded bytes to `<output_dir>/whiteboard.png`.
///
/// The bytes go to a sibling temp file first and are renamed into place, so an
/// interrupted write never leaves a truncated `whiteboard.png` behind.
pub fn deliver_png(bytes: &[u8], output_dir: &Path) -> Result<PathBuf> {
    if bytes.is_empty() {
        anyhow::bail!("refusing to deliver an empty export");
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create export folder {}", output_dir.display()))?;
    let target = export_path(output_dir);
    let staging = output_dir.join(format!(".{EXPORT_FILENAME}.part"));
    fs::write(&staging, bytes).with_context(|| format!("write {}", staging.display()))?;
    fs::rename(&staging, &target)
        .with_context(|| format!("move export into place at {}", target.display()))?;
    Ok(target)
}
