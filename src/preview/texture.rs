//! Background image textures for catalog entries that point at a PNG

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use egui::{pos2, ColorImage, Rect, TextureHandle, TextureOptions, Vec2};
use tracing::{info, warn};

use super::catalog::ImageCatalog;

/// Lazily loaded textures, keyed by catalog slot
#[derive(Default)]
pub struct BackgroundTextures {
    loaded: HashMap<usize, TextureHandle>,
    failed: HashSet<usize>,
}

impl BackgroundTextures {
    /// Texture for a catalog slot, loading it on first use.
    /// Returns `None` for gradient-only entries and for images that failed to load.
    pub fn get(&mut self, ctx: &egui::Context, catalog: &ImageCatalog, slot: usize) -> Option<&TextureHandle> {
        if self.failed.contains(&slot) {
            return None;
        }
        let image = catalog.images().get(slot)?;
        let path = image.path.as_ref()?;

        if !self.loaded.contains_key(&slot) {
            match load_png(path) {
                Ok(color_image) => {
                    let handle = ctx.load_texture(
                        format!("banner-background-{slot}"),
                        color_image,
                        TextureOptions::LINEAR,
                    );
                    info!(slot, path = %path.display(), "Loaded background image");
                    self.loaded.insert(slot, handle);
                }
                Err(err) => {
                    warn!(slot, path = %path.display(), error = ?err, "Failed to load background image, using gradient");
                    self.failed.insert(slot);
                    return None;
                }
            }
        }
        self.loaded.get(&slot)
    }
}

/// Decode a PNG file into an egui image (RGB is promoted to RGBA)
pub fn load_png(path: &Path) -> Result<ColorImage> {
    let file = File::open(path).with_context(|| format!("Failed to open image {:?}", path))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to read PNG header of {:?}", path))?;
    let mut buf = vec![0; reader.output_buffer_size().context("PNG output buffer too large")?];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode PNG frame of {:?}", path))?;
    let pixels = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => pixels.to_vec(),
        png::ColorType::Rgb => {
            let mut rgba = Vec::with_capacity(pixels.len() / 3 * 4);
            for chunk in pixels.chunks_exact(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(0xFF);
            }
            rgba
        }
        other => {
            return Err(anyhow!(
                "Unsupported background image color type {:?} (expected RGB or RGBA)",
                other
            ))
        }
    };

    Ok(ColorImage::from_rgba_unmultiplied(
        [info.width as usize, info.height as usize],
        &rgba,
    ))
}

/// UV rectangle that makes an image cover `target` while staying centered.
/// The longer axis (relative to the target's aspect) is cropped evenly.
pub fn cover_uv(image_size: Vec2, target: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }

    let image_aspect = image_size.x / image_size.y;
    let target_aspect = target.x / target.y;

    if image_aspect > target_aspect {
        // Image is wider: crop left and right
        let visible = target_aspect / image_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        // Image is taller: crop top and bottom
        let visible = image_aspect / target_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}
