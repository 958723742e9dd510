// SPDX-License-Identifier: MPL-2.0
//! Icon cache over the bundled `assets/icons/` namespace.
//!
//! Icons are looked up by symbolic name and pixel scale, decoded once and kept
//! for the life of the cache. The cache is an explicit object owned by the
//! application root; there is no process-wide icon state.
//!
//! # Resource Naming
//!
//! For each extension in [`ICON_EXTENSIONS`], the lookup tries
//! `<name>_x<scale>.<ext>` then `<name>.<ext>`. SVG resources are rasterized
//! to `scale x scale` pixels; raster resources are decoded at their own size.
//!
//! # Usage
//!
//! ```ignore
//! let mut icons = IconCache::new();
//! let open = icons.get("open")?;
//! let status = icons.get_scaled("error", STATUS_ICON_SCALE)?;
//! assert!(Arc::ptr_eq(&open, &icons.get("open")?));
//! ```

use crate::config::DEFAULT_ICON_SCALE;
use crate::error::{Error, Result};
use iced::widget::image::Handle;
use resvg::usvg;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

/// Extensions tried in order for every candidate name.
pub const ICON_EXTENSIONS: &[&str] = &["svg", "png", "gif", "jpg"];

/// A decoded icon: straight (non-premultiplied) RGBA pixels plus a render handle.
#[derive(Debug, Clone)]
pub struct Icon {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub handle: Handle,
}

impl Icon {
    fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = Handle::from_rgba(width, height, pixels.clone());
        Self {
            width,
            height,
            pixels,
            handle,
        }
    }
}

/// Memoized `name#scale` to icon lookup. Entries are never evicted.
#[derive(Debug, Default)]
pub struct IconCache {
    entries: HashMap<String, Arc<Icon>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the icon at the default scale.
    pub fn get(&mut self, name: &str) -> Result<Arc<Icon>> {
        self.get_scaled(name, DEFAULT_ICON_SCALE)
    }

    /// Returns the icon for `(name, scale)`, loading it on first request.
    pub fn get_scaled(&mut self, name: &str, scale: u32) -> Result<Arc<Icon>> {
        let key = cache_key(name, scale);
        if let Some(icon) = self.entries.get(&key) {
            return Ok(Arc::clone(icon));
        }

        let icon = Arc::new(load_icon(name, scale)?);
        self.entries.insert(key, Arc::clone(&icon));
        Ok(icon)
    }

    /// Read-only lookup of an already loaded icon.
    pub fn cached(&self, name: &str, scale: u32) -> Option<Arc<Icon>> {
        self.entries.get(&cache_key(name, scale)).cloned()
    }

    /// Loads every `(name, scale)` pair, logging the ones that are missing.
    pub fn preload<'a>(&mut self, requests: impl IntoIterator<Item = (&'a str, u32)>) {
        for (name, scale) in requests {
            if let Err(err) = self.get_scaled(name, scale) {
                log::warn!("{err}");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cache_key(name: &str, scale: u32) -> String {
    format!("{name}#{scale}")
}

fn load_icon(name: &str, scale: u32) -> Result<Icon> {
    let candidates = ICON_EXTENSIONS.iter().flat_map(|ext| {
        [
            (format!("{name}_x{scale}.{ext}"), *ext),
            (format!("{name}.{ext}"), *ext),
        ]
    });

    for (file, ext) in candidates {
        let Some(asset) = IconAssets::get(&file) else {
            continue;
        };

        let decoded = if ext == "svg" {
            rasterize_svg(&asset.data, scale)
        } else {
            decode_raster(&asset.data)
        };

        return decoded.map_err(|reason| Error::IconNotFound {
            name: name.to_string(),
            reason: format!("{file}: {reason}"),
        });
    }

    Err(Error::IconNotFound {
        name: name.to_string(),
        reason: "no bundled resource".to_string(),
    })
}

/// Renders an SVG document into a `scale x scale` pixmap.
fn rasterize_svg(data: &[u8], scale: u32) -> std::result::Result<Icon, String> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| e.to_string())?;

    let target = scale.max(1);
    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        target as f32 / size.width(),
        target as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(target, target)
        .ok_or_else(|| "failed to allocate pixmap".to_string())?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(Icon::from_rgba(target, target, pixels))
}

fn decode_raster(data: &[u8]) -> std::result::Result<Icon, String> {
    let rgba = image_rs::load_from_memory(data)
        .map_err(|e| e.to_string())?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Icon::from_rgba(width, height, rgba.into_vec()))
}
