// SPDX-License-Identifier: MPL-2.0
//! The image collection model: the open file, its pixels, and its siblings.
//!
//! Every operation either completes or leaves the previous state untouched.
//! Nothing here touches the UI; the shell calls one operation per user action
//! and re-reads the accessors afterwards.

use crate::config::{ResampleFilter, SortOrder};
use crate::directory_scanner::ImageList;
use crate::error::{Error, Result};
use crate::media::{self, image_transform};
use image_rs::{DynamicImage, GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

/// State that only exists while a file is open.
///
/// `siblings` always has a current index pointing at `path`.
#[derive(Debug, Clone)]
struct OpenImage {
    path: PathBuf,
    pixels: DynamicImage,
    siblings: ImageList,
    modified: bool,
}

impl OpenImage {
    fn position(&self) -> usize {
        self.siblings.current_index().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    current: Option<OpenImage>,
    sort_order: SortOrder,
    filter: ResampleFilter,
}

impl ImageCollection {
    pub fn new(sort_order: SortOrder, filter: ResampleFilter) -> Self {
        Self {
            current: None,
            sort_order,
            filter,
        }
    }

    /// Decodes `path` and rebuilds the sibling list around it.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let pixels = media::load_image(path)?;
        let siblings = ImageList::scan_directory(path, self.sort_order)?;
        let position = siblings
            .current_index()
            .ok_or_else(|| Error::unreadable(path, "file is not listed in its directory"))?;

        log::info!(
            "Opened {} ({}x{}), {}/{}",
            path.display(),
            pixels.width(),
            pixels.height(),
            position + 1,
            siblings.len()
        );

        self.current = Some(OpenImage {
            path: path.to_path_buf(),
            pixels,
            siblings,
            modified: false,
        });
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        let open = self.opened()?;
        if open.siblings.is_at_last() {
            return Err(Error::NoMoreImages);
        }
        let index = open.position() + 1;
        self.open_sibling(index)
    }

    pub fn prev(&mut self) -> Result<()> {
        let open = self.opened()?;
        if open.siblings.is_at_first() {
            return Err(Error::NoMoreImages);
        }
        let index = open.position() - 1;
        self.open_sibling(index)
    }

    pub fn first(&mut self) -> Result<()> {
        self.opened()?;
        self.open_sibling(0)
    }

    pub fn last(&mut self) -> Result<()> {
        let last = self.opened()?.siblings.len().saturating_sub(1);
        self.open_sibling(last)
    }

    /// Re-reads the current file from disk, discarding in-memory transforms.
    pub fn reload(&mut self) -> Result<()> {
        let path = self.opened()?.path.clone();
        self.open(&path)
    }

    fn open_sibling(&mut self, index: usize) -> Result<()> {
        let path = self
            .opened()?
            .siblings
            .get(index)
            .map(Path::to_path_buf)
            .ok_or(Error::NoMoreImages)?;
        self.open(&path)
    }

    /// Rotates the pixels about their center; positive angles turn clockwise.
    pub fn rotate(&mut self, radians: f64) -> Result<()> {
        let filter = self.filter;
        let open = self.opened_mut()?;
        if !radians.is_finite() {
            return Err(Error::InvalidAngle { radians });
        }

        open.pixels = image_transform::rotate(&open.pixels, radians, filter);
        open.modified = true;
        Ok(())
    }

    /// Resamples the pixels to `width` x `height`.
    pub fn scale(&mut self, width: i64, height: i64) -> Result<()> {
        let filter = self.filter;
        let open = self.opened_mut()?;
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            return Err(Error::InvalidDimensions { width, height });
        };
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        open.pixels = image_transform::resize(&open.pixels, w, h, filter);
        open.modified = true;
        Ok(())
    }

    /// Writes the pixels back to the current file in its own format.
    ///
    /// Succeeds without writing when nothing changed since the last save.
    pub fn save(&mut self) -> Result<()> {
        let open = self.opened_mut()?;
        if !open.modified {
            return Ok(());
        }

        let format = format_of(&open.path)?;
        write_image(&open.pixels, &open.path, format)?;
        open.modified = false;
        log::info!("Saved {}", open.path.display());
        Ok(())
    }

    /// Encodes the pixels as `format` into `path`. The modified flag is kept.
    ///
    /// A partially written `path` is left for the caller to clean up.
    pub fn save_as(&self, path: &Path, format: &str) -> Result<()> {
        let open = self.opened()?;
        let format = Self::possible_extensions_for_convert()
            .iter()
            .find(|ext| ext.eq_ignore_ascii_case(format))
            .and_then(|ext| media::format_for_extension(ext))
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;

        write_image(&open.pixels, path, format)?;
        log::info!("Wrote {} as {:?}", path.display(), format);
        Ok(())
    }

    /// Extensions accepted by [`Self::save_as`].
    pub fn possible_extensions_for_convert() -> &'static [&'static str] {
        media::CONVERT_EXTENSIONS
    }

    pub fn is_opened(&self) -> bool {
        self.current.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|open| !open.siblings.is_at_last())
    }

    pub fn has_prev(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|open| !open.siblings.is_at_first())
    }

    /// Position of the current file in the sibling list.
    pub fn index_of_image(&self) -> Option<usize> {
        self.current.as_ref().map(OpenImage::position)
    }

    pub fn count_of_images(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, |open| open.siblings.len())
    }

    pub fn is_modified(&self) -> bool {
        self.current.as_ref().is_some_and(|open| open.modified)
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.current.as_ref().map(|open| open.pixels.dimensions())
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current.as_ref().map(|open| open.path.as_path())
    }

    pub fn pixels(&self) -> Option<&DynamicImage> {
        self.current.as_ref().map(|open| &open.pixels)
    }

    fn opened(&self) -> Result<&OpenImage> {
        self.current.as_ref().ok_or(Error::NoImageLoaded)
    }

    fn opened_mut(&mut self) -> Result<&mut OpenImage> {
        self.current.as_mut().ok_or(Error::NoImageLoaded)
    }
}

fn format_of(path: &Path) -> Result<ImageFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(media::format_for_extension)
        .or_else(|| ImageFormat::from_path(path).ok())
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
}

fn write_image(pixels: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
    image_transform::prepare_for_encoding(pixels, format)
        .save_with_format(path, format)
        .map_err(|err| {
            log::error!("Writing {} failed: {err}", path.display());
            Error::write(path, err)
        })
}
