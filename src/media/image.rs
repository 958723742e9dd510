// SPDX-License-Identifier: MPL-2.0
//! Image decoding and conversion to a renderable handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// Pixels prepared for the image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Converts decoded pixels for display.
    #[must_use]
    pub fn from_dynamic(dynamic: &DynamicImage) -> Self {
        let (width, height) = dynamic.dimensions();
        Self::from_rgba(width, height, dynamic.to_rgba8().into_vec())
    }
}

/// Reads and decodes the image at `path`.
///
/// # Errors
///
/// - [`Error::UnreadableFile`] when the bytes cannot be read
/// - [`Error::UnsupportedFormat`] when the content cannot be decoded
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| Error::unreadable(path, err))?;
    image_rs::load_from_memory(&bytes).map_err(|err| Error::UnsupportedFormat(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.dimensions(), (4, 2));
    }

    #[test]
    fn load_missing_image_returns_unreadable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::UnreadableFile { path, .. }) => assert_eq!(path, missing_path),
            other => panic!("expected UnreadableFile error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_unsupported_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::UnsupportedFormat(message)) => assert!(!message.is_empty()),
            other => panic!("expected UnsupportedFormat error, got {other:?}"),
        }
    }

    #[test]
    fn image_data_keeps_dimensions() {
        let dynamic = DynamicImage::ImageRgba8(RgbaImage::new(7, 3));
        let data = ImageData::from_dynamic(&dynamic);
        assert_eq!((data.width, data.height), (7, 3));
    }
}
