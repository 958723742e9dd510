// SPDX-License-Identifier: MPL-2.0
//! Image handling: decoding, pixel transforms and the image collection model.
//!
//! [`collection::ImageCollection`] is the only stateful type here; the other
//! submodules are free functions it is built from.

pub mod collection;
pub mod image;
pub mod image_transform;

use image_rs::ImageFormat;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use collection::ImageCollection;
pub use image::{load_image, ImageData};

/// Extensions picked up when building the sibling list and offered by the
/// open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "gif", "png"];

/// Encode targets offered by the convert dialog.
pub const CONVERT_EXTENSIONS: &[&str] = &["png", "jpg", "gif", "bmp", "tiff", "webp"];

/// Maps a file extension (case-insensitive) to the encoder used to write it.
pub fn format_for_extension(extension: &str) -> Option<ImageFormat> {
    let format = match extension.to_ascii_lowercase().as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        "gif" => ImageFormat::Gif,
        "bmp" => ImageFormat::Bmp,
        "tif" | "tiff" => ImageFormat::Tiff,
        "webp" => ImageFormat::WebP,
        _ => return None,
    };
    Some(format)
}

/// Returns the first free `<dir>/<stem><n>.<extension>` next to `source`,
/// where `n` is empty, then 1, 2, and so on.
pub fn convert_destination(source: &Path, extension: &str) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let candidate = |count: u32| {
        let suffix = if count == 0 {
            String::new()
        } else {
            count.to_string()
        };
        dir.join(format!("{stem}{suffix}.{extension}"))
    };

    (0..)
        .map(candidate)
        .find(|path| !path.exists())
        .unwrap_or_else(|| candidate(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn format_mapping_is_case_insensitive() {
        assert_eq!(format_for_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(format_for_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(format_for_extension("Png"), Some(ImageFormat::Png));
        assert_eq!(format_for_extension("xcf"), None);
    }

    #[test]
    fn every_convert_extension_has_an_encoder() {
        for ext in CONVERT_EXTENSIONS {
            assert!(format_for_extension(ext).is_some(), "{ext} has no encoder");
        }
    }

    #[test]
    fn convert_destination_skips_existing_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = temp_dir.path().join("photo.png");

        assert_eq!(
            convert_destination(&source, "jpg"),
            temp_dir.path().join("photo.jpg")
        );

        fs::write(temp_dir.path().join("photo.jpg"), b"x").expect("write");
        fs::write(temp_dir.path().join("photo1.jpg"), b"x").expect("write");
        assert_eq!(
            convert_destination(&source, "jpg"),
            temp_dir.path().join("photo2.jpg")
        );
    }
}
