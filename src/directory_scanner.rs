// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for building the sibling list of an opened image.
//!
//! This module scans the parent directory of the opened file for supported
//! image formats, filters them, and sorts them according to the configured
//! sort order. Navigation over the list does not wrap around.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image files of one directory with the position of the opened file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the directory containing `current_file` for supported images.
    ///
    /// The opened file is always part of the list, even when its extension is
    /// outside the scanned set, so `current_index` is set whenever the file
    /// name resolves inside its directory.
    pub fn scan_directory(current_file: &Path, sort_order: SortOrder) -> Result<Self> {
        let parent = match current_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let current_name = current_file
            .file_name()
            .ok_or_else(|| Error::unreadable(current_file, "not a file path"))?;

        let mut image_files = Vec::new();
        let entries = std::fs::read_dir(parent).map_err(|err| Error::unreadable(parent, err))?;
        for entry in entries {
            let path = entry.map_err(|err| Error::unreadable(parent, err))?.path();
            if path.is_file() && is_supported_image(&path) {
                image_files.push(path);
            }
        }

        if !image_files
            .iter()
            .any(|path| path.file_name() == Some(current_name))
        {
            image_files.push(parent.join(current_name));
        }

        sort_image_files(&mut image_files, sort_order);

        let mut list = Self {
            image_files,
            current_index: None,
        };
        list.current_index = list.index_of(current_file);

        log::debug!(
            "Scanned {}: {} images, current index {:?}",
            parent.display(),
            list.len(),
            list.current_index
        );

        Ok(list)
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// Returns the index of a file of this directory, matched by name.
    pub fn index_of(&self, path: &Path) -> Option<usize> {
        let name = path.file_name()?;
        self.image_files
            .iter()
            .position(|p| p.file_name() == Some(name))
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn is_at_first(&self) -> bool {
        matches!(self.current_index, Some(0))
    }

    pub fn is_at_last(&self) -> bool {
        if self.image_files.is_empty() {
            return false;
        }
        matches!(self.current_index, Some(idx) if idx == self.image_files.len() - 1)
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

/// Checks if a file has one of the scanned image extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            media::SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Sorts image paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::Directory => {}
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_all_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let _img2 = create_test_image(temp_dir.path(), "b.png");
        let _img3 = create_test_image(temp_dir.path(), "c.gif");
        create_test_image(temp_dir.path(), "d.jpeg");
        create_test_image(temp_dir.path(), "not_image.txt");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 4);
        assert_eq!(list.current_index(), list.index_of(&img1));
        assert_eq!(list.get(0), Some(img1.as_path()));
    }

    #[test]
    fn scan_directory_sorts_alphabetically() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_image(temp_dir.path(), "c.jpg");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(&img_b, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.get(0), Some(img_a.as_path()));
        assert_eq!(list.get(1), Some(img_b.as_path()));
        assert_eq!(list.get(2), Some(img_c.as_path()));
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn directory_order_keeps_every_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_a = create_test_image(temp_dir.path(), "a.png");
        create_test_image(temp_dir.path(), "b.png");

        let list = ImageList::scan_directory(&img_a, SortOrder::Directory)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(list.current_index().unwrap()), Some(img_a.as_path()));
    }

    #[test]
    fn uppercase_extensions_are_supported() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.Png")));
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("photo.bmp")));
        assert!(!is_supported_image(Path::new("photo")));
    }

    #[test]
    fn opened_file_outside_scan_set_is_listed() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.png");
        let bmp = create_test_image(temp_dir.path(), "b.bmp");
        create_test_image(temp_dir.path(), "c.png");

        let list = ImageList::scan_directory(&bmp, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.len(), 3);
        assert_eq!(list.current_index(), Some(1));
    }

    #[test]
    fn is_at_first_and_is_at_last_detect_boundaries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "a.jpg");
        let img2 = create_test_image(temp_dir.path(), "b.jpg");
        let img3 = create_test_image(temp_dir.path(), "c.jpg");

        let list_first = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(list_first.is_at_first());
        assert!(!list_first.is_at_last());

        let list_last = ImageList::scan_directory(&img3, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(!list_last.is_at_first());
        assert!(list_last.is_at_last());

        let list_middle = ImageList::scan_directory(&img2, SortOrder::Alphabetical)
            .expect("failed to scan directory");
        assert!(!list_middle.is_at_first());
        assert!(!list_middle.is_at_last());
    }

    #[test]
    fn single_image_is_both_first_and_last() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img1 = create_test_image(temp_dir.path(), "only.jpg");

        let list = ImageList::scan_directory(&img1, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.current_index(), Some(0));
        assert!(list.is_at_first());
        assert!(list.is_at_last());
    }

    #[test]
    fn empty_list_has_no_boundaries() {
        let list = ImageList::new();
        assert!(list.current_index().is_none());
        assert!(list.is_empty());
        assert!(!list.is_at_first());
        assert!(!list.is_at_last());
    }

    #[test]
    fn index_of_matches_by_file_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_a = create_test_image(temp_dir.path(), "a.jpg");
        let img_b = create_test_image(temp_dir.path(), "b.jpg");

        let list = ImageList::scan_directory(&img_a, SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(list.index_of(&img_b), Some(1));
        assert_eq!(list.index_of(Path::new("missing.jpg")), None);
    }

    #[test]
    fn scan_of_missing_directory_is_unreadable() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone").join("a.png");

        let result = ImageList::scan_directory(&missing, SortOrder::Alphabetical);
        assert!(matches!(result, Err(Error::UnreadableFile { .. })));
    }
}
