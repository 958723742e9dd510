// SPDX-License-Identifier: MPL-2.0
//! Error taxonomy shared by the image model, the icon cache and the shell.
//!
//! Every variant is recoverable: the shell turns it into a status line
//! message through [`Error::i18n_key`] and [`Error::i18n_args`].

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The file could not be read from disk.
    #[error("Cannot read file {}: {reason}", path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    /// The bytes could not be decoded, or the requested encode target is unknown.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Navigation hit the start or the end of the sibling list.
    #[error("No more images in this direction")]
    NoMoreImages,

    /// Navigation or a transform was requested with nothing open.
    #[error("No image loaded")]
    NoImageLoaded,

    /// A scale request had a non-positive side.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// A rotation was requested with a NaN or infinite angle.
    #[error("Invalid rotation angle: {radians}")]
    InvalidAngle { radians: f64 },

    /// Encoding or writing the destination file failed.
    #[error("Cannot write file {}: {reason}", path.display())]
    WriteError { path: PathBuf, reason: String },

    /// No bundled resource matched the icon name.
    #[error("Icon '{name}' not found: {reason}")]
    IconNotFound { name: String, reason: String },

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn unreadable(path: &Path, reason: impl ToString) -> Self {
        Error::UnreadableFile {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(path: &Path, reason: impl ToString) -> Self {
        Error::WriteError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::UnreadableFile { .. } => "error-unreadable-file",
            Error::UnsupportedFormat(_) => "error-unsupported-format",
            Error::NoMoreImages => "error-no-more-images",
            Error::NoImageLoaded => "error-no-image-loaded",
            Error::InvalidDimensions { .. } => "error-invalid-dimensions",
            Error::InvalidAngle { .. } => "error-invalid-angle",
            Error::WriteError { .. } => "error-write",
            Error::IconNotFound { .. } => "error-icon-not-found",
            Error::Config(_) => "error-config",
        }
    }

    /// Returns the Fluent arguments the message for [`Self::i18n_key`] expects.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Error::UnreadableFile { path, reason } | Error::WriteError { path, reason } => vec![
                ("file", file_name(path)),
                ("reason", reason.clone()),
            ],
            Error::UnsupportedFormat(reason) | Error::Config(reason) => {
                vec![("reason", reason.clone())]
            }
            Error::InvalidDimensions { width, height } => vec![
                ("width", width.to_string()),
                ("height", height.to_string()),
            ],
            Error::InvalidAngle { radians } => vec![("angle", radians.to_string())],
            Error::IconNotFound { name, .. } => vec![("name", name.clone())],
            Error::NoMoreImages | Error::NoImageLoaded => Vec::new(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
