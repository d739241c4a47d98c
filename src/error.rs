//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while drawing or writing icons
#[derive(Error, Debug)]
pub enum IconError {
    /// Edge length must be at least one pixel
    #[error("Invalid icon size: {0} (edge length must be positive)")]
    InvalidSize(u32),

    /// Output could not be written, renamed or read back
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the canvas
    #[error("Failed to encode {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    /// Splits encoder errors so that file system failures surface as `Io`.
    pub(crate) fn from_image(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => IconError::io(path, source),
            source => IconError::Encoding {
                path: path.into(),
                source,
            },
        }
    }
}
