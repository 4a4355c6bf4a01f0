// Asset access and sprite sheet validation
//
// Skin images come from an `AssetSource` (the filesystem in the game, an
// in-memory map in tests) and are only kept once they decode into a
// cell-aligned `SpriteSheet`.

mod sheet;
mod source;

pub use sheet::{validate, CellRegion, SpriteSheet, CELL_SIZE};
pub use source::{AssetSource, FsAssetSource, MemoryAssetSource};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an image could not be read. Only used for log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreadableReason {
    Missing,
    AccessDenied,
    Corrupt,
}

impl UnreadableReason {
    /// Classify an I/O failure from an asset source
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => UnreadableReason::Missing,
            io::ErrorKind::PermissionDenied => UnreadableReason::AccessDenied,
            _ => UnreadableReason::Corrupt,
        }
    }
}

impl fmt::Display for UnreadableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreadableReason::Missing => write!(f, "the file is missing"),
            UnreadableReason::AccessDenied => {
                write!(f, "access was denied, check that the game has permission")
            }
            UnreadableReason::Corrupt => write!(f, "the file is probably formatted wrong"),
        }
    }
}

/// Skin image validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Could not read image at {}: {reason}", .path.display())]
    ImageUnreadable {
        path: PathBuf,
        reason: UnreadableReason,
    },

    #[error(
        "Custom skin at {} is {width}x{height}, width and height should be a multiple of 8",
        .path.display()
    )]
    InvalidDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

impl ValidationError {
    /// Path of the image that failed
    pub fn path(&self) -> &std::path::Path {
        match self {
            ValidationError::ImageUnreadable { path, .. } => path,
            ValidationError::InvalidDimensions { path, .. } => path,
        }
    }
}
