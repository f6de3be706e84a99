//! Error types for the scrapbook

use thiserror::Error;

/// Main error type for scrapbook operations
#[derive(Error, Debug)]
pub enum ScrapbookError {
    /// Album JSON could not be parsed
    #[error("Album parse error: {0}")]
    AlbumParse(#[from] serde_json::Error),

    /// Album parsed but failed validation
    #[error("Invalid album: {0}")]
    InvalidAlbum(String),

    /// No embedded album with this name
    #[error("Unknown album preset: {0}")]
    UnknownPreset(String),

    /// Photo index outside the album's photo list
    #[error("Photo index {index} out of range (album has {count} photos)")]
    IndexOutOfRange { index: usize, count: usize },

    /// Visibility tracker was already released
    #[error("Visibility tracker has been released")]
    TrackerReleased,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ScrapbookError
pub type ScrapbookResult<T> = Result<T, ScrapbookError>;
