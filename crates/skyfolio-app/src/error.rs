//! Error types for skyfolio app services
//!
//! Application-level errors that wrap core errors and add app-specific variants.

use skyfolio::error::GalleryError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] GalleryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Core(GalleryError::Io(e))
    }
}

/// Result type alias for skyfolio app services
pub type Result<T> = std::result::Result<T, AppError>;
