//! webpify Encoder Library
//!
//! This library converts PNG and JPEG images into WebP siblings, flattening
//! transparency onto an opaque background first.

pub mod batch;
pub mod converter;
pub mod flatten;
pub mod summary;
pub mod webp_encoder;

pub use batch::BatchDriver;
pub use converter::BatchImageConverter;
pub use summary::RunSummary;

use std::path::PathBuf;
use webpify_core::FailureKind;

/// Result type for webpify-encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for webpify-encoder operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("webpify core error: {0}")]
    Core(#[from] webpify_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("WebP encode error: {0}")]
    WebpEncode(String),

    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Classifies the error for per-file reporting
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::SourceNotFound(_) => FailureKind::SourceNotFound,
            Error::Image(_) | Error::Read { .. } => FailureKind::Decode,
            Error::Core(_) | Error::Io(_) | Error::WebpEncode(_) | Error::Write { .. } => {
                FailureKind::EncodeOrWrite
            }
        }
    }
}
