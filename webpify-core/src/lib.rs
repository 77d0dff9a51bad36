//! webpify Core Library
//!
//! This library provides the data model shared by the webpify converter and
//! CLI: decoded image metadata, per-file conversion results and the encoder
//! configuration.

pub mod asset;
pub mod config;
pub mod paths;
pub mod result;

pub use asset::{ColorMode, ImageAsset};
pub use config::ConvertConfig;
pub use paths::{is_supported_source, source_extension_rank, webp_sibling, SOURCE_EXTENSIONS};
pub use result::{savings_percent, ConversionResult, FailureKind, Outcome};

use std::path::PathBuf;

/// Result type for webpify-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that abort a whole run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
