//! Per-file conversion results

use std::fmt;
use std::path::PathBuf;

/// Class of a per-file failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The source file does not exist
    SourceNotFound,
    /// The source could not be decoded (corrupt or unrecognized format)
    Decode,
    /// Encoding failed or the output could not be written
    EncodeOrWrite,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::SourceNotFound => "SourceNotFound",
            FailureKind::Decode => "Decode",
            FailureKind::EncodeOrWrite => "EncodeOrWrite",
        };
        f.write_str(name)
    }
}

/// What happened to a single source file
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A WebP file was written
    Converted {
        /// Size of the source file in bytes
        original_bytes: u64,
        /// Size of the written WebP file in bytes
        output_bytes: u64,
        /// Width of the image in pixels
        width: u32,
        /// Height of the image in pixels
        height: u32,
        /// Whether transparency was composited onto the background
        flattened: bool,
    },
    /// The destination already existed and was left untouched
    Skipped,
    /// The conversion failed; the batch carries on
    Failed {
        /// Failure class
        kind: FailureKind,
        /// Human-readable detail from the underlying error
        message: String,
    },
}

/// Result of converting one source file
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Source image path
    pub source: PathBuf,
    /// WebP destination path
    pub destination: PathBuf,
    /// Outcome of the conversion
    pub outcome: Outcome,
}

impl ConversionResult {
    /// Creates a new result
    pub fn new(source: PathBuf, destination: PathBuf, outcome: Outcome) -> Self {
        Self {
            source,
            destination,
            outcome,
        }
    }

    /// Creates a failed result
    pub fn failed(
        source: PathBuf,
        destination: PathBuf,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            source,
            destination,
            Outcome::Failed {
                kind,
                message: message.into(),
            },
        )
    }

    /// Returns true if a WebP file was written
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Converted { .. })
    }

    /// Returns true if the file was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped)
    }

    /// Returns the failure kind, if any
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self.outcome {
            Outcome::Failed { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Returns the byte-size reduction in percent for converted files
    pub fn savings_percent(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Converted {
                original_bytes,
                output_bytes,
                ..
            } => Some(savings_percent(original_bytes, output_bytes)),
            _ => None,
        }
    }
}

/// Computes `(original - output) / original * 100`
///
/// Negative when the output is larger than the source; zero for an empty
/// source.
pub fn savings_percent(original_bytes: u64, output_bytes: u64) -> f64 {
    if original_bytes == 0 {
        return 0.0;
    }
    (original_bytes as f64 - output_bytes as f64) / original_bytes as f64 * 100.0
}
