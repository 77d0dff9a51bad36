//! Single-file PNG/JPEG to WebP conversion

use crate::{flatten, webp_encoder, Error, Result};
use image::{DynamicImage, ImageReader};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use webpify_core::{webp_sibling, ConversionResult, ConvertConfig, ImageAsset, Outcome};

/// Converts one source image at a time into a WebP sibling
#[derive(Debug, Clone, Default)]
pub struct BatchImageConverter {
    config: ConvertConfig,
}

impl BatchImageConverter {
    /// Creates a new converter with the given configuration
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Converts `source` into `source` with a `.webp` extension
    pub fn convert(&self, source: &Path) -> ConversionResult {
        self.convert_to(source, &webp_sibling(source))
    }

    /// Converts `source` into `destination`
    ///
    /// Never fails: every error is folded into a failed result so the caller
    /// can carry on with the next file.
    pub fn convert_to(&self, source: &Path, destination: &Path) -> ConversionResult {
        match self.try_convert(source, destination) {
            Ok(outcome) => {
                ConversionResult::new(source.to_path_buf(), destination.to_path_buf(), outcome)
            }
            Err(e) => {
                let kind = e.failure_kind();
                warn!(source = %source.display(), %kind, "conversion failed: {}", e);
                ConversionResult::failed(
                    source.to_path_buf(),
                    destination.to_path_buf(),
                    kind,
                    e.to_string(),
                )
            }
        }
    }

    fn try_convert(&self, source: &Path, destination: &Path) -> Result<Outcome> {
        if !source.is_file() {
            return Err(Error::SourceNotFound(source.to_path_buf()));
        }

        let original_bytes = fs::metadata(source)
            .map_err(|e| Error::Read {
                path: source.to_path_buf(),
                source: e,
            })?
            .len();

        // The decoded bitmap is dropped before the destination is written
        let (asset, data) = {
            let image = decode(source)?;
            let asset = ImageAsset::new(image.width(), image.height(), flatten::color_mode(&image));
            debug!(
                source = %source.display(),
                width = asset.width,
                height = asset.height,
                color_mode = ?asset.color_mode,
                "decoded source"
            );
            let data = self.encode(&image, &asset)?;
            (asset, data)
        };

        write_output(destination, &data)?;

        let output_bytes = fs::metadata(destination)?.len();
        debug!(
            destination = %destination.display(),
            original_bytes,
            output_bytes,
            "wrote WebP"
        );

        Ok(Outcome::Converted {
            original_bytes,
            output_bytes,
            width: asset.width,
            height: asset.height,
            flattened: self.flattens(&asset),
        })
    }

    fn flattens(&self, asset: &ImageAsset) -> bool {
        self.config.flatten && asset.color_mode.needs_flattening()
    }

    fn encode(&self, image: &DynamicImage, asset: &ImageAsset) -> Result<Vec<u8>> {
        debug!(
            quality = self.config.quality,
            method = self.config.method,
            "encoding WebP"
        );

        if self.flattens(asset) {
            let flat = flatten::flatten(image, self.config.background);
            webp_encoder::encode_webp(&flat, &self.config)
        } else if asset.color_mode.has_alpha() {
            webp_encoder::encode_webp_rgba(&image.to_rgba8(), &self.config)
        } else {
            webp_encoder::encode_webp(&image.to_rgb8(), &self.config)
        }
    }
}

/// Writes `data` to a temporary file next to `destination` and renames it
/// into place
///
/// A truncated output would be skipped by every later run, so the final
/// path only ever holds a complete file.
fn write_output(destination: &Path, data: &[u8]) -> Result<()> {
    let write_error = |e: std::io::Error| Error::Write {
        path: destination.to_path_buf(),
        source: e,
    };

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(data).map_err(write_error)?;
    file.persist(destination).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Decodes a source file, sniffing the format from its content
fn decode(source: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| Error::Read {
            path: source.to_path_buf(),
            source: e,
        })?;

    Ok(reader.decode()?)
}
