//! Converter configuration

use crate::{Error, Result};

/// Highest compression effort libwebp accepts
pub const MAX_METHOD: u8 = 6;

/// Converter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Lossy WebP quality (0-100)
    pub quality: f32,
    /// Compression effort (0 = fast, 6 = slowest and smallest)
    pub method: u8,
    /// Composite transparent images onto `background` before encoding
    pub flatten: bool,
    /// RGB background used when flattening
    pub background: [u8; 3],
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            quality: 85.0,
            method: MAX_METHOD,
            flatten: true,
            background: [255, 255, 255],
        }
    }
}

impl ConvertConfig {
    /// Checks that the encoder parameters are in range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(Error::InvalidConfig(format!(
                "quality must be between 0 and 100, got {}",
                self.quality
            )));
        }
        if self.method > MAX_METHOD {
            return Err(Error::InvalidConfig(format!(
                "method must be between 0 and {}, got {}",
                MAX_METHOD, self.method
            )));
        }
        Ok(())
    }
}
