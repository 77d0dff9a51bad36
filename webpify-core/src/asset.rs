//! Decoded image metadata

/// Color model of a decoded source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Opaque RGB
    Rgb,
    /// RGB with an alpha channel
    Rgba,
    /// Opaque grayscale
    Luma,
    /// Grayscale with an alpha channel
    LumaAlpha,
    /// Palette-indexed color
    ///
    /// Only reported by decoders that keep indices; the `image` crate
    /// expands palettes to RGB or RGBA while decoding.
    Palette,
    /// Anything the converter has no special handling for
    Other,
}

impl ColorMode {
    /// Returns true if the mode carries an alpha channel
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::Rgba | ColorMode::LumaAlpha)
    }

    /// Returns true if the image has to be composited onto a background
    /// before it can be encoded without transparency
    pub fn needs_flattening(self) -> bool {
        self.has_alpha() || self == ColorMode::Palette
    }
}

/// Metadata of a decoded in-memory bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAsset {
    /// Width of the bitmap in pixels
    pub width: u32,
    /// Height of the bitmap in pixels
    pub height: u32,
    /// Color model the bitmap was decoded into
    pub color_mode: ColorMode,
}

impl ImageAsset {
    /// Creates a new asset description
    pub fn new(width: u32, height: u32, color_mode: ColorMode) -> Self {
        Self {
            width,
            height,
            color_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattening_modes() {
        assert!(ColorMode::Rgba.needs_flattening());
        assert!(ColorMode::LumaAlpha.needs_flattening());
        assert!(ColorMode::Palette.needs_flattening());
        assert!(!ColorMode::Rgb.needs_flattening());
        assert!(!ColorMode::Luma.needs_flattening());
        assert!(!ColorMode::Palette.has_alpha());
    }
}
