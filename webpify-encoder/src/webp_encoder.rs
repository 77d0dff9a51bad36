//! WebP encoding functionality

use crate::{Error, Result};
use image::{RgbImage, RgbaImage};
use webp::{Encoder, WebPConfig};
use webpify_core::ConvertConfig;

/// Encodes an opaque RGB image to lossy WebP
pub fn encode_webp(image: &RgbImage, config: &ConvertConfig) -> Result<Vec<u8>> {
    let encoder = Encoder::from_rgb(image.as_raw(), image.width(), image.height());
    encode_with(&encoder, config)
}

/// Encodes an RGBA image to lossy WebP, keeping the alpha channel
pub fn encode_webp_rgba(image: &RgbaImage, config: &ConvertConfig) -> Result<Vec<u8>> {
    let encoder = Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    encode_with(&encoder, config)
}

fn encode_with(encoder: &Encoder<'_>, config: &ConvertConfig) -> Result<Vec<u8>> {
    let webp_config = webp_config(config)?;

    let encoded = encoder
        .encode_advanced(&webp_config)
        .map_err(|e| Error::WebpEncode(format!("{:?}", e)))?;

    Ok(encoded.to_vec())
}

/// Builds the libwebp configuration for lossy output
fn webp_config(config: &ConvertConfig) -> Result<WebPConfig> {
    let mut webp_config = WebPConfig::new()
        .map_err(|_| Error::WebpEncode("failed to initialize WebP config".to_string()))?;

    webp_config.lossless = 0;
    webp_config.quality = config.quality;
    webp_config.method = i32::from(config.method);
    webp_config.alpha_quality = 100;

    Ok(webp_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, Rgba};

    #[test]
    fn test_encoded_rgb_decodes_without_alpha() {
        let img = RgbImage::from_pixel(32, 16, Rgb([200, 40, 40]));
        let data = encode_webp(&img, &ConvertConfig::default()).unwrap();

        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");

        let decoded = image::load_from_memory_with_format(&data, image::ImageFormat::WebP).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn test_encoded_rgba_keeps_alpha() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 128]));
        let data = encode_webp_rgba(&img, &ConvertConfig::default()).unwrap();

        let decoded = image::load_from_memory(&data).unwrap();
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn test_lower_quality_is_not_larger() {
        let mut img = RgbImage::new(64, 64);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 4) as u8, (y * 4) as u8, ((x ^ y) * 4) as u8]);
        }

        let high = encode_webp(&img, &ConvertConfig::default()).unwrap();
        let low = encode_webp(
            &img,
            &ConvertConfig {
                quality: 10.0,
                ..Default::default()
            },
        )
        .unwrap();

        assert!(low.len() <= high.len());
    }
}
