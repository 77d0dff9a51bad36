//! Alpha flattening onto an opaque background

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage, RgbaImage};
use webpify_core::ColorMode;

/// Maps the decoder's color type onto the converter's color model
///
/// Never returns [`ColorMode::Palette`]: the decoder expands indexed PNGs to
/// RGB, or to RGBA when they carry a transparency chunk, so transparent
/// palettes reach the flattening path as [`ColorMode::Rgba`].
pub fn color_mode(image: &DynamicImage) -> ColorMode {
    use image::ColorType;

    match image.color() {
        ColorType::L8 | ColorType::L16 => ColorMode::Luma,
        ColorType::La8 | ColorType::La16 => ColorMode::LumaAlpha,
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
        _ => ColorMode::Other,
    }
}

/// Composites a decoded image onto a solid background, dropping alpha
pub fn flatten(image: &DynamicImage, background: [u8; 3]) -> RgbImage {
    flatten_rgba(&image.to_rgba8(), background)
}

/// Composites an RGBA buffer onto a solid background
///
/// Alpha 0 yields the background, alpha 255 yields the source pixel, and
/// anything in between blends linearly.
pub fn flatten_rgba(image: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let mut canvas: RgbImage =
        ImageBuffer::from_pixel(image.width(), image.height(), Rgb(background));

    for (x, y, pixel) in image.enumerate_pixels() {
        let alpha = pixel[3];
        let base = canvas.get_pixel(x, y);
        let blended = Rgb([
            blend_channel(pixel[0], base[0], alpha),
            blend_channel(pixel[1], base[1], alpha),
            blend_channel(pixel[2], base[2], alpha),
        ]);
        canvas.put_pixel(x, y, blended);
    }

    canvas
}

/// `src * a + dst * (1 - a)` in integer arithmetic, rounded to nearest
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let alpha = u32::from(alpha);
    let value = u32::from(src) * alpha + u32::from(dst) * (255 - alpha);
    ((value + 127) / 255) as u8
}
