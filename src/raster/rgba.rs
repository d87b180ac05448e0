//! Planar to interleaved RGBA conversion

use crate::raster::RGB_CHANNELS;
use crate::raster::planar::PlanarImage;
use image::{Rgba, RgbaImage};

/// Convert a planar RGB image into an interleaved, fully opaque RGBA raster
///
/// Samples are rescaled from `[0, 1]` to bytes with the inverse of the decode
/// normalization. Missing samples (out-of-range channels) map to zero.
pub fn planar_to_rgba(image: &PlanarImage) -> RgbaImage {
    let mut out = RgbaImage::new(image.cols() as u32, image.rows() as u32);

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let mut quad = [u8::MAX; 4];
        for (channel, slot) in quad.iter_mut().take(RGB_CHANNELS).enumerate() {
            let sample = image
                .sample(channel, y as usize, x as usize)
                .unwrap_or(0.0);
            *slot = quantize_sample(sample);
        }
        *pixel = Rgba(quad);
    }

    out
}

fn quantize_sample(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
