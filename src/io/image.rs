//! Image decoding into planar buffers and mosaic export

use crate::io::error::{MosaicError, Result};
use crate::raster::RGB_CHANNELS;
use crate::raster::planar::PlanarImage;
use image::RgbaImage;
use ndarray::Array3;
use std::path::Path;

/// Load an image file and convert it to a channel-planar buffer
///
/// Pixels are converted to RGB and normalized to `[0, 1]`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image.
pub fn load_planar(path: &Path) -> Result<PlanarImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgb = img.to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let mut data = Array3::zeros((RGB_CHANNELS, height, width));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            if let Some(sample) = data.get_mut((channel, y as usize, x as usize)) {
                *sample = f64::from(value) / 255.0;
            }
        }
    }

    Ok(PlanarImage::new(data))
}

/// Save the composited mosaic, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_mosaic(mosaic: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    mosaic.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
