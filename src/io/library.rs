//! Tile library construction from a directory of images

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use crate::io::image::load_planar;
use crate::io::progress::ProgressManager;
use crate::mosaic::matcher::ColorTable;
use crate::mosaic::reduce::Tile;
use crate::raster::rgba::planar_to_rgba;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// An ordered set of reduced library tiles ready for matching and compositing
///
/// Tile ids are positions in directory-sorted order, so a library built twice
/// from the same directory assigns the same ids.
pub struct TileLibrary {
    rasters: Vec<RgbaImage>,
    table: ColorTable,
    size: usize,
}

impl TileLibrary {
    /// Build a library by reducing every supported image in `dir`
    ///
    /// Each image is decoded, reduced to a `size x size` representative whose
    /// RGBA form becomes the tile's compositing raster, and its mean color is
    /// appended to the table under the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - No supported image files are found
    /// - A tile fails to decode or is smaller than `size` along either axis
    pub fn build(
        dir: &Path,
        size: usize,
        mut progress: Option<&mut ProgressManager>,
    ) -> Result<Self> {
        let files = collect_tile_files(dir)?;
        if files.is_empty() {
            return Err(MosaicError::EmptyLibrary {
                path: dir.to_path_buf(),
            });
        }

        if let Some(manager) = progress.as_mut() {
            manager.start_stage("Reducing tiles", files.len());
        }

        let mut rasters = Vec::with_capacity(files.len());
        let mut table = ColorTable::with_capacity(files.len());
        for file in &files {
            let source = load_planar(file)?;
            if source.rows() < size || source.cols() < size {
                return Err(MosaicError::InvalidSourceData {
                    reason: format!(
                        "tile image '{}' is {}x{}, smaller than tile size {size}",
                        file.display(),
                        source.cols(),
                        source.rows()
                    ),
                });
            }

            let tile = Tile::reduce(&source, size);
            table.push(tile.mean());
            rasters.push(planar_to_rgba(tile.image()));

            if let Some(manager) = progress.as_ref() {
                manager.tick();
            }
        }

        Ok(Self {
            rasters,
            table,
            size,
        })
    }

    /// Number of tiles in the library
    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    /// Whether the library holds no tiles
    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }

    /// Edge length of every compositing raster in pixels
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The mean-color table consumed by the matcher
    pub const fn table(&self) -> &ColorTable {
        &self.table
    }

    /// The compositing rasters in tile-id order
    pub fn rasters(&self) -> &[RgbaImage] {
        &self.rasters
    }
}

fn collect_tile_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();

        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let lower = ext.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.contains(&lower.as_str())
            });
        if supported && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
