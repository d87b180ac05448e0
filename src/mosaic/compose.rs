//! Tile compositing into the final mosaic raster

use crate::io::error::{MosaicError, Result, computation_error};
use crate::spatial::grid::Assignment;
use image::RgbaImage;
use rayon::prelude::*;

/// Bytes per interleaved RGBA pixel
const PIXEL_BYTES: usize = 4;

/// Composite chosen tiles into a `(width*size) x (height*size)` raster
///
/// Every output pixel row belongs to exactly one grid row; it is split into
/// `width` cell-wide chunks and each chunk receives a straight byte copy of
/// the corresponding row of the cell's chosen tile. Cell regions never
/// overlap, so output rows are filled in parallel over a pre-allocated
/// buffer, each worker owning whole rows.
///
/// # Errors
///
/// Returns an error if any assigned tile id has no raster, or if any raster
/// is not `size x size`.
pub fn compose(tiles: &[RgbaImage], assignment: &Assignment, size: usize) -> Result<RgbaImage> {
    let grid = assignment.shape();

    for (index, tile) in tiles.iter().enumerate() {
        if tile.width() as usize != size || tile.height() as usize != size {
            return Err(MosaicError::InvalidSourceData {
                reason: format!(
                    "tile raster {index} is {}x{}, expected {size}x{size}",
                    tile.width(),
                    tile.height()
                ),
            });
        }
    }
    for cell in assignment.cells() {
        if cell.tile >= tiles.len() {
            return Err(MosaicError::InvalidTileIndex {
                index: cell.tile,
                max_tiles: tiles.len(),
            });
        }
    }

    let out_width = grid.width * size;
    let out_height = grid.height * size;
    let row_stride = PIXEL_BYTES * out_width;
    if row_stride == 0 || out_height == 0 {
        return Ok(RgbaImage::new(out_width as u32, out_height as u32));
    }

    let mut buffer = vec![0_u8; row_stride * out_height];
    buffer
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, out_row)| {
            let grid_row = y / size;
            let tile_row = y % size;
            let cells = assignment.row(grid_row).ok_or_else(|| {
                computation_error("compositing", &format!("grid row {grid_row} out of range"))
            })?;

            for (cell_bytes, matched) in out_row.chunks_exact_mut(PIXEL_BYTES * size).zip(cells) {
                let source = tiles
                    .get(matched.tile)
                    .map(RgbaImage::as_raw)
                    .and_then(|raw| raw.chunks_exact(PIXEL_BYTES * size).nth(tile_row))
                    .ok_or(MosaicError::InvalidTileIndex {
                        index: matched.tile,
                        max_tiles: tiles.len(),
                    })?;
                cell_bytes.copy_from_slice(source);
            }
            Ok(())
        })?;

    RgbaImage::from_raw(out_width as u32, out_height as u32, buffer)
        .ok_or_else(|| computation_error("compositing", &"output buffer size mismatch"))
}
