//! Rectangular region color averaging over planar buffers

use crate::raster::planar::PlanarImage;
use ndarray::s;
use std::ops::Range;

/// Arithmetic mean of one channel over an axis-aligned sub-region
///
/// The region is `[rows.start, rows.end) x [cols.start, cols.end)`. The sum
/// is divided by the region's sample count, so an empty region yields NaN;
/// callers are expected to pass non-empty in-bounds regions, which the
/// segmenter guarantees for any axis longer than its span count.
///
/// # Panics
///
/// Panics if the channel index or either range reaches outside the image.
pub fn region_mean(
    image: &PlanarImage,
    channel: usize,
    rows: Range<usize>,
    cols: Range<usize>,
) -> f64 {
    let region = image.data().slice(s![channel, rows, cols]);
    let count = region.len();
    region.sum() / count as f64
}
