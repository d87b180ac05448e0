//! Tile reduction to fixed-size representatives with mean colors
//!
//! Reduction partitions the source into a `size x size` grid of near-equal
//! regions and replaces each region with its per-channel mean. The same pass
//! accumulates the tile's overall mean color, which is what the matcher
//! compares against.

use crate::mosaic::average::region_mean;
use crate::raster::RGB_CHANNELS;
use crate::raster::planar::PlanarImage;
use crate::spatial::segments::{axis_breakpoints, spans};
use ndarray::{Array2, Array3, Axis};
use rayon::prelude::*;

/// A library tile's downsampled image and overall mean color
///
/// Created once per base tile and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Tile {
    image: PlanarImage,
    mean: [f64; RGB_CHANNELS],
}

impl Tile {
    /// Downsample `source` to a `size x size` representative image
    ///
    /// Row and column breakpoints are computed once and shared by all three
    /// channels; the channels reduce independently in parallel, each
    /// producing its own output plane. `source` must have at least three
    /// channels and should be at least `size` pixels along each axis for a
    /// non-degenerate result.
    pub fn reduce(source: &PlanarImage, size: usize) -> Self {
        let row_breaks = axis_breakpoints(source.rows(), size);
        let col_breaks = axis_breakpoints(source.cols(), size);

        let planes: Vec<(Array2<f64>, f64)> = (0..RGB_CHANNELS)
            .into_par_iter()
            .map(|channel| reduce_channel(source, channel, &row_breaks, &col_breaks, size))
            .collect();

        let mut data = Array3::zeros((RGB_CHANNELS, size, size));
        let mut mean = [0.0_f64; RGB_CHANNELS];
        for (channel, (plane, channel_mean)) in planes.into_iter().enumerate() {
            data.index_axis_mut(Axis(0), channel).assign(&plane);
            if let Some(slot) = mean.get_mut(channel) {
                *slot = channel_mean;
            }
        }

        Self {
            image: PlanarImage::new(data),
            mean,
        }
    }

    /// The `size x size` representative image
    pub const fn image(&self) -> &PlanarImage {
        &self.image
    }

    /// The tile's overall mean color
    pub const fn mean(&self) -> [f64; RGB_CHANNELS] {
        self.mean
    }
}

// Columns outermost to keep the mean accumulation order of the planar fill.
fn reduce_channel(
    source: &PlanarImage,
    channel: usize,
    row_breaks: &[usize],
    col_breaks: &[usize],
    size: usize,
) -> (Array2<f64>, f64) {
    let mut plane = Array2::zeros((size, size));
    let mut sum = 0.0;
    for (j, (col_from, col_to)) in spans(col_breaks).enumerate() {
        for (i, (row_from, row_to)) in spans(row_breaks).enumerate() {
            let value = region_mean(source, channel, row_from..row_to, col_from..col_to);
            sum += value;
            if let Some(cell) = plane.get_mut((i, j)) {
                *cell = value;
            }
        }
    }
    (plane, sum / (size * size) as f64)
}
