//! Channel-planar floating point image buffers

use ndarray::Array3;

/// Channel-planar image with samples normalized to `[0, 1]`
///
/// Stored as a `(channels, rows, cols)` array so each channel forms one
/// contiguous 2-D plane. The shape travels with the buffer and is exposed
/// through accessors rather than inferred by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarImage {
    data: Array3<f64>,
}

impl PlanarImage {
    /// Wrap an existing `(channels, rows, cols)` sample array
    pub const fn new(data: Array3<f64>) -> Self {
        Self { data }
    }

    /// Number of channel planes
    pub fn channels(&self) -> usize {
        self.data.dim().0
    }

    /// Number of pixel rows
    pub fn rows(&self) -> usize {
        self.data.dim().1
    }

    /// Number of pixel columns
    pub fn cols(&self) -> usize {
        self.data.dim().2
    }

    /// One sample, if the coordinates are in bounds
    pub fn sample(&self, channel: usize, row: usize, col: usize) -> Option<f64> {
        self.data.get((channel, row, col)).copied()
    }

    /// The underlying sample array
    pub const fn data(&self) -> &Array3<f64> {
        &self.data
    }
}
