//! Nearest-color tile assignment over the target grid

use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::mosaic::average::region_mean;
use crate::raster::planar::PlanarImage;
use crate::spatial::grid::{Assignment, CellMatch, GridShape};
use crate::spatial::segments::{axis_breakpoints, span_at};
use ndarray::Array2;
use rayon::prelude::*;

/// Mean colors of every library tile, one row per tile id
///
/// Stored as three parallel columns so the linear scan walks contiguous
/// memory per channel.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    red: Vec<f64>,
    green: Vec<f64>,
    blue: Vec<f64>,
}

impl ColorTable {
    /// Create an empty table with room for `capacity` tiles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            red: Vec::with_capacity(capacity),
            green: Vec::with_capacity(capacity),
            blue: Vec::with_capacity(capacity),
        }
    }

    /// Append a tile's mean color; its id is the current table length
    pub fn push(&mut self, color: [f64; 3]) {
        let [red, green, blue] = color;
        self.red.push(red);
        self.green.push(green);
        self.blue.push(blue);
    }

    /// Number of tiles in the table
    pub fn len(&self) -> usize {
        self.red.len()
    }

    /// Whether the table holds no tiles
    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// The mean color stored for a tile id, if present
    pub fn color(&self, index: usize) -> Option<[f64; 3]> {
        match (
            self.red.get(index),
            self.green.get(index),
            self.blue.get(index),
        ) {
            (Some(&red), Some(&green), Some(&blue)) => Some([red, green, blue]),
            _ => None,
        }
    }

    /// The id and Euclidean RGB distance of the entry closest to `color`
    ///
    /// Ascending-id linear scan with strict comparison, so the lowest id wins
    /// exact ties. An empty table returns id `0` with infinite distance;
    /// [`assign_tiles`] rejects that case up front.
    pub fn nearest(&self, color: [f64; 3]) -> (usize, f64) {
        let [r, g, b] = color;
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, ((&red, &green), &blue)) in self
            .red
            .iter()
            .zip(&self.green)
            .zip(&self.blue)
            .enumerate()
        {
            let distance = ((r - red).powi(2) + (g - green).powi(2) + (b - blue).powi(2)).sqrt();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        (best, best_distance)
    }
}

/// Assign every grid cell the library tile whose mean color is closest
///
/// The target is partitioned with the same breakpoint rule the reducer uses,
/// each cell's mean color is computed per channel, and the closest table
/// entry is found by linear scan. Cells are independent and are evaluated in
/// parallel, each owning its output slot.
///
/// # Errors
///
/// Returns an error if the table is empty; matching requires at least one
/// base tile.
pub fn assign_tiles(
    target: &PlanarImage,
    grid: GridShape,
    table: &ColorTable,
) -> Result<Assignment> {
    if table.is_empty() {
        return Err(invalid_parameter(
            "tile table",
            &table.len(),
            &"matching requires at least one base tile mean color",
        ));
    }

    let row_breaks = axis_breakpoints(target.rows(), grid.height);
    let col_breaks = axis_breakpoints(target.cols(), grid.width);

    let matches: Vec<CellMatch> = (0..grid.cell_count())
        .into_par_iter()
        .map(|cell| {
            let row = cell / grid.width;
            let col = cell % grid.width;
            let (row_from, row_to) = span_at(&row_breaks, row);
            let (col_from, col_to) = span_at(&col_breaks, col);

            let color = [
                region_mean(target, 0, row_from..row_to, col_from..col_to),
                region_mean(target, 1, row_from..row_to, col_from..col_to),
                region_mean(target, 2, row_from..row_to, col_from..col_to),
            ];
            let (tile, distance) = table.nearest(color);
            CellMatch { tile, distance }
        })
        .collect();

    let cells = Array2::from_shape_vec((grid.height, grid.width), matches)
        .map_err(|err| computation_error("grid assignment", &err))?;
    Ok(Assignment::new(cells))
}
