//! Grid-to-tile assignment with an explicit indexing convention
//!
//! The assignment is stored as a 2-D matrix indexed by `(row, col)`. The
//! matcher fills it and the compositor reads it through the same API, so no
//! flat-array linearization can drift between the two stages.

use ndarray::{Array2, ArrayView1};

/// Mosaic grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of cell columns
    pub width: usize,
    /// Number of cell rows
    pub height: usize,
}

impl GridShape {
    /// Total number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// One cell's chosen tile and how closely it matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMatch {
    /// Index into the tile library
    pub tile: usize,
    /// Euclidean RGB distance between the cell mean and the tile mean
    pub distance: f64,
}

/// Grid-to-tile assignment, one [`CellMatch`] per cell
#[derive(Debug, Clone)]
pub struct Assignment {
    cells: Array2<CellMatch>,
}

impl Assignment {
    /// Wrap a `(height, width)` cell matrix
    pub const fn new(cells: Array2<CellMatch>) -> Self {
        Self { cells }
    }

    /// Grid dimensions of this assignment
    pub fn shape(&self) -> GridShape {
        let (height, width) = self.cells.dim();
        GridShape { width, height }
    }

    /// The match stored for a cell, if the cell is in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&CellMatch> {
        self.cells.get((row, col))
    }

    /// View of one grid row in placement order, if the row is in bounds
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, CellMatch>> {
        (row < self.cells.nrows()).then(|| self.cells.row(row))
    }

    /// Iterate over all cells, rows outermost
    pub fn cells(&self) -> impl Iterator<Item = &CellMatch> {
        self.cells.iter()
    }

    /// Mean match distance across all cells, `0.0` for an empty grid
    pub fn mean_distance(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.cells.iter().map(|cell| cell.distance).sum::<f64>() / self.cells.len() as f64
    }
}
