//! Spatial data structures for grid partitioning
//!
//! This module contains spatial-related functionality including:
//! - Axis segmentation into near-equal integer spans
//! - The grid-to-tile assignment shared by the matcher and the compositor

/// Grid assignment structures and indexing convention
pub mod grid;
/// Axis breakpoint computation
pub mod segments;

pub use grid::{Assignment, CellMatch, GridShape};
