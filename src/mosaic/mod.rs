//! Core numerical pipeline
//!
//! This module contains the compute stages of mosaic assembly:
//! - Windowed per-channel color averaging
//! - Tile reduction to fixed-size representatives
//! - Nearest-color tile assignment
//! - Compositing of chosen tiles into the output raster

/// Rectangular region color averaging
pub mod average;
/// Tile compositing into the final raster
pub mod compose;
/// Nearest-color tile assignment
pub mod matcher;
/// Tile reduction and mean-color extraction
pub mod reduce;

pub use matcher::{ColorTable, assign_tiles};
pub use reduce::Tile;
