//! Runtime configuration defaults and limits

/// Default number of cell columns in the mosaic grid
pub const DEFAULT_GRID_WIDTH: usize = 60;

/// Default tile edge length in output pixels
pub const DEFAULT_TILE_SIZE: usize = 32;

/// Suffix added to output filenames when no output path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// File extensions recognised as tile images
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension in pixels
pub const MAX_OUTPUT_DIMENSION: usize = 30_000;
