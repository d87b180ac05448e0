//! Command-line interface driving the full mosaic pipeline

use crate::io::configuration::{
    DEFAULT_GRID_WIDTH, DEFAULT_TILE_SIZE, MAX_OUTPUT_DIMENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_planar, save_mosaic};
use crate::io::library::TileLibrary;
use crate::io::progress::ProgressManager;
use crate::mosaic::compose::compose;
use crate::mosaic::matcher::assign_tiles;
use crate::raster::planar::PlanarImage;
use crate::spatial::grid::GridShape;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tesserae")]
#[command(
    author,
    version,
    about = "Assemble photomosaics from tile image libraries"
)]
/// Command-line arguments for the mosaic assembly tool
pub struct Cli {
    /// Target image to approximate
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing the tile image library
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells (derived from the target aspect ratio if omitted)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Tile edge length in output pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub size: usize,

    /// Output path (defaults to "<target stem>_mosaic.png" next to the target)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates the load, reduce, match, compose, export pipeline
pub struct MosaicProcessor {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Run the full pipeline and write the mosaic to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, image loading, library
    /// construction, matching, compositing, or export fails.
    pub fn process(&mut self) -> Result<()> {
        self.validate_parameters()?;

        let target = load_planar(&self.cli.target)?;
        let grid = self.grid_shape(&target)?;

        let library = TileLibrary::build(&self.cli.tiles, self.cli.size, self.progress.as_mut())?;
        if let Some(manager) = &mut self.progress {
            manager.finish_stage(format!("Reduced {} tiles", library.len()));
            manager.start_stage("Assembling mosaic", 2);
        }

        let assignment = assign_tiles(&target, grid, library.table())?;
        if let Some(manager) = &self.progress {
            manager.tick();
        }

        let mosaic = compose(library.rasters(), &assignment, library.size())?;
        if let Some(manager) = &self.progress {
            manager.tick();
        }

        let output = self.output_path();
        save_mosaic(&mosaic, &output)?;

        if let Some(manager) = &mut self.progress {
            manager.finish_stage(format!(
                "{}x{} cells, mean color distance {:.4}, saved to '{}'",
                grid.width,
                grid.height,
                assignment.mean_distance(),
                output.display()
            ));
        }

        Ok(())
    }

    fn validate_parameters(&self) -> Result<()> {
        if self.cli.width == 0 {
            return Err(invalid_parameter(
                "width",
                &self.cli.width,
                &"the grid needs at least one column",
            ));
        }
        if self.cli.height == Some(0) {
            return Err(invalid_parameter(
                "height",
                &0,
                &"the grid needs at least one row",
            ));
        }
        if self.cli.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &"tiles need at least one pixel",
            ));
        }
        Ok(())
    }

    fn grid_shape(&self, target: &PlanarImage) -> Result<GridShape> {
        let width = self.cli.width;
        // Preserve the target's aspect ratio when no height is given
        let height = self.cli.height.unwrap_or_else(|| {
            ((width as f64 * target.rows() as f64 / target.cols() as f64).round() as usize).max(1)
        });

        if width > target.cols() || height > target.rows() {
            return Err(invalid_parameter(
                "grid",
                &format!("{width}x{height}"),
                &format!(
                    "exceeds the target resolution {}x{}",
                    target.cols(),
                    target.rows()
                ),
            ));
        }

        let (out_width, out_height) = (width * self.cli.size, height * self.cli.size);
        if out_width > MAX_OUTPUT_DIMENSION || out_height > MAX_OUTPUT_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &self.cli.size,
                &format!(
                    "output would be {out_width}x{out_height} pixels (limit {MAX_OUTPUT_DIMENSION})"
                ),
            ));
        }

        Ok(GridShape { width, height })
    }

    fn output_path(&self) -> PathBuf {
        self.cli.output.clone().unwrap_or_else(|| {
            let stem = self
                .cli
                .target
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("mosaic");
            self.cli
                .target
                .with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
        })
    }
}
