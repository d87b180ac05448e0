//! Performance measurement for the reduce, match, and compose stages

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use ndarray::{Array2, Array3};
use std::hint::black_box;
use tesserae::mosaic::compose::compose;
use tesserae::mosaic::matcher::{ColorTable, assign_tiles};
use tesserae::mosaic::reduce::Tile;
use tesserae::raster::PlanarImage;
use tesserae::spatial::grid::{Assignment, CellMatch, GridShape};

fn synthetic_planar(rows: usize, cols: usize) -> PlanarImage {
    PlanarImage::new(Array3::from_shape_fn((3, rows, cols), |(c, r, col)| {
        ((r * 31 + col * 17 + c * 7) % 256) as f64 / 255.0
    }))
}

fn synthetic_table(tiles: usize) -> ColorTable {
    let mut table = ColorTable::with_capacity(tiles);
    for index in 0..tiles {
        let base = index as f64 / tiles as f64;
        table.push([base, (base * 0.5 + 0.25) % 1.0, 1.0 - base]);
    }
    table
}

/// Measures tile reduction from full resolution to a 32-pixel representative
fn bench_reduce(c: &mut Criterion) {
    let source = synthetic_planar(256, 256);
    c.bench_function("reduce_256_to_32", |b| {
        b.iter(|| black_box(Tile::reduce(black_box(&source), 32)));
    });
}

/// Measures nearest-color assignment over a dense grid and mid-size library
fn bench_match(c: &mut Criterion) {
    let target = synthetic_planar(512, 512);
    let table = synthetic_table(128);
    let grid = GridShape {
        width: 48,
        height: 48,
    };
    c.bench_function("match_48x48_cells_128_tiles", |b| {
        b.iter(|| {
            let Ok(assignment) = assign_tiles(black_box(&target), grid, &table) else {
                return;
            };
            black_box(assignment);
        });
    });
}

/// Measures compositing a 640x640 output from 16-pixel tiles
fn bench_compose(c: &mut Criterion) {
    let tiles: Vec<RgbaImage> = (0..32)
        .map(|index| {
            let shade = (index * 8) as u8;
            RgbaImage::from_pixel(16, 16, Rgba([shade, 128, 255 - shade, 255]))
        })
        .collect();
    let cells = Array2::from_shape_fn((40, 40), |(row, col)| CellMatch {
        tile: (row * 7 + col) % 32,
        distance: 0.0,
    });
    let assignment = Assignment::new(cells);

    c.bench_function("compose_40x40_cells_size_16", |b| {
        b.iter(|| {
            let Ok(mosaic) = compose(black_box(&tiles), &assignment, 16) else {
                return;
            };
            black_box(mosaic);
        });
    });
}

criterion_group!(benches, bench_reduce, bench_match, bench_compose);
criterion_main!(benches);
