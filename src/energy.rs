// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude: the squared
//! channel differences of its left and right neighbors, plus those of
//! its top and bottom neighbors, square-rooted.  Neighbors wrap
//! around the edges of the grid, so a pixel on the border is compared
//! with the pixel on the opposite border.
//!
//! With the `threaded` feature the energy map is filled by one scoped
//! worker per core, each owning a disjoint run of columns.

use crate::pixelgrid::{Channel, Pixel, PixelGrid};
use crate::twodmap::TwoDimensionalMap;

#[cfg(not(feature = "threaded"))]
use itertools::iproduct;

/// The energy map of a grid: one `f64` per pixel, column-major.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Takes the channels (R,G,B) from two pixels, squares each difference,
// and sums them:
//
//        |Δ|² = (Δr)² + (Δg)² + (Δb)²
fn squared_gradient(a: &Pixel, b: &Pixel) -> f64 {
    Channel::ALL
        .iter()
        .map(|&channel| {
            let delta = f64::from(PixelGrid::channel_difference(a, b, channel));
            delta * delta
        })
        .sum()
}

// No bounds check: every caller walks the grid's own dimensions.
pub(crate) fn gradient_energy(grid: &PixelGrid, col: usize, row: usize) -> f64 {
    let n = grid.neighbors(col, row);
    let dx = squared_gradient(&n.right, &n.left);
    let dy = squared_gradient(&n.bottom, &n.top);
    (dx + dy).sqrt()
}

/// Compute the energy of every pixel in the grid.
#[cfg(not(feature = "threaded"))]
pub fn energy_map(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();
    let cells = iproduct!(0..width, 0..height)
        .map(|(x, y)| gradient_energy(grid, x, y))
        .collect();
    TwoDimensionalMap::from_vec(width, height, cells)
}

/// Compute the energy of every pixel in the grid.  The grid is only
/// read here, so the workers share it freely; each writes into its own
/// slice of whole columns.
#[cfg(feature = "threaded")]
pub fn energy_map(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();
    let workers = num_cpus::get().max(1);
    let columns_per_worker = (width + workers - 1) / workers;
    let mut cells = vec![0.0; width * height];

    let outcome = crossbeam::scope(|scope| {
        for (chunk, run) in cells.chunks_mut(columns_per_worker * height).enumerate() {
            scope.spawn(move |_| {
                let first = chunk * columns_per_worker;
                for (offset, column) in run.chunks_mut(height).enumerate() {
                    for (row, cell) in column.iter_mut().enumerate() {
                        *cell = gradient_energy(grid, first + offset, row);
                    }
                }
            });
        }
    });
    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    TwoDimensionalMap::from_vec(width, height, cells)
}
