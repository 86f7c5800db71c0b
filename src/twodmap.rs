// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field holding one of the scratch
/// products of a seam search: a plain `f64` for the energy map, or an
/// `EnergyCell` (cost plus back-pointer) for the dynamic program.
///
/// Storage is flat and column-major, to match the pixel grid: every
/// column is one contiguous run of `height` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: usize,
    pub height: usize,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given size with every cell at its default.
    pub fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    /// A map whose cell at (x, y) is `f(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> P,
    {
        let mut map = TwoDimensionalMap::new(width, height);
        for x in 0..width {
            for y in 0..height {
                map[(x, y)] = f(x, y);
            }
        }
        map
    }

    /// Wrap an existing column-major vector.  The caller guarantees
    /// the length is `width * height`.
    pub(crate) fn from_vec(width: usize, height: usize, cells: Vec<P>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    // Keep the index math here and nowhere else.  Column-major: x
    // picks the run, y the offset within it.
    fn get_index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    /// All cells, column by column.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (usize, usize)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// A read-only field of energies, which is all the seam search needs
/// to see.  Implemented by the energy map itself and by `Flipper`,
/// its transposed view.
pub trait Lattice {
    fn dimensions(&self) -> (usize, usize);
    fn value(&self, x: usize, y: usize) -> f64;
}

impl Lattice for TwoDimensionalMap<f64> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn value(&self, x: usize, y: usize) -> f64 {
        self[(x, y)]
    }
}
