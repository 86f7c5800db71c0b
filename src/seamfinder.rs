// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map
//!
//! A dynamic program over the map: every cell of a row accumulates
//! its own energy plus the cheapest of the three cells above it, and
//! remembers which one that was.  The cheapest cell of the last row
//! is the end of the seam, and the back-pointers lead home.
//!
//! Unlike the energy calculation, which wraps around the edges, the
//! candidates here are clamped: at the left edge the missing
//! up-and-left candidate is a duplicate of the one straight up, and
//! likewise at the right edge.  Ties are settled by position; see
//! `cheapest_predecessor`.
//!
//! Only the vertical search is written out.  The horizontal one runs
//! the same code over a `Flipper` view of the map.

use crate::cq;
use crate::flipper::Flipper;
use crate::twodmap::{Lattice, TwoDimensionalMap};
use std::fmt;

/// A seam: one index per row (vertical seam, giving the column) or
/// per column (horizontal seam, giving the row).
pub type Seam = Vec<usize>;

/// Which way a seam runs.  A vertical seam runs top to bottom and
/// narrows the image; a horizontal one runs left to right and
/// shortens it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn turn(self) -> Self {
        cq!(
            self == Orientation::Vertical,
            Orientation::Horizontal,
            Orientation::Vertical
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// This trait defines how we return seams from an image.  Just
/// enough of an interface to make room for other carvers.
pub trait SeamFinder {
    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Seam;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Seam;
}

/// One cell of the dynamic program: the cheapest cumulative energy of
/// any path reaching this cell, and the index of the cell it came
/// from in the previous line.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct EnergyCell {
    pub energy: f64,
    pub parent: usize,
}

/// Pick the cheapest of three candidate predecessors.  `left` is
/// compared with `mid` first and wins a tie; the winner is then
/// compared with `right` and again wins a tie.  So on exactly equal
/// costs the preference is left, then mid, then right.
pub fn cheapest_predecessor(left: EnergyCell, mid: EnergyCell, right: EnergyCell) -> EnergyCell {
    let best = cq!(left.energy <= mid.energy, left, mid);
    cq!(best.energy <= right.energy, best, right)
}

/// Given an energy lattice, return the list of x-coordinates that,
/// paired with the range (0..height), give the pixels of the cheapest
/// top-to-bottom seam.
pub fn energy_to_seam<L: Lattice>(energy: &L) -> Seam {
    let (width, height) = energy.dimensions();
    let mut target: TwoDimensionalMap<EnergyCell> = TwoDimensionalMap::new(width, height);

    // The first row is just the native energies.
    for x in 0..width {
        target[(x, 0)] = EnergyCell {
            energy: energy.value(x, 0),
            parent: x,
        };
    }

    let max_x = width - 1;
    for y in 1..height {
        for x in 0..width {
            let candidate = |cx: usize| EnergyCell {
                energy: target[(cx, y - 1)].energy,
                parent: cx,
            };
            let mid = candidate(x);
            let left = cq!(x == 0, mid, candidate(x - 1));
            let right = cq!(x == max_x, mid, candidate(x + 1));
            let best = cheapest_predecessor(left, mid, right);
            target[(x, y)] = EnergyCell {
                energy: energy.value(x, y) + best.energy,
                parent: best.parent,
            };
        }
    }

    // The cheapest end of the last row; the first one found wins.
    let last = height - 1;
    let mut seam_col = (1..width).fold(0, |best, x| {
        cq!(
            target[(x, last)].energy < target[(best, last)].energy,
            x,
            best
        )
    });

    // Working backwards, collect the x coordinates of the seam, then
    // reverse them into top-to-bottom order.
    (0..height)
        .rev()
        .fold(Vec::with_capacity(height), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// The cheapest top-to-bottom seam: one column index per row.
pub fn energy_to_vertical_seam<L: Lattice>(energy: &L) -> Seam {
    energy_to_seam(energy)
}

/// The cheapest left-to-right seam: one row index per column.
pub fn energy_to_horizontal_seam<L: Lattice>(energy: &L) -> Seam {
    energy_to_seam(&Flipper::new(energy))
}
