// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice dimensional flipper
//!
//! A proxy over any `Lattice` that swaps width for height and every x
//! for y.  A horizontal seam through a lattice is exactly a vertical
//! seam through its flipped view, so the seam search only has to be
//! written once.  Nothing is copied; the flip is purely in the
//! addressing.

use crate::twodmap::Lattice;

pub struct Flipper<'a, L: Lattice> {
    pub lattice: &'a L,
}

impl<'a, L: Lattice> Flipper<'a, L> {
    pub fn new(lattice: &'a L) -> Self {
        Flipper { lattice }
    }
}

impl<'a, L: Lattice> Lattice for Flipper<'a, L> {
    fn dimensions(&self) -> (usize, usize) {
        let (width, height) = self.lattice.dimensions();
        (height, width)
    }

    fn value(&self, x: usize, y: usize) -> f64 {
        self.lattice.value(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn flipping_swaps_the_axes() {
        let map = TwoDimensionalMap::from_fn(3, 2, |x, y| (10 * x + y) as f64);
        let flipped = Flipper::new(&map);
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.value(1, 2), 21.0);
        assert_eq!(flipped.value(0, 1), 10.0);
    }
}
