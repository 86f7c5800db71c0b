// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the carver and its driver
//!
//! A `SeamCarver` owns the pixel grid it shrinks.  Every search
//! rebuilds the energy map from the grid as it is now; nothing is
//! cached between calls, so vertical and horizontal removals can be
//! interleaved in any order.

use crate::energy::{energy_map, gradient_energy, EnergyMap};
use crate::error::CarveError;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{
    energy_to_horizontal_seam, energy_to_vertical_seam, Orientation, Seam, SeamFinder,
};
use tracing::{debug, info, trace};

/// One removal decision, kept so callers can replay or draw what the
/// carver did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamRecord {
    pub orientation: Orientation,
    pub seam: Seam,
}

/// Holds the image being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The dual-gradient energy of one pixel.
    pub fn pixel_energy(&self, col: usize, row: usize) -> Result<f64, CarveError> {
        self.grid.pixel_at(col, row)?;
        Ok(gradient_energy(&self.grid, col, row))
    }

    /// The energy of every pixel of the current grid.
    pub fn energy_map(&self) -> EnergyMap {
        energy_map(&self.grid)
    }

    pub fn image(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn into_image(self) -> PixelGrid {
        self.grid
    }

    /// Remove one pixel from every row, at the columns named by
    /// `seam`.  The grid loses its last column.
    pub fn remove_vertical_seam(&mut self, seam: &[usize]) -> Result<(), CarveError> {
        let (width, height) = self.grid.dimensions();
        if width == 1 {
            return Err(CarveError::Exhausted(Orientation::Vertical));
        }
        if seam.len() != height {
            return Err(CarveError::InvalidArgument(format!(
                "a vertical seam through a {}x{} image needs {} entries, got {}",
                width,
                height,
                height,
                seam.len()
            )));
        }
        if let Some((row, &col)) = seam.iter().enumerate().find(|&(_, &col)| col >= width) {
            return Err(CarveError::OutOfRange {
                col,
                row,
                width,
                height,
            });
        }

        for (row, &col) in seam.iter().enumerate() {
            self.grid.compact_row_from(col, row)?;
        }
        self.grid.drop_last_column()?;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "removed vertical seam"
        );
        Ok(())
    }

    /// Remove one pixel from every column, at the rows named by
    /// `seam`.  The grid loses its last row.
    pub fn remove_horizontal_seam(&mut self, seam: &[usize]) -> Result<(), CarveError> {
        let (width, height) = self.grid.dimensions();
        if height == 1 {
            return Err(CarveError::Exhausted(Orientation::Horizontal));
        }
        if seam.len() != width {
            return Err(CarveError::InvalidArgument(format!(
                "a horizontal seam through a {}x{} image needs {} entries, got {}",
                width,
                height,
                width,
                seam.len()
            )));
        }
        if let Some((col, &row)) = seam.iter().enumerate().find(|&(_, &row)| row >= height) {
            return Err(CarveError::OutOfRange {
                col,
                row,
                width,
                height,
            });
        }

        for (col, &row) in seam.iter().enumerate() {
            self.grid.compact_column_from(col, row)?;
        }
        self.grid.drop_last_row()?;
        debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "removed horizontal seam"
        );
        Ok(())
    }

    /// Remove a seam of either orientation.
    pub fn remove_seam(&mut self, record: &SeamRecord) -> Result<(), CarveError> {
        match record.orientation {
            Orientation::Vertical => self.remove_vertical_seam(&record.seam),
            Orientation::Horizontal => self.remove_horizontal_seam(&record.seam),
        }
    }

    fn carve_once(&mut self, orientation: Orientation) -> Result<SeamRecord, CarveError> {
        let seam = match orientation {
            Orientation::Vertical => self.find_vertical_seam(),
            Orientation::Horizontal => self.find_horizontal_seam(),
        };
        let record = SeamRecord { orientation, seam };
        self.remove_seam(&record)?;
        Ok(record)
    }

    /// Repeatedly carve seams until the image is `new_width` by
    /// `new_height`.  While both axes are too large, vertical and
    /// horizontal seams alternate; then whichever axis remains is
    /// finished off.  Returns every removal, in order.
    ///
    /// Each seam is found on a freshly computed energy map.
    pub fn carve(
        &mut self,
        new_width: usize,
        new_height: usize,
    ) -> Result<Vec<SeamRecord>, CarveError> {
        let (width, height) = self.grid.dimensions();
        if new_width == 0 || new_height == 0 {
            return Err(CarveError::InvalidArgument(format!(
                "cannot carve down to {}x{}: both sides must be at least 1",
                new_width, new_height
            )));
        }
        if width < new_width || height < new_height {
            return Err(CarveError::InvalidArgument(format!(
                "seam carving cannot upscale {}x{} to {}x{}",
                width, height, new_width, new_height
            )));
        }

        info!(width, height, new_width, new_height, "carving");
        let mut records = Vec::with_capacity((width - new_width) + (height - new_height));
        let mut orientation = Orientation::Vertical;
        while self.width() > new_width && self.height() > new_height {
            records.push(self.carve_once(orientation)?);
            orientation = orientation.turn();
        }
        while self.width() > new_width {
            records.push(self.carve_once(Orientation::Vertical)?);
        }
        while self.height() > new_height {
            records.push(self.carve_once(Orientation::Horizontal)?);
        }
        info!(seams = records.len(), "carving complete");
        Ok(records)
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Seam {
        let seam = energy_to_horizontal_seam(&self.energy_map());
        trace!(?seam, "found horizontal seam");
        seam
    }

    fn find_vertical_seam(&self) -> Seam {
        let seam = energy_to_vertical_seam(&self.energy_map());
        trace!(?seam, "found vertical seam");
        seam
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::pixelgrid::Pixel;
    use proptest::prelude::*;

    /// Strategy for small grids of arbitrary pixels.
    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1usize..=8, 1usize..=8).prop_flat_map(|(width, height)| {
            proptest::collection::vec(any::<(u8, u8, u8)>(), width * height).prop_map(
                move |pixels| {
                    let columns = pixels
                        .chunks(height)
                        .map(|column| {
                            column
                                .iter()
                                .map(|&(r, g, b)| Pixel::new(r, g, b))
                                .collect()
                        })
                        .collect();
                    PixelGrid::new(columns).unwrap()
                },
            )
        })
    }

    fn connected(seam: &[usize]) -> bool {
        seam.windows(2)
            .all(|pair| (pair[0] as isize - pair[1] as isize).abs() <= 1)
    }

    proptest! {
        /// Property: a vertical seam has one entry per row, each inside
        /// the grid, and never jumps more than one column.
        #[test]
        fn prop_vertical_seam_shape(grid in grid_strategy()) {
            let carver = SeamCarver::new(grid);
            let seam = carver.find_vertical_seam();
            prop_assert_eq!(seam.len(), carver.height());
            prop_assert!(seam.iter().all(|&x| x < carver.width()));
            prop_assert!(connected(&seam));
        }

        /// Property: the same holds for horizontal seams, per column.
        #[test]
        fn prop_horizontal_seam_shape(grid in grid_strategy()) {
            let carver = SeamCarver::new(grid);
            let seam = carver.find_horizontal_seam();
            prop_assert_eq!(seam.len(), carver.width());
            prop_assert!(seam.iter().all(|&y| y < carver.height()));
            prop_assert!(connected(&seam));
        }

        /// Property: each removal shrinks exactly one axis by one.
        #[test]
        fn prop_removal_shrinks_one_axis(grid in grid_strategy()) {
            let mut carver = SeamCarver::new(grid);
            let (width, height) = (carver.width(), carver.height());

            let seam = carver.find_vertical_seam();
            if width > 1 {
                carver.remove_vertical_seam(&seam).unwrap();
                prop_assert_eq!((carver.width(), carver.height()), (width - 1, height));
            } else {
                prop_assert!(carver.remove_vertical_seam(&seam).is_err());
            }

            let (width, height) = (carver.width(), carver.height());
            let seam = carver.find_horizontal_seam();
            if height > 1 {
                carver.remove_horizontal_seam(&seam).unwrap();
                prop_assert_eq!((carver.width(), carver.height()), (width, height - 1));
            } else {
                prop_assert!(carver.remove_horizontal_seam(&seam).is_err());
            }
        }
    }
}
