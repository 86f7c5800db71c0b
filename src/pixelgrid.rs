// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! A column-major table of RGB pixels.  The outer vector is indexed
//! by column, the inner by row, so `columns[x][y]` is the pixel at
//! (x, y).  That layout decides what the two seam removals cost: a
//! vertical seam takes one pixel out of every row, which means
//! shifting across columns (one element in each column) for every
//! row, while a horizontal seam shifts within each column.  Both come
//! to O(width × height), and both finish by dropping a now-stale
//! trailing column or row.
//!
//! Neighbor lookups wrap around the edges, as on a torus.  The seam
//! search does *not* do this; it clamps.  See `seamfinder`.

use crate::cq;
use crate::error::CarveError;
use crate::seamfinder::Orientation;

/// A single RGB pixel.  No alpha.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Pixel { red, green, blue }
    }

    /// The value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

/// Selects one color channel of a pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// The four wraparound neighbors of a pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Neighbors {
    pub left: Pixel,
    pub right: Pixel,
    pub top: Pixel,
    pub bottom: Pixel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    columns: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Build a grid from a column-major table: `columns[x][y]`.  The
    /// table must be non-empty and rectangular.
    pub fn new(columns: Vec<Vec<Pixel>>) -> Result<Self, CarveError> {
        let width = columns.len();
        if width == 0 {
            return Err(CarveError::InvalidArgument(
                "a pixel grid needs at least one column".to_string(),
            ));
        }
        let height = columns[0].len();
        if height == 0 {
            return Err(CarveError::InvalidArgument(
                "a pixel grid needs at least one row".to_string(),
            ));
        }
        if let Some(x) = columns.iter().position(|column| column.len() != height) {
            return Err(CarveError::InvalidArgument(format!(
                "column {} has {} pixels, expected {}",
                x,
                columns[x].len(),
                height
            )));
        }
        Ok(PixelGrid {
            width,
            height,
            columns,
        })
    }

    /// Build a grid from a row-major table: `rows[y][x]`, which is how
    /// pixel data is usually written out by hand.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, CarveError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(CarveError::InvalidArgument(format!(
                "row {} has {} pixels, expected {}",
                y,
                rows[y].len(),
                width
            )));
        }
        let columns = (0..width)
            .map(|x| (0..height).map(|y| rows[y][x]).collect())
            .collect();
        PixelGrid::new(columns)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The raw column-major table.
    pub fn columns(&self) -> &[Vec<Pixel>] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Vec<Pixel>> {
        self.columns
    }

    /// The grid transposed into a row-major table.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        (0..self.height)
            .map(|y| self.columns.iter().map(|column| column[y]).collect())
            .collect()
    }

    fn check(&self, col: usize, row: usize) -> Result<(), CarveError> {
        if col < self.width && row < self.height {
            Ok(())
        } else {
            Err(CarveError::OutOfRange {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn pixel_at(&self, col: usize, row: usize) -> Result<Pixel, CarveError> {
        self.check(col, row)?;
        Ok(self.columns[col][row])
    }

    pub fn top_pixel(&self, col: usize, row: usize) -> Result<Pixel, CarveError> {
        self.check(col, row)?;
        Ok(self.columns[col][self.row_above(row)])
    }

    pub fn bottom_pixel(&self, col: usize, row: usize) -> Result<Pixel, CarveError> {
        self.check(col, row)?;
        Ok(self.columns[col][self.row_below(row)])
    }

    pub fn left_pixel(&self, col: usize, row: usize) -> Result<Pixel, CarveError> {
        self.check(col, row)?;
        Ok(self.columns[self.column_left(col)][row])
    }

    pub fn right_pixel(&self, col: usize, row: usize) -> Result<Pixel, CarveError> {
        self.check(col, row)?;
        Ok(self.columns[self.column_right(col)][row])
    }

    // The wraparound rules, in one place.
    fn row_above(&self, row: usize) -> usize {
        cq!(row == 0, self.height - 1, row - 1)
    }

    fn row_below(&self, row: usize) -> usize {
        cq!(row + 1 == self.height, 0, row + 1)
    }

    fn column_left(&self, col: usize) -> usize {
        cq!(col == 0, self.width - 1, col - 1)
    }

    fn column_right(&self, col: usize) -> usize {
        cq!(col + 1 == self.width, 0, col + 1)
    }

    /// Unchecked neighbor lookup for the energy pass, which only ever
    /// walks coordinates taken from the grid's own dimensions.
    pub(crate) fn neighbors(&self, col: usize, row: usize) -> Neighbors {
        Neighbors {
            left: self.columns[self.column_left(col)][row],
            right: self.columns[self.column_right(col)][row],
            top: self.columns[col][self.row_above(row)],
            bottom: self.columns[col][self.row_below(row)],
        }
    }

    /// Signed difference `a - b` of a single channel.
    pub fn channel_difference(a: &Pixel, b: &Pixel, channel: Channel) -> i32 {
        i32::from(a.channel(channel)) - i32::from(b.channel(channel))
    }

    /// Shift every pixel of `row` at columns after `col` one place
    /// left, overwriting (col, row).  The last column's slot in that
    /// row is left stale until `drop_last_column`.
    pub fn compact_row_from(&mut self, col: usize, row: usize) -> Result<(), CarveError> {
        self.check(col, row)?;
        for x in col..self.width - 1 {
            self.columns[x][row] = self.columns[x + 1][row];
        }
        Ok(())
    }

    /// Shift every pixel of column `col` below `row` one place up,
    /// overwriting (col, row).  The column's last slot is left stale
    /// until `drop_last_row`.
    pub fn compact_column_from(&mut self, col: usize, row: usize) -> Result<(), CarveError> {
        self.check(col, row)?;
        self.columns[col].copy_within(row + 1.., row);
        Ok(())
    }

    pub fn drop_last_column(&mut self) -> Result<(), CarveError> {
        if self.width == 1 {
            return Err(CarveError::Exhausted(Orientation::Vertical));
        }
        self.columns.pop();
        self.width -= 1;
        Ok(())
    }

    pub fn drop_last_row(&mut self) -> Result<(), CarveError> {
        if self.height == 1 {
            return Err(CarveError::Exhausted(Orientation::Horizontal));
        }
        self.columns.iter_mut().for_each(|column| {
            column.pop();
        });
        self.height -= 1;
        Ok(())
    }
}
