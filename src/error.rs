// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the grid and the carver.
//!
//! Everything here is a programming or input error detected at the
//! point of the call; there is nothing transient to retry in an
//! in-memory computation, so callers either skip the offending seam or
//! abandon the resize.

use crate::seamfinder::Orientation;
use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum CarveError {
    /// A coordinate, or an entry of a seam, lies outside the grid.
    #[fail(
        display = "coordinate ({}, {}) lies outside a {}x{} grid",
        col, row, width, height
    )]
    OutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    /// A malformed table, seam, or carve target.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The axis a seam would shrink is already a single pixel.
    #[fail(display = "no {} seam left to remove: that axis is a single pixel", _0)]
    Exhausted(Orientation),
}
