// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Build a `PixelGrid`, hand it to a `SeamCarver`, and either ask for
//! seams and remove them one at a time or let `carve` do it down to a
//! target size.

mod ternary;

pub mod convert;
pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use error::CarveError;
pub use pixelgrid::{Channel, Pixel, PixelGrid};
pub use seamcarver::{SeamCarver, SeamRecord};
pub use seamfinder::{cheapest_predecessor, EnergyCell, Orientation, Seam, SeamFinder};
