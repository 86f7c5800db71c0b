// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of what the carver sees, for debugging.

use crate::convert::image_dimension as side;
use crate::energy::EnergyMap;
use crate::error::CarveError;
use crate::pixelgrid::PixelGrid;
use crate::seamcarver::SeamRecord;
use crate::seamfinder::Orientation;
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};

const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Render an energy map as a grayscale image, scaled so the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &EnergyMap) -> Result<GrayImage, CarveError> {
    let (width, height) = (side(energy.width)?, side(energy.height)?);
    let factor = energy.cells().iter().cloned().fold(0.0, f64::max);
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let e = energy[(x as usize, y as usize)];
        let shade = if factor > 0.0 {
            (e * 255.0 / factor).round().min(255.0) as u8
        } else {
            0
        };
        Luma([shade])
    }))
}

/// Render the grid with one seam painted over it.  The seam must fit
/// the grid as it was before that seam was removed.
pub fn seam_overlay(grid: &PixelGrid, record: &SeamRecord) -> Result<RgbImage, CarveError> {
    let (width, height) = grid.dimensions();
    let expected = match record.orientation {
        Orientation::Vertical => height,
        Orientation::Horizontal => width,
    };
    if record.seam.len() != expected {
        return Err(CarveError::InvalidArgument(format!(
            "a {} seam over a {}x{} image needs {} entries, got {}",
            record.orientation,
            width,
            height,
            expected,
            record.seam.len()
        )));
    }

    let mut out = grid.to_rgb_image()?;
    for (along, &across) in record.seam.iter().enumerate() {
        let (x, y) = match record.orientation {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        };
        grid.pixel_at(x, y)?;
        out.put_pixel(side(x)?, side(y)?, SEAM_COLOR);
    }
    Ok(out)
}
