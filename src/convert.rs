// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving pixels between ImageRS buffers and the pixel grid.
//!
//! This is purely in-memory.  Decoding and encoding files is the
//! caller's business.

use crate::error::CarveError;
use crate::pixelgrid::{Pixel, PixelGrid};
use image::Pixel as ImagePixel;
use image::{GenericImageView, ImageBuffer, Primitive, Rgb, RgbImage};
use num_traits::{Bounded, NumCast};
use std::convert::TryFrom;

// Rescale one subpixel into 0..=255.  For u8 images this is the
// identity; wider subpixels are scaled down by their maximum.
fn subpixel_to_u8<S: Primitive>(value: S) -> Option<u8> {
    let value: f64 = NumCast::from(value)?;
    let max: f64 = NumCast::from(<S as Bounded>::max_value())?;
    NumCast::from((value * 255.0 / max).round())
}

pub(crate) fn image_dimension(value: usize) -> Result<u32, CarveError> {
    u32::try_from(value).map_err(|_| {
        CarveError::InvalidArgument(format!("{} pixels is too large for an image side", value))
    })
}

impl PixelGrid {
    /// Build a grid from any ImageRS image.  Every pixel is converted
    /// to RGB (dropping alpha) and rescaled to eight bits per channel.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self, CarveError>
    where
        I: GenericImageView<Pixel = P>,
        P: ImagePixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let columns = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| {
                        let rgb = image.get_pixel(x, y).to_rgb();
                        let channels = rgb
                            .channels()
                            .iter()
                            .map(|&c| subpixel_to_u8(c))
                            .collect::<Option<Vec<u8>>>();
                        match channels.as_ref().map(Vec::as_slice) {
                            Some(&[red, green, blue]) => Ok(Pixel::new(red, green, blue)),
                            _ => Err(CarveError::InvalidArgument(format!(
                                "pixel ({}, {}) cannot be expressed as 8-bit RGB",
                                x, y
                            ))),
                        }
                    })
                    .collect::<Result<Vec<Pixel>, CarveError>>()
            })
            .collect::<Result<Vec<Vec<Pixel>>, CarveError>>()?;
        PixelGrid::new(columns)
    }

    /// Render the grid as an 8-bit RGB image.
    pub fn to_rgb_image(&self) -> Result<RgbImage, CarveError> {
        let width = image_dimension(self.width())?;
        let height = image_dimension(self.height())?;
        let columns = self.columns();
        Ok(ImageBuffer::from_fn(width, height, |x, y| {
            let p = columns[x as usize][y as usize];
            Rgb([p.red, p.green, p.blue])
        }))
    }
}
