// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end behavior of the carver on small, hand-built images.

use seamcarve::{CarveError, Orientation, Pixel, PixelGrid, SeamCarver, SeamFinder};

// A busy, deterministic pattern.
fn patterned(width: usize, height: usize) -> PixelGrid {
    let columns = (0..width)
        .map(|x| {
            (0..height)
                .map(|y| {
                    Pixel::new(
                        ((x * 37 + y * 11) % 256) as u8,
                        ((x * x * 5 + y * 29) % 256) as u8,
                        ((x * 13 + y * y * 7) % 256) as u8,
                    )
                })
                .collect()
        })
        .collect();
    PixelGrid::new(columns).unwrap()
}

fn mirrored(grid: &PixelGrid) -> PixelGrid {
    let mut columns = grid.columns().to_vec();
    columns.reverse();
    PixelGrid::new(columns).unwrap()
}

fn energies(carver: &SeamCarver) -> Vec<Vec<f64>> {
    (0..carver.width())
        .map(|x| {
            (0..carver.height())
                .map(|y| carver.pixel_energy(x, y).unwrap())
                .collect()
        })
        .collect()
}

#[test]
fn a_single_pixel_has_zero_energy() {
    let grid = PixelGrid::new(vec![vec![Pixel::new(200, 10, 99)]]).unwrap();
    let carver = SeamCarver::new(grid);
    assert_eq!(carver.pixel_energy(0, 0).unwrap(), 0.0);
    assert_eq!(carver.find_vertical_seam(), vec![0]);
    assert_eq!(carver.find_horizontal_seam(), vec![0]);
}

#[test]
fn mirroring_left_to_right_preserves_energy() {
    let grid = patterned(7, 5);
    let flipped = SeamCarver::new(mirrored(&grid));
    let carver = SeamCarver::new(grid);
    for x in 0..7 {
        for y in 0..5 {
            assert_eq!(
                carver.pixel_energy(x, y).unwrap(),
                flipped.pixel_energy(6 - x, y).unwrap()
            );
        }
    }
}

#[test]
fn a_flat_three_by_three_loses_its_first_column() {
    let grid = PixelGrid::new(vec![vec![Pixel::new(5, 5, 5); 3]; 3]).unwrap();
    let mut carver = SeamCarver::new(grid);
    assert!(energies(&carver).iter().flatten().all(|&e| e == 0.0));

    let seam = carver.find_vertical_seam();
    assert_eq!(seam, vec![0, 0, 0]);
    carver.remove_vertical_seam(&seam).unwrap();

    assert_eq!((carver.width(), carver.height()), (2, 3));
    assert!(energies(&carver).iter().flatten().all(|&e| e == 0.0));
}

#[test]
fn a_one_pixel_wide_image_shrinks_to_a_point() {
    let n = 5;
    let column = (0..n).map(|y| Pixel::new(0, (y * 50) as u8, 0)).collect();
    let mut carver = SeamCarver::new(PixelGrid::new(vec![column]).unwrap());

    assert_eq!(carver.find_vertical_seam(), vec![0; n]);
    assert_eq!(
        carver.remove_vertical_seam(&[0; 5]),
        Err(CarveError::Exhausted(Orientation::Vertical))
    );

    for removed in 1..n {
        let seam = carver.find_horizontal_seam();
        assert_eq!(seam.len(), 1);
        carver.remove_horizontal_seam(&seam).unwrap();
        assert_eq!((carver.width(), carver.height()), (1, n - removed));
    }
    let seam = carver.find_horizontal_seam();
    assert_eq!(
        carver.remove_horizontal_seam(&seam),
        Err(CarveError::Exhausted(Orientation::Horizontal))
    );
}

#[test]
fn removal_leaves_distant_energy_untouched() {
    let mut carver = SeamCarver::new(patterned(10, 6));
    let before = energies(&carver);

    // A straight seam down column 4 disturbs columns 3 and 5 only.
    carver.remove_vertical_seam(&[4; 6]).unwrap();
    let after = energies(&carver);

    for x in 0..3 {
        assert_eq!(after[x], before[x], "column {}", x);
    }
    for x in 6..10 {
        assert_eq!(after[x - 1], before[x], "column {}", x);
    }
}

#[test]
fn seams_stay_connected_and_full_length() {
    let mut carver = SeamCarver::new(patterned(12, 9));
    for orientation in [Orientation::Vertical, Orientation::Horizontal]
        .iter()
        .cycle()
        .take(10)
    {
        let (width, height) = (carver.width(), carver.height());
        let seam = match orientation {
            Orientation::Vertical => carver.find_vertical_seam(),
            Orientation::Horizontal => carver.find_horizontal_seam(),
        };
        let (length, limit) = match orientation {
            Orientation::Vertical => (height, width),
            Orientation::Horizontal => (width, height),
        };
        assert_eq!(seam.len(), length);
        assert!(seam.iter().all(|&i| i < limit));
        assert!(seam
            .windows(2)
            .all(|pair| pair[0].max(pair[1]) - pair[0].min(pair[1]) <= 1));

        match orientation {
            Orientation::Vertical => {
                carver.remove_vertical_seam(&seam).unwrap();
                assert_eq!((carver.width(), carver.height()), (width - 1, height));
            }
            Orientation::Horizontal => {
                carver.remove_horizontal_seam(&seam).unwrap();
                assert_eq!((carver.width(), carver.height()), (width, height - 1));
            }
        }
    }
    assert_eq!((carver.width(), carver.height()), (7, 4));
}

#[test]
fn flat_regions_are_carved_before_edges() {
    // Uniform gray with one bright column.  The gray columns beside it
    // carry all the energy, so both seams come out of the flat gray on
    // the left and the bright column survives.
    let gray = Pixel::new(100, 100, 100);
    let bright = Pixel::new(250, 250, 250);
    let columns = (0..6)
        .map(|x| vec![if x == 4 { bright } else { gray }; 4])
        .collect();
    let mut carver = SeamCarver::new(PixelGrid::new(columns).unwrap());

    let records = carver.carve(4, 4).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|record| record.orientation == Orientation::Vertical));
    assert!(carver
        .image()
        .columns()
        .iter()
        .any(|column| column.iter().all(|&p| p == bright)));
}

#[test]
fn the_image_comes_back_row_for_row() {
    let grid = patterned(4, 3);
    let rows = grid.to_rows();
    let carver = SeamCarver::new(grid);
    assert_eq!(carver.into_image().to_rows(), rows);
}
