// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::{format_err, Error};
use seamcarve::dump::energy_to_image;
use seamcarve::{PixelGrid, SeamCarver};
use tracing_subscriber::EnvFilter;

fn dimension(matches: &ArgMatches, name: &str, current: usize) -> Result<usize, Error> {
    if matches.is_present(name) {
        Ok(value_t!(matches, name, usize)?)
    } else {
        Ok(current)
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of("output")
        .ok_or_else(|| format_err!("no output image given"))?;

    let image = image::open(input)?;
    let grid = PixelGrid::from_image(&image)?;
    let mut carver = SeamCarver::new(grid);

    if matches.is_present("energy") {
        energy_to_image(&carver.energy_map())?.save(output)?;
        return Ok(());
    }

    let width = dimension(matches, "width", carver.width())?;
    let height = dimension(matches, "height", carver.height())?;
    let records = carver.carve(width, height)?;

    if matches.is_present("seams") {
        for record in &records {
            let seam: Vec<String> = record.seam.iter().map(usize::to_string).collect();
            println!("{} {}", record.orientation, seam.join(" "));
        }
    }

    carver.into_image().to_rgb_image()?.save(output)?;
    tracing::info!(output, "wrote carved image");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width (default: unchanged)")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height (default: unchanged)")
                .long("height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the input instead of carving")
                .long("energy")
                .conflicts_with_all(&["width", "height", "seams"]),
        )
        .arg(
            Arg::with_name("seams")
                .help("Print every removed seam to stdout")
                .long("seams"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        std::process::exit(1);
    }
}
