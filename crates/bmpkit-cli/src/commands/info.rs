//! Image info command.
//!
//! Prints the header fields and the layout sizes derived from them.

use crate::InfoArgs;
use anyhow::Result;
use bmpkit_core::{Header, Image, row_padding};
use std::path::Path;

/// Runs the info command for every input.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for (i, path) in args.input.iter().enumerate() {
        let image = super::load_image(path)?;
        if i > 0 {
            println!();
        }
        print_text(path, &image, verbose);
    }
    Ok(())
}

fn print_text(path: &Path, image: &Image, verbose: bool) {
    let header = image.header();
    println!("{}", path.display());
    println!("  Resolution: {}x{}", header.width(), header.height());
    println!("  Depth:      {} bpp, uncompressed", Header::BITS_PER_PIXEL);
    println!(
        "  Row stride: {} bytes ({} padding)",
        image.row_stride(),
        row_padding(header.width())
    );
    println!("  Pixel data: {} bytes at offset {}", header.pixel_array_size(), image.pixel_array_offset());
    println!("  File size:  {} bytes", image.file_size());

    if verbose {
        println!(
            "  DPI:        {:.0}x{:.0} ({}x{} px/m)",
            ppm_to_dpi(header.horizontal_resolution),
            ppm_to_dpi(header.vertical_resolution),
            header.horizontal_resolution,
            header.vertical_resolution
        );
    }
}

fn ppm_to_dpi(ppm: i32) -> f64 {
    f64::from(ppm) * 0.0254
}
