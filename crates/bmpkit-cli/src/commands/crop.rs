//! Crop command

use crate::CropArgs;
use anyhow::{Context, Result};
use bmpkit_ops::geometry::crop;
use tracing::info;

pub fn run(args: CropArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    let (w, h) = (image.width(), image.height());

    if verbose {
        println!(
            "Cropping ({},{})-({},{}) from {}x{}",
            args.x1, args.y1, args.x2, args.y2, w, h
        );
    }

    crop(&mut image, args.x1, args.y1, args.x2, args.y2).context("Crop failed")?;
    let saved = super::save_image(&image, args.output.as_deref())?;
    info!(width = image.width(), height = image.height(), path = %saved.display(), "Cropped");

    if verbose {
        println!("Saved {}x{}: {}", image.width(), image.height(), saved.display());
    }
    Ok(())
}
