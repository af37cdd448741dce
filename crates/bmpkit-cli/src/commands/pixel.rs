//! Pixel command

use crate::PixelArgs;
use anyhow::{Context, Result};
use bmpkit_ops::adjust::set_pixel;

pub fn run(args: PixelArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    set_pixel(&mut image, args.x, args.y, args.color)
        .with_context(|| format!("Cannot set pixel ({}, {})", args.x, args.y))?;
    let saved = super::save_image(&image, args.output.as_deref())?;

    if verbose {
        println!("Set ({}, {}) to {}: {}", args.x, args.y, args.color, saved.display());
    }
    Ok(())
}
