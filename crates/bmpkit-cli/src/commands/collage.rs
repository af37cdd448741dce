//! Collage command - place an overlay next to or over a base image

use crate::CollageArgs;
use anyhow::{Context, Result};
use bmpkit_ops::geometry::make_collage;

pub fn run(args: CollageArgs, verbose: bool) -> Result<()> {
    let mut base = super::load_image(&args.input)?;
    let overlay = super::load_image(&args.overlay)?;

    if verbose {
        println!("Base:    {}x{}", base.width(), base.height());
        println!("Overlay: {}x{} at ({}, {})", overlay.width(), overlay.height(), args.x, args.y);
    }

    make_collage(&mut base, &overlay, args.x, args.y).context("Collage failed")?;
    let saved = super::save_image(&base, args.output.as_deref())?;

    if verbose {
        println!("Saved {}x{}: {}", base.width(), base.height(), saved.display());
    }
    Ok(())
}
