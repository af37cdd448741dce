//! Rotate command - arbitrary angle about a pivot

use crate::RotateArgs;
use anyhow::{Context, Result};
use bmpkit_ops::geometry::rotate;
use tracing::debug;

pub fn run(args: RotateArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    // Center pixel when not given; dimensions always fit i32
    let pivot_x = args.pivot_x.unwrap_or((image.width() / 2) as i32);
    let pivot_y = args.pivot_y.unwrap_or((image.height() / 2) as i32);
    debug!(pivot_x, pivot_y, angle = args.angle, "Resolved pivot");

    if verbose {
        println!("Rotating {}° about ({}, {})", args.angle, pivot_x, pivot_y);
    }

    rotate(&mut image, args.angle, pivot_x, pivot_y).context("Rotate failed")?;
    let saved = super::save_image(&image, args.output.as_deref())?;

    if verbose {
        println!("Saved: {}", saved.display());
    }
    Ok(())
}
