//! Brightness and contrast commands

use crate::{BrightnessArgs, ContrastArgs};
use anyhow::{Context, Result};
use bmpkit_ops::adjust::{contrast_gain, edit_brightness, edit_contrast};

pub fn run_brightness(args: BrightnessArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    edit_brightness(&mut image, args.delta);
    let saved = super::save_image(&image, args.output.as_deref())?;

    if verbose {
        println!("Brightness {:+}: {}", args.delta, saved.display());
    }
    Ok(())
}

pub fn run_contrast(args: ContrastArgs, verbose: bool) -> Result<()> {
    // Validate before touching the file
    let gain = contrast_gain(args.value).context("Invalid contrast")?;
    let mut image = super::load_image(&args.input)?;

    if verbose {
        println!("Contrast {} (gain {:.3})", args.value, gain);
    }

    edit_contrast(&mut image, args.value)?;
    let saved = super::save_image(&image, args.output.as_deref())?;

    if verbose {
        println!("Saved: {}", saved.display());
    }
    Ok(())
}
