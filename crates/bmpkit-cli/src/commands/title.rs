//! Title command - stamp text with the built-in font

use crate::TitleArgs;
use anyhow::{Context, Result};
use bmpkit_ops::text::{add_title, glyph};
use tracing::warn;

pub fn run(args: TitleArgs, verbose: bool) -> Result<()> {
    let mut image = super::load_image(&args.input)?;

    let missing: String = args.text.chars().filter(|c| glyph(*c).is_none()).collect();
    if !missing.trim().is_empty() {
        warn!(chars = %missing.trim(), "No glyph, leaving gaps");
    }

    add_title(&mut image, &args.text, args.x, args.y).context("Title failed")?;
    let saved = super::save_image(&image, args.output.as_deref())?;

    if verbose {
        println!("Title {:?} at ({}, {}): {}", args.text, args.x, args.y, saved.display());
    }
    Ok(())
}
