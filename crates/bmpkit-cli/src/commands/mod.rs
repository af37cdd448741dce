//! CLI command implementations

pub mod adjust;
pub mod collage;
pub mod crop;
pub mod info;
pub mod pixel;
pub mod rotate;
pub mod title;

use anyhow::{Context, Result};
use bmpkit_core::Image;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<Image> {
    bmpkit_io::load(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to `output`, or back to the file it was loaded from.
///
/// Returns the path written.
pub fn save_image<'a>(image: &'a Image, output: Option<&'a Path>) -> Result<&'a Path> {
    match output {
        Some(path) => {
            bmpkit_io::save(image, path)
                .with_context(|| format!("Failed to save: {}", path.display()))?;
            Ok(path)
        }
        None => {
            bmpkit_io::save_in_place(image).context("Failed to save in place")?;
            image.source().context("Image has no source path")
        }
    }
}
