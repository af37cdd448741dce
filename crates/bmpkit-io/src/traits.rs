//! I/O traits for image readers and writers.

use bmpkit_core::{Image, Result};
use std::path::Path;

/// Trait for image format readers.
///
/// Readers fully materialize the source bytes before parsing; the file
/// handle is released before decoding starts.
pub trait ImageReader {
    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Image>;

    /// Reads an image from memory.
    fn read_from_memory(&self, data: &[u8]) -> Result<Image>;
}

/// Trait for image format writers.
pub trait ImageWriter {
    /// Writes an image to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, image: &Image) -> Result<()>;

    /// Writes an image to memory.
    fn write_to_memory(&self, image: &Image) -> Result<Vec<u8>>;
}
