//! # bmpkit-io
//!
//! Binary codec for uncompressed 24-bit bitmaps.
//!
//! Decoding validates the headers up front and produces a fully formed
//! [`Image`]; encoding serializes the current header and pixel grid back to
//! the exact on-disk layout.
//!
//! # Architecture
//!
//! - [`ImageReader`] / [`ImageWriter`] - Traits for format readers/writers
//! - [`bmp::BmpReader`] / [`bmp::BmpWriter`] - The BMP implementation
//! - [`load`] / [`save`] / [`save_in_place`] - High-level file functions
//! - [`decode`] / [`encode`] - In-memory variants
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bmpkit_io::{load, save};
//!
//! let image = load("input.bmp")?;
//! save(&image, "output.bmp")?;
//! ```
//!
//! # Resource Model
//!
//! Nothing is streamed. The whole file is read into memory before parsing
//! and the whole output is built in memory before writing. File handles are
//! scoped to a single call and closed on every exit path. Saves go through a
//! temporary file that replaces the destination only after a complete write.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod traits;
pub mod bmp;

pub use traits::{ImageReader, ImageWriter};

use std::io;
use std::path::Path;

use bmpkit_core::{Error, Image, Result};

/// Reads a bitmap from a file.
///
/// The returned image remembers `path` so that [`save_in_place`] can write
/// it back.
///
/// # Errors
///
/// - I/O error if the file cannot be read
/// - Format error if the content is not a supported bitmap
pub fn load<P: AsRef<Path>>(path: P) -> Result<Image> {
    bmp::read(path)
}

/// Writes a bitmap to a file, replacing it atomically.
pub fn save<P: AsRef<Path>>(image: &Image, path: P) -> Result<()> {
    bmp::write(path, image)
}

/// Writes a bitmap back to the path it was loaded from.
///
/// Fails with an I/O error of kind [`io::ErrorKind::InvalidInput`] if the
/// image was not loaded from a file.
pub fn save_in_place(image: &Image) -> Result<()> {
    let path = image.source().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "image has no source path",
        ))
    })?;
    bmp::write(path, image)
}

/// Decodes a bitmap from memory.
pub fn decode(data: &[u8]) -> Result<Image> {
    bmp::BmpReader::default().read_from_memory(data)
}

/// Encodes an image to bitmap bytes; the result is exactly
/// [`Image::file_size`] bytes long.
pub fn encode(image: &Image) -> Result<Vec<u8>> {
    bmp::BmpWriter::default().write_to_memory(image)
}
