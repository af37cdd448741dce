//! # bmpkit-core
//!
//! Core types for editing uncompressed 24-bit bitmap images.
//!
//! This crate provides the foundational types used throughout bmpkit:
//!
//! - [`Pixel`] - 3-channel 8-bit color with saturating construction
//! - [`Header`] - DIB header record and pixel-array layout arithmetic
//! - [`PixelBuffer`] - Owned row-major pixel grid, origin top-left
//! - [`Image`] - The aggregate that ties header, buffer and file layout together
//! - [`Error`] - Unified error type (format, range, size, I/O)
//!
//! ## Layout Invariants
//!
//! Every public operation on an [`Image`] leaves these true:
//!
//! ```text
//! row_stride       = ceil(24 * width / 32) * 4
//! pixel_array_size = row_stride * height
//! file_size        = pixel_array_offset + pixel_array_size
//! buffer dims      = (header.height, header.width)
//! ```
//!
//! The only way to change geometry is [`Image::replace_buffer`], which
//! recomputes all derived fields together.
//!
//! ## Crate Structure
//!
//! ```text
//! bmpkit-core (this crate)
//!    ^
//!    |
//!    +-- bmpkit-io  (decode / encode)
//!    +-- bmpkit-ops (crop, rotate, collage, pixel edits, text)
//!    +-- bmpkit-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod header;
pub mod image;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, ErrorKind, FormatError, RangeError, Result, SizeError};
pub use header::{Header, pixel_array_size, row_padding, row_stride};
pub use image::Image;
pub use pixel::Pixel;

/// Prelude module for convenient imports.
///
/// ```
/// use bmpkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::header::Header;
    pub use crate::image::Image;
    pub use crate::pixel::Pixel;
}
