//! Error types for bmpkit operations.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! is one of four kinds:
//!
//! - [`FormatError`] - the byte source is not a supported bitmap
//! - [`RangeError`] - a numeric parameter is outside its documented domain
//! - [`SizeError`] - the operation would produce an empty or unrepresentable image
//! - [`std::io::Error`] - read/write failure at the storage boundary
//!
//! # Usage
//!
//! ```rust
//! use bmpkit_core::{Error, ErrorKind, RangeError};
//!
//! let err = Error::from(RangeError::PixelOutOfBounds { x: 4, y: 0, width: 4, height: 4 });
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert!(err.to_string().contains("(4, 0)"));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unsupported or malformed bitmap data.
    Format,
    /// Parameter outside its domain.
    Range,
    /// Zero-area or oversized result.
    Size,
    /// Storage failure.
    Io,
}

/// Errors that can occur while decoding, editing or encoding an image.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte source is not a supported bitmap.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// A numeric parameter is outside its documented domain.
    #[error("range error: {0}")]
    Range(#[from] RangeError),

    /// The operation would produce a zero-area or unrepresentable image.
    #[error("size error: {0}")]
    Size(#[from] SizeError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a byte source is rejected by the decoder.
///
/// The first five variants are checked in declaration order; decoding
/// stops at the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// First two bytes are not `"BM"`.
    #[error("incorrect signature {0:02X?}")]
    Signature([u8; 2]),

    /// Top-down (negative height) pixel layout.
    #[error("unsupported pixel array layout (negative image height {0})")]
    NegativeHeight(i32),

    /// Bits per pixel other than 24.
    #[error("unsupported color depth: {0} bits per pixel")]
    UnsupportedDepth(u16),

    /// Compressed pixel data.
    #[error("unsupported compression method {0}")]
    UnsupportedCompression(u32),

    /// Palette images.
    #[error("unsupported color table ({0} entries)")]
    UnsupportedColorTable(u32),

    /// Input ends before the headers or the declared pixel array.
    #[error("truncated data: need {needed} bytes, got {actual}")]
    Truncated {
        /// Bytes required
        needed: usize,
        /// Bytes available
        actual: usize,
    },

    /// Pixel array offset points inside the file/DIB headers.
    #[error("pixel array offset {0} overlaps the headers")]
    InvalidPixelOffset(u32),

    /// Width not positive or height zero.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Declared width
        width: i32,
        /// Declared height
        height: i32,
    },

    /// Declared dimensions overflow the 32-bit size fields.
    #[error("dimensions {width}x{height} overflow the bitmap size fields")]
    TooLarge {
        /// Declared width
        width: i32,
        /// Declared height
        height: i32,
    },
}

/// A numeric parameter outside its documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// A coordinate that must be non-negative was negative.
    #[error("{name} = {value} is less than 0")]
    NegativeCoordinate {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: i32,
    },

    /// Pixel address outside the buffer.
    #[error("pixel ({x}, {y}) outside the pixel array {width}x{height}")]
    PixelOutOfBounds {
        /// X coordinate
        x: i32,
        /// Y coordinate
        y: i32,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Crop rectangle reaches past the source buffer.
    #[error("crop region {w}x{h} at ({x}, {y}) exceeds image {width}x{height}")]
    CropOutOfBounds {
        /// Region X origin
        x: usize,
        /// Region Y origin
        y: usize,
        /// Region width
        w: usize,
        /// Region height
        h: usize,
        /// Image width
        width: usize,
        /// Image height
        height: usize,
    },

    /// Contrast value outside [-254, 258].
    #[error("contrast value {0} outside [-254, 258]")]
    Contrast(f64),

    /// NaN or infinite floating-point parameter.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
}

/// The result of an operation would not be a valid image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeError {
    /// One side has zero length.
    #[error("image can't have a side with 0 length ({width}x{height})")]
    ZeroArea {
        /// Resulting width
        width: usize,
        /// Resulting height
        height: usize,
    },

    /// Dimensions or byte sizes do not fit the 32-bit header fields.
    #[error("image {width}x{height} is too large for a bitmap header")]
    TooLarge {
        /// Resulting width
        width: u64,
        /// Resulting height
        height: u64,
    },
}

impl Error {
    /// Returns the coarse error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Format(_) => ErrorKind::Format,
            Self::Range(_) => ErrorKind::Range,
            Self::Size(_) => ErrorKind::Size,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Creates a [`RangeError::NegativeCoordinate`] error.
    #[inline]
    pub fn negative(name: &'static str, value: i32) -> Self {
        Self::Range(RangeError::NegativeCoordinate { name, value })
    }

    /// Creates a [`RangeError::PixelOutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self::Range(RangeError::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates a [`SizeError::ZeroArea`] error.
    #[inline]
    pub fn zero_area(width: usize, height: usize) -> Self {
        Self::Size(SizeError::ZeroArea { width, height })
    }

    /// Creates a [`SizeError::TooLarge`] error.
    #[inline]
    pub fn too_large(width: u64, height: u64) -> Self {
        Self::Size(SizeError::TooLarge { width, height })
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns `true` if this is a range error.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Range(_))
    }

    /// Returns `true` if this is a size error.
    #[inline]
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::Size(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("80x60"));
        assert!(err.is_range_error());
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_format_kinds() {
        let err: Error = FormatError::Signature(*b"PN").into();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("signature"));

        let err: Error = FormatError::UnsupportedDepth(32).into();
        assert!(err.to_string().contains("32"));

        let err: Error = FormatError::TooLarge { width: i32::MAX, height: 1 }.into();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("2147483647x1"));
    }

    #[test]
    fn test_zero_area() {
        let err = Error::zero_area(0, 5);
        assert!(err.is_size_error());
        assert!(err.to_string().contains("0x5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.is_io_error());
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
