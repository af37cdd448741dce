//! DIB header record and pixel-array layout arithmetic.
//!
//! # File Layout
//!
//! ```text
//! Offset  Size  Field
//! 0       2     signature "BM"
//! 2       4     total file size
//! 6       4     reserved (0)
//! 10      4     pixel-array byte offset
//! 14      4     DIB header size (40)
//! 18      4     width (signed)
//! 22      4     height (signed, >= 0)
//! 26      2     color planes (1)
//! 28      2     bits per pixel (24)
//! 30      4     compression (0)
//! 34      4     pixel-array size
//! 38      4     horizontal resolution
//! 42      4     vertical resolution
//! 46      4     color-table size (0)
//! 50      4     important colors (0)
//! ```
//!
//! Scanlines are padded to a multiple of 4 bytes:
//!
//! ```
//! use bmpkit_core::{row_stride, row_padding};
//!
//! assert_eq!(row_stride(1), 4);   // 3 bytes + 1 pad
//! assert_eq!(row_stride(2), 8);   // 6 bytes + 2 pad
//! assert_eq!(row_stride(4), 12);  // 12 bytes, no pad
//! assert_eq!(row_padding(2), 2);
//! ```

use crate::error::{Error, Result};

/// Returns the byte length of one scanline: `ceil(24 * width / 32) * 4`.
#[inline]
pub fn row_stride(width: u32) -> u64 {
    (u64::from(Header::BITS_PER_PIXEL) * u64::from(width)).div_ceil(32) * 4
}

/// Returns the number of zero bytes that follow the pixels of each scanline.
#[inline]
pub fn row_padding(width: u32) -> u64 {
    row_stride(width) - u64::from(width) * 3
}

/// Returns `row_stride(width) * height`, failing if it does not fit the
/// 32-bit size field.
pub fn pixel_array_size(width: u32, height: u32) -> Result<u32> {
    let size = row_stride(width) * u64::from(height);
    u32::try_from(size).map_err(|_| Error::too_large(width.into(), height.into()))
}

/// The 40-byte DIB header.
///
/// Only width, height and the pixel-array size change after construction.
/// Format fields (bit depth, compression, planes, color table) are fixed
/// and exposed as associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    width: u32,
    height: u32,
    pixel_array_size: u32,
    /// Horizontal resolution, passed through untouched.
    pub horizontal_resolution: i32,
    /// Vertical resolution, passed through untouched.
    pub vertical_resolution: i32,
}

impl Header {
    /// Size of the file header preceding the DIB header.
    pub const FILE_HEADER_SIZE: u32 = 14;
    /// Size of the DIB header.
    pub const DIB_HEADER_SIZE: u32 = 40;
    /// Combined size of both headers, the minimum pixel-array offset.
    pub const HEADERS_SIZE: u32 = Self::FILE_HEADER_SIZE + Self::DIB_HEADER_SIZE;
    /// Bits per pixel.
    pub const BITS_PER_PIXEL: u16 = 24;
    /// Color planes.
    pub const COLOR_PLANES: u16 = 1;
    /// `BI_RGB`, no compression.
    pub const COMPRESSION_NONE: u32 = 0;
    /// Color-table entries.
    pub const COLOR_TABLE_SIZE: u32 = 0;
    /// Important-color count.
    pub const IMPORTANT_COLORS: u32 = 0;

    /// Largest width or height the signed header fields can hold.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;

    /// Creates a header for the given geometry.
    ///
    /// Fails with a size error if either side is zero or the dimensions
    /// do not fit the header fields.
    pub fn new(
        width: u32,
        height: u32,
        horizontal_resolution: i32,
        vertical_resolution: i32,
    ) -> Result<Self> {
        let mut header = Self {
            width: 0,
            height: 0,
            pixel_array_size: 0,
            horizontal_resolution,
            vertical_resolution,
        };
        header.resize(width, height)?;
        Ok(header)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel-array size in bytes.
    #[inline]
    pub fn pixel_array_size(&self) -> u32 {
        self.pixel_array_size
    }

    /// Bytes per scanline including padding.
    #[inline]
    pub fn row_stride(&self) -> u64 {
        row_stride(self.width)
    }

    /// Updates width, height and pixel-array size together.
    pub(crate) fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::zero_area(width as usize, height as usize));
        }
        if width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(Error::too_large(width.into(), height.into()));
        }
        self.pixel_array_size = pixel_array_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_stride() {
        for (width, stride) in [(1, 4), (2, 8), (3, 12), (4, 12), (5, 16), (100, 300)] {
            assert_eq!(row_stride(width), stride, "width {width}");
            assert_eq!(row_stride(width) % 4, 0);
        }
    }

    #[test]
    fn test_header_sizes() {
        let header = Header::new(2, 2, 2835, 2835).unwrap();
        assert_eq!(header.row_stride(), 8);
        assert_eq!(header.pixel_array_size(), 16);
        assert_eq!(Header::HEADERS_SIZE, 54);
    }

    #[test]
    fn test_header_zero_side() {
        assert!(Header::new(0, 3, 0, 0).unwrap_err().is_size_error());
        assert!(Header::new(3, 0, 0, 0).unwrap_err().is_size_error());
    }

    #[test]
    fn test_header_too_large() {
        let err = Header::new(u32::MAX, 1, 0, 0).unwrap_err();
        assert!(err.is_size_error());
        let err = Header::new(60_000, 60_000, 0, 0).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}
