//! The editable bitmap aggregate.
//!
//! An [`Image`] owns exactly one [`Header`], one [`PixelBuffer`], the byte
//! offset of the pixel array within the file and the total file size. It is
//! created by the decoder in `bmpkit-io`, mutated in place by `bmpkit-ops`
//! and serialized back by the encoder.
//!
//! Geometry changes go through [`Image::replace_buffer`], which swaps the
//! buffer and recomputes header width/height, pixel-array size and file
//! size in one step. If the new buffer is not representable nothing changes.
//!
//! ```
//! use bmpkit_core::{Header, Image, Pixel, PixelBuffer};
//!
//! let header = Header::new(2, 2, 0, 0)?;
//! let mut image = Image::from_parts(header, 54, PixelBuffer::new(2, 2))?;
//! assert_eq!(image.file_size(), 54 + 8 * 2);
//!
//! image.replace_buffer(PixelBuffer::new(5, 1))?;
//! assert_eq!(image.width(), 5);
//! assert_eq!(image.file_size(), 54 + 16);
//! # Ok::<(), bmpkit_core::Error>(())
//! ```

use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::error::{Error, FormatError, Result};
use crate::header::Header;
use crate::pixel::Pixel;

/// A decoded 24-bit bitmap with its file layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    header: Header,
    pixels: PixelBuffer,
    pixel_array_offset: u32,
    file_size: u32,
    source: Option<PathBuf>,
}

impl Image {
    /// Assembles an image from a header, pixel-array offset and buffer.
    ///
    /// The buffer must match the header dimensions and the offset must lie
    /// past the 54 bytes of headers. `file_size` is derived.
    pub fn from_parts(header: Header, pixel_array_offset: u32, pixels: PixelBuffer) -> Result<Self> {
        if pixel_array_offset < Header::HEADERS_SIZE {
            return Err(FormatError::InvalidPixelOffset(pixel_array_offset).into());
        }
        if pixels.dimensions() != (header.width() as usize, header.height() as usize) {
            return Err(FormatError::InvalidDimensions {
                width: pixels.width().try_into().unwrap_or(i32::MAX),
                height: pixels.height().try_into().unwrap_or(i32::MAX),
            }
            .into());
        }
        let file_size = file_size_for(pixel_array_offset, header.pixel_array_size())?;
        Ok(Self {
            header,
            pixels,
            pixel_array_offset,
            file_size,
            source: None,
        })
    }

    /// Records the path this image was loaded from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Path the image was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The DIB header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The pixel grid.
    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Mutable access to pixel values. The grid cannot be resized through
    /// this reference; use [`Image::replace_buffer`] for that.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        self.pixels.pixels_mut()
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Byte offset of the pixel array within the file.
    #[inline]
    pub fn pixel_array_offset(&self) -> u32 {
        self.pixel_array_offset
    }

    /// Total encoded size in bytes.
    #[inline]
    pub fn file_size(&self) -> u32 {
        self.file_size
    }

    /// Bytes per scanline including padding.
    #[inline]
    pub fn row_stride(&self) -> u64 {
        self.header.row_stride()
    }

    /// Returns the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.pixels.get(x, y)
    }

    /// Writes one pixel; out-of-range coordinates fail without mutation.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) -> Result<()> {
        self.pixels.set(x, y, pixel)
    }

    /// Replaces the pixel grid and recomputes every derived size field.
    ///
    /// The pixel-array offset is kept. On error the image is unchanged.
    pub fn replace_buffer(&mut self, pixels: PixelBuffer) -> Result<()> {
        let (w, h) = pixels.dimensions();
        let width = u32::try_from(w).map_err(|_| Error::too_large(w as u64, h as u64))?;
        let height = u32::try_from(h).map_err(|_| Error::too_large(w as u64, h as u64))?;

        let mut header = self.header;
        header.resize(width, height)?;
        let file_size = file_size_for(self.pixel_array_offset, header.pixel_array_size())?;

        self.header = header;
        self.pixels = pixels;
        self.file_size = file_size;
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Verifies the layout invariants, returning a description of the first
    /// violation.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let (w, h) = self.pixels.dimensions();
        if (w, h) != (self.header.width() as usize, self.header.height() as usize) {
            return Err(format!(
                "buffer {}x{} does not match header {}x{}",
                w,
                h,
                self.header.width(),
                self.header.height()
            ));
        }
        let stride = crate::header::row_stride(self.header.width());
        if u64::from(self.header.pixel_array_size()) != stride * h as u64 {
            return Err(format!(
                "pixel array size {} != stride {} * height {}",
                self.header.pixel_array_size(),
                stride,
                h
            ));
        }
        if u64::from(self.file_size)
            != u64::from(self.pixel_array_offset) + u64::from(self.header.pixel_array_size())
        {
            return Err(format!(
                "file size {} != offset {} + pixel array {}",
                self.file_size,
                self.pixel_array_offset,
                self.header.pixel_array_size()
            ));
        }
        Ok(())
    }
}

fn file_size_for(offset: u32, pixel_array_size: u32) -> Result<u32> {
    offset.checked_add(pixel_array_size).ok_or_else(|| {
        Error::too_large(u64::from(offset) + u64::from(pixel_array_size), 1)
    })
}
