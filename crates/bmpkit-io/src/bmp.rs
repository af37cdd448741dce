//! BMP (Windows bitmap) format support.
//!
//! Reads and writes uncompressed 24-bit bitmaps with a 40-byte DIB header.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bmpkit_io::bmp;
//!
//! let image = bmp::read("photo.bmp")?;
//! bmp::write("copy.bmp", &image)?;
//! ```
//!
//! # Validation
//!
//! The decoder checks, in order, and stops at the first failure:
//!
//! | # | Field | Requirement |
//! |---|-------|-------------|
//! | 1 | signature (0) | `"BM"` |
//! | 2 | height (22) | `>= 0` |
//! | 3 | bits per pixel (28) | `24` |
//! | 4 | compression (30) | `0` |
//! | 5 | color table (46) | `0` |
//!
//! After that the geometry is checked (positive width, non-zero height,
//! pixel-array offset past the headers, enough bytes for every scanline).
//! No partial image is ever returned.
//!
//! # Pixel Array
//!
//! Scanlines are stored bottom-to-top, pixels as blue-green-red, each
//! scanline zero-padded to a multiple of 4 bytes. The decoder flips rows so
//! that buffer row 0 is the visual top.
//!
//! # Normalization
//!
//! The declared file size and pixel-array size are read but not trusted:
//! the decoded image carries values recomputed from the geometry, so
//! re-encoding always produces a self-consistent file. Bytes between the
//! DIB header and the pixel array are not preserved; the encoder writes
//! zeros there.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use bmpkit_core::{
    Error, FormatError, Header, Image, Pixel, PixelBuffer, Result, row_padding, row_stride,
};

use crate::{ImageReader, ImageWriter};

// === Constants ===

/// Signature bytes `"BM"`.
pub const SIGNATURE: [u8; 2] = *b"BM";

// Field offsets within the headers
const OFF_FILE_SIZE: usize = 2;
const OFF_PIXEL_OFFSET: usize = 10;
const OFF_DIB_SIZE: usize = 14;
const OFF_WIDTH: usize = 18;
const OFF_HEIGHT: usize = 22;
const OFF_BPP: usize = 28;
const OFF_COMPRESSION: usize = 30;
const OFF_IMAGE_SIZE: usize = 34;
const OFF_X_RES: usize = 38;
const OFF_Y_RES: usize = 42;
const OFF_COLOR_TABLE: usize = 46;

// === Reader Options ===

/// Options for reading BMP files.
#[derive(Debug, Clone, Default)]
pub struct BmpReaderOptions {
    /// Also accept the byte-swapped signature `"MB"`.
    ///
    /// Some writers store the signature as a little-endian `0x424D` word.
    /// Off by default.
    pub accept_swapped_signature: bool,
}

// === Writer Options ===

/// Options for writing BMP files.
#[derive(Debug, Clone)]
pub struct BmpWriterOptions {
    /// Write to a temporary file next to the destination and rename it into
    /// place only after every byte has been written. Default: `true`.
    ///
    /// With `false` the destination is truncated and written directly, and
    /// a failure part-way leaves a truncated file behind.
    pub atomic: bool,
}

impl Default for BmpWriterOptions {
    fn default() -> Self {
        Self { atomic: true }
    }
}

// === Raw Header ===

/// Header fields as they appear in the file, before validation.
#[derive(Debug, Clone, Copy)]
struct RawHeader {
    signature: [u8; 2],
    file_size: u32,
    pixel_offset: u32,
    dib_size: u32,
    width: i32,
    height: i32,
    bits_per_pixel: u16,
    compression: u32,
    image_size: u32,
    x_res: i32,
    y_res: i32,
    color_table: u32,
}

impl RawHeader {
    fn parse(data: &[u8]) -> Result<Self> {
        let needed = Header::HEADERS_SIZE as usize;
        if data.len() < needed {
            return Err(FormatError::Truncated {
                needed,
                actual: data.len(),
            }
            .into());
        }

        Ok(Self {
            signature: [data[0], data[1]],
            file_size: LittleEndian::read_u32(&data[OFF_FILE_SIZE..]),
            pixel_offset: LittleEndian::read_u32(&data[OFF_PIXEL_OFFSET..]),
            dib_size: LittleEndian::read_u32(&data[OFF_DIB_SIZE..]),
            width: LittleEndian::read_i32(&data[OFF_WIDTH..]),
            height: LittleEndian::read_i32(&data[OFF_HEIGHT..]),
            bits_per_pixel: LittleEndian::read_u16(&data[OFF_BPP..]),
            compression: LittleEndian::read_u32(&data[OFF_COMPRESSION..]),
            image_size: LittleEndian::read_u32(&data[OFF_IMAGE_SIZE..]),
            x_res: LittleEndian::read_i32(&data[OFF_X_RES..]),
            y_res: LittleEndian::read_i32(&data[OFF_Y_RES..]),
            color_table: LittleEndian::read_u32(&data[OFF_COLOR_TABLE..]),
        })
    }

    /// Runs the format checks in their fixed order.
    fn validate(&self, options: &BmpReaderOptions) -> Result<()> {
        let swapped = [SIGNATURE[1], SIGNATURE[0]];
        let signature_ok = self.signature == SIGNATURE
            || (options.accept_swapped_signature && self.signature == swapped);
        if !signature_ok {
            return Err(FormatError::Signature(self.signature).into());
        }
        if self.height < 0 {
            return Err(FormatError::NegativeHeight(self.height).into());
        }
        if self.bits_per_pixel != Header::BITS_PER_PIXEL {
            return Err(FormatError::UnsupportedDepth(self.bits_per_pixel).into());
        }
        if self.compression != Header::COMPRESSION_NONE {
            return Err(FormatError::UnsupportedCompression(self.compression).into());
        }
        if self.color_table != Header::COLOR_TABLE_SIZE {
            return Err(FormatError::UnsupportedColorTable(self.color_table).into());
        }

        if self.width <= 0 || self.height == 0 {
            return Err(FormatError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.pixel_offset < Header::HEADERS_SIZE {
            return Err(FormatError::InvalidPixelOffset(self.pixel_offset).into());
        }
        Ok(())
    }
}

// === BmpReader ===

/// BMP format reader.
///
/// # Example
///
/// ```rust,ignore
/// use bmpkit_io::bmp::{BmpReader, BmpReaderOptions};
/// use bmpkit_io::ImageReader;
///
/// let reader = BmpReader::with_options(BmpReaderOptions {
///     accept_swapped_signature: true,
/// });
/// let image = reader.read("legacy.bmp")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BmpReader {
    options: BmpReaderOptions,
}

impl BmpReader {
    /// Creates a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with the given options.
    pub fn with_options(options: BmpReaderOptions) -> Self {
        Self { options }
    }

    /// Quick signature probe on the first bytes of a file.
    pub fn can_read(&self, header: &[u8]) -> bool {
        match header {
            [a, b, ..] => {
                [*a, *b] == SIGNATURE
                    || (self.options.accept_swapped_signature && [*b, *a] == SIGNATURE)
            }
            _ => false,
        }
    }

    fn decode(&self, data: &[u8]) -> Result<Image> {
        let raw = RawHeader::parse(data)?;
        raw.validate(&self.options)?;

        // validate() guarantees width > 0 and height > 0
        let width = raw.width as u32;
        let height = raw.height as u32;
        // Sizes that do not fit the header fields make the source unusable
        let too_large = |e: Error| match e {
            Error::Size(_) => Error::Format(FormatError::TooLarge {
                width: raw.width,
                height: raw.height,
            }),
            other => other,
        };
        let header = Header::new(width, height, raw.x_res, raw.y_res).map_err(too_large)?;

        let stride = row_stride(width);
        let needed = u64::from(raw.pixel_offset) + u64::from(header.pixel_array_size());
        if (data.len() as u64) < needed {
            return Err(FormatError::Truncated {
                needed: needed as usize,
                actual: data.len(),
            }
            .into());
        }

        if raw.dib_size != Header::DIB_HEADER_SIZE {
            debug!(dib_size = raw.dib_size, "non-standard DIB header size, extra fields dropped");
        }
        if raw.image_size != header.pixel_array_size() {
            debug!(
                declared = raw.image_size,
                computed = header.pixel_array_size(),
                "declared pixel array size differs"
            );
        }

        let (w, h) = (width as usize, height as usize);
        let stride = stride as usize;
        let offset = raw.pixel_offset as usize;
        let pixels = PixelBuffer::from_fn(w, h, |x, y| {
            // Row 0 in memory is the last scanline in the file
            let base = offset + (h - 1 - y) * stride + x * 3;
            Pixel::from_bgr([data[base], data[base + 1], data[base + 2]])
        });

        let image = Image::from_parts(header, raw.pixel_offset, pixels).map_err(too_large)?;
        if raw.file_size != image.file_size() {
            debug!(
                declared = raw.file_size,
                computed = image.file_size(),
                "declared file size differs"
            );
        }
        debug!(width = w, height = h, offset, stride, "Decoded BMP");
        Ok(image)
    }
}

impl ImageReader for BmpReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> Result<Image> {
        let path = path.as_ref();
        trace!(path = %path.display(), "bmp::read");
        let data = std::fs::read(path)?;
        Ok(self.decode(&data)?.with_source(path))
    }

    fn read_from_memory(&self, data: &[u8]) -> Result<Image> {
        self.decode(data)
    }
}

// === BmpWriter ===

/// BMP format writer.
///
/// # Example
///
/// ```rust,ignore
/// use bmpkit_io::bmp::{BmpWriter, BmpWriterOptions};
/// use bmpkit_io::ImageWriter;
///
/// let writer = BmpWriter::with_options(BmpWriterOptions { atomic: false });
/// writer.write("out.bmp", &image)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BmpWriter {
    options: BmpWriterOptions,
}

impl BmpWriter {
    /// Creates a writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with the given options.
    pub fn with_options(options: BmpWriterOptions) -> Self {
        Self { options }
    }

    fn encode(&self, image: &Image) -> Result<Vec<u8>> {
        let header = image.header();
        let file_size = image.file_size();
        let offset = image.pixel_array_offset();

        let mut out = Vec::with_capacity(file_size as usize + 4);
        write_headers(&mut out, image)?;

        // Gap between the DIB header and the pixel array
        out.resize(offset as usize, 0);

        let padding = [0u8; 3];
        let pad = row_padding(header.width()) as usize;
        for row in image.pixels().rows().rev() {
            for pixel in row {
                out.extend_from_slice(&pixel.to_bgr());
            }
            out.extend_from_slice(&padding[..pad]);
        }

        if out.len() % 4 != 0 {
            out.resize(out.len().next_multiple_of(4), 0);
        }
        // Alignment bytes past the declared size are not persisted
        out.truncate(file_size as usize);

        debug!(
            width = header.width(),
            height = header.height(),
            bytes = out.len(),
            "Encoded BMP"
        );
        Ok(out)
    }
}

impl ImageWriter for BmpWriter {
    fn write<P: AsRef<Path>>(&self, path: P, image: &Image) -> Result<()> {
        let path = path.as_ref();
        trace!(path = %path.display(), atomic = self.options.atomic, "bmp::write");
        let bytes = self.encode(image)?;

        if self.options.atomic {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let mut tmp = temp_file_for(path, dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        } else {
            let mut file = File::create(path)?;
            file.write_all(&bytes)?;
            file.flush()?;
        }
        Ok(())
    }

    fn write_to_memory(&self, image: &Image) -> Result<Vec<u8>> {
        self.encode(image)
    }
}

fn write_headers<W: Write>(out: &mut W, image: &Image) -> Result<()> {
    let header = image.header();

    // File header (14 bytes)
    out.write_all(&SIGNATURE)?;
    out.write_u32::<LittleEndian>(image.file_size())?;
    out.write_u32::<LittleEndian>(0)?;
    out.write_u32::<LittleEndian>(image.pixel_array_offset())?;

    // DIB header (40 bytes); dimensions never exceed i32::MAX
    out.write_u32::<LittleEndian>(Header::DIB_HEADER_SIZE)?;
    out.write_i32::<LittleEndian>(header.width() as i32)?;
    out.write_i32::<LittleEndian>(header.height() as i32)?;
    out.write_u16::<LittleEndian>(Header::COLOR_PLANES)?;
    out.write_u16::<LittleEndian>(Header::BITS_PER_PIXEL)?;
    out.write_u32::<LittleEndian>(Header::COMPRESSION_NONE)?;
    out.write_u32::<LittleEndian>(header.pixel_array_size())?;
    out.write_i32::<LittleEndian>(header.horizontal_resolution)?;
    out.write_i32::<LittleEndian>(header.vertical_resolution)?;
    out.write_u32::<LittleEndian>(Header::COLOR_TABLE_SIZE)?;
    out.write_u32::<LittleEndian>(Header::IMPORTANT_COLORS)?;
    Ok(())
}

/// Creates the temporary file for an atomic save.
///
/// An existing destination's permissions are copied onto it. A new
/// destination gets the mode a plain create would (0o666 less the umask).
fn temp_file_for(dest: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".bmpkit-").suffix(".tmp");

    match fs::metadata(dest) {
        Ok(meta) => {
            let tmp = builder.tempfile_in(dir)?;
            tmp.as_file().set_permissions(meta.permissions())?;
            Ok(tmp)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                builder.permissions(fs::Permissions::from_mode(0o666));
            }
            builder.tempfile_in(dir)
        }
        Err(e) => Err(e),
    }
}

// === Convenience Functions ===

/// Reads a BMP file with default options.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Image> {
    BmpReader::default().read(path)
}

/// Writes a BMP file with default options (atomic replace).
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> Result<()> {
    BmpWriter::default().write(path, image)
}

// === Tests ===
