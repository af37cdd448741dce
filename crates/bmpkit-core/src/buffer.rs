//! Owned 2-D pixel grid.
//!
//! Pixels are stored **row-major**, row 0 at the visual top of the image:
//!
//! ```text
//! (0,0) ────────► x (column)
//!   │  [P P P P]  ← row 0 (top)
//!   │  [P P P P]
//!   ▼  [P P P P]  ← row height-1 (bottom)
//!   y
//! ```
//!
//! The file stores scanlines bottom-to-top; the codec flips on load/save so
//! the buffer never has to.

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// A `height x width` grid of [`Pixel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Creates a black-filled buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Pixel::BLACK; width * height],
        }
    }

    /// Creates a buffer from row-major pixel data.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<Pixel>) -> Option<Self> {
        (width.checked_mul(height) == Some(data.len())).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a buffer by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F: FnMut(usize, usize) -> Pixel>(width: usize, height: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns `true` if `(x, y)` addresses a cell of this buffer.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Returns the pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the pixel at column `x`, row `y`.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Pixel> {
        if x < self.width && y < self.height {
            Some(&mut self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes a pixel, failing with a range error when `(x, y)` is outside
    /// the buffer. Nothing is written on failure.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> Result<()> {
        let (width, height) = (self.width, self.height);
        if !self.contains(x.into(), y.into()) {
            return Err(Error::out_of_bounds(x, y, width, height));
        }
        self.data[y as usize * width + x as usize] = pixel;
        Ok(())
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + ExactSizeIterator {
        // chunks_exact(0) panics; an empty buffer has no rows
        self.data.chunks_exact(self.width.max(1)).take(self.height)
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// All pixels in row-major order, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Copies every pixel of `src` into this buffer with its top-left corner
    /// at `(dx, dy)`, overwriting what was there.
    ///
    /// # Panics
    ///
    /// Panics if `src` does not fit at that offset.
    pub fn blit(&mut self, src: &PixelBuffer, dx: usize, dy: usize) {
        assert!(
            dx + src.width <= self.width && dy + src.height <= self.height,
            "blit {}x{} at ({dx}, {dy}) exceeds {}x{}",
            src.width,
            src.height,
            self.width,
            self.height
        );
        for (y, row) in src.rows().enumerate() {
            let start = (dy + y) * self.width + dx;
            self.data[start..start + src.width].copy_from_slice(row);
        }
    }

    /// Copies the `w x h` region with top-left corner `(x, y)` into a new buffer.
    ///
    /// Returns `None` if the region is not fully inside this buffer.
    pub fn region(&self, x: usize, y: usize, w: usize, h: usize) -> Option<PixelBuffer> {
        if x.checked_add(w)? > self.width || y.checked_add(h)? > self.height {
            return None;
        }
        let mut data = Vec::with_capacity(w * h);
        for row in y..y + h {
            let start = row * self.width + x;
            data.extend_from_slice(&self.data[start..start + w]);
        }
        Some(Self {
            width: w,
            height: h,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: usize, h: usize) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, |x, y| Pixel::new(x as u8, y as u8, 0))
    }

    #[test]
    fn test_new_is_black() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.dimensions(), (3, 2));
        assert!(buf.pixels().iter().all(|p| *p == Pixel::BLACK));
    }

    #[test]
    fn test_set_bounds() {
        let mut buf = PixelBuffer::new(4, 3);
        assert!(buf.set(3, 2, Pixel::WHITE).is_ok());
        assert_eq!(buf.get(3, 2), Some(Pixel::WHITE));

        let before = buf.clone();
        assert!(buf.set(4, 0, Pixel::WHITE).unwrap_err().is_range_error());
        assert!(buf.set(0, 3, Pixel::WHITE).is_err());
        assert!(buf.set(-1, 0, Pixel::WHITE).is_err());
        assert_eq!(buf, before);
    }

    #[test]
    fn test_rows() {
        let buf = gradient(3, 2);
        let rows: Vec<_> = buf.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Pixel::new(2, 1, 0));
        assert_eq!(buf.row(0)[1], Pixel::new(1, 0, 0));
    }

    #[test]
    fn test_region() {
        let buf = gradient(4, 4);
        let sub = buf.region(1, 2, 2, 2).unwrap();
        assert_eq!(sub.dimensions(), (2, 2));
        assert_eq!(sub.get(0, 0), Some(Pixel::new(1, 2, 0)));
        assert_eq!(sub.get(1, 1), Some(Pixel::new(2, 3, 0)));
        assert!(buf.region(3, 3, 2, 1).is_none());
    }

    #[test]
    fn test_blit() {
        let mut dst = PixelBuffer::new(3, 3);
        let src = PixelBuffer::from_fn(2, 2, |_, _| Pixel::WHITE);
        dst.blit(&src, 1, 1);
        assert_eq!(dst.get(0, 0), Some(Pixel::BLACK));
        assert_eq!(dst.get(1, 1), Some(Pixel::WHITE));
        assert_eq!(dst.get(2, 2), Some(Pixel::WHITE));
        assert_eq!(dst.get(2, 0), Some(Pixel::BLACK));
    }

    #[test]
    fn test_from_vec_len() {
        assert!(PixelBuffer::from_vec(2, 2, vec![Pixel::BLACK; 3]).is_none());
        assert!(PixelBuffer::from_vec(2, 2, vec![Pixel::BLACK; 4]).is_some());
    }
}
