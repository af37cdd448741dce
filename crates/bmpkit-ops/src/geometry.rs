//! Geometric operations.
//!
//! - [`crop`] - Extract a rectangle, shrinking the canvas
//! - [`rotate`] - Rotate about a pivot on a canvas of unchanged size
//! - [`make_collage`] - Grow the canvas to hold a second image at an offset
//!
//! Crop and collage replace the pixel buffer and recompute header width,
//! height, pixel-array size and file size; the pixel-array offset is kept.
//!
//! # Coordinate System
//!
//! Origin `(0, 0)` is the top-left pixel, x grows right, y grows down.

use bmpkit_core::{Error, Header, Image, PixelBuffer, RangeError, Result, pixel_array_size};
use tracing::{debug, trace};

/// Crops the image to the rectangle spanned by corners `(x1, y1)` and `(x2, y2)`.
///
/// The corners may be given in any order; the result is
/// `|x2 - x1| x |y2 - y1|` pixels starting at `(min(x1, x2), min(y1, y2))`.
/// `crop(img, 0, 0, w, h)` on a `w x h` image is the identity.
///
/// # Errors
///
/// - Range error if any coordinate is negative
/// - Size error if the rectangle has zero width or height
/// - Range error if the rectangle reaches past the image
pub fn crop(image: &mut Image, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
    trace!(x1, y1, x2, y2, "geometry::crop");

    for (name, value) in [("x1", x1), ("y1", y1), ("x2", x2), ("y2", y2)] {
        if value < 0 {
            return Err(Error::negative(name, value));
        }
    }

    let w = x1.abs_diff(x2) as usize;
    let h = y1.abs_diff(y2) as usize;
    if w == 0 || h == 0 {
        return Err(Error::zero_area(w, h));
    }

    let x = x1.min(x2) as usize;
    let y = y1.min(y2) as usize;
    let region = image
        .pixels()
        .region(x, y, w, h)
        .ok_or(RangeError::CropOutOfBounds {
            x,
            y,
            w,
            h,
            width: image.width(),
            height: image.height(),
        })?;

    image.replace_buffer(region)?;
    debug!(x, y, w, h, "Cropped");
    Ok(())
}

/// Rotates the image by `angle_degrees` about pixel `(pivot_x, pivot_y)`.
///
/// The canvas keeps its size. Each destination cell `(col j, row i)` samples
/// the source at the forward rotation of its pivot-relative offset:
///
/// ```text
/// x  = j - pivot_x            y  = i - pivot_y
/// xr = trunc(x cos θ - y sin θ) + pivot_x
/// yr = trunc(x sin θ + y cos θ) + pivot_y
/// ```
///
/// The rotated offset is truncated toward zero before the pivot is added
/// back. Samples that land outside the canvas leave the destination black.
/// Nearest-neighbour only; no interpolation.
///
/// # Errors
///
/// - Range error if a pivot coordinate is negative
/// - Range error if the angle is NaN or infinite
pub fn rotate(image: &mut Image, angle_degrees: f64, pivot_x: i32, pivot_y: i32) -> Result<()> {
    trace!(angle_degrees, pivot_x, pivot_y, "geometry::rotate");

    if pivot_x < 0 {
        return Err(Error::negative("pivot_x", pivot_x));
    }
    if pivot_y < 0 {
        return Err(Error::negative("pivot_y", pivot_y));
    }
    if !angle_degrees.is_finite() {
        return Err(RangeError::NotFinite {
            name: "angle",
            value: angle_degrees,
        }
        .into());
    }

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let (px, py) = (i64::from(pivot_x), i64::from(pivot_y));

    let src = image.pixels();
    let (w, h) = src.dimensions();
    let rotated = PixelBuffer::from_fn(w, h, |j, i| {
        let x = (j as i64 - px) as f64;
        let y = (i as i64 - py) as f64;
        let xr = (x * cos - y * sin) as i64 + px;
        let yr = (x * sin + y * cos) as i64 + py;

        if src.contains(xr, yr) {
            src.get(xr as usize, yr as usize).unwrap_or_default()
        } else {
            Default::default()
        }
    });

    image.replace_buffer(rotated)?;
    debug!(w, h, angle_degrees, "Rotated");
    Ok(())
}

/// Combines `other` into `image` with `other`'s top-left corner at
/// `(x_pos, y_pos)` relative to `image`'s.
///
/// The canvas grows to the bounding box of both images; either offset may be
/// negative. Uncovered cells are black. `image` is drawn first, then
/// `other`, so `other` wins where they overlap.
///
/// ```text
/// right = max(other.w + x_pos, w)    left = min(x_pos, 0)
/// low   = max(other.h + y_pos, h)    high = min(y_pos, 0)
/// new size = (right - left) x (low - high)
/// ```
///
/// Only `image` is modified. Passing the same image as both arguments is
/// ruled out by the borrow checker; clone it first.
///
/// # Errors
///
/// Size error if the resulting canvas does not fit a bitmap header.
pub fn make_collage(image: &mut Image, other: &Image, x_pos: i32, y_pos: i32) -> Result<()> {
    trace!(x_pos, y_pos, "geometry::make_collage");

    let (w, h) = (image.width() as i64, image.height() as i64);
    let (ow, oh) = (other.width() as i64, other.height() as i64);
    let (x_pos, y_pos) = (i64::from(x_pos), i64::from(y_pos));

    let right = (ow + x_pos).max(w);
    let left = x_pos.min(0);
    let low = (oh + y_pos).max(h);
    let high = y_pos.min(0);
    let width = (right - left) as u64;
    let height = (low - high) as u64;

    // Reject before allocating the canvas
    let max = u64::from(Header::MAX_DIMENSION);
    if width > max || height > max {
        return Err(Error::too_large(width, height));
    }
    pixel_array_size(width as u32, height as u32)?;

    let mut canvas = PixelBuffer::new(width as usize, height as usize);
    canvas.blit(image.pixels(), (-left) as usize, (-high) as usize);
    canvas.blit(
        other.pixels(),
        (x_pos - left) as usize,
        (y_pos - high) as usize,
    );

    image.replace_buffer(canvas)?;
    debug!(width, height, "Built collage");
    Ok(())
}
