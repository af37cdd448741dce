//! Per-pixel photometric edits.
//!
//! Brightness and contrast visit every pixel in place and saturate each
//! channel to `[0, 255]`; neither changes the image dimensions.

use bmpkit_core::{Image, Pixel, RangeError, Result};
use tracing::{debug, trace};

/// Lowest accepted contrast value.
pub const CONTRAST_MIN: f64 = -254.0;

/// Highest accepted contrast value.
pub const CONTRAST_MAX: f64 = 258.0;

/// Overwrites the pixel at column `x`, row `y`.
///
/// # Errors
///
/// Range error if `(x, y)` is outside the image; nothing is written.
pub fn set_pixel(image: &mut Image, x: i32, y: i32, pixel: Pixel) -> Result<()> {
    trace!(x, y, %pixel, "adjust::set_pixel");
    image.set_pixel(x, y, pixel)
}

/// Adds `delta` to every channel of every pixel.
///
/// Any integer is accepted; results saturate, so `+255` turns every pixel
/// white and `-255` turns every pixel black.
pub fn edit_brightness(image: &mut Image, delta: i32) {
    trace!(delta, "adjust::edit_brightness");

    for px in image.pixels_mut() {
        *px = px.map_channels(|c| c.saturating_add(delta));
    }
    debug!(delta, "Brightness adjusted");
}

/// Contrast gain factor for `value`.
///
/// ```text
/// k = 259 (value + 255) / (255 (259 - value))
/// ```
///
/// `k` is exactly 1 at `value = 0`.
///
/// # Errors
///
/// Range error if `value` is outside `[-254, 258]` (NaN included).
pub fn contrast_gain(value: f64) -> Result<f64> {
    if !(CONTRAST_MIN..=CONTRAST_MAX).contains(&value) {
        return Err(RangeError::Contrast(value).into());
    }
    Ok(259.0 * (value + 255.0) / (255.0 * (259.0 - value)))
}

/// Scales each channel's distance from mid-grey 128 by [`contrast_gain`].
///
/// Each channel becomes `trunc(k * (c - 128) + 128)`, saturated to
/// `[0, 255]`. Positive values raise contrast, negative values flatten
/// toward grey, and `0` leaves the image unchanged.
///
/// # Errors
///
/// Range error if `value` is outside `[-254, 258]`; the image is untouched.
pub fn edit_contrast(image: &mut Image, value: f64) -> Result<()> {
    trace!(value, "adjust::edit_contrast");

    let k = contrast_gain(value)?;
    for px in image.pixels_mut() {
        *px = px.map_channels(|c| (k * f64::from(c - 128) + 128.0) as i32);
    }

    debug!(value, k, "Contrast adjusted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bmpkit_core::{Header, PixelBuffer};

    fn image_of(pixels: &[Pixel]) -> Image {
        let header = Header::new(pixels.len() as u32, 1, 0, 0).unwrap();
        let buf = PixelBuffer::from_vec(pixels.len(), 1, pixels.to_vec()).unwrap();
        Image::from_parts(header, 54, buf).unwrap()
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut img = image_of(&[Pixel::BLACK; 3]);
        set_pixel(&mut img, 2, 0, Pixel::WHITE).unwrap();
        assert_eq!(img.pixel(2, 0), Some(Pixel::WHITE));

        let before = img.clone();
        assert!(set_pixel(&mut img, 3, 0, Pixel::WHITE).unwrap_err().is_range_error());
        assert!(set_pixel(&mut img, 0, 1, Pixel::WHITE).unwrap_err().is_range_error());
        assert!(set_pixel(&mut img, -1, 0, Pixel::WHITE).unwrap_err().is_range_error());
        assert_eq!(img, before);
    }

    #[test]
    fn test_brightness_saturates() {
        let mut img = image_of(&[Pixel::new(10, 128, 250), Pixel::new(0, 0, 0)]);
        edit_brightness(&mut img, 20);
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(30, 148, 255)));
        assert_eq!(img.pixel(1, 0), Some(Pixel::new(20, 20, 20)));

        edit_brightness(&mut img, -40);
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(0, 108, 215)));
        assert_eq!(img.pixel(1, 0), Some(Pixel::BLACK));
    }

    #[test]
    fn test_brightness_extremes() {
        let mut img = image_of(&[Pixel::new(1, 2, 3)]);
        edit_brightness(&mut img, i32::MAX);
        assert_eq!(img.pixel(0, 0), Some(Pixel::WHITE));
        edit_brightness(&mut img, i32::MIN);
        assert_eq!(img.pixel(0, 0), Some(Pixel::BLACK));
    }

    #[test]
    fn test_contrast_gain() {
        assert_relative_eq!(contrast_gain(0.0).unwrap(), 1.0);
        assert_relative_eq!(contrast_gain(128.0).unwrap(), 99197.0 / 33405.0);
        assert_relative_eq!(contrast_gain(258.0).unwrap(), 259.0 * 513.0 / 255.0);
        assert_relative_eq!(
            contrast_gain(-254.0).unwrap(),
            259.0 / (255.0 * 513.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_contrast_range() {
        for bad in [-254.5, 258.01, 1000.0, f64::NAN, f64::INFINITY] {
            assert!(contrast_gain(bad).unwrap_err().is_range_error(), "{bad}");
        }

        let mut img = image_of(&[Pixel::new(10, 20, 30)]);
        let before = img.clone();
        assert!(edit_contrast(&mut img, 300.0).is_err());
        assert_eq!(img, before);
    }

    #[test]
    fn test_contrast_zero_is_identity() {
        let pixels: Vec<Pixel> = (0..=255u8).map(|v| Pixel::new(v, 255 - v, v / 2)).collect();
        let mut img = image_of(&pixels);
        let before = img.clone();
        edit_contrast(&mut img, 0.0).unwrap();
        assert_eq!(img, before);
    }

    #[test]
    fn test_contrast_stretch() {
        let mut img = image_of(&[Pixel::new(128, 100, 200)]);
        edit_contrast(&mut img, 128.0).unwrap();
        // k ~= 2.9695: 128 stays, 100 -> 44.85, 200 -> 341.8 saturates
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(128, 44, 255)));
    }

    #[test]
    fn test_contrast_flatten() {
        let mut img = image_of(&[Pixel::new(0, 255, 128)]);
        edit_contrast(&mut img, -254.0).unwrap();
        // k ~= 0.002: every channel collapses onto 127 or 128
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(127, 128, 128)));
    }
}
