//! 24-bit RGB pixel type.
//!
//! A [`Pixel`] holds three independent 8-bit channels. There is no alpha.
//!
//! Two construction paths exist:
//!
//! - [`Pixel::new`] - raw copy of exact bytes, no clamping
//! - [`Pixel::saturating`] - from wider signed integers, each channel
//!   independently clamped to `[0, 255]`
//!
//! ```
//! use bmpkit_core::Pixel;
//!
//! let p = Pixel::saturating(300, -20, 128);
//! assert_eq!(p, Pixel::new(255, 0, 128));
//! ```
//!
//! # Memory Layout
//!
//! In memory the order is red, green, blue. On disk the bitmap stores
//! blue, green, red; use [`Pixel::from_bgr`] and [`Pixel::to_bgr`] at the
//! codec boundary.

use std::fmt;

/// An RGB pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Pixel {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Pixel {
    /// Black, the fill value for newly allocated canvas.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a pixel from exact channel bytes.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a pixel from wider integers, saturating each channel to `[0, 255]`.
    #[inline]
    pub fn saturating(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: saturate(red),
            green: saturate(green),
            blue: saturate(blue),
        }
    }

    /// Creates a pixel from a file-order `[blue, green, red]` triple.
    #[inline]
    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::new(bgr[2], bgr[1], bgr[0])
    }

    /// Returns the channels in file order `[blue, green, red]`.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Applies `f` to every channel, saturating the results.
    #[inline]
    pub fn map_channels<F: Fn(i32) -> i32>(self, f: F) -> Self {
        Self::saturating(
            f(i32::from(self.red)),
            f(i32::from(self.green)),
            f(i32::from(self.blue)),
        )
    }
}

impl From<[u8; 3]> for Pixel {
    /// Interprets the array as `[red, green, blue]`.
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(p: Pixel) -> Self {
        [p.red, p.green, p.blue]
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[inline]
fn saturate(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating() {
        assert_eq!(Pixel::saturating(256, -1, 255), Pixel::new(255, 0, 255));
        assert_eq!(Pixel::saturating(i32::MAX, i32::MIN, 0), Pixel::new(255, 0, 0));
        assert_eq!(Pixel::saturating(10, 20, 30), Pixel::new(10, 20, 30));
    }

    #[test]
    fn test_bgr_order() {
        let p = Pixel::from_bgr([1, 2, 3]);
        assert_eq!(p, Pixel::new(3, 2, 1));
        assert_eq!(p.to_bgr(), [1, 2, 3]);
    }

    #[test]
    fn test_map_channels() {
        let p = Pixel::new(100, 200, 250).map_channels(|c| c + 10);
        assert_eq!(p, Pixel::new(110, 210, 255));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Pixel::default(), Pixel::BLACK);
        assert_eq!(Pixel::WHITE.to_string(), "rgb(255, 255, 255)");
    }
}
