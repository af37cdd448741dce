//! # bmpkit-ops
//!
//! In-place edits for decoded bitmaps.
//!
//! Every operation takes exclusive access to an [`Image`](bmpkit_core::Image)
//! for its duration, validates its parameters before touching pixels, and
//! leaves the header/buffer/file-size invariants intact.
//!
//! # Modules
//!
//! - [`geometry`] - Crop, rotate, collage (these change the buffer)
//! - [`adjust`] - Single-pixel writes, brightness, contrast
//! - [`text`] - Bitmap-font title stamping
//! - [`font`] - The built-in 5x7 glyph table
//!
//! # Example
//!
//! ```rust,ignore
//! use bmpkit_ops::{adjust, geometry, text};
//!
//! let mut image = bmpkit_io::load("photo.bmp")?;
//! geometry::crop(&mut image, 10, 10, 110, 60)?;
//! adjust::edit_contrast(&mut image, 40.0)?;
//! text::add_title(&mut image, "Summer 2024", 2, 2)?;
//! bmpkit_io::save(&image, "edited.bmp")?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod font;
pub mod geometry;
pub mod text;

pub use adjust::{contrast_gain, edit_brightness, edit_contrast, set_pixel};
pub use geometry::{crop, make_collage, rotate};
pub use text::add_title;
