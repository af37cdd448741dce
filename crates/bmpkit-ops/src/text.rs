//! Title stamping with the built-in bitmap font.
//!
//! Characters are laid out on a fixed grid: the glyph for the character at
//! index `i` starts at column `x + i * (GLYPH_WIDTH + 1)`. A character the
//! font does not cover is skipped but keeps its slot, so it shows up as a
//! gap. Bits that fall outside the canvas are clipped.

use bmpkit_core::{Image, Pixel, Result};
use tracing::{debug, trace};

use crate::font::{ADVANCE, GLYPH_WIDTH, GlyphRows, glyph_rows, is_set};

/// Looks up the glyph for `c` after folding it to uppercase.
///
/// Characters whose uppercase form is more than one character (`'ß'`) are
/// looked up as-is.
pub fn glyph(c: char) -> Option<&'static GlyphRows> {
    let mut upper = c.to_uppercase();
    let folded = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    glyph_rows(folded)
}

/// Draws `title` in black with its top-left corner at `(x, y)`.
///
/// The origin may be negative or past the canvas; only the visible bits are
/// drawn. Returns without touching the image when nothing overlaps.
pub fn add_title(image: &mut Image, title: &str, x: i32, y: i32) -> Result<()> {
    trace!(title, x, y, "text::add_title");

    let (x, y) = (i64::from(x), i64::from(y));
    let mut drawn = 0usize;

    for (i, c) in title.chars().enumerate() {
        let Some(rows) = glyph(c) else {
            trace!(index = i, ?c, "No glyph");
            continue;
        };
        let left = x + (i * ADVANCE) as i64;

        for (r, &bits) in rows.iter().enumerate() {
            let py = y + r as i64;
            for col in (0..GLYPH_WIDTH).filter(|&col| is_set(bits, col)) {
                let px = left + col as i64;
                if image.pixels().contains(px, py) {
                    // In bounds, so both fit in i32
                    image.set_pixel(px as i32, py as i32, Pixel::BLACK)?;
                    drawn += 1;
                }
            }
        }
    }

    debug!(chars = title.chars().count(), drawn, "Title stamped");
    Ok(())
}
