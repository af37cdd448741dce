//! Built-in 5x7 bitmap font.
//!
//! Each glyph is seven row bitmasks, top row first. Within a row the most
//! significant of the low five bits is the leftmost column.
//!
//! Covered: Latin `A`-`Z`, digits `0`-`9` and the Cyrillic capitals `А`-`Я`
//! (without `Ё`). Lookups are case-sensitive; callers fold to uppercase.

/// Glyph width in pixels.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in pixels.
pub const GLYPH_HEIGHT: usize = 7;

/// Horizontal distance between the left edges of consecutive glyphs.
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

/// One glyph: a row bitmask per scanline.
pub type GlyphRows = [u8; GLYPH_HEIGHT];

/// Returns the row bitmasks for `c`, or `None` if the font has no glyph for it.
pub fn glyph_rows(c: char) -> Option<&'static GlyphRows> {
    let rows: &'static GlyphRows = match c {
        'A' => &[0b00100, 0b01010, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10011, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => &[0b00011, 0b00001, 0b00001, 0b00001, 0b00001, 0b10001, 0b01110],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10011, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b10001, 0b01110, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],

        // Digits
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b01110, 0b10001, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b00100, 0b00100, 0b00100],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],

        // Cyrillic
        'А' => &[0b00100, 0b01010, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'Б' => &[0b11111, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'В' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'Г' => &[0b11111, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000],
        'Д' => &[0b01110, 0b01010, 0b01010, 0b01010, 0b11111, 0b10001, 0b10001],
        'Е' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'Ж' => &[0b10001, 0b10101, 0b10101, 0b01110, 0b10101, 0b10101, 0b10001],
        'З' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        'И' => &[0b10001, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001],
        'Й' => &[0b10101, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b10001],
        'К' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'Л' => &[0b01111, 0b01001, 0b01001, 0b01001, 0b01001, 0b10001, 0b10001],
        'М' => &[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'Н' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'О' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'П' => &[0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001],
        'Р' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'С' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'Т' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'У' => &[0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b10001, 0b01110],
        'Ф' => &[0b00100, 0b01110, 0b10101, 0b10101, 0b10101, 0b01110, 0b00100],
        'Х' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Ц' => &[0b10010, 0b10010, 0b10010, 0b10010, 0b10010, 0b11111, 0b00001],
        'Ч' => &[0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b00001],
        'Ш' => &[0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111],
        'Щ' => &[0b10101, 0b10101, 0b10101, 0b10101, 0b10101, 0b11111, 0b00001],
        'Ъ' => &[0b11000, 0b01000, 0b01110, 0b01001, 0b01001, 0b01001, 0b01110],
        'Ы' => &[0b10001, 0b10001, 0b10001, 0b11101, 0b10011, 0b10011, 0b11101],
        'Ь' => &[0b10000, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b11110],
        'Э' => &[0b01110, 0b10001, 0b00001, 0b01111, 0b00001, 0b10001, 0b01110],
        'Ю' => &[0b10110, 0b10101, 0b10101, 0b11101, 0b10101, 0b10101, 0b10110],
        'Я' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00101, 0b01001, 0b10001],

        _ => return None,
    };
    Some(rows)
}

/// Returns `true` if bit `col` (0 = leftmost) is set in `row`.
#[inline]
pub fn is_set(row: u8, col: usize) -> bool {
    col < GLYPH_WIDTH && (row & (1 << (GLYPH_WIDTH - 1 - col))) != 0
}
