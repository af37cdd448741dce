//! End-to-end edits: decode, mutate, re-encode.

use bmpkit_core::{Image, Pixel, row_stride};
use bmpkit_ops::font::{ADVANCE, glyph_rows, is_set};
use bmpkit_ops::{
    add_title, crop, edit_brightness, edit_contrast, make_collage, rotate, set_pixel,
};

const RED: Pixel = Pixel::new(255, 0, 0);
const GREEN: Pixel = Pixel::new(0, 255, 0);
const BLUE: Pixel = Pixel::new(0, 0, 255);
const YELLOW: Pixel = Pixel::new(255, 255, 0);

/// Hand-assembled 2x2 bitmap: red, green over blue, yellow.
fn quad_bytes() -> Vec<u8> {
    let mut data = Vec::with_capacity(70);
    data.extend_from_slice(b"BM");
    data.extend_from_slice(&70u32.to_le_bytes());
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(&54u32.to_le_bytes());

    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&2i32.to_le_bytes());
    data.extend_from_slice(&2i32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&24u16.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&2835i32.to_le_bytes());
    data.extend_from_slice(&[0; 8]);

    // Bottom row first, BGR, two pad bytes per row
    for row in [[BLUE, YELLOW], [RED, GREEN]] {
        for px in row {
            data.extend_from_slice(&px.to_bgr());
        }
        data.extend_from_slice(&[0, 0]);
    }
    data
}

fn quad() -> Image {
    bmpkit_io::decode(&quad_bytes()).expect("decode")
}

fn blank(w: usize, h: usize, fill: Pixel) -> Image {
    let mut image = quad();
    let buf = bmpkit_core::PixelBuffer::from_fn(w, h, |_, _| fill);
    image.replace_buffer(buf).expect("resize");
    image
}

fn assert_layout(image: &Image) {
    image.check_invariants().expect("invariants");
    let stride = row_stride(image.width() as u32);
    assert_eq!(u64::from(image.header().pixel_array_size()), stride * image.height() as u64);
    assert_eq!(
        image.file_size(),
        image.pixel_array_offset() + image.header().pixel_array_size()
    );
    let bytes = bmpkit_io::encode(image).expect("encode");
    assert_eq!(bytes.len(), image.file_size() as usize);
    assert_eq!(&bmpkit_io::decode(&bytes).expect("re-decode"), image);
}

#[test]
fn decoded_quad_has_expected_pixels() {
    let image = quad();
    assert_eq!((image.width(), image.height()), (2, 2));
    assert_eq!(image.pixel(0, 0), Some(RED));
    assert_eq!(image.pixel(1, 0), Some(GREEN));
    assert_eq!(image.pixel(0, 1), Some(BLUE));
    assert_eq!(image.pixel(1, 1), Some(YELLOW));
    assert_eq!(bmpkit_io::encode(&image).expect("encode"), quad_bytes());
}

#[test]
fn crop_top_left_pixel() {
    let mut image = quad();
    crop(&mut image, 0, 0, 1, 1).expect("crop");
    assert_eq!(image.header().width(), 1);
    assert_eq!(image.header().height(), 1);
    assert_eq!(image.pixel(0, 0), Some(RED));
    assert_eq!(image.file_size(), 54 + 4);
    assert_layout(&image);
}

#[test]
fn crop_full_is_identity() {
    let mut image = quad();
    crop(&mut image, 0, 0, 2, 2).expect("crop");
    assert_eq!(image, quad());
}

#[test]
fn collage_offset_one_one() {
    let mut base = quad();
    let mut overlay = quad();
    edit_brightness(&mut overlay, -255);
    set_pixel(&mut overlay, 0, 0, Pixel::WHITE).expect("set");

    make_collage(&mut base, &overlay, 1, 1).expect("collage");
    assert_eq!((base.width(), base.height()), (3, 3));

    // Base keeps the cells the overlay does not cover
    assert_eq!(base.pixel(0, 0), Some(RED));
    assert_eq!(base.pixel(1, 0), Some(GREEN));
    assert_eq!(base.pixel(0, 1), Some(BLUE));
    // Overlap goes to the overlay's top-left
    assert_eq!(base.pixel(1, 1), Some(Pixel::WHITE));
    assert_eq!(base.pixel(2, 2), Some(Pixel::BLACK));
    // Uncovered corners are black
    assert_eq!(base.pixel(2, 0), Some(Pixel::BLACK));
    assert_eq!(base.pixel(0, 2), Some(Pixel::BLACK));
    assert_layout(&base);
}

#[test]
fn collage_with_itself_via_clone() {
    let mut image = quad();
    let copy = image.clone();
    make_collage(&mut image, &copy, 2, 0).expect("collage");
    assert_eq!((image.width(), image.height()), (4, 2));
    assert_eq!(image.pixel(2, 0), Some(RED));
    assert_eq!(image.pixel(3, 1), Some(YELLOW));
    assert_layout(&image);
}

#[test]
fn title_second_glyph_at_six() {
    let mut image = blank(16, 9, Pixel::WHITE);
    add_title(&mut image, "A1", 0, 0).expect("title");

    for (i, c) in ['A', '1'].into_iter().enumerate() {
        let rows = glyph_rows(c).expect("glyph");
        for (r, bits) in rows.iter().enumerate() {
            for col in 0..5 {
                let expected = if is_set(*bits, col) { Pixel::BLACK } else { Pixel::WHITE };
                assert_eq!(image.pixel(i * ADVANCE + col, r), Some(expected), "{c} r{r} c{col}");
            }
        }
    }
    // '1' has no bits in its leftmost column but row 1 starts at x = 6 + 1
    assert_eq!(image.pixel(7, 1), Some(Pixel::BLACK));
    assert_eq!(image.pixel(5, 1), Some(Pixel::WHITE));
    assert_layout(&image);
}

#[test]
fn rotate_zero_is_identity() {
    let mut image = quad();
    rotate(&mut image, 0.0, 1, 0).expect("rotate");
    assert_eq!(image, quad());
    rotate(&mut image, 0.0, 500, 500).expect("rotate");
    assert_eq!(image, quad());
}

#[test]
fn rotate_keeps_layout() {
    let mut image = blank(7, 5, Pixel::WHITE);
    rotate(&mut image, 45.0, 3, 2).expect("rotate");
    assert_eq!((image.width(), image.height()), (7, 5));
    assert_eq!(image.pixel(3, 2), Some(Pixel::WHITE));
    assert_layout(&image);
}

#[test]
fn contrast_zero_is_identity() {
    let mut image = quad();
    edit_contrast(&mut image, 0.0).expect("contrast");
    assert_eq!(image, quad());
}

#[test]
fn brightness_300_whitens() {
    let mut image = quad();
    edit_brightness(&mut image, 300);
    assert!(image.pixels().pixels().iter().all(|p| *p == Pixel::WHITE));
    assert_layout(&image);
}

#[test]
fn set_pixel_edge() {
    let mut image = quad();
    let width = image.width() as i32;
    assert!(set_pixel(&mut image, width, 0, Pixel::WHITE).unwrap_err().is_range_error());
    set_pixel(&mut image, width - 1, 0, Pixel::WHITE).expect("set");
    assert_eq!(image.pixel(1, 0), Some(Pixel::WHITE));
}

#[test]
fn chained_edits_keep_invariants() {
    let mut image = blank(13, 11, Pixel::new(90, 120, 200));
    let overlay = quad();

    make_collage(&mut image, &overlay, -3, 10).expect("collage");
    assert_layout(&image);
    crop(&mut image, 1, 2, 12, 9).expect("crop");
    assert_layout(&image);
    rotate(&mut image, 30.0, 4, 4).expect("rotate");
    assert_layout(&image);
    edit_contrast(&mut image, 60.0).expect("contrast");
    add_title(&mut image, "Ok!", 1, 1).expect("title");
    assert_layout(&image);
}
