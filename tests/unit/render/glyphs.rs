use super::*;
use crate::foundation::core::Canvas;

#[test]
fn metrics_are_fixed_and_scale_linearly() {
    assert_eq!(text_width("", 1), 0);
    assert_eq!(text_width("A", 1), 5);
    assert_eq!(text_width("AB", 1), 11);
    assert_eq!(text_width("AB", 3), 33);
    assert_eq!(line_height(2), 14);
}

#[test]
fn lowercase_measures_like_uppercase() {
    assert_eq!(text_width("hello", 2), text_width("HELLO", 2));
}

#[test]
fn draw_text_marks_pixels() {
    let mut p = Painter::new(Canvas { width: 40, height: 12 }, Rgba8::BLACK);
    draw_text(&mut p, "HI", 1.0, 1.0, 1, Rgba8::WHITE);
    let frame = p.into_frame();
    let white = frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] == 255)
        .count();
    assert!(white > 10, "expected glyph pixels, got {white}");
}

#[test]
fn centered_text_is_symmetric_about_center() {
    let mut p = Painter::new(Canvas { width: 41, height: 12 }, Rgba8::BLACK);
    // 'H' is a horizontally symmetric glyph.
    draw_text_centered(&mut p, "H", 20.5, 2.0, 1, Rgba8::WHITE);
    let frame = p.into_frame();
    let lit: Vec<u32> = (0..frame.width)
        .filter(|&x| {
            (0..frame.height).any(|y| frame.data[((y * frame.width + x) * 4) as usize] == 255)
        })
        .collect();
    let min = *lit.first().unwrap();
    let max = *lit.last().unwrap();
    assert_eq!(min + max, 40); // symmetric about column 20
}
