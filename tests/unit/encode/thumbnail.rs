use super::*;
use crate::foundation::core::{Canvas, Rgba8};
use crate::render::painter::Painter;

#[test]
fn thumbnail_index_is_one_third_in() {
    assert_eq!(thumbnail_frame_index(150), 50);
    assert_eq!(thumbnail_frame_index(30), 10);
    assert_eq!(thumbnail_frame_index(2), 0);
}

fn test_frame() -> FrameRGBA {
    Painter::new(
        Canvas {
            width: 32,
            height: 16,
        },
        Rgba8::opaque(120, 30, 200),
    )
    .into_frame()
}

#[test]
fn jpeg_writes_a_decodable_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thumb.jpg");
    write_jpeg(&test_frame(), &path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 16);
}

#[test]
fn png_roundtrips_exact_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let frame = test_frame();
    write_png(&frame, &path).unwrap();

    let decoded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 16);
    assert_eq!(decoded.get_pixel(5, 5).0, [120, 30, 200, 255]);
}

#[test]
fn mismatched_buffer_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = FrameRGBA {
        width: 8,
        height: 8,
        data: vec![0; 3],
    };
    assert!(write_png(&bad, &dir.path().join("bad.png")).is_err());
}
