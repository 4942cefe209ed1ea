use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform2D::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        ..Transform2D::default()
    };
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn rgba8_hex_roundtrip() {
    let c = Rgba8::from_hex("#1e40af").unwrap();
    assert_eq!((c.r, c.g, c.b, c.a), (0x1e, 0x40, 0xaf, 255));
    assert_eq!(c.to_hex(), "#1e40af");

    assert!(Rgba8::from_hex("nope").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
}

#[test]
fn rgba8_with_alpha_scales_and_clamps() {
    let c = Rgba8::WHITE.with_alpha(0.5);
    assert_eq!(c.a, 128);
    assert_eq!(Rgba8::WHITE.with_alpha(2.0).a, 255);
    assert_eq!(Rgba8::WHITE.with_alpha(-1.0).a, 0);
}

#[test]
fn canvas_rejects_zero_dims() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(720, 1280).unwrap();
    assert_eq!(c.center(), Point::new(360.0, 640.0));
}
