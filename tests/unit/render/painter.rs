use super::*;
use crate::foundation::core::{Canvas, Circle, Vec2};

fn small() -> Painter {
    Painter::new(Canvas { width: 16, height: 16 }, Rgba8::BLACK)
}

fn pixel(frame: &crate::render::frame::FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[idx],
        frame.data[idx + 1],
        frame.data[idx + 2],
        frame.data[idx + 3],
    ]
}

#[test]
fn new_surface_is_cleared_opaque() {
    let frame = small().into_frame();
    assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 15, 15), [0, 0, 0, 255]);
}

#[test]
fn opaque_fill_replaces_pixels() {
    let mut p = small();
    p.fill_rect_device(Rect::new(2.0, 2.0, 6.0, 6.0), Rgba8::opaque(10, 20, 30));
    let frame = p.into_frame();
    assert_eq!(pixel(&frame, 3, 3), [10, 20, 30, 255]);
    assert_eq!(pixel(&frame, 7, 7), [0, 0, 0, 255]);
}

#[test]
fn translucent_fill_blends_over_backdrop() {
    let mut p = small();
    p.fill_rect_device(Rect::new(0.0, 0.0, 16.0, 16.0), Rgba8::WHITE.with_alpha(0.5));
    let frame = p.into_frame();
    let [r, g, b, a] = pixel(&frame, 8, 8);
    assert!(r.abs_diff(128) <= 1 && g.abs_diff(128) <= 1 && b.abs_diff(128) <= 1);
    assert_eq!(a, 255);
}

#[test]
fn circle_fill_covers_center_not_corners() {
    let mut p = small();
    p.fill_shape(&Circle::new(Point::new(8.0, 8.0), 4.0), Rgba8::WHITE);
    let frame = p.into_frame();
    assert_eq!(pixel(&frame, 8, 8), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 0, 0), [0, 0, 0, 255]);
}

#[test]
fn transform_translates_shape_fills() {
    let mut p = small();
    p.set_transform(Affine::translate(Vec2::new(8.0, 0.0)));
    p.fill_shape(&Rect::new(0.0, 0.0, 4.0, 4.0), Rgba8::WHITE);
    let frame = p.into_frame();
    assert_eq!(pixel(&frame, 9, 1), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 1, 1), [0, 0, 0, 255]);
}

#[test]
fn ring_fill_spares_the_interior() {
    let mut p = small();
    let outer = Rect::new(2.0, 2.0, 14.0, 14.0);
    let inner = Rect::new(4.0, 4.0, 12.0, 12.0);
    p.fill_shape_ring(&outer, &inner, Rgba8::WHITE);
    let frame = p.into_frame();
    assert_eq!(pixel(&frame, 3, 8), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 8, 8), [0, 0, 0, 255]);
}

#[test]
fn gradient_color_interpolates_between_stops() {
    let stops = [(0.0, Rgba8::BLACK), (1.0, Rgba8::WHITE)];
    assert_eq!(gradient_color(&stops, 0.0), Rgba8::BLACK);
    assert_eq!(gradient_color(&stops, 1.0), Rgba8::WHITE);
    let mid = gradient_color(&stops, 0.5);
    assert!(mid.r.abs_diff(128) <= 1);

    // Clamped outside the stop range.
    assert_eq!(gradient_color(&stops, -1.0), Rgba8::BLACK);
    assert_eq!(gradient_color(&stops, 2.0), Rgba8::WHITE);
}

#[test]
fn radial_gradient_is_light_at_center_when_first_stop_is_light() {
    let mut p = small();
    p.radial_gradient(
        Point::new(8.0, 8.0),
        8.0,
        &[(0.0, Rgba8::WHITE), (1.0, Rgba8::BLACK)],
    );
    let frame = p.into_frame();
    let center = pixel(&frame, 8, 8);
    let corner = pixel(&frame, 0, 0);
    assert!(center[0] > corner[0]);
}
