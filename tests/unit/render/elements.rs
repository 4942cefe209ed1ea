use super::*;
use crate::foundation::core::Rgba8;
use crate::plan::model::ColorPalette;
use crate::render::frame::FrameRGBA;

const CANVAS: Canvas = Canvas {
    width: 160,
    height: 320,
};

fn palette() -> ColorPalette {
    ColorPalette {
        colors: [
            Rgba8::opaque(0x3b, 0x82, 0xf6),
            Rgba8::opaque(0x1e, 0x40, 0xaf),
            Rgba8::opaque(0xf8, 0xfa, 0xfc),
            Rgba8::opaque(0x64, 0x74, 0x8b),
            Rgba8::opaque(0x0f, 0x17, 0x2a),
        ],
    }
}

fn render(element: VisualElement, style: VisualStyle, progress: f64) -> FrameRGBA {
    let mut painter = Painter::new(CANVAS, Rgba8::BLACK);
    let camera = Affine::IDENTITY;
    painter.set_transform(camera);
    draw_element(&mut painter, element, style, progress, CANVAS, palette(), camera);
    painter.into_frame()
}

fn lit_pixels(frame: &FrameRGBA) -> usize {
    frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
        .count()
}

#[test]
fn presenter_draws_in_every_style() {
    for style in [VisualStyle::Realistic, VisualStyle::Cartoon, VisualStyle::Sketch] {
        let frame = render(VisualElement::Presenter, style, 0.25);
        assert!(lit_pixels(&frame) > 500, "{style:?} drew too little");
    }
}

#[test]
fn presenter_animates_with_progress() {
    let a = render(VisualElement::Presenter, VisualStyle::Realistic, 0.1);
    let b = render(VisualElement::Presenter, VisualStyle::Realistic, 0.35);
    assert_ne!(a.data, b.data);
}

#[test]
fn product_box_rotates_and_pulses() {
    let a = render(VisualElement::Product, VisualStyle::Realistic, 0.0);
    let b = render(VisualElement::Product, VisualStyle::Realistic, 0.3);
    assert!(lit_pixels(&a) > 500);
    assert_ne!(a.data, b.data);
}

#[test]
fn title_fades_in() {
    let early = render(VisualElement::Title, VisualStyle::Realistic, 0.05);
    let late = render(VisualElement::Title, VisualStyle::Realistic, 0.9);
    assert!(lit_pixels(&late) >= lit_pixels(&early));
    assert!(lit_pixels(&late) > 0);
}

#[test]
fn background_motifs_draw_nothing_here() {
    let office = render(VisualElement::Office, VisualStyle::Realistic, 0.5);
    let nature = render(VisualElement::Nature, VisualStyle::Realistic, 0.5);
    assert_eq!(lit_pixels(&office), 0);
    assert_eq!(lit_pixels(&nature), 0);
}
