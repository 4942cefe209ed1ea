use super::*;
use crate::plan::model::{CameraMovement, ColorPalette, VisualElement};
use crate::render::frame::FrameRGBA;

const CANVAS: Canvas = Canvas {
    width: 72,
    height: 128,
};

fn palette() -> ColorPalette {
    ColorPalette {
        colors: [
            Rgba8::opaque(0x1e, 0x40, 0xaf),
            Rgba8::opaque(0x1e, 0x29, 0x3b),
            Rgba8::opaque(0xf8, 0xfa, 0xfc),
            Rgba8::opaque(0x64, 0x74, 0x8b),
            Rgba8::opaque(0x0f, 0x17, 0x2a),
        ],
    }
}

fn scene_with(elements: Vec<VisualElement>, lighting: Lighting) -> Scene {
    Scene {
        description: "bg test".to_owned(),
        duration_sec: 1.0,
        elements,
        camera: CameraMovement::Static,
        lighting,
    }
}

fn render(scene: &Scene, progress: f64) -> FrameRGBA {
    let mut painter = Painter::new(CANVAS, Rgba8::BLACK);
    draw_background(&mut painter, palette(), scene, progress, CANVAS);
    painter.into_frame()
}

#[test]
fn plain_background_is_the_palette_gradient() {
    let frame = render(&scene_with(vec![], Lighting::BrightEven), 0.0);
    // Near the gradient center the first palette color dominates.
    let cx = CANVAS.width / 2;
    let cy = CANVAS.height / 3;
    let idx = ((cy * CANVAS.width + cx) * 4) as usize;
    assert_eq!(frame.data[idx + 3], 255);
    assert!(frame.data[idx + 2] > frame.data[idx]); // blue-heavy palette
}

#[test]
fn office_motif_changes_the_frame() {
    let plain = render(&scene_with(vec![], Lighting::BrightEven), 0.3);
    let office = render(
        &scene_with(vec![VisualElement::Office], Lighting::BrightEven),
        0.3,
    );
    assert_ne!(plain.data, office.data);
}

#[test]
fn natural_lighting_triggers_nature_motif() {
    let plain = render(&scene_with(vec![], Lighting::BrightEven), 0.3);
    let natural = render(&scene_with(vec![], Lighting::NaturalSoft), 0.3);
    assert_ne!(plain.data, natural.data);
}

#[test]
fn studio_glow_brightens_upper_right() {
    let plain = render(&scene_with(vec![], Lighting::BrightEven), 0.0);
    let studio = render(&scene_with(vec![], Lighting::Studio), 0.0);

    let x = (f64::from(CANVAS.width) * 0.8) as u32;
    let y = (f64::from(CANVAS.height) * 0.2) as u32;
    let idx = ((y * CANVAS.width + x) * 4) as usize;
    assert!(studio.data[idx] > plain.data[idx]);
}

#[test]
fn backgrounds_are_deterministic() {
    let scene = scene_with(vec![VisualElement::Nature], Lighting::GoldenHour);
    assert_eq!(render(&scene, 0.4).data, render(&scene, 0.4).data);
}
