//! Scene background painting: palette gradient, background motifs, and
//! lighting overlays. Backgrounds draw in device space, before the
//! camera transform is applied.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Canvas, Circle, Point, Rect, Rgba8};
use crate::plan::model::{ColorPalette, Lighting, Scene, VisualElement};
use crate::render::painter::Painter;

pub fn draw_background(
    painter: &mut Painter,
    palette: ColorPalette,
    scene: &Scene,
    progress: f64,
    canvas: Canvas,
) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    painter.radial_gradient(
        Point::new(w / 2.0, h / 3.0),
        w.max(h),
        &[
            (0.0, palette.color(0)),
            (0.3, palette.color(1)),
            (0.7, palette.color(2)),
            (1.0, palette.color(3)),
        ],
    );

    if scene.elements.contains(&VisualElement::Office) {
        draw_office_grid(painter, palette, canvas);
    }
    if scene.elements.contains(&VisualElement::Nature) || scene.lighting.is_natural() {
        draw_nature_circles(painter, progress, canvas);
    }

    match scene.lighting {
        Lighting::Studio => {
            painter.radial_glow(Point::new(w * 0.8, h * 0.2), 200.0, Rgba8::WHITE, 0.3);
        }
        Lighting::GoldenHour => {
            painter.linear_gradient_wash(
                Point::new(0.0, 0.0),
                Point::new(w, h),
                &[
                    (0.0, Rgba8::new(255, 204, 102, 102)),
                    (1.0, Rgba8::new(255, 153, 51, 51)),
                ],
            );
        }
        Lighting::BrightEven | Lighting::NaturalSoft => {}
    }
}

/// 5x4 grid of faint panels suggesting an office backdrop.
fn draw_office_grid(painter: &mut Painter, palette: ColorPalette, canvas: Canvas) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let color = palette.color(4).with_alpha(0.1);
    for i in 0..20 {
        let x = f64::from(i % 5) * (w / 5.0) + w / 10.0;
        let y = f64::from(i / 5) * (h / 4.0) + h / 8.0;
        painter.fill_rect_device(Rect::new(x, y, x + w / 20.0, y + h / 30.0), color);
    }
}

/// Ring of pulsing leaf-green circles rotating with scene progress.
fn draw_nature_circles(painter: &mut Painter, progress: f64, canvas: Canvas) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let alpha = 0.2 + (progress * PI).sin() * 0.1;
    let color = Rgba8::opaque(34, 197, 94).with_alpha(alpha);
    let radius = 20.0 + (progress * PI * 3.0).sin() * 5.0;

    for i in 0..8 {
        let angle = (f64::from(i) / 8.0) * TAU + progress * PI;
        let center = Point::new(
            w / 2.0 + angle.cos() * (w * 0.3),
            h / 2.0 + angle.sin() * (h * 0.2),
        );
        painter.fill_shape(&Circle::new(center, radius), color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
