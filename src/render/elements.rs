//! Primitive-shape scene elements, animated by sinusoidal functions of
//! intra-scene progress. Elements draw under the active camera
//! transform.

use std::f64::consts::PI;

use crate::foundation::core::{Affine, Canvas, Circle, Point, Rect, Rgba8, Vec2};
use crate::plan::model::{ColorPalette, VisualElement, VisualStyle};
use crate::render::glyphs;
use crate::render::painter::Painter;

/// Draw one element. `camera` is the active scene transform; the
/// painter's transform is left set to `camera` on return.
pub fn draw_element(
    painter: &mut Painter,
    element: VisualElement,
    style: VisualStyle,
    progress: f64,
    canvas: Canvas,
    palette: ColorPalette,
    camera: Affine,
) {
    match element {
        VisualElement::Presenter => draw_presenter(painter, style, progress, canvas, palette),
        VisualElement::Product => draw_product(painter, progress, canvas, palette, camera),
        VisualElement::Title => draw_title(painter, style, progress, canvas, palette, camera),
        // Background motifs; painted by the background pass.
        VisualElement::Office | VisualElement::Nature => {}
    }
}

fn draw_presenter(
    painter: &mut Painter,
    style: VisualStyle,
    progress: f64,
    canvas: Canvas,
    palette: ColorPalette,
) {
    let center = canvas.center();
    let head_bob = (progress * PI * 4.0).sin() * 5.0;
    let arm_move = (progress * PI * 3.0).sin() * 12.0;

    match style {
        VisualStyle::Realistic | VisualStyle::Sketch => {
            // Head with a vertical falloff toward the darker palette tone.
            let head = Circle::new(Point::new(center.x, center.y - 80.0 + head_bob), 40.0);
            painter.fill_shape_gradient_y(
                &head,
                &[(0.0, palette.color(0)), (1.0, palette.color(1))],
            );

            // Torso, jacket, then arms on top.
            painter.fill_shape(
                &Rect::new(center.x - 30.0, center.y - 40.0, center.x + 30.0, center.y + 80.0),
                palette.color(2),
            );
            painter.fill_shape(
                &Rect::new(center.x - 35.0, center.y - 45.0, center.x + 35.0, center.y + 35.0),
                palette.color(1),
            );
            let arm_y0 = center.y - 30.0;
            painter.fill_shape(
                &Rect::new(
                    center.x - 60.0 + arm_move,
                    arm_y0,
                    center.x - 30.0 + arm_move,
                    arm_y0 + 70.0,
                ),
                palette.color(0),
            );
            painter.fill_shape(
                &Rect::new(
                    center.x + 30.0 - arm_move,
                    arm_y0,
                    center.x + 60.0 - arm_move,
                    arm_y0 + 70.0,
                ),
                palette.color(0),
            );
        }
        VisualStyle::Cartoon => {
            let head_y = center.y - 80.0 + head_bob;
            painter.fill_shape(&Circle::new(Point::new(center.x, head_y), 45.0), palette.color(0));

            // Eyes track slightly with progress.
            let pupil_dx = (progress * PI).sin() * 2.0;
            for side in [-1.0, 1.0] {
                let eye_x = center.x + side * 15.0;
                painter.fill_shape(
                    &Circle::new(Point::new(eye_x, head_y - 5.0), 8.0),
                    Rgba8::WHITE,
                );
                painter.fill_shape(
                    &Circle::new(Point::new(eye_x + pupil_dx, head_y - 5.0), 4.0),
                    Rgba8::BLACK,
                );
            }

            // Smile stroked as dots along a lower half-arc.
            let smile_center = Point::new(center.x, center.y - 70.0 + head_bob);
            for i in 0..=16 {
                let angle = PI * f64::from(i) / 16.0;
                let p = smile_center + Vec2::new(angle.cos() * 15.0, angle.sin() * 15.0);
                painter.fill_shape(&Circle::new(p, 1.5), Rgba8::BLACK);
            }

            painter.fill_shape(
                &Rect::new(center.x - 35.0, center.y - 35.0, center.x + 35.0, center.y + 65.0),
                palette.color(1),
            );
        }
    }
}

fn draw_product(
    painter: &mut Painter,
    progress: f64,
    canvas: Canvas,
    palette: ColorPalette,
    camera: Affine,
) {
    let center = canvas.center();
    let rotation = progress * PI; // half turn per scene pass
    let pulse = 1.0 + (progress * PI * 6.0).sin() * 0.1;

    let local = camera
        * Affine::translate(center.to_vec2())
        * Affine::rotate(rotation)
        * Affine::scale(pulse);
    painter.set_transform(local);

    let half_w = 40.0;
    let half_h = 60.0;

    // Drop shadow offset down-right.
    painter.fill_shape(
        &Rect::new(-half_w + 5.0, -half_h + 5.0, half_w + 5.0, half_h + 5.0),
        Rgba8::BLACK.with_alpha(0.3),
    );
    // Body with a diagonal-ish vertical gradient through the palette.
    painter.fill_shape_gradient_y(
        &Rect::new(-half_w, -half_h, half_w, half_h),
        &[
            (0.0, palette.color(0)),
            (0.5, palette.color(1)),
            (1.0, palette.color(2)),
        ],
    );
    // Top highlight band.
    painter.fill_shape(
        &Rect::new(-half_w + 10.0, -half_h + 10.0, half_w - 10.0, -half_h + 30.0),
        Rgba8::WHITE.with_alpha(0.3),
    );

    painter.set_transform(camera);
}

fn draw_title(
    painter: &mut Painter,
    style: VisualStyle,
    progress: f64,
    canvas: Canvas,
    palette: ColorPalette,
    camera: Affine,
) {
    let alpha = (progress * 2.0).min(1.0);
    if alpha <= 0.0 {
        return;
    }
    let center = canvas.center();
    let bob = (progress * PI * 8.0).sin() * 5.0;

    // Anchor follows the camera; glyphs themselves draw in device
    // space at a scale eased in with the fade.
    let anchor = camera * Point::new(center.x, center.y + 120.0 + bob);
    let scale = 2 + ((alpha * 3.0) as u32).min(3);
    let text = "AI Generated Content";

    let shadow = Rgba8::BLACK.with_alpha(0.3 * alpha);
    let fill = match style {
        VisualStyle::Sketch => palette.color(1),
        VisualStyle::Realistic | VisualStyle::Cartoon => palette.color(0),
    }
    .with_alpha(alpha);

    painter.reset_transform();
    glyphs::draw_text_centered(painter, text, anchor.x + 2.0, anchor.y + 2.0, scale, shadow);
    glyphs::draw_text_centered(painter, text, anchor.x, anchor.y, scale, fill);
    painter.set_transform(camera);
}

#[cfg(test)]
#[path = "../../tests/unit/render/elements.rs"]
mod tests;
