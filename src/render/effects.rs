//! Style-conditioned post effects. Random placements draw from the
//! per-frame deterministic RNG, so renders are reproducible.

use std::f64::consts::PI;

use crate::foundation::core::{Canvas, Circle, Point, Rgba8};
use crate::foundation::rng::Rng64;
use crate::plan::model::{VisualEffect, VisualStyle};
use crate::render::painter::Painter;

pub fn apply_effects(
    painter: &mut Painter,
    effects: &[VisualEffect],
    style: VisualStyle,
    progress: f64,
    canvas: Canvas,
    rng: &mut Rng64,
) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    for effect in effects {
        match effect {
            VisualEffect::LensFlare if style == VisualStyle::Realistic => {
                let intensity = 0.3 + (progress * PI * 4.0).sin() * 0.1;
                painter.fill_shape(
                    &Circle::new(Point::new(w * 0.8, h * 0.2), 30.0),
                    Rgba8::WHITE.with_alpha(intensity),
                );
            }
            VisualEffect::Sparkles if style == VisualStyle::Cartoon => {
                for i in 0..10 {
                    let x = rng.next_f64_in(w);
                    let y = rng.next_f64_in(h);
                    let alpha = (progress * PI * 6.0 + f64::from(i)).sin() * 0.5 + 0.5;
                    painter.fill_shape(
                        &Circle::new(Point::new(x, y), 3.0),
                        Rgba8::opaque(255, 255, 0).with_alpha(alpha),
                    );
                }
            }
            VisualEffect::PaperGrain if style == VisualStyle::Sketch => {
                for _ in 0..500 {
                    let x = rng.next_f64_in(w) as i64;
                    let y = rng.next_f64_in(h) as i64;
                    painter.blend_pixel(x, y, Rgba8::BLACK.with_alpha(0.02));
                }
            }
            // These shape plan metadata (insights, music pairing) but
            // have no per-frame raster contribution.
            VisualEffect::LensFlare
            | VisualEffect::Sparkles
            | VisualEffect::PaperGrain
            | VisualEffect::SmoothTransitions
            | VisualEffect::ColorGrading
            | VisualEffect::TextAnimations
            | VisualEffect::DepthOfField => {}
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/effects.rs"]
mod tests;
