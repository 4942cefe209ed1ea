use super::*;
use crate::render::frame::FrameRGBA;

const CANVAS: Canvas = Canvas {
    width: 64,
    height: 64,
};

fn render(effects_list: &[VisualEffect], style: VisualStyle, seed: u64) -> FrameRGBA {
    let mut painter = Painter::new(CANVAS, Rgba8::BLACK);
    let mut rng = Rng64::for_frame(seed, 0);
    apply_effects(&mut painter, effects_list, style, 0.5, CANVAS, &mut rng);
    painter.into_frame()
}

fn is_black(frame: &FrameRGBA) -> bool {
    frame
        .data
        .chunks_exact(4)
        .all(|px| px[0] == 0 && px[1] == 0 && px[2] == 0)
}

#[test]
fn lens_flare_only_draws_for_realistic() {
    let flare = [VisualEffect::LensFlare];
    assert!(!is_black(&render(&flare, VisualStyle::Realistic, 1)));
    assert!(is_black(&render(&flare, VisualStyle::Cartoon, 1)));
    assert!(is_black(&render(&flare, VisualStyle::Sketch, 1)));
}

#[test]
fn sparkles_only_draw_for_cartoon() {
    let sparkles = [VisualEffect::Sparkles];
    assert!(!is_black(&render(&sparkles, VisualStyle::Cartoon, 1)));
    assert!(is_black(&render(&sparkles, VisualStyle::Realistic, 1)));
}

#[test]
fn paper_grain_only_draws_for_sketch() {
    let grain = [VisualEffect::PaperGrain];
    assert!(!is_black(&render(&grain, VisualStyle::Sketch, 1)));
    assert!(is_black(&render(&grain, VisualStyle::Realistic, 1)));
}

#[test]
fn metadata_effects_do_not_touch_pixels() {
    let metadata_only = [
        VisualEffect::SmoothTransitions,
        VisualEffect::ColorGrading,
        VisualEffect::TextAnimations,
        VisualEffect::DepthOfField,
    ];
    for style in [VisualStyle::Realistic, VisualStyle::Cartoon, VisualStyle::Sketch] {
        assert!(is_black(&render(&metadata_only, style, 1)));
    }
}

#[test]
fn random_effects_are_seed_deterministic() {
    let sparkles = [VisualEffect::Sparkles];
    let a = render(&sparkles, VisualStyle::Cartoon, 7);
    let b = render(&sparkles, VisualStyle::Cartoon, 7);
    assert_eq!(a.data, b.data);

    let c = render(&sparkles, VisualStyle::Cartoon, 8);
    assert_ne!(a.data, c.data);
}
