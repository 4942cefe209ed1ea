use super::*;
use crate::plan::model::CaptionSpan;
use crate::render::frame::FrameRGBA;

const CANVAS: Canvas = Canvas {
    width: 240,
    height: 320,
};

fn narration() -> NarrationPlan {
    NarrationPlan {
        script: "hello world again".to_owned(),
        spans: vec![
            CaptionSpan {
                text: "hello world".to_owned(),
                start_sec: 0.0,
                end_sec: 2.0,
            },
            CaptionSpan {
                text: "again".to_owned(),
                start_sec: 2.0,
                end_sec: 5.0,
            },
        ],
        voice_instructions: String::new(),
    }
}

fn render(t_sec: f64) -> FrameRGBA {
    let mut painter = Painter::new(CANVAS, Rgba8::BLACK);
    draw_captions(&mut painter, &narration(), t_sec, CANVAS, CaptionStyle::default());
    painter.into_frame()
}

fn lit(frame: &FrameRGBA) -> usize {
    frame
        .data
        .chunks_exact(4)
        .filter(|px| px[0] != 0 || px[1] != 0 || px[2] != 0)
        .count()
}

#[test]
fn active_span_draws_a_caption_box() {
    assert!(lit(&render(1.0)) > 100);
}

#[test]
fn no_active_span_draws_nothing() {
    assert_eq!(lit(&render(9.0)), 0);
}

#[test]
fn spans_switch_with_time() {
    assert_ne!(render(1.0).data, render(3.0).data);
}

#[test]
fn wrap_words_respects_max_width() {
    // "aa bb cc" at scale 1: each word 11 px wide, "aa bb" 29 px.
    let lines = wrap_words("aa bb cc", 30.0, 1);
    assert_eq!(lines, vec!["aa bb".to_owned(), "cc".to_owned()]);

    // A single overlong word still becomes its own line.
    let lines = wrap_words("supercalifragilistic", 10.0, 1);
    assert_eq!(lines.len(), 1);
}

#[test]
fn overlays_fade_in_sequentially() {
    let fields = vec![
        ("brand".to_owned(), "acme".to_owned()),
        ("cta".to_owned(), "subscribe".to_owned()),
    ];

    let mut early = Painter::new(CANVAS, Rgba8::BLACK);
    draw_custom_overlays(&mut early, &fields, 0.1, CANVAS);
    assert_eq!(lit(&early.into_frame()), 0);

    let mut first_only = Painter::new(CANVAS, Rgba8::BLACK);
    draw_custom_overlays(&mut first_only, &fields, 0.25, CANVAS);
    let first_count = lit(&first_only.into_frame());
    assert!(first_count > 0);

    let mut both = Painter::new(CANVAS, Rgba8::BLACK);
    draw_custom_overlays(&mut both, &fields, 0.9, CANVAS);
    assert!(lit(&both.into_frame()) > first_count);
}

#[test]
fn empty_values_are_skipped() {
    let fields = vec![("empty".to_owned(), "  ".to_owned())];
    let mut p = Painter::new(CANVAS, Rgba8::BLACK);
    draw_custom_overlays(&mut p, &fields, 0.9, CANVAS);
    assert_eq!(lit(&p.into_frame()), 0);
}
