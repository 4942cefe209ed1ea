use super::*;
use crate::plan::model::{SceneKind, VisualStyle};

fn request(prompt: &str, kind: SceneKind, style: VisualStyle) -> GenerationRequest {
    let mut r = GenerationRequest::new(prompt);
    r.scene_kind = kind;
    r.visual_style = style;
    r
}

#[test]
fn durations_sum_for_every_kind_and_style() {
    for kind in SceneKind::ALL {
        for style in [VisualStyle::Realistic, VisualStyle::Cartoon, VisualStyle::Sketch] {
            let r = request("an unremarkable subject", kind, style);
            let plan = scene_plan(&r);
            plan.validate().unwrap();
            let sum: f64 = plan.scenes.iter().map(|s| s.duration_sec).sum();
            assert!((sum - 5.0).abs() < 1e-6, "{kind:?}/{style:?} sums to {sum}");
        }
    }
}

#[test]
fn durations_scale_to_requested_total() {
    let mut r = request("whatever", SceneKind::TalkingHead, VisualStyle::Realistic);
    r.duration_sec = 8.0;
    let plan = scene_plan(&r);
    plan.validate().unwrap();
    assert!((plan.total_duration_sec - 8.0).abs() < 1e-9);
}

#[test]
fn morning_prompt_selects_morning_template() {
    let r = request(
        "Create an inspiring video about morning routines",
        SceneKind::TalkingHead,
        VisualStyle::Realistic,
    );
    let plan = scene_plan(&r);
    assert_eq!(plan.scenes.len(), 3);
    let cameras: Vec<_> = plan.scenes.iter().map(|s| s.camera.label()).collect();
    assert_eq!(cameras, vec!["slow zoom in", "slight pan", "zoom out"]);

    let script = narration_script(&r.prompt);
    let script_lower = script.to_lowercase();
    assert!(script_lower.contains("morning") || script_lower.contains("routine"));
}

#[test]
fn narration_covers_clip_without_dropping_words() {
    for prompt in [
        "morning routines for winners",
        "grow your business",
        "a quiet walk in the woods",
    ] {
        let r = request(prompt, SceneKind::Nature, VisualStyle::Sketch);
        let plan = scene_plan(&r);
        let narration = narration_plan(&r, &plan);
        narration.validate(plan.total_duration_sec).unwrap();

        let span_words: usize = narration
            .spans
            .iter()
            .map(|s| s.text.split_whitespace().count())
            .sum();
        assert_eq!(span_words, narration.script.split_whitespace().count());
    }
}

#[test]
fn effects_follow_style() {
    let realistic = request("x", SceneKind::Abstract, VisualStyle::Realistic);
    assert!(effects(&realistic).contains(&VisualEffect::LensFlare));

    let cartoon = request("x", SceneKind::Abstract, VisualStyle::Cartoon);
    assert!(effects(&cartoon).contains(&VisualEffect::Sparkles));

    let sketch = request("x", SceneKind::Abstract, VisualStyle::Sketch);
    assert!(effects(&sketch).contains(&VisualEffect::PaperGrain));
}

#[test]
fn palettes_have_five_colors_and_follow_theme() {
    let business = request("professional growth", SceneKind::Abstract, VisualStyle::Realistic);
    let p = palette(&business);
    assert_eq!(p.to_hex()[0], "#1e40af");

    let sketchy = request("nothing in particular", SceneKind::Abstract, VisualStyle::Sketch);
    assert_eq!(palette(&sketchy).to_hex()[0], "#374151");
}

#[test]
fn title_prefers_custom_field_then_keywords() {
    let mut r = request("morning routines", SceneKind::TalkingHead, VisualStyle::Realistic);
    let script = narration_script(&r.prompt);
    assert_eq!(title(&script, &r), "AI-Powered Morning Routine Guide");

    r.custom_fields.push(("title".to_owned(), "My Clip".to_owned()));
    assert_eq!(title(&script, &r), "My Clip");

    let generic = request("zebras", SceneKind::Abstract, VisualStyle::Realistic);
    let generic_title = title("a script about zebras", &generic);
    assert!(generic_title.contains("Text To Video"));
}

#[test]
fn theme_classification_first_match_wins() {
    assert_eq!(PromptTheme::classify("my morning routine"), PromptTheme::Morning);
    assert_eq!(PromptTheme::classify("BUSINESS tips"), PromptTheme::Business);
    assert_eq!(PromptTheme::classify("productivity hack"), PromptTheme::Productivity);
    assert_eq!(PromptTheme::classify("achieve success"), PromptTheme::Motivation);
    assert_eq!(PromptTheme::classify("home workout"), PromptTheme::Health);
    assert_eq!(PromptTheme::classify("peaceful lake"), PromptTheme::Calm);
    assert_eq!(PromptTheme::classify("so exciting"), PromptTheme::Energy);
    assert_eq!(PromptTheme::classify("zebras"), PromptTheme::General);
}
