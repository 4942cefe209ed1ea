//! Local keyword-matched plan templates.
//!
//! The planner always has this module to fall back on, so planning
//! never fails: every prompt maps to a complete scene/narration plan.

use crate::foundation::core::Rgba8;
use crate::plan::model::{
    CameraMovement, CaptionSpan, ColorPalette, GenerationRequest, Lighting, NarrationPlan, Scene,
    ScenePlan, SceneKind, VisualElement, VisualEffect, VisualStyle,
};

/// Prompt classification driving template selection.
///
/// Matching is substring-based over the lower-cased prompt, first
/// match wins, in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptTheme {
    Morning,
    Business,
    Productivity,
    Motivation,
    Health,
    Calm,
    Energy,
    General,
}

impl PromptTheme {
    pub fn classify(prompt: &str) -> Self {
        let words = prompt.to_lowercase();
        let any = |keys: &[&str]| keys.iter().any(|k| words.contains(k));

        if any(&["morning", "routine", "wake"]) {
            Self::Morning
        } else if any(&["business", "professional", "work"]) {
            Self::Business
        } else if any(&["productivity", "tips", "hack"]) {
            Self::Productivity
        } else if any(&["motivation", "success", "achieve"]) {
            Self::Motivation
        } else if any(&["health", "fitness", "workout"]) {
            Self::Health
        } else if any(&["calm", "peaceful", "meditation"]) {
            Self::Calm
        } else if any(&["energy", "exciting", "fun"]) {
            Self::Energy
        } else {
            Self::General
        }
    }
}

struct SceneTemplate {
    description: String,
    /// Share of a 5-second clip; scaled to the requested duration.
    base_duration_sec: f64,
    elements: Vec<VisualElement>,
    camera: CameraMovement,
    lighting: Lighting,
}

/// Build the scene plan for a request. Three scenes, durations summing
/// to the requested total.
pub fn scene_plan(request: &GenerationRequest) -> ScenePlan {
    let theme = PromptTheme::classify(&request.prompt);
    let templates = match theme {
        PromptTheme::Morning => morning_scenes(request.visual_style),
        PromptTheme::Business => business_scenes(request.visual_style),
        _ => kind_scenes(request.scene_kind, request.visual_style),
    };

    let scale = request.duration_sec / 5.0;
    let mut scenes: Vec<Scene> = templates
        .into_iter()
        .map(|t| Scene {
            description: t.description,
            duration_sec: t.base_duration_sec * scale,
            elements: t.elements,
            camera: t.camera,
            lighting: t.lighting,
        })
        .collect();

    // Absorb scaling rounding error into the last scene so the sum
    // invariant holds exactly.
    let sum_head: f64 = scenes[..scenes.len() - 1].iter().map(|s| s.duration_sec).sum();
    if let Some(last) = scenes.last_mut() {
        last.duration_sec = request.duration_sec - sum_head;
    }

    ScenePlan {
        scenes,
        total_duration_sec: request.duration_sec,
    }
}

fn figure_noun(style: VisualStyle) -> &'static str {
    match style {
        VisualStyle::Cartoon => "Animated character",
        VisualStyle::Realistic | VisualStyle::Sketch => "Person",
    }
}

fn morning_scenes(style: VisualStyle) -> Vec<SceneTemplate> {
    vec![
        SceneTemplate {
            description: format!(
                "{} waking up energetically in a bright, welcoming bedroom",
                figure_noun(style)
            ),
            base_duration_sec: 1.5,
            elements: vec![VisualElement::Presenter, VisualElement::Nature],
            camera: CameraMovement::SlowZoomIn,
            lighting: Lighting::GoldenHour,
        },
        SceneTemplate {
            description: format!(
                "Dynamic montage of morning activities: {} style exercise and healthy breakfast preparation",
                style.label()
            ),
            base_duration_sec: 2.5,
            elements: vec![VisualElement::Presenter, VisualElement::Title],
            camera: CameraMovement::SlightPan,
            lighting: Lighting::BrightEven,
        },
        SceneTemplate {
            description: "Confident person starting their day with purpose and motivation".to_owned(),
            base_duration_sec: 1.0,
            elements: vec![VisualElement::Presenter, VisualElement::Title],
            camera: CameraMovement::ZoomOut,
            lighting: Lighting::GoldenHour,
        },
    ]
}

fn business_scenes(style: VisualStyle) -> Vec<SceneTemplate> {
    vec![
        SceneTemplate {
            description: format!(
                "Professional {} presentation of the concept with clean, modern aesthetics",
                style.label()
            ),
            base_duration_sec: 1.5,
            elements: vec![VisualElement::Presenter, VisualElement::Office],
            camera: CameraMovement::Static,
            lighting: Lighting::Studio,
        },
        SceneTemplate {
            description: "Dynamic showcase of solutions and growth metrics with animated visuals"
                .to_owned(),
            base_duration_sec: 2.5,
            elements: vec![VisualElement::Title, VisualElement::Office],
            camera: CameraMovement::SlightPan,
            lighting: Lighting::BrightEven,
        },
        SceneTemplate {
            description: "Call-to-action with a clear value proposition and next steps".to_owned(),
            base_duration_sec: 1.0,
            elements: vec![VisualElement::Title],
            camera: CameraMovement::SlowZoomIn,
            lighting: Lighting::Studio,
        },
    ]
}

fn kind_scenes(kind: SceneKind, style: VisualStyle) -> Vec<SceneTemplate> {
    match kind {
        SceneKind::TalkingHead => vec![
            SceneTemplate {
                description: format!(
                    "{} introducing the topic with confident gestures",
                    match style {
                        VisualStyle::Cartoon => "Animated character",
                        _ => "Professional presenter",
                    }
                ),
                base_duration_sec: 1.5,
                elements: vec![VisualElement::Presenter],
                camera: CameraMovement::SlowZoomIn,
                lighting: match style {
                    VisualStyle::Realistic => Lighting::Studio,
                    _ => Lighting::BrightEven,
                },
            },
            SceneTemplate {
                description: "Main content delivery with dynamic visual elements appearing"
                    .to_owned(),
                base_duration_sec: 2.5,
                elements: vec![VisualElement::Title, VisualElement::Presenter],
                camera: CameraMovement::SlightPan,
                lighting: Lighting::BrightEven,
            },
            SceneTemplate {
                description: "Conclusion with call-to-action and memorable closing visual"
                    .to_owned(),
                base_duration_sec: 1.0,
                elements: vec![VisualElement::Title],
                camera: CameraMovement::ZoomOut,
                lighting: Lighting::BrightEven,
            },
        ],
        SceneKind::ProductDemo => vec![
            SceneTemplate {
                description: format!("Product reveal with {} styling and dramatic presentation", style.label()),
                base_duration_sec: 1.0,
                elements: vec![VisualElement::Product],
                camera: CameraMovement::Rotate360,
                lighting: Lighting::Studio,
            },
            SceneTemplate {
                description: "Feature highlights with animated callouts and benefits".to_owned(),
                base_duration_sec: 3.0,
                elements: vec![VisualElement::Product, VisualElement::Title],
                camera: CameraMovement::SlowZoomIn,
                lighting: Lighting::BrightEven,
            },
            SceneTemplate {
                description: "Final product shot with pricing and call-to-action".to_owned(),
                base_duration_sec: 1.0,
                elements: vec![VisualElement::Product, VisualElement::Title],
                camera: CameraMovement::PullBack,
                lighting: Lighting::Studio,
            },
        ],
        SceneKind::Nature => vec![
            SceneTemplate {
                description: format!("Serene {} landscape establishing the mood", style.label()),
                base_duration_sec: 1.5,
                elements: vec![VisualElement::Nature],
                camera: CameraMovement::SlightPan,
                lighting: Lighting::GoldenHour,
            },
            SceneTemplate {
                description: "Dynamic nature elements with wildlife and movement".to_owned(),
                base_duration_sec: 2.5,
                elements: vec![VisualElement::Nature, VisualElement::Title],
                camera: CameraMovement::SlightPan,
                lighting: Lighting::NaturalSoft,
            },
            SceneTemplate {
                description: "Peaceful conclusion with an environmental message".to_owned(),
                base_duration_sec: 1.0,
                elements: vec![VisualElement::Nature, VisualElement::Title],
                camera: CameraMovement::Static,
                lighting: Lighting::GoldenHour,
            },
        ],
        SceneKind::Abstract | SceneKind::Tutorial => vec![
            SceneTemplate {
                description: format!("Opening scene in {} style introducing the concept", style.label()),
                base_duration_sec: 1.5,
                elements: vec![VisualElement::Title],
                camera: CameraMovement::Static,
                lighting: Lighting::BrightEven,
            },
            SceneTemplate {
                description: "Main content with key information and visual support".to_owned(),
                base_duration_sec: 2.5,
                elements: vec![VisualElement::Title, VisualElement::Product],
                camera: CameraMovement::SlightPan,
                lighting: Lighting::BrightEven,
            },
            SceneTemplate {
                description: "Conclusion with summary and next steps".to_owned(),
                base_duration_sec: 1.0,
                elements: vec![VisualElement::Title],
                camera: CameraMovement::ZoomOut,
                lighting: Lighting::BrightEven,
            },
        ],
    }
}

/// Pick the narration script for a prompt.
pub fn narration_script(prompt: &str) -> String {
    match PromptTheme::classify(prompt) {
        PromptTheme::Morning => "Transform your mornings and unlock your full potential. These \
            simple habits will revolutionize your entire day and set you up for extraordinary \
            success."
            .to_owned(),
        PromptTheme::Business => "Discover the business strategies that industry leaders use to \
            stay ahead. Take your professional growth to the next level with proven methods."
            .to_owned(),
        PromptTheme::Productivity => "Master these productivity secrets and accomplish more in \
            less time. Work smarter, achieve better results, and reclaim your valuable time."
            .to_owned(),
        PromptTheme::Motivation => "Unlock your true potential and achieve the success you \
            deserve. Every great achievement starts with the decision to try and the commitment \
            to persist."
            .to_owned(),
        PromptTheme::Health => "Transform your health and energy levels with these powerful \
            wellness strategies. Your body is your most important investment."
            .to_owned(),
        PromptTheme::Calm | PromptTheme::Energy | PromptTheme::General => {
            // Derive a script from the prompt itself.
            let first_sentence = prompt
                .split(['.', '!', '?'])
                .map(str::trim)
                .find(|s| s.len() > 10);
            match first_sentence {
                Some(s) => format!(
                    "{s}. Discover how to make this work for you and see real results in your life."
                ),
                None => {
                    let head: String = prompt.chars().take(50).collect();
                    format!(
                        "Learn the secrets behind {head} and transform your approach to achieve \
                         amazing results."
                    )
                }
            }
        }
    }
}

/// Distribute a script across scenes proportionally to their share of
/// the total duration.
///
/// Every scene except the last takes `floor(words_per_second *
/// duration)` words; the last scene takes the remainder, so no word is
/// dropped and the spans cover `[0, total]` exactly.
pub fn narration_timing(script: &str, scenes: &ScenePlan) -> Vec<CaptionSpan> {
    let words: Vec<&str> = script.split_whitespace().collect();
    let total = scenes.total_duration_sec;
    let words_per_second = words.len() as f64 / total;

    let mut spans = Vec::with_capacity(scenes.scenes.len());
    let mut cursor_time = 0.0;
    let mut cursor_word = 0usize;
    let scene_count = scenes.scenes.len();

    for (i, scene) in scenes.scenes.iter().enumerate() {
        let take = if i + 1 == scene_count {
            words.len() - cursor_word
        } else {
            ((words_per_second * scene.duration_sec).floor() as usize)
                .min(words.len() - cursor_word)
        };
        let end_time = if i + 1 == scene_count {
            total
        } else {
            cursor_time + scene.duration_sec
        };
        spans.push(CaptionSpan {
            text: words[cursor_word..cursor_word + take].join(" "),
            start_sec: cursor_time,
            end_sec: end_time,
        });
        cursor_time = end_time;
        cursor_word += take;
    }

    spans
}

/// Assemble a narration plan for a request and a scene plan.
pub fn narration_plan(request: &GenerationRequest, scenes: &ScenePlan) -> NarrationPlan {
    let script = narration_script(&request.prompt);
    let spans = narration_timing(&script, scenes);
    NarrationPlan {
        script,
        spans,
        voice_instructions: "Use an engaging, professional tone with clear pronunciation and \
            appropriate pacing for social media content."
            .to_owned(),
    }
}

/// Effects list for a style/kind/prompt combination.
pub fn effects(request: &GenerationRequest) -> Vec<VisualEffect> {
    let base = vec![
        VisualEffect::SmoothTransitions,
        VisualEffect::ColorGrading,
        VisualEffect::TextAnimations,
    ];
    let mut out = base;
    match request.visual_style {
        VisualStyle::Realistic => {
            out.push(VisualEffect::DepthOfField);
            out.push(VisualEffect::LensFlare);
        }
        VisualStyle::Cartoon => out.push(VisualEffect::Sparkles),
        VisualStyle::Sketch => out.push(VisualEffect::PaperGrain),
    }
    out
}

/// Background music suggestion.
pub fn music_suggestion(request: &GenerationRequest) -> String {
    match PromptTheme::classify(&request.prompt) {
        PromptTheme::Calm => "Soft ambient music with gentle piano and nature sounds".to_owned(),
        PromptTheme::Energy | PromptTheme::Health | PromptTheme::Motivation => {
            "Upbeat electronic music with driving beats and inspiring melodies".to_owned()
        }
        PromptTheme::Business => {
            "Modern corporate background music with subtle electronic elements".to_owned()
        }
        _ => {
            if request.scene_kind == SceneKind::Nature {
                "Ambient nature sounds with gentle acoustic guitar and bird songs".to_owned()
            } else if request.visual_style == VisualStyle::Cartoon {
                "Playful, upbeat music with whimsical instruments and cheerful melodies".to_owned()
            } else {
                "Modern, engaging background music that perfectly complements your content"
                    .to_owned()
            }
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba8 {
    Rgba8::opaque(r, g, b)
}

/// Five-color palette for a style/kind/prompt combination.
pub fn palette(request: &GenerationRequest) -> ColorPalette {
    let colors = match PromptTheme::classify(&request.prompt) {
        PromptTheme::Business => [
            rgb(0x1e, 0x40, 0xaf),
            rgb(0x0f, 0x17, 0x2a),
            rgb(0xf8, 0xfa, 0xfc),
            rgb(0x64, 0x74, 0x8b),
            rgb(0x3b, 0x82, 0xf6),
        ],
        PromptTheme::Energy => [
            rgb(0xf5, 0x9e, 0x0b),
            rgb(0xef, 0x44, 0x44),
            rgb(0x10, 0xb9, 0x81),
            rgb(0x8b, 0x5c, 0xf6),
            rgb(0x06, 0xb6, 0xd4),
        ],
        PromptTheme::Calm => [
            rgb(0x10, 0xb9, 0x81),
            rgb(0x05, 0x96, 0x69),
            rgb(0x34, 0xd3, 0x99),
            rgb(0x6e, 0xe7, 0xb7),
            rgb(0xa7, 0xf3, 0xd0),
        ],
        _ => match request.visual_style {
            VisualStyle::Cartoon => [
                rgb(0xfb, 0xbf, 0x24),
                rgb(0xef, 0x44, 0x44),
                rgb(0x10, 0xb9, 0x81),
                rgb(0x8b, 0x5c, 0xf6),
                rgb(0xf5, 0x9e, 0x0b),
            ],
            VisualStyle::Sketch => [
                rgb(0x37, 0x41, 0x51),
                rgb(0x6b, 0x72, 0x80),
                rgb(0xf9, 0xfa, 0xfb),
                rgb(0x9c, 0xa3, 0xaf),
                rgb(0xd1, 0xd5, 0xdb),
            ],
            VisualStyle::Realistic => [
                rgb(0x1e, 0x40, 0xaf),
                rgb(0x1e, 0x29, 0x3b),
                rgb(0xf8, 0xfa, 0xfc),
                rgb(0x64, 0x74, 0x8b),
                rgb(0x0f, 0x17, 0x2a),
            ],
        },
    };
    ColorPalette { colors }
}

/// Derive a display title from the narration script and request.
pub fn title(script: &str, request: &GenerationRequest) -> String {
    if let Some((_, v)) = request
        .custom_fields
        .iter()
        .find(|(k, _)| k == "title")
        .filter(|(_, v)| !v.trim().is_empty())
    {
        return v.clone();
    }

    let script = script.to_lowercase();
    if script.contains("morning") || script.contains("routine") {
        "AI-Powered Morning Routine Guide".to_owned()
    } else if script.contains("productivity") || script.contains("tips") {
        "Smart Productivity Hacks by AI".to_owned()
    } else if script.contains("success") || script.contains("motivation") {
        "AI-Generated Success Strategies".to_owned()
    } else {
        let tool = request
            .tool
            .split('-')
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("Generated Clip - {tool}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/templates.rs"]
mod tests;
