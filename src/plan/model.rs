use crate::foundation::core::Rgba8;
use crate::foundation::error::{ClipsynthError, ClipsynthResult};

/// Tolerance used when checking duration/coverage invariants.
pub const DURATION_EPSILON: f64 = 1e-6;

/// Overall visual treatment applied to every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    Realistic,
    Cartoon,
    Sketch,
}

impl VisualStyle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Cartoon => "cartoon",
            Self::Sketch => "sketch",
        }
    }
}

/// High-level scene archetype selected by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    TalkingHead,
    ProductDemo,
    Nature,
    Abstract,
    Tutorial,
}

impl SceneKind {
    pub const ALL: [SceneKind; 5] = [
        Self::TalkingHead,
        Self::ProductDemo,
        Self::Nature,
        Self::Abstract,
        Self::Tutorial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TalkingHead => "talking-head",
            Self::ProductDemo => "product-demo",
            Self::Nature => "nature",
            Self::Abstract => "abstract",
            Self::Tutorial => "tutorial",
        }
    }
}

/// Voice category for the tone synthesizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceKind {
    Male,
    Female,
    Child,
    Robotic,
}

/// Camera movement over the course of one scene.
///
/// This is a closed union: the renderer matches exhaustively, so a
/// scene can never request a movement the renderer silently ignores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CameraMovement {
    /// Scale 1.0 -> 1.3 across the scene.
    #[serde(rename = "slow zoom in")]
    SlowZoomIn,
    /// Scale 1.3 -> 1.0 across the scene.
    #[serde(rename = "zoom out")]
    ZoomOut,
    /// Horizontal sway, +-30 px over one full sine period.
    #[serde(rename = "slight pan")]
    SlightPan,
    /// One full rotation across the scene.
    #[serde(rename = "360-degree rotation")]
    Rotate360,
    /// Scale 1.15 -> 1.0, revealing the full composition.
    #[serde(rename = "pull back reveal")]
    PullBack,
    /// No movement.
    #[serde(rename = "static")]
    Static,
}

impl CameraMovement {
    pub fn label(self) -> &'static str {
        match self {
            Self::SlowZoomIn => "slow zoom in",
            Self::ZoomOut => "zoom out",
            Self::SlightPan => "slight pan",
            Self::Rotate360 => "360-degree rotation",
            Self::PullBack => "pull back reveal",
            Self::Static => "static",
        }
    }
}

/// Lighting treatment for a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Lighting {
    /// White radial glow from the upper-right studio key light.
    #[serde(rename = "professional studio lighting")]
    Studio,
    /// Warm diagonal wash.
    #[serde(rename = "golden hour natural light")]
    GoldenHour,
    /// Even lighting, no overlay.
    #[serde(rename = "bright, even lighting")]
    BrightEven,
    /// Soft outdoor light; triggers the nature background motif.
    #[serde(rename = "soft natural light")]
    NaturalSoft,
}

impl Lighting {
    pub fn label(self) -> &'static str {
        match self {
            Self::Studio => "professional studio lighting",
            Self::GoldenHour => "golden hour natural light",
            Self::BrightEven => "bright, even lighting",
            Self::NaturalSoft => "soft natural light",
        }
    }

    /// Whether this lighting counts as natural light for background
    /// motif selection.
    pub fn is_natural(self) -> bool {
        matches!(self, Self::GoldenHour | Self::NaturalSoft)
    }
}

/// A drawable element within a scene. Closed union; every variant has
/// a draw rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualElement {
    /// Style-conditioned presenter figure with head-bob and arm-sway.
    Presenter,
    /// Rotating, pulsing product box with shadow and highlight.
    Product,
    /// Fading/scaling title text.
    Title,
    /// Professional dot-grid background motif.
    Office,
    /// Pulsing-circle background motif.
    Nature,
}

/// A visual post-effect. Closed union; variants that do not draw at
/// the frame level only shape plan metadata, and the renderer's match
/// says so explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VisualEffect {
    #[serde(rename = "lens flares")]
    LensFlare,
    #[serde(rename = "sparkle effects")]
    Sparkles,
    #[serde(rename = "paper texture")]
    PaperGrain,
    #[serde(rename = "smooth transitions")]
    SmoothTransitions,
    #[serde(rename = "color grading")]
    ColorGrading,
    #[serde(rename = "text animations")]
    TextAnimations,
    #[serde(rename = "depth of field")]
    DepthOfField,
}

impl VisualEffect {
    pub fn label(self) -> &'static str {
        match self {
            Self::LensFlare => "lens flares",
            Self::Sparkles => "sparkle effects",
            Self::PaperGrain => "paper texture",
            Self::SmoothTransitions => "smooth transitions",
            Self::ColorGrading => "color grading",
            Self::TextAnimations => "text animations",
            Self::DepthOfField => "depth of field",
        }
    }
}

/// One timed visual segment of the plan. Immutable once produced.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Human-readable description surfaced in synthesis insights.
    pub description: String,
    /// Scene length in seconds; must be finite and > 0.
    pub duration_sec: f64,
    /// Elements drawn while this scene is active.
    pub elements: Vec<VisualElement>,
    /// Camera movement across the scene.
    pub camera: CameraMovement,
    /// Lighting treatment.
    pub lighting: Lighting,
}

/// Ordered scene sequence whose durations sum to the clip length.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScenePlan {
    pub scenes: Vec<Scene>,
    pub total_duration_sec: f64,
}

impl ScenePlan {
    pub fn new(scenes: Vec<Scene>, total_duration_sec: f64) -> ClipsynthResult<Self> {
        let plan = Self {
            scenes,
            total_duration_sec,
        };
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> ClipsynthResult<()> {
        if self.scenes.is_empty() {
            return Err(ClipsynthError::validation("scene plan must be non-empty"));
        }
        if !self.total_duration_sec.is_finite() || self.total_duration_sec <= 0.0 {
            return Err(ClipsynthError::validation(
                "scene plan total duration must be finite and > 0",
            ));
        }
        let mut sum = 0.0;
        for (i, scene) in self.scenes.iter().enumerate() {
            if !scene.duration_sec.is_finite() || scene.duration_sec <= 0.0 {
                return Err(ClipsynthError::validation(format!(
                    "scene {i} duration must be finite and > 0"
                )));
            }
            sum += scene.duration_sec;
        }
        if (sum - self.total_duration_sec).abs() > DURATION_EPSILON {
            return Err(ClipsynthError::validation(format!(
                "scene durations sum to {sum}, expected {}",
                self.total_duration_sec
            )));
        }
        Ok(())
    }
}

/// One caption interval, `[start_sec, end_sec)`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CaptionSpan {
    pub text: String,
    pub start_sec: f64,
    pub end_sec: f64,
}

/// Narration script plus time-aligned caption spans.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct NarrationPlan {
    pub script: String,
    pub spans: Vec<CaptionSpan>,
    pub voice_instructions: String,
}

impl NarrationPlan {
    /// Check that spans are ordered, non-overlapping, and cover
    /// `[0, total_duration_sec]`.
    pub fn validate(&self, total_duration_sec: f64) -> ClipsynthResult<()> {
        if self.script.trim().is_empty() {
            return Err(ClipsynthError::validation("narration script must be non-empty"));
        }
        if self.spans.is_empty() {
            return Err(ClipsynthError::validation("narration spans must be non-empty"));
        }
        let mut cursor = 0.0;
        for (i, span) in self.spans.iter().enumerate() {
            if span.end_sec <= span.start_sec {
                return Err(ClipsynthError::validation(format!(
                    "narration span {i} has non-positive length"
                )));
            }
            if (span.start_sec - cursor).abs() > DURATION_EPSILON {
                return Err(ClipsynthError::validation(format!(
                    "narration span {i} starts at {} but previous span ended at {cursor}",
                    span.start_sec
                )));
            }
            cursor = span.end_sec;
        }
        if (cursor - total_duration_sec).abs() > DURATION_EPSILON {
            return Err(ClipsynthError::validation(format!(
                "narration spans cover [0, {cursor}], expected [0, {total_duration_sec}]"
            )));
        }
        Ok(())
    }

    /// Find the span active at `t` seconds, if any.
    pub fn span_at(&self, t: f64) -> Option<&CaptionSpan> {
        self.spans
            .iter()
            .find(|s| t >= s.start_sec && t <= s.end_sec)
    }
}

/// Five-color palette seeding backgrounds and element paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorPalette {
    pub colors: [Rgba8; 5],
}

impl ColorPalette {
    pub fn from_hex(hex: [&str; 5]) -> ClipsynthResult<Self> {
        let mut colors = [Rgba8::BLACK; 5];
        for (slot, h) in colors.iter_mut().zip(hex) {
            *slot = Rgba8::from_hex(h)?;
        }
        Ok(Self { colors })
    }

    pub fn to_hex(self) -> [String; 5] {
        self.colors.map(|c| c.to_hex())
    }

    pub fn color(self, i: usize) -> Rgba8 {
        self.colors[i % self.colors.len()]
    }
}

/// Complete planner output: everything downstream stages need.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContentPlan {
    pub scenes: ScenePlan,
    pub narration: NarrationPlan,
    pub effects: Vec<VisualEffect>,
    pub music_suggestion: String,
    pub palette: ColorPalette,
}

impl ContentPlan {
    pub fn validate(&self) -> ClipsynthResult<()> {
        self.scenes.validate()?;
        self.narration.validate(self.scenes.total_duration_sec)
    }
}

/// Caption box styling carried through from the request.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CaptionStyle {
    pub bg: Rgba8,
    pub text: Rgba8,
    pub bg_opacity: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            bg: Rgba8::BLACK,
            text: Rgba8::WHITE,
            bg_opacity: 0.8,
        }
    }
}

/// Everything the pipeline needs to produce one clip.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Originating tool id, kept for gallery metadata.
    pub tool: String,
    pub visual_style: VisualStyle,
    pub scene_kind: SceneKind,
    pub voice: VoiceKind,
    pub include_captions: bool,
    pub include_audio: bool,
    pub caption_style: CaptionStyle,
    /// Ordered key/value overlays faded in during rendering.
    pub custom_fields: Vec<(String, String)>,
    pub duration_sec: f64,
    /// Determinism seed threaded through every random draw.
    pub seed: u64,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            tool: "text-to-video".to_owned(),
            visual_style: VisualStyle::Realistic,
            scene_kind: SceneKind::TalkingHead,
            voice: VoiceKind::Female,
            include_captions: true,
            include_audio: true,
            caption_style: CaptionStyle::default(),
            custom_fields: Vec::new(),
            duration_sec: 5.0,
            seed: 0,
        }
    }

    pub fn validate(&self) -> ClipsynthResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ClipsynthError::validation("prompt must be non-empty"));
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Err(ClipsynthError::validation(
                "duration_sec must be finite and > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.caption_style.bg_opacity) {
            return Err(ClipsynthError::validation(
                "caption bg_opacity must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/model.rs"]
mod tests;
