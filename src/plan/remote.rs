//! Optional remote text-generation backfill for the planner.
//!
//! When a credential is configured, the planner asks a remote
//! generative endpoint for a plan and back-fills anything missing or
//! malformed from the local templates. Any network or parse failure is
//! logged and swallowed; the caller always receives a complete plan.

use std::time::Duration;

use tracing::{debug, warn};

use crate::foundation::error::{ClipsynthError, ClipsynthResult};
use crate::plan::model::{
    CameraMovement, CaptionSpan, GenerationRequest, Lighting, Scene, VisualElement, VisualEffect,
};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "CLIPSYNTH_API_KEY";
/// Environment variable overriding the endpoint URL.
pub const API_URL_ENV: &str = "CLIPSYNTH_API_URL";

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Remote planner configuration.
#[derive(Clone, Debug)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl RemoteConfig {
    /// Build a config from the environment; `None` when no credential
    /// is present (local fallback mode).
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())?;
        let endpoint =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned());
        Some(Self {
            endpoint,
            api_key,
            timeout: Duration::from_secs(20),
        })
    }
}

/// Freeform plan fragment returned by the remote endpoint. Every field
/// is optional; missing fields are back-filled locally.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct PartialPlan {
    #[serde(default)]
    pub scenes: Option<Vec<RemoteScene>>,
    #[serde(default)]
    pub narration: Option<RemoteNarration>,
    #[serde(default, rename = "visualEffects", alias = "visual_effects")]
    pub visual_effects: Option<Vec<String>>,
    #[serde(default, rename = "musicSuggestion", alias = "music_suggestion")]
    pub music_suggestion: Option<String>,
    #[serde(default, rename = "colorPalette", alias = "color_palette")]
    pub color_palette: Option<Vec<String>>,
}

/// Stringly scene shape on the wire; converted to the closed model at
/// the parse boundary.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct RemoteScene {
    pub description: String,
    pub duration: f64,
    #[serde(default, rename = "visualElements", alias = "visual_elements")]
    pub visual_elements: Vec<String>,
    #[serde(default, rename = "cameraMovement", alias = "camera_movement")]
    pub camera_movement: String,
    #[serde(default)]
    pub lighting: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RemoteNarration {
    pub script: String,
    #[serde(default)]
    pub timing: Vec<RemoteSpan>,
    #[serde(default, rename = "voiceInstructions", alias = "voice_instructions")]
    pub voice_instructions: Option<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RemoteSpan {
    pub text: String,
    #[serde(rename = "startTime", alias = "start_time")]
    pub start_time: f64,
    #[serde(rename = "endTime", alias = "end_time")]
    pub end_time: f64,
}

impl RemoteScene {
    /// Map the wire strings into the closed scene union. Unrecognized
    /// strings degrade to neutral variants rather than being dropped.
    pub fn into_scene(self) -> Scene {
        let camera = parse_camera(&self.camera_movement);
        let lighting = parse_lighting(&self.lighting);
        let mut elements: Vec<VisualElement> = self
            .visual_elements
            .iter()
            .filter_map(|e| parse_element(e))
            .collect();
        elements.dedup();
        if elements.is_empty() {
            elements.push(VisualElement::Title);
        }
        Scene {
            description: self.description,
            duration_sec: self.duration,
            elements,
            camera,
            lighting,
        }
    }
}

fn parse_camera(s: &str) -> CameraMovement {
    let s = s.to_lowercase();
    if s.contains("zoom in") {
        CameraMovement::SlowZoomIn
    } else if s.contains("zoom out") {
        CameraMovement::ZoomOut
    } else if s.contains("pan") {
        CameraMovement::SlightPan
    } else if s.contains("rotat") || s.contains("360") {
        CameraMovement::Rotate360
    } else if s.contains("pull back") || s.contains("reveal") {
        CameraMovement::PullBack
    } else {
        CameraMovement::Static
    }
}

fn parse_lighting(s: &str) -> Lighting {
    let s = s.to_lowercase();
    if s.contains("studio") || s.contains("spotlight") {
        Lighting::Studio
    } else if s.contains("golden") {
        Lighting::GoldenHour
    } else if s.contains("natural") || s.contains("soft") {
        Lighting::NaturalSoft
    } else {
        Lighting::BrightEven
    }
}

fn parse_element(s: &str) -> Option<VisualElement> {
    let s = s.to_lowercase();
    if s.contains("presenter") || s.contains("character") || s.contains("person") {
        Some(VisualElement::Presenter)
    } else if s.contains("product") {
        Some(VisualElement::Product)
    } else if s.contains("text") || s.contains("title") || s.contains("message") {
        Some(VisualElement::Title)
    } else if s.contains("office") || s.contains("professional") || s.contains("chart") {
        Some(VisualElement::Office)
    } else if s.contains("nature") || s.contains("landscape") || s.contains("water") {
        Some(VisualElement::Nature)
    } else {
        None
    }
}

/// Parse a wire effect label into the closed union; unknown labels are
/// skipped.
pub fn parse_effect(s: &str) -> Option<VisualEffect> {
    let s = s.to_lowercase();
    if s.contains("flare") {
        Some(VisualEffect::LensFlare)
    } else if s.contains("sparkle") {
        Some(VisualEffect::Sparkles)
    } else if s.contains("paper") || s.contains("texture") {
        Some(VisualEffect::PaperGrain)
    } else if s.contains("transition") {
        Some(VisualEffect::SmoothTransitions)
    } else if s.contains("grading") || s.contains("color") {
        Some(VisualEffect::ColorGrading)
    } else if s.contains("text") {
        Some(VisualEffect::TextAnimations)
    } else if s.contains("depth") {
        Some(VisualEffect::DepthOfField)
    } else {
        None
    }
}

impl From<RemoteSpan> for CaptionSpan {
    fn from(s: RemoteSpan) -> Self {
        Self {
            text: s.text,
            start_sec: s.start_time,
            end_sec: s.end_time,
        }
    }
}

/// Client for the remote text-generation endpoint.
pub struct RemotePlanner {
    config: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemotePlanner {
    pub fn new(config: RemoteConfig) -> ClipsynthResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClipsynthError::planning(format!("failed to build http client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Build a planner from the environment, or `None` without a
    /// credential.
    pub fn from_env() -> Option<Self> {
        let config = RemoteConfig::from_env()?;
        match Self::new(config) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("remote planner unavailable: {e}");
                None
            }
        }
    }

    /// Ask the endpoint for a plan fragment. Errors are returned to the
    /// planner, which falls back to local templates.
    pub fn fetch_plan(&self, request: &GenerationRequest) -> ClipsynthResult<PartialPlan> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(request) }] }],
            "generationConfig": {
                "temperature": 0.7,
                "topK": 1,
                "topP": 1,
                "maxOutputTokens": 2048,
            },
        });

        let url = format!("{}?key={}", self.config.endpoint, self.config.api_key);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| ClipsynthError::planning(format!("remote planning request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClipsynthError::planning(format!(
                "remote planning endpoint returned {status}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| ClipsynthError::planning(format!("remote response was not JSON: {e}")))?;
        let text = extract_text(&payload);
        debug!(len = text.len(), "remote planning response text");
        parse_partial_plan(&text)
    }
}

fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are an expert video production assistant. Create a detailed production plan for a \
         {duration}-second {style} style video.\n\
         Content request: \"{prompt}\"\n\
         Scene type: {kind}\n\
         Respond with a JSON object containing: scenes (description, duration, visualElements, \
         cameraMovement, lighting), narration (script, timing with text/startTime/endTime, \
         voiceInstructions), visualEffects, musicSuggestion, and colorPalette (5 hex colors).",
        duration = request.duration_sec,
        style = request.visual_style.label(),
        prompt = request.prompt,
        kind = request.scene_kind.label(),
    )
}

/// Pull the candidate text out of the response envelope, falling back
/// to the raw payload when the envelope shape is unfamiliar.
fn extract_text(payload: &serde_json::Value) -> String {
    payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| payload.to_string())
}

/// Best-effort parse: take the first `{ ... }` block in the text.
pub fn parse_partial_plan(text: &str) -> ClipsynthResult<PartialPlan> {
    let start = text
        .find('{')
        .ok_or_else(|| ClipsynthError::planning("remote response contained no JSON object"))?;
    let end = text
        .rfind('}')
        .ok_or_else(|| ClipsynthError::planning("remote response contained no JSON object"))?;
    if end < start {
        return Err(ClipsynthError::planning("remote response JSON is malformed"));
    }
    serde_json::from_str(&text[start..=end])
        .map_err(|e| ClipsynthError::planning(format!("remote plan did not parse: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/plan/remote.rs"]
mod tests;
