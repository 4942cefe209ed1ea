//! The terminal output type shared by every generator.

use std::path::PathBuf;

use crate::plan::model::{ColorPalette, NarrationPlan, Scene, VisualEffect};

/// What kind of media an artifact holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
    Audio,
}

/// Planner internals attached to a generated clip for display.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SynthesisInsights {
    pub scenes: Vec<Scene>,
    pub narration: NarrationPlan,
    pub effects: Vec<VisualEffect>,
    pub palette: ColorPalette,
}

/// A finished piece of generated media plus its display metadata.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MediaArtifact {
    pub kind: MediaKind,
    /// Path of the playable/viewable resource.
    pub path: PathBuf,
    pub title: String,
    /// Display label such as "0:05".
    pub duration_label: String,
    /// Thumbnail image path, when one was produced.
    pub thumbnail: Option<PathBuf>,
    pub has_audio: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<SynthesisInsights>,
}

/// Format whole seconds as an `m:ss` display label.
pub fn duration_label(seconds: f64) -> String {
    let total = seconds.round().max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
#[path = "../../tests/unit/media/artifact.rs"]
mod tests;
