//! Planner facade: local templates, with optional remote backfill.

use tracing::{info, warn};

use crate::plan::model::{
    ColorPalette, ContentPlan, GenerationRequest, NarrationPlan, ScenePlan, DURATION_EPSILON,
};
use crate::plan::remote::{self, PartialPlan, RemotePlanner};
use crate::plan::templates;

/// Produces a complete [`ContentPlan`] for any request.
///
/// Planning is infallible by contract: the remote path is best-effort,
/// and every missing or malformed fragment is back-filled from the
/// local keyword templates.
#[derive(Default)]
pub struct ContentPlanner {
    remote: Option<RemotePlanner>,
}

impl ContentPlanner {
    /// Planner using only local templates.
    pub fn local() -> Self {
        Self { remote: None }
    }

    /// Planner with remote backfill when a credential is configured in
    /// the environment; otherwise identical to [`Self::local`].
    pub fn from_env() -> Self {
        Self {
            remote: RemotePlanner::from_env(),
        }
    }

    pub fn with_remote(remote: RemotePlanner) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Produce a plan. Always returns a complete, validated plan.
    pub fn plan(&self, request: &GenerationRequest) -> ContentPlan {
        let local = self.local_plan(request);

        let Some(remote) = &self.remote else {
            return local;
        };

        match remote.fetch_plan(request) {
            Ok(partial) => {
                info!("remote plan received; merging with local templates");
                let merged = merge(partial, request, &local);
                match merged.validate() {
                    Ok(()) => merged,
                    Err(e) => {
                        warn!("merged remote plan failed validation ({e}); using local plan");
                        local
                    }
                }
            }
            Err(e) => {
                warn!("remote planning failed ({e}); using local plan");
                local
            }
        }
    }

    fn local_plan(&self, request: &GenerationRequest) -> ContentPlan {
        let scenes = templates::scene_plan(request);
        let narration = templates::narration_plan(request, &scenes);
        ContentPlan {
            narration,
            effects: templates::effects(request),
            music_suggestion: templates::music_suggestion(request),
            palette: templates::palette(request),
            scenes,
        }
    }
}

/// Fill every gap in the remote fragment from the local plan.
fn merge(partial: PartialPlan, request: &GenerationRequest, local: &ContentPlan) -> ContentPlan {
    let scenes = partial
        .scenes
        .and_then(|remote_scenes| accept_scenes(remote_scenes, request))
        .unwrap_or_else(|| local.scenes.clone());

    let narration = partial
        .narration
        .map(|n| accept_narration(n, &scenes, local))
        .unwrap_or_else(|| local.narration.clone());

    let effects = partial
        .visual_effects
        .map(|labels| {
            labels
                .iter()
                .filter_map(|l| remote::parse_effect(l))
                .collect::<Vec<_>>()
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| local.effects.clone());

    let palette = partial
        .color_palette
        .and_then(|hex| accept_palette(&hex))
        .unwrap_or(local.palette);

    let music_suggestion = partial
        .music_suggestion
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| local.music_suggestion.clone());

    ContentPlan {
        scenes,
        narration,
        effects,
        music_suggestion,
        palette,
    }
}

fn accept_scenes(
    remote_scenes: Vec<remote::RemoteScene>,
    request: &GenerationRequest,
) -> Option<ScenePlan> {
    if remote_scenes.is_empty() {
        return None;
    }
    let scenes: Vec<_> = remote_scenes.into_iter().map(|s| s.into_scene()).collect();
    let sum: f64 = scenes.iter().map(|s| s.duration_sec).sum();
    if (sum - request.duration_sec).abs() > DURATION_EPSILON {
        warn!(
            "remote scene durations sum to {sum}, expected {}; discarding remote scenes",
            request.duration_sec
        );
        return None;
    }
    let plan = ScenePlan {
        scenes,
        total_duration_sec: request.duration_sec,
    };
    plan.validate().ok().map(|()| plan)
}

fn accept_narration(
    n: remote::RemoteNarration,
    scenes: &ScenePlan,
    local: &ContentPlan,
) -> NarrationPlan {
    if n.script.trim().is_empty() {
        return local.narration.clone();
    }

    let spans: Vec<_> = n.timing.into_iter().map(Into::into).collect();
    let candidate = NarrationPlan {
        script: n.script.clone(),
        spans,
        voice_instructions: n
            .voice_instructions
            .unwrap_or_else(|| local.narration.voice_instructions.clone()),
    };
    if candidate.validate(scenes.total_duration_sec).is_ok() {
        return candidate;
    }

    // Remote timing did not cover the clip; keep the remote script but
    // redistribute it across the accepted scenes.
    NarrationPlan {
        spans: templates::narration_timing(&candidate.script, scenes),
        ..candidate
    }
}

fn accept_palette(hex: &[String]) -> Option<ColorPalette> {
    if hex.len() != 5 {
        return None;
    }
    ColorPalette::from_hex([
        hex[0].as_str(),
        hex[1].as_str(),
        hex[2].as_str(),
        hex[3].as_str(),
        hex[4].as_str(),
    ])
    .ok()
}

#[cfg(test)]
#[path = "../../tests/unit/plan/planner.rs"]
mod tests;
