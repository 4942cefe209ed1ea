//! End-to-end clip generation: plan, synthesize, render, encode.
//!
//! Frames stream into the encoder as they are rendered (in chunks, so
//! parallel rendering still pays off) rather than being buffered for
//! the whole clip.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::audio::synth;
use crate::encode::ffmpeg::{AudioInputConfig, EncodeConfig, FfmpegEncoder};
use crate::encode::thumbnail;
use crate::foundation::error::ClipsynthResult;
use crate::media::artifact::{duration_label, MediaArtifact, MediaKind, SynthesisInsights};
use crate::pipeline::session::{
    reduce, CancelToken, ProgressSink, SessionEvent, SessionState, Stage,
};
use crate::plan::model::{ContentPlan, GenerationRequest};
use crate::plan::planner::ContentPlanner;
use crate::plan::templates;
use crate::render::renderer::{FrameRenderer, RenderOptions};

/// Frames rendered between cancellation checkpoints (and per parallel
/// batch).
const RENDER_CHUNK: u32 = 32;

/// Filesystem placement of the generated outputs.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    /// Stem for the produced files (`<stem>.mp4`, `<stem>.wav`,
    /// `<stem>_thumb.jpg`).
    pub base_name: String,
    pub parallel_render: bool,
}

impl GenerateOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            base_name: "clip".to_owned(),
            parallel_render: false,
        }
    }
}

/// Run the full pipeline for one request.
///
/// Progress flows through `sink` as reduced [`SessionState`]
/// snapshots. A cancelled run returns [`crate::ClipsynthError::Cancelled`]
/// without touching the encoder or producing an artifact.
pub fn generate(
    planner: &ContentPlanner,
    request: &GenerationRequest,
    opts: &GenerateOptions,
    cancel: &CancelToken,
    sink: &mut dyn ProgressSink,
) -> ClipsynthResult<MediaArtifact> {
    let mut state = SessionState::Idle;
    let apply = |state: &mut SessionState, event: SessionEvent, sink: &mut dyn ProgressSink| {
        *state = reduce(state, &event);
        sink.update(state);
    };

    apply(&mut state, SessionEvent::Started, sink);
    let result = run_pipeline(planner, request, opts, cancel, sink, &mut state);
    match &result {
        Ok(_) => apply(&mut state, SessionEvent::Completed, sink),
        Err(crate::ClipsynthError::Cancelled) => {
            apply(&mut state, SessionEvent::Cancelled, sink);
        }
        Err(e) => apply(&mut state, SessionEvent::Failed(e.to_string()), sink),
    }
    result
}

fn run_pipeline(
    planner: &ContentPlanner,
    request: &GenerationRequest,
    opts: &GenerateOptions,
    cancel: &CancelToken,
    sink: &mut dyn ProgressSink,
    state: &mut SessionState,
) -> ClipsynthResult<MediaArtifact> {
    request.validate()?;
    let apply = |state: &mut SessionState, event: SessionEvent, sink: &mut dyn ProgressSink| {
        *state = reduce(state, &event);
        sink.update(state);
    };

    // Plan. Infallible by contract, but cancellable around it.
    cancel.checkpoint()?;
    let plan = planner.plan(request);
    info!(
        scenes = plan.scenes.scenes.len(),
        effects = plan.effects.len(),
        "content plan ready"
    );

    // Audio.
    apply(state, SessionEvent::StageEntered(Stage::SynthesizingAudio), sink);
    cancel.checkpoint()?;
    let audio_path = if request.include_audio {
        let clip = synth::synthesize_narration(&plan.narration.script, request.voice);
        let path = opts.out_dir.join(format!("{}.wav", opts.base_name));
        clip.write_wav(&path)?;
        Some(path)
    } else {
        None
    };

    // Render and encode, streaming chunk by chunk.
    apply(state, SessionEvent::StageEntered(Stage::RenderingFrames), sink);
    cancel.checkpoint()?;

    let mut render_options = RenderOptions::for_request(request)?;
    render_options.parallel = opts.parallel_render;
    let renderer = FrameRenderer::new(&plan, render_options)?;
    let frame_count = renderer.frame_count();

    let out_path = opts.out_dir.join(format!("{}.mp4", opts.base_name));
    let mut encoder = FfmpegEncoder::new(EncodeConfig {
        width: renderer.options().canvas.width,
        height: renderer.options().canvas.height,
        fps: renderer.options().fps.num,
        out_path: out_path.clone(),
        overwrite: true,
        audio: audio_path.clone().map(|path| AudioInputConfig { path }),
    })?;
    let has_audio = encoder.has_audio();
    if request.include_audio && !has_audio {
        warn!("audio was requested but could not be attached; clip will be silent");
    }

    let thumb_index = thumbnail::thumbnail_frame_index(frame_count);
    let mut thumb_frame = None;

    let mut start = 0u32;
    while start < frame_count {
        cancel.checkpoint()?;
        let end = (start + RENDER_CHUNK).min(frame_count);

        let frames: ClipsynthResult<Vec<_>> = if opts.parallel_render {
            use rayon::prelude::*;
            (start..end).into_par_iter().map(|i| renderer.render_frame(i)).collect()
        } else {
            (start..end).map(|i| renderer.render_frame(i)).collect()
        };
        let frames = frames?;

        for (offset, frame) in frames.iter().enumerate() {
            let index = start + offset as u32;
            if index == thumb_index {
                thumb_frame = Some(frame.clone());
            }
            encoder.encode_frame(frame)?;
        }

        apply(
            state,
            SessionEvent::FrameRendered {
                done: end,
                total: frame_count,
            },
            sink,
        );
        start = end;
    }

    apply(state, SessionEvent::StageEntered(Stage::Encoding), sink);
    let pushed = encoder.finish()?;
    info!(frames = pushed, path = %out_path.display(), "encoded clip");

    apply(state, SessionEvent::StageEntered(Stage::Finalizing), sink);
    let thumbnail_path = match thumb_frame {
        Some(frame) => {
            let path = opts.out_dir.join(format!("{}_thumb.jpg", opts.base_name));
            thumbnail::write_jpeg(&frame, &path)?;
            Some(path)
        }
        None => None,
    };

    Ok(MediaArtifact {
        kind: MediaKind::Video,
        path: out_path,
        title: templates::title(&plan.narration.script, request),
        duration_label: duration_label(plan.scenes.total_duration_sec),
        thumbnail: thumbnail_path,
        has_audio,
        insights: Some(insights_of(&plan)),
    })
}

fn insights_of(plan: &ContentPlan) -> SynthesisInsights {
    SynthesisInsights {
        scenes: plan.scenes.scenes.clone(),
        narration: plan.narration.clone(),
        effects: plan.effects.clone(),
        palette: plan.palette,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
