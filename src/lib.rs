//! Clipsynth is a procedural short-form media synthesis engine.
//!
//! It turns a free-text prompt plus style selectors into placeholder
//! media, entirely offline: a keyword-matched content plan drives a
//! CPU frame renderer, a tone-based speech synthesizer produces a WAV
//! narration bed, and the system `ffmpeg` binary muxes both into a
//! playable MP4. Generated artifacts land in a JSON-file-backed
//! gallery.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `GenerationRequest -> ContentPlan` (keyword templates,
//!    optional remote text-generation backfill)
//! 2. **Synthesize**: narration script -> additive-sine WAV clip
//! 3. **Render**: `ContentPlan + frame index -> FrameRGBA` (pure,
//!    seeded)
//! 4. **Encode**: stream frames + WAV to `ffmpeg` for MP4 output
//! 5. **Store**: artifact + settings snapshot -> gallery entry
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: rendering is a pure function of
//!   (plan, options, frame index); randomized effects draw from a
//!   seeded generator.
//! - **Offline encoding**: nothing is paced against the wall clock;
//!   frames stream to the encoder as fast as they are produced.
#![forbid(unsafe_code)]

mod audio;
mod encode;
mod foundation;
mod gallery;
mod media;
mod pipeline;
mod plan;
mod render;

pub use audio::synth::{
    synthesize_narration, synthesize_speech, speech_duration_sec, SpeechParams,
    NARRATION_DURATION_SEC, SAMPLE_RATE,
};
pub use audio::voice::{Accent, SpeechPitch, SpeechRate, VoiceProfile};
pub use audio::wav::{encode_wav_pcm16, AudioClip};
pub use audio::waveform::render_waveform;
pub use encode::ffmpeg::{
    ensure_parent_dir, is_ffmpeg_on_path, AudioInputConfig, EncodeConfig, FfmpegEncoder,
};
pub use encode::thumbnail::{thumbnail_frame_index, write_jpeg, write_png};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D};
pub use foundation::error::{ClipsynthError, ClipsynthResult};
pub use foundation::rng::Rng64;
pub use gallery::store::{GalleryEntry, GalleryStore};
pub use media::artifact::{duration_label, MediaArtifact, MediaKind, SynthesisInsights};
pub use media::image_gen::{generate_image, image_title, AspectRatio, ImageOptions, ImageStyle};
pub use media::thumb_gen::{
    generate_thumbnail, thumbnail_title, ColorScheme, Platform, ThumbnailOptions,
};
pub use pipeline::generate::{generate, GenerateOptions};
pub use pipeline::session::{
    reduce, CancelToken, LogProgress, NullProgress, ProgressSink, SessionEvent, SessionState,
    Stage,
};
pub use plan::model::{
    CameraMovement, CaptionSpan, CaptionStyle, ColorPalette, ContentPlan, GenerationRequest,
    Lighting, NarrationPlan, Scene, SceneKind, ScenePlan, VisualElement, VisualEffect,
    VisualStyle, VoiceKind,
};
pub use plan::planner::ContentPlanner;
pub use plan::remote::{RemoteConfig, RemotePlanner, API_KEY_ENV, API_URL_ENV};
pub use plan::templates::{self as plan_templates, PromptTheme};
pub use render::frame::FrameRGBA;
pub use render::renderer::{camera_transform, FrameRenderer, RenderOptions, DEFAULT_CANVAS};
