//! The frame renderer: turns a content plan into raster frames.
//!
//! Rendering is a pure function of (plan, options, frame index): all
//! animation is driven by intra-scene progress, and randomized effects
//! draw from a per-frame RNG derived from the configured seed.

use rayon::prelude::*;
use tracing::debug;

use crate::foundation::core::{Affine, Canvas, Fps, Rgba8, Vec2};
use crate::foundation::error::{ClipsynthError, ClipsynthResult};
use crate::foundation::rng::Rng64;
use crate::plan::model::{
    CameraMovement, CaptionStyle, ContentPlan, GenerationRequest, Scene, VisualStyle,
};
use crate::render::frame::FrameRGBA;
use crate::render::painter::Painter;
use crate::render::{background, captions, effects, elements};

/// Default portrait canvas (9:16).
pub const DEFAULT_CANVAS: Canvas = Canvas {
    width: 720,
    height: 1280,
};
/// Default frame rate.
pub const DEFAULT_FPS_NUM: u32 = 30;

/// Renderer configuration.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Total frames to produce (duration * fps).
    pub frame_count: u32,
    pub style: VisualStyle,
    pub include_captions: bool,
    pub caption_style: CaptionStyle,
    pub custom_fields: Vec<(String, String)>,
    pub seed: u64,
    /// Render frames in parallel with rayon.
    pub parallel: bool,
}

impl RenderOptions {
    /// Options for a request: 30 fps, one frame per fps tick of the
    /// requested duration (150 for the default 5 s clip).
    pub fn for_request(request: &GenerationRequest) -> ClipsynthResult<Self> {
        let fps = Fps::whole(DEFAULT_FPS_NUM)?;
        let frame_count = (request.duration_sec * fps.as_f64()).round() as u32;
        if frame_count == 0 {
            return Err(ClipsynthError::validation(
                "requested duration yields zero frames",
            ));
        }
        Ok(Self {
            canvas: DEFAULT_CANVAS,
            fps,
            frame_count,
            style: request.visual_style,
            include_captions: request.include_captions,
            caption_style: request.caption_style,
            custom_fields: request.custom_fields.clone(),
            seed: request.seed,
            parallel: false,
        })
    }
}

/// Stateless frame renderer over one plan.
pub struct FrameRenderer<'a> {
    plan: &'a ContentPlan,
    options: RenderOptions,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(plan: &'a ContentPlan, options: RenderOptions) -> ClipsynthResult<Self> {
        plan.validate()?;
        if options.frame_count == 0 {
            return Err(ClipsynthError::validation("frame_count must be > 0"));
        }
        Ok(Self { plan, options })
    }

    pub fn frame_count(&self) -> u32 {
        self.options.frame_count
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Scene active at frame `i`: frames are divided equally among
    /// scenes, independent of scene durations (captions, by contrast,
    /// follow plan time).
    fn scene_at(&self, i: u32) -> (&Scene, f64) {
        let scenes = &self.plan.scenes.scenes;
        let frames_per_scene = f64::from(self.options.frame_count) / scenes.len() as f64;
        let index = ((f64::from(i) / frames_per_scene) as usize).min(scenes.len() - 1);
        let progress = (f64::from(i) % frames_per_scene) / frames_per_scene;
        (&scenes[index], progress)
    }

    /// Render one frame.
    pub fn render_frame(&self, i: u32) -> ClipsynthResult<FrameRGBA> {
        if i >= self.options.frame_count {
            return Err(ClipsynthError::render(format!(
                "frame index {i} out of range (frame_count {})",
                self.options.frame_count
            )));
        }
        let canvas = self.options.canvas;
        let (scene, progress) = self.scene_at(i);

        let mut painter = Painter::new(canvas, Rgba8::BLACK);
        background::draw_background(&mut painter, self.plan.palette, scene, progress, canvas);

        let camera = camera_transform(scene.camera, progress, canvas);
        painter.set_transform(camera);
        for &element in &scene.elements {
            elements::draw_element(
                &mut painter,
                element,
                self.options.style,
                progress,
                canvas,
                self.plan.palette,
                camera,
            );
        }
        painter.reset_transform();

        let mut rng = Rng64::for_frame(self.options.seed, u64::from(i));
        effects::apply_effects(
            &mut painter,
            &self.plan.effects,
            self.options.style,
            progress,
            canvas,
            &mut rng,
        );

        let clip_progress = f64::from(i) / f64::from(self.options.frame_count);
        if self.options.include_captions {
            let t_sec = clip_progress * self.plan.scenes.total_duration_sec;
            captions::draw_captions(
                &mut painter,
                &self.plan.narration,
                t_sec,
                canvas,
                self.options.caption_style,
            );
        }
        if !self.options.custom_fields.is_empty() {
            captions::draw_custom_overlays(
                &mut painter,
                &self.options.custom_fields,
                clip_progress,
                canvas,
            );
        }

        Ok(painter.into_frame())
    }

    /// Render every frame, optionally in parallel. Frame order is
    /// preserved either way.
    pub fn render_all(&self) -> ClipsynthResult<Vec<FrameRGBA>> {
        debug!(
            frames = self.options.frame_count,
            parallel = self.options.parallel,
            "rendering frames"
        );
        if self.options.parallel {
            (0..self.options.frame_count)
                .into_par_iter()
                .map(|i| self.render_frame(i))
                .collect()
        } else {
            (0..self.options.frame_count).map(|i| self.render_frame(i)).collect()
        }
    }
}

/// Camera transform about the canvas center for a movement at
/// intra-scene progress `p`.
pub fn camera_transform(movement: CameraMovement, p: f64, canvas: Canvas) -> Affine {
    let center = canvas.center().to_vec2();
    let about_center = |inner: Affine| -> Affine {
        Affine::translate(center) * inner * Affine::translate(-center)
    };
    match movement {
        CameraMovement::SlowZoomIn => about_center(Affine::scale(1.0 + p * 0.3)),
        CameraMovement::ZoomOut => about_center(Affine::scale(1.3 - p * 0.3)),
        CameraMovement::SlightPan => {
            Affine::translate(Vec2::new((p * std::f64::consts::TAU).sin() * 30.0, 0.0))
        }
        CameraMovement::Rotate360 => about_center(Affine::rotate(p * std::f64::consts::TAU)),
        CameraMovement::PullBack => about_center(Affine::scale(1.15 - p * 0.15)),
        CameraMovement::Static => Affine::IDENTITY,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
