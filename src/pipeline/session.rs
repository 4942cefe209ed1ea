//! Generation lifecycle as an explicit state machine.
//!
//! The state is an immutable record advanced by a pure reducer, so the
//! lifecycle is testable without any UI attached, and progress always
//! reflects the real pipeline position rather than a cosmetic timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::foundation::error::{ClipsynthError, ClipsynthResult};

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Stage {
    Planning,
    SynthesizingAudio,
    RenderingFrames,
    Encoding,
    Finalizing,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "planning content",
            Self::SynthesizingAudio => "synthesizing audio",
            Self::RenderingFrames => "rendering frames",
            Self::Encoding => "encoding video",
            Self::Finalizing => "finalizing",
        }
    }
}

/// Immutable session state record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SessionState {
    Idle,
    Running {
        stage: Stage,
        frames_done: u32,
        frames_total: u32,
    },
    Completed,
    Failed(String),
    Cancelled,
}

impl SessionState {
    /// Coarse progress in [0, 1] derived from the real pipeline
    /// position.
    pub fn progress(&self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Running {
                stage,
                frames_done,
                frames_total,
            } => {
                let frame_share = if *frames_total == 0 {
                    0.0
                } else {
                    f64::from(*frames_done) / f64::from(*frames_total)
                };
                match stage {
                    Stage::Planning => 0.05,
                    Stage::SynthesizingAudio => 0.15,
                    // Rendering dominates wall time; give it the bulk
                    // of the bar.
                    Stage::RenderingFrames => 0.2 + frame_share * 0.6,
                    Stage::Encoding => 0.85,
                    Stage::Finalizing => 0.95,
                }
            }
            Self::Completed => 1.0,
            Self::Failed(_) | Self::Cancelled => 0.0,
        }
    }
}

/// Events that advance the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    StageEntered(Stage),
    FrameRendered { done: u32, total: u32 },
    Completed,
    Failed(String),
    Cancelled,
}

/// Pure reducer: `state + event -> state`.
pub fn reduce(state: &SessionState, event: &SessionEvent) -> SessionState {
    match event {
        SessionEvent::Started => SessionState::Running {
            stage: Stage::Planning,
            frames_done: 0,
            frames_total: 0,
        },
        SessionEvent::StageEntered(stage) => match state {
            SessionState::Running {
                frames_done,
                frames_total,
                ..
            } => SessionState::Running {
                stage: *stage,
                frames_done: *frames_done,
                frames_total: *frames_total,
            },
            // Entering a stage outside a run restarts the lifecycle.
            _ => SessionState::Running {
                stage: *stage,
                frames_done: 0,
                frames_total: 0,
            },
        },
        SessionEvent::FrameRendered { done, total } => match state {
            SessionState::Running { stage, .. } => SessionState::Running {
                stage: *stage,
                frames_done: *done,
                frames_total: *total,
            },
            other => other.clone(),
        },
        SessionEvent::Completed => SessionState::Completed,
        SessionEvent::Failed(msg) => SessionState::Failed(msg.clone()),
        SessionEvent::Cancelled => SessionState::Cancelled,
    }
}

/// Receives state snapshots as the pipeline advances.
pub trait ProgressSink {
    fn update(&mut self, state: &SessionState);
}

/// Discards progress updates.
#[derive(Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _state: &SessionState) {}
}

/// Logs stage transitions through `tracing`.
#[derive(Default)]
pub struct LogProgress {
    last_stage: Option<Stage>,
}

impl ProgressSink for LogProgress {
    fn update(&mut self, state: &SessionState) {
        if let SessionState::Running { stage, .. } = state
            && self.last_stage != Some(*stage)
        {
            self.last_stage = Some(*stage);
            info!("{}", stage.label());
        }
    }
}

/// Shared cancellation flag checked between pipeline steps.
///
/// Cancelling stops the run at the next checkpoint: no further frames
/// are rendered, nothing is encoded, and no gallery entry is created.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Fail with [`ClipsynthError::Cancelled`] when cancellation was
    /// requested.
    pub fn checkpoint(&self) -> ClipsynthResult<()> {
        if self.is_cancelled() {
            return Err(ClipsynthError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/session.rs"]
mod tests;
