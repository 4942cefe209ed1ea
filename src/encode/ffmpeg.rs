//! Offline MP4 encoding by streaming raw frames to the system `ffmpeg`
//! binary. Frames are pushed as fast as ffmpeg accepts them; nothing is
//! paced against the wall clock.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::warn;

use crate::foundation::error::{ClipsynthError, ClipsynthResult};
use crate::render::frame::FrameRGBA;

/// Synthesized audio attached to the encode.
#[derive(Clone, Debug)]
pub struct AudioInputConfig {
    /// Path to a WAV file produced by the audio synthesizer.
    pub path: PathBuf,
}

/// Options for one MP4 encode.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    /// Integer frames per second.
    pub fps: u32,
    pub out_path: PathBuf,
    /// Overwrite the output file if it already exists.
    pub overwrite: bool,
    pub audio: Option<AudioInputConfig>,
}

impl EncodeConfig {
    pub fn validate(&self) -> ClipsynthResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ClipsynthError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ClipsynthError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.fps == 0 {
            return Err(ClipsynthError::validation("encode fps must be non-zero"));
        }
        Ok(())
    }
}

/// Streams frames into a spawned `ffmpeg` process.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    frames_pushed: u64,
}

impl FfmpegEncoder {
    /// Validate the config and spawn ffmpeg.
    ///
    /// A configured audio file that is missing or unreadable degrades
    /// the encode to video-only with a warning; it does not fail.
    pub fn new(mut cfg: EncodeConfig) -> ClipsynthResult<Self> {
        cfg.validate()?;

        ensure_parent_dir(&cfg.out_path)?;
        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(ClipsynthError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(ClipsynthError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        if let Some(audio) = &cfg.audio
            && std::fs::metadata(&audio.path).is_err()
        {
            warn!(
                "audio input '{}' is not readable; encoding video-only",
                audio.path.display()
            );
            cfg.audio = None;
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if cfg.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        // Input 0: raw opaque RGBA8 frames over stdin.
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
        ]);

        if let Some(audio) = cfg.audio.as_ref() {
            // Input 1: the synthesized WAV container.
            cmd.arg("-i").arg(&audio.path).args([
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-c:a",
                "aac",
                "-shortest",
                "-movflags",
                "+faststart",
            ]);
        } else {
            cmd.args([
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ]);
        }
        cmd.arg(&cfg.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            ClipsynthError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ClipsynthError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| ClipsynthError::encode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        Ok(Self {
            cfg,
            child: Some(child),
            stdin: Some(stdin),
            stderr_drain: Some(stderr_drain),
            frames_pushed: 0,
        })
    }

    /// Whether the encode carries an audio track.
    pub fn has_audio(&self) -> bool {
        self.cfg.audio.is_some()
    }

    /// Push the next frame. Frames must arrive in order.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> ClipsynthResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(ClipsynthError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        if frame.data.len() != frame.byte_len() {
            return Err(ClipsynthError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ClipsynthError::encode("ffmpeg encoder is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&frame.data).map_err(|e| {
            ClipsynthError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        self.frames_pushed += 1;
        Ok(())
    }

    /// Close stdin and wait for ffmpeg to finish the container.
    pub fn finish(mut self) -> ClipsynthResult<u64> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| ClipsynthError::encode("ffmpeg encoder not started"))?;

        let status = child.wait().map_err(|e| {
            ClipsynthError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| ClipsynthError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| ClipsynthError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(ClipsynthError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        Ok(self.frames_pushed)
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ClipsynthResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
