//! Shared WAV (RIFF PCM16) serializer.
//!
//! This is the single place WAV containers are built. Chunk-length
//! fields are computed from the actual payload by construction, and the
//! encoder is round-trip-tested against a real decoder in unit tests.

use std::path::Path;

use crate::foundation::error::{ClipsynthError, ClipsynthResult};

/// Uncompressed PCM, the only format this crate emits.
const FORMAT_PCM: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
/// RIFF header (12) + fmt chunk (8 + 16) + data chunk header (8).
const HEADER_LEN: usize = 44;

/// In-memory audio: interleaved f32 samples in [-1, 1].
#[derive(Clone, Debug)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn duration_sec(&self) -> f64 {
        if self.channels == 0 || self.sample_rate == 0 {
            return 0.0;
        }
        (self.samples.len() / usize::from(self.channels)) as f64 / f64::from(self.sample_rate)
    }

    /// Encode as a 16-bit PCM WAV container.
    pub fn to_wav_bytes(&self) -> ClipsynthResult<Vec<u8>> {
        encode_wav_pcm16(&self.samples, self.channels, self.sample_rate)
    }

    /// Encode and write to `path`, creating parent directories.
    pub fn write_wav(&self, path: &Path) -> ClipsynthResult<()> {
        let bytes = self.to_wav_bytes()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClipsynthError::synthesis(format!(
                    "failed to create audio output directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
        std::fs::write(path, bytes).map_err(|e| {
            ClipsynthError::synthesis(format!(
                "failed to write wav file '{}': {e}",
                path.display()
            ))
        })
    }
}

/// Encode interleaved f32 samples as a PCM16 WAV container.
///
/// Samples are clamped to [-1, 1] before scaling so out-of-range input
/// cannot overflow the 16-bit range.
pub fn encode_wav_pcm16(
    samples: &[f32],
    channels: u16,
    sample_rate: u32,
) -> ClipsynthResult<Vec<u8>> {
    if channels == 0 {
        return Err(ClipsynthError::validation("wav channels must be > 0"));
    }
    if sample_rate == 0 {
        return Err(ClipsynthError::validation("wav sample_rate must be > 0"));
    }
    if !samples.len().is_multiple_of(usize::from(channels)) {
        return Err(ClipsynthError::validation(
            "wav sample count must be a multiple of the channel count",
        ));
    }

    let data_len = samples.len() * 2;
    let total_len = HEADER_LEN + data_len;
    let block_align = channels * 2;
    let byte_rate = sample_rate * u32::from(block_align);

    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&((total_len - 8) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data_len as u32).to_le_bytes());
    for &sample in samples {
        let s = sample.clamp(-1.0, 1.0);
        let v = if s < 0.0 {
            (f64::from(s) * 32768.0) as i16
        } else {
            (f64::from(s) * 32767.0) as i16
        };
        out.extend_from_slice(&v.to_le_bytes());
    }

    debug_assert_eq!(out.len(), total_len);
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/wav.rs"]
mod tests;
