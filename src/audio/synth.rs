//! Additive sine synthesis approximating speech cadence.
//!
//! This is pure signal synthesis, not speech synthesis: output depends
//! on the voice profile and a duration estimate, never on what the
//! text says.

use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::audio::voice::{Accent, SpeechPitch, SpeechRate, VoiceProfile};
use crate::audio::wav::AudioClip;
use crate::plan::model::VoiceKind;

/// Sample rate used by every synthesized clip.
pub const SAMPLE_RATE: u32 = 44_100;
/// Narration clips have a fixed length matching the rendered video.
pub const NARRATION_DURATION_SEC: f64 = 5.0;
/// One simulated word every half second.
const NARRATION_WORD_PERIOD_SEC: f64 = 0.5;

/// Synthesize the fixed-length narration tone bed for a clip.
///
/// Stereo, 5 seconds. The waveform is a fundamental sine at the voice
/// base frequency plus formant sines at 3x and 5x, gated by a word
/// envelope with a 0.5 s period.
pub fn synthesize_narration(script: &str, voice: VoiceKind) -> AudioClip {
    debug!(
        script_words = script.split_whitespace().count(),
        ?voice,
        "synthesizing narration bed"
    );
    let profile = VoiceProfile::for_voice(voice);
    let frames = (NARRATION_DURATION_SEC * f64::from(SAMPLE_RATE)) as usize;
    let mut samples = Vec::with_capacity(frames * 2);

    for i in 0..frames {
        let t = i as f64 / f64::from(SAMPLE_RATE);
        let word_progress = (t % NARRATION_WORD_PERIOD_SEC) / NARRATION_WORD_PERIOD_SEC;

        let fundamental = (TAU * profile.base_freq_hz * t).sin() * 0.3;
        let formant1 = (TAU * profile.base_freq_hz * 3.0 * t).sin() * 0.2;
        let formant2 = (TAU * profile.base_freq_hz * 5.0 * t).sin() * 0.1;
        let envelope = (PI * word_progress).sin() * 0.5;

        let value = ((fundamental + formant1 + formant2) * envelope * 0.3).clamp(-1.0, 1.0) as f32;
        samples.push(value);
        samples.push(value);
    }

    AudioClip {
        samples,
        channels: 2,
        sample_rate: SAMPLE_RATE,
    }
}

/// Parameters for the standalone speech tool.
#[derive(Clone, Copy, Debug)]
pub struct SpeechParams {
    pub voice: VoiceKind,
    pub accent: Accent,
    pub rate: SpeechRate,
    pub pitch: SpeechPitch,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            voice: VoiceKind::Female,
            accent: Accent::default(),
            rate: SpeechRate::default(),
            pitch: SpeechPitch::default(),
        }
    }
}

/// Estimated clip length for a piece of text: 50 ms per character,
/// never shorter than 3 seconds.
pub fn speech_duration_sec(text: &str) -> f64 {
    (text.chars().count() as f64 * 0.05).max(3.0)
}

/// Synthesize a speech-cadence clip for arbitrary text.
///
/// Richer than the narration bed: formants sit at 2.5x and 4.5x, the
/// word envelope speed follows the rate setting, a slow breathing
/// modulation rides on top, and the last half second of every three
/// second window drops to near-silence as a phrase pause.
pub fn synthesize_speech(text: &str, params: SpeechParams) -> AudioClip {
    let duration = speech_duration_sec(text);
    debug!(chars = text.chars().count(), duration, "synthesizing speech clip");

    let profile = VoiceProfile::for_voice(params.voice);
    let base = profile.base_freq_hz * params.accent.frequency_multiplier();
    let rate = params.rate.multiplier();
    let pitch = params.pitch.multiplier();

    let frames = (duration * f64::from(SAMPLE_RATE)) as usize;
    let mut samples = Vec::with_capacity(frames * 2);

    for i in 0..frames {
        let t = i as f64 / f64::from(SAMPLE_RATE);
        let word_progress = (t * rate * 2.0) % 1.0;

        let fundamental = (TAU * base * pitch * t).sin() * 0.3;
        let formant1 = (TAU * base * 2.5 * t).sin() * 0.2;
        let formant2 = (TAU * base * 4.5 * t).sin() * 0.1;

        let envelope = (PI * word_progress).sin() * 0.8;
        let breathing = 1.0 + (t * 0.3).sin() * 0.1;
        let pause = if t % 3.0 < 2.5 { 1.0 } else { 0.1 };

        let value = ((fundamental + formant1 + formant2) * envelope * breathing * pause * 0.7)
            .clamp(-1.0, 1.0) as f32;
        samples.push(value);
        samples.push(value);
    }

    AudioClip {
        samples,
        channels: 2,
        sample_rate: SAMPLE_RATE,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/synth.rs"]
mod tests;
