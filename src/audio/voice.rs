//! Voice characteristics for the tone synthesizer.

use crate::plan::model::VoiceKind;

/// Frequency profile for one voice category.
#[derive(Clone, Copy, Debug)]
pub struct VoiceProfile {
    /// Fundamental frequency in Hz.
    pub base_freq_hz: f64,
}

impl VoiceProfile {
    pub fn for_voice(voice: VoiceKind) -> Self {
        let base_freq_hz = match voice {
            VoiceKind::Male => 120.0,
            VoiceKind::Female => 200.0,
            VoiceKind::Child => 300.0,
            VoiceKind::Robotic => 150.0,
        };
        Self { base_freq_hz }
    }
}

/// Accent nudges the fundamental slightly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    American,
    British,
    Australian,
    Indian,
    Canadian,
}

impl Accent {
    pub fn frequency_multiplier(self) -> f64 {
        match self {
            Self::American => 1.0,
            Self::British => 1.05,
            Self::Australian => 0.95,
            Self::Indian => 1.1,
            Self::Canadian => 0.98,
        }
    }
}

/// Speaking speed for the speech tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechRate {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeechRate {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Slow => 0.7,
            Self::Normal => 1.0,
            Self::Fast => 1.4,
        }
    }
}

/// Pitch shift for the speech tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechPitch {
    Low,
    #[default]
    Normal,
    High,
}

impl SpeechPitch {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Low => 0.8,
            Self::Normal => 1.0,
            Self::High => 1.3,
        }
    }
}
