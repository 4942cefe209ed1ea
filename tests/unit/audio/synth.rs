use super::*;

#[test]
fn narration_is_five_seconds_of_stereo() {
    let clip = synthesize_narration("any script", VoiceKind::Female);
    assert_eq!(clip.channels, 2);
    assert_eq!(clip.sample_rate, SAMPLE_RATE);
    assert_eq!(
        clip.samples.len(),
        (NARRATION_DURATION_SEC * f64::from(SAMPLE_RATE)) as usize * 2
    );
    assert!((clip.duration_sec() - NARRATION_DURATION_SEC).abs() < 1e-9);
}

#[test]
fn narration_amplitude_stays_bounded() {
    let clip = synthesize_narration("x", VoiceKind::Male);
    // Additive amplitudes (0.3 + 0.2 + 0.1) * envelope 0.5 * gain 0.3.
    let bound = 0.6 * 0.5 * 0.3 + 1e-3;
    for &s in &clip.samples {
        assert!(s.abs() <= bound as f32, "sample {s} exceeds bound");
    }
}

#[test]
fn narration_starts_at_word_boundary_silence() {
    let clip = synthesize_narration("x", VoiceKind::Child);
    // t=0 has a zero word envelope.
    assert_eq!(clip.samples[0], 0.0);
}

#[test]
fn narration_does_not_depend_on_text_content() {
    let a = synthesize_narration("one script", VoiceKind::Robotic);
    let b = synthesize_narration("a completely different script", VoiceKind::Robotic);
    assert_eq!(a.samples, b.samples);
}

#[test]
fn voices_produce_distinct_waveforms() {
    let male = synthesize_narration("x", VoiceKind::Male);
    let female = synthesize_narration("x", VoiceKind::Female);
    assert_ne!(male.samples, female.samples);
}

#[test]
fn speech_duration_scales_with_text_and_has_a_floor() {
    assert!((speech_duration_sec("ab") - 3.0).abs() < 1e-9);
    let long = "x".repeat(200);
    assert!((speech_duration_sec(&long) - 10.0).abs() < 1e-9);
}

#[test]
fn speech_clip_matches_estimated_duration() {
    let text = "a".repeat(100); // 5 seconds
    let clip = synthesize_speech(&text, SpeechParams::default());
    assert_eq!(clip.channels, 2);
    assert!((clip.duration_sec() - 5.0).abs() < 1e-3);
    for &s in &clip.samples {
        assert!((-1.0..=1.0).contains(&s));
    }
}

#[test]
fn accents_shift_the_waveform() {
    let params_us = SpeechParams::default();
    let params_uk = SpeechParams {
        accent: Accent::British,
        ..SpeechParams::default()
    };
    let us = synthesize_speech("hello world", params_us);
    let uk = synthesize_speech("hello world", params_uk);
    assert_ne!(us.samples, uk.samples);
}
