//! Min/max waveform visualization of a synthesized clip.

use crate::audio::wav::AudioClip;
use crate::foundation::core::{Canvas, Rect, Rgba8};
use crate::render::frame::FrameRGBA;
use crate::render::painter::Painter;

const WAVEFORM_CANVAS: Canvas = Canvas {
    width: 800,
    height: 200,
};
const BACKGROUND: Rgba8 = Rgba8::opaque(0x1e, 0x29, 0x3b);
const STROKE: Rgba8 = Rgba8::opaque(0x06, 0xb6, 0xd4);

/// Render channel 0 of `clip` as an 800x200 min/max column plot.
pub fn render_waveform(clip: &AudioClip) -> FrameRGBA {
    let mut painter = Painter::new(WAVEFORM_CANVAS, BACKGROUND);
    let width = WAVEFORM_CANVAS.width as usize;
    let amp = f64::from(WAVEFORM_CANVAS.height) / 2.0;

    let channels = usize::from(clip.channels.max(1));
    let frames = clip.samples.len() / channels;
    let step = frames.div_ceil(width).max(1);

    for col in 0..width {
        let mut min = 1.0f32;
        let mut max = -1.0f32;
        for j in 0..step {
            let frame = col * step + j;
            if frame >= frames {
                break;
            }
            let v = clip.samples[frame * channels];
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            continue; // past the end of the clip
        }
        let y0 = (1.0 + f64::from(min)) * amp;
        let y1 = (1.0 + f64::from(max)) * amp;
        let x = col as f64;
        painter.fill_rect_device(Rect::new(x, y0.min(y1), x + 1.0, y0.max(y1) + 1.0), STROKE);
    }

    painter.into_frame()
}

#[cfg(test)]
#[path = "../../tests/unit/audio/waveform.rs"]
mod tests;
