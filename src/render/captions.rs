//! Caption box and custom-field overlay drawing. Both draw in device
//! space, above the camera-transformed scene.

use crate::foundation::core::{Canvas, Rect, Rgba8, RoundedRect};
use crate::plan::model::{CaptionStyle, NarrationPlan};
use crate::render::glyphs;
use crate::render::painter::Painter;

const CAPTION_PADDING: f64 = 20.0;
const CAPTION_MIN_BG_HEIGHT: f64 = 50.0;
const CAPTION_RADIUS: f64 = 12.0;
/// Glyph scale for caption text (5x7 cells -> ~21 px line height).
const CAPTION_SCALE: u32 = 3;

/// Draw the caption active at time `t_sec`, if any.
pub fn draw_captions(
    painter: &mut Painter,
    narration: &NarrationPlan,
    t_sec: f64,
    canvas: Canvas,
    style: CaptionStyle,
) {
    let Some(span) = narration.span_at(t_sec) else {
        return;
    };
    if span.text.trim().is_empty() {
        return;
    }

    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let caption_y = h * 0.85;

    let measured = f64::from(glyphs::text_width(&span.text, CAPTION_SCALE));
    let bg_width = (measured + CAPTION_PADDING * 2.0).min(w - 40.0);
    let max_line_width = bg_width - CAPTION_PADDING * 2.0;

    let lines = wrap_words(&span.text, max_line_width, CAPTION_SCALE);
    let line_height = f64::from(glyphs::line_height(CAPTION_SCALE)) + 1.0;
    let bg_height =
        CAPTION_MIN_BG_HEIGHT.max(lines.len() as f64 * line_height + CAPTION_PADDING);

    let bg_rect = Rect::new(
        (w - bg_width) / 2.0,
        caption_y - bg_height / 2.0,
        (w + bg_width) / 2.0,
        caption_y + bg_height / 2.0,
    );
    let rrect = RoundedRect::from_rect(bg_rect, CAPTION_RADIUS);
    painter.fill_shape(&rrect, style.bg.with_alpha(style.bg_opacity));

    // 1 px outline at 30% text-color alpha.
    let outer = RoundedRect::from_rect(bg_rect.inflate(1.0, 1.0), CAPTION_RADIUS + 1.0);
    painter.fill_shape_ring(&outer, &rrect, style.text.with_alpha(0.3));

    let start_y = caption_y - (lines.len() as f64 * line_height) / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let y = start_y + i as f64 * line_height;
        // Offset shadow in the background color improves contrast on
        // busy frames.
        glyphs::draw_text_centered(painter, line, w / 2.0 + 1.0, y + 1.0, CAPTION_SCALE, style.bg);
        glyphs::draw_text_centered(painter, line, w / 2.0, y, CAPTION_SCALE, style.text);
    }
}

/// Greedy word wrap against the fixed glyph metrics.
pub fn wrap_words(text: &str, max_width: f64, scale: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if f64::from(glyphs::text_width(&candidate, scale)) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

const OVERLAY_FIELD_HEIGHT: f64 = 35.0;
const OVERLAY_SCALE: u32 = 2;

/// Fade custom key/value overlays in sequentially, one per field,
/// starting at 20% clip progress with 10% stagger.
pub fn draw_custom_overlays(
    painter: &mut Painter,
    fields: &[(String, String)],
    clip_progress: f64,
    canvas: Canvas,
) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let start_y = h * 0.1;

    for (i, (key, value)) in fields.iter().enumerate() {
        let threshold = 0.2 + i as f64 * 0.1;
        if clip_progress <= threshold || value.trim().is_empty() {
            continue;
        }
        let alpha = ((clip_progress - threshold) * 5.0).min(1.0);
        let y = start_y + i as f64 * OVERLAY_FIELD_HEIGHT;

        let bar = RoundedRect::from_rect(Rect::new(20.0, y - 15.0, w - 20.0, y + 15.0), 8.0);
        painter.fill_shape(&bar, Rgba8::WHITE.with_alpha(0.9 * alpha));

        let text = format!("{key}: {value}");
        let text_y = y - f64::from(glyphs::line_height(OVERLAY_SCALE)) / 2.0;
        glyphs::draw_text(
            painter,
            &text,
            30.0,
            text_y,
            OVERLAY_SCALE,
            Rgba8::opaque(0x1f, 0x29, 0x37).with_alpha(alpha),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/captions.rs"]
mod tests;
