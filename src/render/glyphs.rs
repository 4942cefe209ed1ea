//! Embedded 5x7 glyph set for caption and overlay text.
//!
//! The crate draws only procedural placeholder media, so text rendering
//! uses a fixed-metrics built-in font instead of shipping font files.
//! Fixed metrics keep measurement exact, which the caption word-wrap
//! relies on. Lowercase input is drawn with the uppercase forms.

use crate::foundation::core::{Rect, Rgba8};
use crate::render::painter::Painter;

/// Glyph cell geometry, in font units (before scaling).
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including 1 unit of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Column-major 5x7 bitmaps for ASCII 0x20..=0x5F. Bit `n` of a column
/// byte is row `n` from the top.
const FONT_5X7: [[u8; 5]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
];

fn glyph_for(c: char) -> [u8; 5] {
    let c = c.to_ascii_uppercase();
    let code = c as u32;
    if (0x20..0x60).contains(&code) {
        FONT_5X7[(code - 0x20) as usize]
    } else {
        // Unknown characters render as a hollow box.
        FONT_5X7[(b'?' - 0x20) as usize]
    }
}

/// Pixel width of `text` at the given scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_ADVANCE - 1) * scale
}

/// Pixel height of one line at the given scale.
pub fn line_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw one line of text with its top-left corner at `(x, y)` in
/// device space.
pub fn draw_text(painter: &mut Painter, text: &str, x: f64, y: f64, scale: u32, color: Rgba8) {
    let scale = scale.max(1);
    let mut pen_x = x;
    for c in text.chars() {
        let glyph = glyph_for(c);
        for (col, bits) in glyph.iter().enumerate() {
            for row in 0..GLYPH_HEIGHT {
                if bits & (1 << row) != 0 {
                    let px = pen_x + (col as u32 * scale) as f64;
                    let py = y + (row * scale) as f64;
                    painter.fill_rect_device(
                        Rect::new(px, py, px + f64::from(scale), py + f64::from(scale)),
                        color,
                    );
                }
            }
        }
        pen_x += f64::from(GLYPH_ADVANCE * scale);
    }
}

/// Draw text centered horizontally on `center_x`.
pub fn draw_text_centered(
    painter: &mut Painter,
    text: &str,
    center_x: f64,
    y: f64,
    scale: u32,
    color: Rgba8,
) {
    let w = f64::from(text_width(text, scale));
    draw_text(painter, text, center_x - w / 2.0, y, scale, color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyphs.rs"]
mod tests;
