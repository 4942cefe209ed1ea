//! Standalone thumbnail generator with platform-specific dressing.

use crate::foundation::core::{Canvas, Circle, Point, Rect, Rgba8};
use crate::foundation::rng::Rng64;
use crate::render::captions::wrap_words;
use crate::render::frame::FrameRGBA;
use crate::render::glyphs;
use crate::render::painter::Painter;

/// Target platform; fixes the canvas size and badge treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Platform {
    #[default]
    YouTube,
    Instagram,
    TikTok,
}

impl Platform {
    pub fn dimensions(self) -> Canvas {
        match self {
            Self::YouTube => Canvas {
                width: 1280,
                height: 720,
            },
            Self::Instagram => Canvas {
                width: 1080,
                height: 1080,
            },
            Self::TikTok => Canvas {
                width: 1080,
                height: 1920,
            },
        }
    }
}

/// Background mood of the thumbnail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorScheme {
    #[default]
    #[serde(rename = "Bright & Bold")]
    BrightBold,
    #[serde(rename = "Dark & Moody")]
    DarkMoody,
    #[serde(rename = "Clean & Minimal")]
    CleanMinimal,
    #[serde(rename = "Colorful")]
    Colorful,
}

impl ColorScheme {
    fn gradient(self) -> Vec<(f64, Rgba8)> {
        match self {
            Self::BrightBold => vec![
                (0.0, Rgba8::opaque(0xFF, 0x6B, 0x6B)),
                (1.0, Rgba8::opaque(0x4E, 0xCD, 0xC4)),
            ],
            Self::DarkMoody => vec![
                (0.0, Rgba8::opaque(0x2C, 0x3E, 0x50)),
                (1.0, Rgba8::opaque(0x34, 0x49, 0x5E)),
            ],
            Self::CleanMinimal => vec![
                (0.0, Rgba8::opaque(0xFF, 0xFF, 0xFF)),
                (1.0, Rgba8::opaque(0xF8, 0xF9, 0xFA)),
            ],
            Self::Colorful => vec![
                (0.0, Rgba8::opaque(0xFF, 0x9A, 0x9E)),
                (0.5, Rgba8::opaque(0xFE, 0xCF, 0xEF)),
                (1.0, Rgba8::opaque(0xFE, 0xCF, 0xEF)),
            ],
        }
    }

    fn accent(self) -> Rgba8 {
        match self {
            Self::DarkMoody => Rgba8::WHITE.with_alpha(0.1),
            _ => Rgba8::BLACK.with_alpha(0.1),
        }
    }

    fn text_color(self) -> Rgba8 {
        match self {
            Self::CleanMinimal => Rgba8::opaque(0x2C, 0x3E, 0x50),
            _ => Rgba8::WHITE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThumbnailOptions {
    pub prompt: String,
    pub platform: Platform,
    pub color_scheme: ColorScheme,
    pub text_overlay: Option<String>,
    pub seed: u64,
}

/// Render a platform thumbnail for the prompt.
pub fn generate_thumbnail(options: &ThumbnailOptions) -> FrameRGBA {
    let canvas = options.platform.dimensions();
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let mut painter = Painter::new(canvas, Rgba8::BLACK);
    painter.linear_gradient_rect(
        Rect::new(0.0, 0.0, w, h),
        Point::new(0.0, 0.0),
        Point::new(w, h),
        &options.color_scheme.gradient(),
    );

    // Scattered accent discs for visual interest.
    let mut rng = Rng64::new(options.seed);
    let accent = options.color_scheme.accent();
    for _ in 0..5 {
        let x = rng.next_f64_in(w);
        let y = rng.next_f64_in(h);
        let radius = rng.next_f64_in(50.0) + 20.0;
        painter.fill_shape(&Circle::new(Point::new(x, y), radius), accent);
    }

    // Tutorial prompts get a golden pointer chevron.
    let words = options.prompt.to_lowercase();
    if words.contains("tutorial") || words.contains("how to") {
        draw_chevron(&mut painter, canvas);
    }

    if let Some(text) = options.text_overlay.as_deref().filter(|t| !t.trim().is_empty()) {
        draw_overlay_text(&mut painter, text, canvas, options.color_scheme);
    }

    draw_platform_badge(&mut painter, options.platform, canvas);
    painter.into_frame()
}

fn draw_chevron(painter: &mut Painter, canvas: Canvas) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let gold = Rgba8::opaque(0xFF, 0xD7, 0x00);
    // Two thick strokes meeting at the point, dotted from circles.
    for i in 0..=12 {
        let t = f64::from(i) / 12.0;
        let upper = Point::new(w * (0.7 + 0.1 * t), h * (0.3 + 0.1 * t));
        let lower = Point::new(w * (0.7 + 0.1 * t), h * (0.5 - 0.1 * t));
        painter.fill_shape(&Circle::new(upper, 4.0), gold);
        painter.fill_shape(&Circle::new(lower, 4.0), gold);
    }
}

fn draw_overlay_text(painter: &mut Painter, text: &str, canvas: Canvas, scheme: ColorScheme) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    // Scale the glyphs toward ~1/15th of the canvas width per char cell.
    let scale = ((w / 15.0) / f64::from(glyphs::GLYPH_ADVANCE)).round().clamp(4.0, 12.0) as u32;

    let lines = wrap_words(text, w * 0.8, scale);
    let line_height = f64::from(glyphs::line_height(scale)) * 1.2;
    let start_y = h / 2.0 - (lines.len() as f64 * line_height) / 2.0;
    let shadow = match scheme {
        ColorScheme::CleanMinimal => Rgba8::BLACK.with_alpha(0.5),
        _ => Rgba8::WHITE.with_alpha(0.5),
    };

    for (i, line) in lines.iter().enumerate() {
        let y = start_y + i as f64 * line_height;
        glyphs::draw_text_centered(painter, line, w / 2.0 + 2.0, y + 2.0, scale, shadow);
        glyphs::draw_text_centered(painter, line, w / 2.0, y, scale, scheme.text_color());
    }
}

fn draw_platform_badge(painter: &mut Painter, platform: Platform, canvas: Canvas) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    match platform {
        Platform::YouTube => {
            // Red disc with a white play triangle (dotted rows).
            let center = canvas.center();
            painter.fill_shape(
                &Circle::new(center, 40.0),
                Rgba8::opaque(255, 0, 0).with_alpha(0.8),
            );
            for row in 0..20 {
                let t = f64::from(row) / 20.0;
                let y = center.y - 20.0 + t * 40.0;
                let half = 17.5 * (1.0 - (t - 0.5).abs() * 2.0);
                painter.fill_rect_device(
                    Rect::new(center.x - 15.0, y, center.x - 15.0 + half * 2.0, y + 2.0),
                    Rgba8::WHITE,
                );
            }
        }
        Platform::TikTok => {
            painter.fill_rect_device(
                Rect::new(w - 60.0, 20.0, w - 20.0, 60.0),
                Rgba8::opaque(255, 0, 80).with_alpha(0.6),
            );
            painter.fill_rect_device(
                Rect::new(w - 55.0, 25.0, w - 15.0, 65.0),
                Rgba8::opaque(37, 244, 238).with_alpha(0.6),
            );
        }
        Platform::Instagram => {
            // 8 px gradient border, painted as four bars.
            let stops = [
                (0.0, Rgba8::opaque(0x83, 0x3A, 0xB4)),
                (0.5, Rgba8::opaque(0xFD, 0x1D, 0x1D)),
                (1.0, Rgba8::opaque(0xFC, 0xB0, 0x45)),
            ];
            let from = Point::new(0.0, 0.0);
            let to = Point::new(w, h);
            for bar in [
                Rect::new(4.0, 4.0, w - 4.0, 12.0),
                Rect::new(4.0, h - 12.0, w - 4.0, h - 4.0),
                Rect::new(4.0, 4.0, 12.0, h - 4.0),
                Rect::new(w - 12.0, 4.0, w - 4.0, h - 4.0),
            ] {
                painter.linear_gradient_rect(bar, from, to, &stops);
            }
        }
    }
}

/// Title for the generated thumbnail artifact.
pub fn thumbnail_title(options: &ThumbnailOptions) -> String {
    let platform = match options.platform {
        Platform::YouTube => "YouTube",
        Platform::Instagram => "Instagram",
        Platform::TikTok => "TikTok",
    };
    let subject = options
        .text_overlay
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| options.prompt.chars().take(20).collect());
    format!("{platform} Thumbnail: {subject}")
}

#[cfg(test)]
#[path = "../../tests/unit/media/thumb_gen.rs"]
mod tests;
