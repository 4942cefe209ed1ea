//! Text-to-image generator: style gradient plus prompt-keyword
//! artistic elements, all procedurally drawn.

use crate::foundation::core::{Canvas, Circle, Point, Rect, Rgba8};
use crate::foundation::rng::Rng64;
use crate::render::frame::FrameRGBA;
use crate::render::painter::Painter;

/// Output aspect ratio. Labels match the form options they came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1 Square")]
    Square,
    #[serde(rename = "16:9 Landscape")]
    Landscape,
    #[serde(rename = "9:16 Portrait")]
    Portrait,
    #[serde(rename = "4:3 Classic")]
    Classic,
}

impl AspectRatio {
    pub fn dimensions(self) -> Canvas {
        match self {
            Self::Square => Canvas {
                width: 1024,
                height: 1024,
            },
            Self::Landscape => Canvas {
                width: 1920,
                height: 1080,
            },
            Self::Portrait => Canvas {
                width: 1080,
                height: 1920,
            },
            Self::Classic => Canvas {
                width: 1600,
                height: 1200,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1 Square",
            Self::Landscape => "16:9 Landscape",
            Self::Portrait => "9:16 Portrait",
            Self::Classic => "4:3 Classic",
        }
    }
}

/// Rendering style of the generated image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ImageStyle {
    #[serde(rename = "Photorealistic")]
    Photorealistic,
    #[default]
    #[serde(rename = "Digital Art")]
    DigitalArt,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    #[serde(rename = "Watercolor")]
    Watercolor,
    #[serde(rename = "Sketch")]
    Sketch,
}

impl ImageStyle {
    fn gradient(self) -> Vec<(f64, Rgba8)> {
        match self {
            Self::Photorealistic => vec![
                (0.0, Rgba8::opaque(0x87, 0xCE, 0xEB)),
                (1.0, Rgba8::opaque(0x46, 0x82, 0xB4)),
            ],
            Self::DigitalArt => vec![
                (0.0, Rgba8::opaque(0xFF, 0x6B, 0x6B)),
                (0.5, Rgba8::opaque(0x4E, 0xCD, 0xC4)),
                (1.0, Rgba8::opaque(0x45, 0xB7, 0xD1)),
            ],
            Self::OilPainting => vec![
                (0.0, Rgba8::opaque(0x8B, 0x45, 0x13)),
                (1.0, Rgba8::opaque(0xDE, 0xB8, 0x87)),
            ],
            Self::Watercolor => vec![
                (0.0, Rgba8::opaque(0xFF, 0xB6, 0xC1)),
                (1.0, Rgba8::opaque(0xE6, 0xE6, 0xFA)),
            ],
            Self::Sketch => vec![
                (0.0, Rgba8::opaque(0xF5, 0xF5, 0xF5)),
                (1.0, Rgba8::opaque(0xD3, 0xD3, 0xD3)),
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Photorealistic => "Photorealistic",
            Self::DigitalArt => "Digital Art",
            Self::OilPainting => "Oil Painting",
            Self::Watercolor => "Watercolor",
            Self::Sketch => "Sketch",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImageOptions {
    pub prompt: String,
    pub style: ImageStyle,
    pub aspect_ratio: AspectRatio,
    pub seed: u64,
}

/// Render an image for the prompt. Pure: the same options produce the
/// same pixels.
pub fn generate_image(options: &ImageOptions) -> FrameRGBA {
    let canvas = options.aspect_ratio.dimensions();
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let mut painter = Painter::new(canvas, Rgba8::BLACK);
    painter.linear_gradient_rect(
        Rect::new(0.0, 0.0, w, h),
        Point::new(0.0, 0.0),
        Point::new(w, h),
        &options.style.gradient(),
    );

    let mut rng = Rng64::new(options.seed);
    let words = options.prompt.to_lowercase();

    if words.contains("nature") || words.contains("landscape") {
        let green = Rgba8::opaque(34, 197, 94).with_alpha(0.6);
        for _ in 0..10 {
            let x = rng.next_f64_in(w);
            let y = h * 0.7 + rng.next_f64_in(h * 0.3);
            let r = rng.next_f64_in(20.0) + 10.0;
            painter.fill_shape(&Circle::new(Point::new(x, y), r), green);
        }
    }

    if words.contains("city") || words.contains("urban") || words.contains("skyline") {
        let gray = Rgba8::opaque(100, 100, 100).with_alpha(0.8);
        for i in 0..8 {
            let x = f64::from(i) * (w / 8.0) + rng.next_f64_in(50.0);
            let building_height = rng.next_f64_in(h * 0.6) + h * 0.2;
            painter.fill_rect_device(
                Rect::new(x, h - building_height, x + w / 10.0, h),
                gray,
            );
        }
    }

    if words.contains("abstract") || words.contains("geometric") {
        let white = Rgba8::WHITE.with_alpha(0.3);
        for _ in 0..15 {
            let x = rng.next_f64_in(w);
            let y = rng.next_f64_in(h);
            let size = rng.next_f64_in(100.0) + 20.0;
            if rng.next_f64_01() > 0.5 {
                painter.fill_rect_device(Rect::new(x, y, x + size, y + size), white);
            } else {
                painter.fill_shape(&Circle::new(Point::new(x, y), size / 2.0), white);
            }
        }
    }

    // Night prompts get a star field and a dimming wash.
    if words.contains("night") || words.contains("dark") {
        painter.fill_rect_device(Rect::new(0.0, 0.0, w, h), Rgba8::BLACK.with_alpha(0.35));
        for _ in 0..120 {
            let x = rng.next_f64_in(w);
            let y = rng.next_f64_in(h * 0.6);
            let twinkle = 0.4 + rng.next_f64_01() * 0.6;
            painter.fill_shape(
                &Circle::new(Point::new(x, y), 1.0 + rng.next_f64_01()),
                Rgba8::WHITE.with_alpha(twinkle),
            );
        }
    }

    // Sun/light prompts get a glow in the upper third.
    if words.contains("sun") || words.contains("sunset") || words.contains("light") {
        let center = Point::new(w * 0.75, h * 0.25);
        painter.radial_glow(center, w.min(h) * 0.3, Rgba8::opaque(255, 220, 130), 0.8);
        painter.fill_shape(
            &Circle::new(center, w.min(h) * 0.07),
            Rgba8::opaque(255, 240, 180),
        );
    }

    painter.into_frame()
}

/// Display title derived from the prompt.
pub fn image_title(prompt: &str) -> String {
    let head: String = prompt.chars().take(30).collect();
    if prompt.chars().count() > 30 {
        format!("AI Generated: {head}...")
    } else {
        format!("AI Generated: {head}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/image_gen.rs"]
mod tests;
