use crate::foundation::error::{ClipsynthError, ClipsynthResult};

pub use kurbo::{Affine, Circle, Point, Rect, RoundedRect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> ClipsynthResult<Self> {
        if start.0 > end.0 {
            return Err(ClipsynthError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ClipsynthResult<Self> {
        if den == 0 {
            return Err(ClipsynthError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ClipsynthError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn whole(num: u32) -> ClipsynthResult<Self> {
        Self::new(num, 1)
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ClipsynthResult<Self> {
        if width == 0 || height == 0 {
            return Err(ClipsynthError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Straight-alpha RGBA8. Frames produced by the renderer are opaque
/// (`a == 255`); translucent values only appear as paint sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Return the same color with alpha scaled by `alpha` in [0, 1].
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (f64::from(self.a) * crate::foundation::math::clamp01(alpha)).round() as u8;
        Self { a, ..self }
    }

    /// Parse a `#rrggbb` hex string into an opaque color.
    pub fn from_hex(hex: &str) -> ClipsynthResult<Self> {
        let s = hex.trim().trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return Err(ClipsynthError::validation(format!(
                "expected #rrggbb hex color, got '{hex}'"
            )));
        }
        let byte = |i: usize| -> ClipsynthResult<u8> {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| {
                ClipsynthError::validation(format!("invalid hex color component in '{hex}'"))
            })
        };
        Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?))
    }

    /// Format as a `#rrggbb` hex string (alpha is dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D transform decomposed the way the camera model produces it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_rad: f64,
    pub scale: Vec2,  // default (1,1)
    pub anchor: Vec2, // pivot in local space
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(self.translate);
        let t_anchor = Affine::translate(self.anchor);
        let t_unanchor = Affine::translate(-self.anchor);
        let t_rotate = Affine::rotate(self.rotation_rad);
        let t_scale = Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // Canonical order:
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
