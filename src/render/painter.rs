//! Minimal CPU raster surface.
//!
//! Everything this crate draws is a primitive shape, a gradient, or a
//! glyph column, so the painter is a plain straight-alpha RGBA8 buffer
//! with source-over blending. Shapes are filled under the current
//! affine transform by inverse-mapping each covered pixel back into
//! local space and testing containment.

use kurbo::Shape;

use crate::foundation::core::{Affine, Canvas, Point, Rect, Rgba8};
use crate::foundation::math::{lerp, mul_div255_u16};
use crate::render::frame::FrameRGBA;

pub struct Painter {
    width: u32,
    height: u32,
    data: Vec<u8>,
    transform: Affine,
}

impl Painter {
    /// New surface cleared to the given color.
    pub fn new(canvas: Canvas, clear: Rgba8) -> Self {
        let mut data = vec![0u8; (canvas.width as usize) * (canvas.height as usize) * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&[clear.r, clear.g, clear.b, 255]);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
            transform: Affine::IDENTITY,
        }
    }

    /// Set the transform applied to subsequent shape fills.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Finish the frame, consuming the painter.
    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }

    /// Source-over blend one pixel (straight alpha, opaque backdrop).
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        if color.a == 0 {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let a = u16::from(color.a);
        let inv = 255 - a;
        let blend = |src: u8, dst: u8| -> u8 {
            (mul_div255_u16(u16::from(src), a) + mul_div255_u16(u16::from(dst), inv)).min(255) as u8
        };
        self.data[idx] = blend(color.r, self.data[idx]);
        self.data[idx + 1] = blend(color.g, self.data[idx + 1]);
        self.data[idx + 2] = blend(color.b, self.data[idx + 2]);
        // Backdrop is opaque, so alpha stays 255.
        self.data[idx + 3] = 255;
    }

    /// Fill a kurbo shape under the current transform.
    pub fn fill_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some(inverse) = invert(self.transform) else {
            return;
        };

        let device_bbox = transformed_bbox(self.transform, shape.bounding_box());
        let x0 = device_bbox.x0.floor().max(0.0) as i64;
        let y0 = device_bbox.y0.floor().max(0.0) as i64;
        let x1 = (device_bbox.x1.ceil() as i64).min(i64::from(self.width));
        let y1 = (device_bbox.y1.ceil() as i64).min(i64::from(self.height));

        for y in y0..y1 {
            for x in x0..x1 {
                let device = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if shape.contains(inverse * device) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Axis-aligned rect fill ignoring the current transform; used for
    /// backgrounds and overlays drawn in device space.
    pub fn fill_rect_device(&mut self, rect: Rect, color: Rgba8) {
        let x0 = rect.x0.floor().max(0.0) as i64;
        let y0 = rect.y0.floor().max(0.0) as i64;
        let x1 = (rect.x1.ceil() as i64).min(i64::from(self.width));
        let y1 = (rect.y1.ceil() as i64).min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Full-surface radial gradient centered at `center`, reaching the
    /// final stop at `radius` pixels.
    pub fn radial_gradient(&mut self, center: Point, radius: f64, stops: &[(f64, Rgba8)]) {
        let radius = radius.max(1.0);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let t = (p.distance(center) / radius).clamp(0.0, 1.0);
                let c = gradient_color(stops, t);
                let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
                self.data[idx] = c.r;
                self.data[idx + 1] = c.g;
                self.data[idx + 2] = c.b;
                self.data[idx + 3] = 255;
            }
        }
    }

    /// Full-surface linear gradient wash from `from` to `to`, blended
    /// over the existing pixels (stops may be translucent).
    pub fn linear_gradient_wash(&mut self, from: Point, to: Point, stops: &[(f64, Rgba8)]) {
        let axis = to - from;
        let len2 = axis.hypot2().max(1e-9);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let t = ((p - from).dot(axis) / len2).clamp(0.0, 1.0);
                let c = gradient_color(stops, t);
                self.blend_pixel(i64::from(x), i64::from(y), c);
            }
        }
    }

    /// Linear-gradient fill restricted to a device-space rect; used for
    /// product boxes and thumbnails.
    pub fn linear_gradient_rect(
        &mut self,
        rect: Rect,
        from: Point,
        to: Point,
        stops: &[(f64, Rgba8)],
    ) {
        let axis = to - from;
        let len2 = axis.hypot2().max(1e-9);
        let x0 = rect.x0.floor().max(0.0) as i64;
        let y0 = rect.y0.floor().max(0.0) as i64;
        let x1 = (rect.x1.ceil() as i64).min(i64::from(self.width));
        let y1 = (rect.y1.ceil() as i64).min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = ((p - from).dot(axis) / len2).clamp(0.0, 1.0);
                self.blend_pixel(x, y, gradient_color(stops, t));
            }
        }
    }

    /// Fill the pixels inside `outer` but outside `inner`; used to
    /// stroke rounded rects.
    pub fn fill_shape_ring(&mut self, outer: &impl Shape, inner: &impl Shape, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let Some(inverse) = invert(self.transform) else {
            return;
        };
        let device_bbox = transformed_bbox(self.transform, outer.bounding_box());
        let x0 = device_bbox.x0.floor().max(0.0) as i64;
        let y0 = device_bbox.y0.floor().max(0.0) as i64;
        let x1 = (device_bbox.x1.ceil() as i64).min(i64::from(self.width));
        let y1 = (device_bbox.y1.ceil() as i64).min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                let local = inverse * Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if outer.contains(local) && !inner.contains(local) {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Blend a soft radial glow: `peak_alpha` at `center` falling off
    /// linearly to zero at `radius`.
    pub fn radial_glow(&mut self, center: Point, radius: f64, color: Rgba8, peak_alpha: f64) {
        let radius = radius.max(1.0);
        let x0 = ((center.x - radius).floor().max(0.0)) as i64;
        let y0 = ((center.y - radius).floor().max(0.0)) as i64;
        let x1 = ((center.x + radius).ceil() as i64).min(i64::from(self.width));
        let y1 = ((center.y + radius).ceil() as i64).min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let d = p.distance(center) / radius;
                if d < 1.0 {
                    self.blend_pixel(x, y, color.with_alpha(peak_alpha * (1.0 - d)));
                }
            }
        }
    }

    /// Gradient fill of a transformed shape: `t` runs along the local
    /// y axis of the shape's bounding box.
    pub fn fill_shape_gradient_y(&mut self, shape: &impl Shape, stops: &[(f64, Rgba8)]) {
        let Some(inverse) = invert(self.transform) else {
            return;
        };
        let local_bbox = shape.bounding_box();
        let span = (local_bbox.y1 - local_bbox.y0).max(1e-9);

        let device_bbox = transformed_bbox(self.transform, local_bbox);
        let x0 = device_bbox.x0.floor().max(0.0) as i64;
        let y0 = device_bbox.y0.floor().max(0.0) as i64;
        let x1 = (device_bbox.x1.ceil() as i64).min(i64::from(self.width));
        let y1 = (device_bbox.y1.ceil() as i64).min(i64::from(self.height));

        for y in y0..y1 {
            for x in x0..x1 {
                let device = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let local = inverse * device;
                if shape.contains(local) {
                    let t = ((local.y - local_bbox.y0) / span).clamp(0.0, 1.0);
                    self.blend_pixel(x, y, gradient_color(stops, t));
                }
            }
        }
    }
}

/// Interpolate a gradient stop list at `t` in [0, 1]. Stops must be
/// sorted by offset.
pub fn gradient_color(stops: &[(f64, Rgba8)], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::BLACK;
    };
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (o0, c0) = pair[0];
        let (o1, c1) = pair[1];
        if t <= o1 {
            let local = if (o1 - o0).abs() < 1e-9 {
                0.0
            } else {
                (t - o0) / (o1 - o0)
            };
            let mix = |a: u8, b: u8| -> u8 {
                lerp(f64::from(a), f64::from(b), local).round().clamp(0.0, 255.0) as u8
            };
            return Rgba8::new(
                mix(c0.r, c1.r),
                mix(c0.g, c1.g),
                mix(c0.b, c1.b),
                mix(c0.a, c1.a),
            );
        }
    }
    stops[stops.len() - 1].1
}

fn invert(transform: Affine) -> Option<Affine> {
    if transform.determinant().abs() < 1e-12 {
        return None;
    }
    Some(transform.inverse())
}

fn transformed_bbox(transform: Affine, local: Rect) -> Rect {
    let corners = [
        Point::new(local.x0, local.y0),
        Point::new(local.x1, local.y0),
        Point::new(local.x0, local.y1),
        Point::new(local.x1, local.y1),
    ];
    let mut out = Rect::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for c in corners {
        let p = transform * c;
        out.x0 = out.x0.min(p.x);
        out.y0 = out.y0.min(p.y);
        out.x1 = out.x1.max(p.x);
        out.y1 = out.y1.max(p.y);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
