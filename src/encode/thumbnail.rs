//! Frame-to-image encoding for thumbnails and generated stills.

use std::path::Path;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{ClipsynthError, ClipsynthResult};
use crate::render::frame::FrameRGBA;

/// The thumbnail is taken one third of the way into the clip.
pub fn thumbnail_frame_index(frame_count: u32) -> u32 {
    frame_count / 3
}

/// Write a frame as a JPEG (quality 90). Alpha is dropped; frames are
/// opaque.
pub fn write_jpeg(frame: &FrameRGBA, path: &Path) -> ClipsynthResult<()> {
    if frame.data.len() != frame.byte_len() {
        return Err(ClipsynthError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    ensure_parent_dir(path)?;

    let mut rgb = Vec::with_capacity(frame.data.len() / 4 * 3);
    for px in frame.data.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }

    let file = std::fs::File::create(path).map_err(|e| {
        ClipsynthError::encode(format!("failed to create '{}': {e}", path.display()))
    })?;
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 90);
    use image::ImageEncoder as _;
    encoder
        .write_image(
            &rgb,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ClipsynthError::encode(format!("jpeg encode failed: {e}")))
}

/// Write a frame as a PNG, preserving all four channels.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> ClipsynthResult<()> {
    if frame.data.len() != frame.byte_len() {
        return Err(ClipsynthError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| ClipsynthError::encode(format!("png encode failed: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/thumbnail.rs"]
mod tests;
