//! Passport photo normalizer
//!
//! Turns whatever the attendee uploads into the fixed badge format:
//! center-crop to 3:4, resample to 480x640, re-encode as JPEG at
//! quality 70. Small sources are upscaled; the output dimensions never
//! vary.

use backstage_common::{Error, Result};
use image::imageops::FilterType;
use image::ImageOutputFormat;
use std::io::Cursor;

/// Output width in pixels (roughly passport ratio 3:4)
pub const TARGET_WIDTH: u32 = 480;

/// Output height in pixels
pub const TARGET_HEIGHT: u32 = 640;

/// JPEG quality of the re-encode, 0-100
pub const JPEG_QUALITY: u8 = 70;

/// Compute the centered crop window that fills the 3:4 target.
///
/// Returns `(x, y, width, height)` in source coordinates. Sources wider
/// than 3:4 keep full height and trim left/right evenly; taller sources
/// keep full width and trim top/bottom evenly. A source already at 3:4
/// keeps the full frame.
pub fn crop_box(width: u32, height: u32) -> (u32, u32, u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0, width, height);
    }

    let target_ratio = f64::from(TARGET_WIDTH) / f64::from(TARGET_HEIGHT);
    let src_ratio = f64::from(width) / f64::from(height);

    if src_ratio > target_ratio {
        // Wider than target: crop left/right
        let crop_w = ((f64::from(height) * target_ratio).round() as u32).clamp(1, width);
        let x = (width - crop_w) / 2;
        (x, 0, crop_w, height)
    } else {
        // Taller than target: crop top/bottom
        let crop_h = ((f64::from(width) / target_ratio).round() as u32).clamp(1, height);
        let y = (height - crop_h) / 2;
        (0, y, width, crop_h)
    }
}

/// Normalize raw upload bytes into the badge JPEG.
///
/// Decode failures come back as [`Error::Decode`], encode failures as
/// [`Error::Encode`]; both are internal-only and collapse to the generic
/// registration failure at the API edge.
pub fn normalize(bytes: &[u8]) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;

    let (x, y, crop_w, crop_h) = crop_box(img.width(), img.height());
    let cropped = img.crop_imm(x, y, crop_w, crop_h);
    let resized = cropped.resize_exact(TARGET_WIDTH, TARGET_HEIGHT, FilterType::Triangle);

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, ImageOutputFormat::Jpeg(JPEG_QUALITY))
        .map_err(|e| Error::Encode(e.to_string()))?;

    Ok(out.into_inner())
}
