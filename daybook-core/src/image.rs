//! Image compression for picture-of-the-day memories.
//!
//! Bounds the payload size before it reaches the quota-governed store:
//! decode, scale down to fit the configured box (never up), re-encode as
//! JPEG at a fixed quality, and wrap the result in a base64 data URI.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::{DaybookError, DaybookResult};

#[derive(Debug, Clone)]
pub struct CompressOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        CompressOptions {
            max_width: 1024,
            max_height: 1024,
            quality: 70,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// `data:image/jpeg;base64,...`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

/// Compress raw image bytes into a bounded-size JPEG data URI.
///
/// The scale factor is `min(max_width/w, max_height/h, 1)`, applied uniformly
/// to both axes; images already inside the box keep their dimensions.
/// Input that does not decode as an image fails with `InvalidImage` and
/// nothing else is touched.
pub fn compress_image(bytes: &[u8], options: &CompressOptions) -> DaybookResult<CompressedImage> {
    let img =
        image::load_from_memory(bytes).map_err(|e| DaybookError::InvalidImage(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    let ratio = (options.max_width as f64 / width as f64)
        .min(options.max_height as f64 / height as f64)
        .min(1.0);

    let resized = if ratio < 1.0 {
        let target_w = ((width as f64 * ratio).round() as u32).max(1);
        let target_h = ((height as f64 * ratio).round() as u32).max(1);
        img.resize_exact(target_w, target_h, FilterType::Triangle)
    } else {
        img
    };

    // JPEG carries no alpha channel
    let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, options.quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| DaybookError::ImageEncode(e.to_string()))?;

    Ok(CompressedImage {
        data_uri: format!("data:image/jpeg;base64,{}", BASE64.encode(&encoded)),
        width: rgb.width(),
        height: rgb.height(),
    })
}
