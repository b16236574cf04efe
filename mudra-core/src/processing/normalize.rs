//! In-place image resize and intensity normalization.
//!
//! Both operations are idempotent per-file transforms with the same
//! failure policy: a non-whitelisted extension is a skip, not an error,
//! and a decode/encode failure is absorbed into the returned outcome so
//! one bad file never aborts a batch.

use crate::config::{CANONICAL_HEIGHT, CANONICAL_WIDTH};
use crate::error::{CoreError, CoreResult};
use crate::external::ImageCodec;
use crate::utils::is_image_file;

use image::DynamicImage;
use image::imageops::FilterType;

use std::path::Path;

/// Result of one per-file transform.
#[derive(Debug)]
pub enum ImageOutcome {
    /// The file was transformed and rewritten.
    Processed,
    /// The file is outside the image whitelist and was left untouched.
    Skipped,
    /// Decode, transform, or encode failed; the file keeps its prior state.
    Failed(CoreError),
}

impl ImageOutcome {
    #[must_use]
    pub fn is_processed(&self) -> bool {
        matches!(self, ImageOutcome::Processed)
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, ImageOutcome::Skipped)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ImageOutcome::Failed(_))
    }
}

/// Resizes the image at `path` to the canonical 256x256 resolution,
/// overwriting the original file.
///
/// Idempotent: resizing an already-canonical image rewrites it at the
/// same dimensions.
pub fn resize_image<C: ImageCodec>(codec: &C, path: &Path) -> ImageOutcome {
    run_transform(codec, path, "resize", |image| {
        image.resize_exact(CANONICAL_WIDTH, CANONICAL_HEIGHT, FilterType::Triangle)
    })
}

/// Round-trips every channel byte of the image at `path` through [0,1]
/// floating normalization and back, overwriting the original file.
///
/// Numerically this preserves pixel values except for rounding; the float
/// round-trip pins the write path for a future true-normalization step.
pub fn normalize_image<C: ImageCodec>(codec: &C, path: &Path) -> ImageOutcome {
    run_transform(codec, path, "normalize", normalize_pixels)
}

fn run_transform<C, F>(codec: &C, path: &Path, op: &str, transform: F) -> ImageOutcome
where
    C: ImageCodec,
    F: FnOnce(DynamicImage) -> DynamicImage,
{
    if !is_image_file(path) {
        log::debug!("Skipping non-image file: {}", path.display());
        return ImageOutcome::Skipped;
    }

    match apply_in_place(codec, path, transform) {
        Ok(()) => ImageOutcome::Processed,
        Err(e) => {
            log::warn!("Error during {} of {}: {}", op, path.display(), e);
            ImageOutcome::Failed(e)
        }
    }
}

fn apply_in_place<C, F>(codec: &C, path: &Path, transform: F) -> CoreResult<()>
where
    C: ImageCodec,
    F: FnOnce(DynamicImage) -> DynamicImage,
{
    let image = codec.load(path)?;
    let transformed = transform(image);
    codec.save(&transformed, path)
}

fn normalize_pixels(image: DynamicImage) -> DynamicImage {
    fn round_trip(value: u8) -> u8 {
        ((f32::from(value) / 255.0) * 255.0).round() as u8
    }

    // Operate on the buffer's native layout where it is 8-bit; anything
    // else is funneled through rgba8 first.
    match image {
        DynamicImage::ImageLuma8(mut buffer) => {
            for value in buffer.iter_mut() {
                *value = round_trip(*value);
            }
            DynamicImage::ImageLuma8(buffer)
        }
        DynamicImage::ImageLumaA8(mut buffer) => {
            for value in buffer.iter_mut() {
                *value = round_trip(*value);
            }
            DynamicImage::ImageLumaA8(buffer)
        }
        DynamicImage::ImageRgb8(mut buffer) => {
            for value in buffer.iter_mut() {
                *value = round_trip(*value);
            }
            DynamicImage::ImageRgb8(buffer)
        }
        DynamicImage::ImageRgba8(mut buffer) => {
            for value in buffer.iter_mut() {
                *value = round_trip(*value);
            }
            DynamicImage::ImageRgba8(buffer)
        }
        other => {
            let mut buffer = other.to_rgba8();
            for value in buffer.iter_mut() {
                *value = round_trip(*value);
            }
            DynamicImage::ImageRgba8(buffer)
        }
    }
}
