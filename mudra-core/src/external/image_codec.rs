//! Image decode/encode abstraction over the image crate.
//!
//! The normalizer and frame writer go through [`ImageCodec`] rather than
//! calling the image crate directly, which keeps the per-file transform
//! logic testable with recording fakes.

use crate::error::{CoreError, CoreResult};
use crate::external::decoder::DecodedFrame;

use image::{DynamicImage, RgbImage};

use std::path::Path;

/// Decode and encode images on disk.
pub trait ImageCodec {
    /// Decodes the image at `path`.
    fn load(&self, path: &Path) -> CoreResult<DynamicImage>;

    /// Encodes `image` to `path`, overwriting any existing file. The
    /// container format is chosen from the path's extension.
    fn save(&self, image: &DynamicImage, path: &Path) -> CoreResult<()>;

    /// Encodes a raw decoded video frame to `path`.
    fn write_frame(&self, frame: DecodedFrame, path: &Path) -> CoreResult<()>;
}

/// Concrete [`ImageCodec`] backed by the image crate.
#[derive(Debug, Clone, Default)]
pub struct ImageRsCodec;

impl ImageCodec for ImageRsCodec {
    fn load(&self, path: &Path) -> CoreResult<DynamicImage> {
        image::open(path).map_err(|e| CoreError::ImageDecode(path.display().to_string(), e))
    }

    fn save(&self, image: &DynamicImage, path: &Path) -> CoreResult<()> {
        image
            .save(path)
            .map_err(|e| CoreError::ImageEncode(path.display().to_string(), e))
    }

    fn write_frame(&self, frame: DecodedFrame, path: &Path) -> CoreResult<()> {
        let (width, height) = (frame.width, frame.height);
        let buffer = RgbImage::from_raw(width, height, frame.data).ok_or_else(|| {
            CoreError::Other(format!(
                "Frame buffer size mismatch for {width}x{height} rgb24 frame"
            ))
        })?;
        self.save(&DynamicImage::ImageRgb8(buffer), path)
    }
}
