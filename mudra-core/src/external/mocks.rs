// mudra-core/src/external/mocks.rs

// --- Fake codecs for unit tests ---

use super::decoder::{DecodedFrame, FrameStream, VideoDecoder};
use super::image_codec::ImageCodec;
use crate::error::{CoreError, CoreResult};

use image::{DynamicImage, Rgb, RgbImage};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Fake decoder producing a fixed number of synthetic frames per video.
#[derive(Debug, Clone)]
pub struct MockDecoder {
    frames_per_video: u64,
    width: u32,
    height: u32,
    /// File name for which `open` fails with `VideoOpen`.
    fail_for: Option<String>,
}

impl MockDecoder {
    pub fn new(frames_per_video: u64) -> Self {
        Self {
            frames_per_video,
            width: 4,
            height: 4,
            fail_for: None,
        }
    }

    pub fn failing_for(mut self, file_name: &str) -> Self {
        self.fail_for = Some(file_name.to_string());
        self
    }
}

pub struct MockStream {
    remaining: u64,
    next_index: u64,
    width: u32,
    height: u32,
}

impl VideoDecoder for MockDecoder {
    type Stream = MockStream;

    fn open(&self, path: &Path) -> CoreResult<Self::Stream> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail_for.as_deref() == Some(file_name.as_str()) {
            return Err(CoreError::VideoOpen {
                path: path.display().to_string(),
                details: "mock decode failure".to_string(),
            });
        }
        Ok(MockStream {
            remaining: self.frames_per_video,
            next_index: 0,
            width: self.width,
            height: self.height,
        })
    }
}

impl FrameStream for MockStream {
    fn next_frame(&mut self) -> CoreResult<Option<DecodedFrame>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        // Stamp the frame index into the first byte so pixel content is
        // distinguishable per frame.
        let mut data = vec![0u8; (self.width * self.height * 3) as usize];
        data[0] = (self.next_index % 256) as u8;
        self.next_index += 1;
        Ok(Some(DecodedFrame {
            width: self.width,
            height: self.height,
            data,
        }))
    }

    fn finish(&mut self) -> CoreResult<()> {
        Ok(())
    }
}

/// Fake image codec recording every call.
///
/// `write_frame` creates an empty file at the target path so directory
/// listings in the code under test observe the frames that were "written".
#[derive(Debug, Clone, Default)]
pub struct MockImageCodec {
    pub frames_written: Arc<Mutex<Vec<PathBuf>>>,
    pub saved: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockImageCodec {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn frame_paths(&self) -> Vec<PathBuf> {
        self.frames_written.lock().unwrap().clone()
    }

    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.saved.lock().unwrap().clone()
    }
}

impl ImageCodec for MockImageCodec {
    fn load(&self, _path: &Path) -> CoreResult<DynamicImage> {
        Ok(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            2,
            2,
            Rgb([10, 20, 30]),
        )))
    }

    fn save(&self, _image: &DynamicImage, path: &Path) -> CoreResult<()> {
        self.saved.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn write_frame(&self, _frame: DecodedFrame, path: &Path) -> CoreResult<()> {
        std::fs::File::create(path)?;
        self.frames_written.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
