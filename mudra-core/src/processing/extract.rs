//! Frame sampling from a single video.
//!
//! Decodes a video sequentially and writes every Nth frame to disk as a
//! JPEG named after the decode ordinal at which sampling occurred.

use crate::error::{CoreError, CoreResult};
use crate::external::{FrameStream, ImageCodec, VideoDecoder};

use std::path::Path;

/// Statistics for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Total frames decoded from the source.
    pub frames_decoded: u64,
    /// Frames written to the output folder.
    pub frames_written: u64,
}

/// Extracts every `frame_interval`-th frame of `video_path` into
/// `output_folder`.
///
/// Frames are decoded in order with a monotonically increasing counter
/// starting at 0. A frame whose counter is divisible by `frame_interval`
/// is written to `output_folder/frame_<counter>.jpg`; the naming uses the
/// decode ordinal, not the saved-frame count, so extracting the same video
/// twice with the same stride yields identical file names. For a source of
/// F frames this writes ceil(F / frame_interval) files.
///
/// # Errors
///
/// * `CoreError::InvalidFrameInterval` - `frame_interval` is 0
/// * `CoreError::VideoOpen` - the source cannot be opened or decoded
/// * `CoreError::ImageEncode` / `CoreError::Io` - a sampled frame cannot
///   be written
pub fn extract_frames<D: VideoDecoder, C: ImageCodec>(
    decoder: &D,
    codec: &C,
    video_path: &Path,
    output_folder: &Path,
    frame_interval: u32,
) -> CoreResult<ExtractionStats> {
    if frame_interval == 0 {
        return Err(CoreError::InvalidFrameInterval(frame_interval));
    }

    std::fs::create_dir_all(output_folder)?;

    let mut stream = decoder.open(video_path)?;
    let mut decoded: u64 = 0;
    let mut written: u64 = 0;

    while let Some(frame) = stream.next_frame()? {
        if decoded % u64::from(frame_interval) == 0 {
            let frame_path = output_folder.join(format!("frame_{decoded}.jpg"));
            codec.write_frame(frame, &frame_path)?;
            written += 1;
        }
        decoded += 1;
    }

    stream.finish()?;

    log::debug!(
        "Extracted {} of {} frames from {}",
        written,
        decoded,
        video_path.display()
    );

    Ok(ExtractionStats {
        frames_decoded: decoded,
        frames_written: written,
    })
}
