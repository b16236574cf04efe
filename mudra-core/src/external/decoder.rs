//! Video decoding abstraction over ffmpeg.
//!
//! The frame extractor consumes frames through the [`VideoDecoder`] and
//! [`FrameStream`] traits rather than talking to ffmpeg directly, so the
//! sampling logic can be exercised in tests with synthetic streams. The
//! production implementation spawns ffmpeg via ffmpeg-sidecar and reads
//! decoded rgb24 frames from its stdout pipe.

use crate::error::{CoreError, CoreResult};

use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use ffmpeg_sidecar::iter::FfmpegIterator;

use std::path::Path;

/// A single decoded video frame in rgb24 layout (3 bytes per pixel).
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// A sequential stream of decoded frames from one video.
pub trait FrameStream {
    /// Returns the next decoded frame, or `None` at end-of-stream.
    fn next_frame(&mut self) -> CoreResult<Option<DecodedFrame>>;

    /// Consumes the remainder of the stream's lifecycle and reports
    /// whether the decode as a whole succeeded. A source that could not
    /// be opened at all surfaces here as `CoreError::VideoOpen`.
    fn finish(&mut self) -> CoreResult<()>;
}

/// Something that can open a video file for sequential decode.
pub trait VideoDecoder {
    type Stream: FrameStream;

    fn open(&self, path: &Path) -> CoreResult<Self::Stream>;
}

// --- Concrete implementation using ffmpeg-sidecar ---

/// Video decoder backed by an ffmpeg child process.
#[derive(Debug, Clone, Default)]
pub struct SidecarDecoder;

/// Active ffmpeg decode for one video.
///
/// Dropping the stream before [`FrameStream::finish`] kills the child
/// process, so the decode handle is released on every exit path.
pub struct SidecarStream {
    path: String,
    child: FfmpegChild,
    events: FfmpegIterator,
    error_lines: Vec<String>,
    finished: bool,
}

impl VideoDecoder for SidecarDecoder {
    type Stream = SidecarStream;

    fn open(&self, path: &Path) -> CoreResult<Self::Stream> {
        let path_str = path.to_string_lossy().into_owned();

        // Decode the whole stream to raw rgb24 on stdout; the sidecar
        // iterator reassembles individual frames from the pipe.
        let mut cmd = FfmpegCommand::new();
        cmd.input(&path_str);
        cmd.arg("-f");
        cmd.arg("rawvideo");
        cmd.arg("-pix_fmt");
        cmd.arg("rgb24");
        cmd.arg("-an");
        cmd.output("-");

        log::debug!("Running frame decode command: {:?}", cmd);

        let mut child = cmd
            .spawn()
            .map_err(|e| CoreError::CommandStart("ffmpeg".to_string(), e.to_string()))?;

        let events = child.iter().map_err(|e| CoreError::VideoOpen {
            path: path_str.clone(),
            details: e.to_string(),
        })?;

        Ok(SidecarStream {
            path: path_str,
            child,
            events,
            error_lines: Vec::new(),
            finished: false,
        })
    }
}

impl FrameStream for SidecarStream {
    fn next_frame(&mut self) -> CoreResult<Option<DecodedFrame>> {
        for event in self.events.by_ref() {
            match event {
                FfmpegEvent::OutputFrame(frame) => {
                    return Ok(Some(DecodedFrame {
                        width: frame.width,
                        height: frame.height,
                        data: frame.data,
                    }));
                }
                FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                    self.error_lines.push(line);
                }
                FfmpegEvent::Error(line) => {
                    self.error_lines.push(line);
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn finish(&mut self) -> CoreResult<()> {
        self.finished = true;
        let status = self.child.wait()?;
        if status.success() {
            Ok(())
        } else {
            let details = if self.error_lines.is_empty() {
                format!("ffmpeg exited with {status}")
            } else {
                self.error_lines.join("; ")
            };
            log::error!("Decode failed for {}: {}", self.path, details);
            Err(CoreError::VideoOpen {
                path: self.path.clone(),
                details,
            })
        }
    }
}

impl Drop for SidecarStream {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
