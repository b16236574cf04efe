//! Run summary structures.
//!
//! Per-file failures in the pipeline are absorbed where they happen and
//! counted here, so a run's behavior is observable (and testable) as data
//! instead of log lines.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use std::io::BufWriter;
use std::path::Path;

/// Statistics for one processed video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoReport {
    /// Source video filename
    pub filename: String,

    /// Total frames decoded from the source
    pub frames_decoded: u64,

    /// Frames written into the video's frame subfolder
    pub frames_written: u64,

    /// Images that passed both resize and normalize
    pub images_processed: usize,

    /// Non-image files skipped in the frame subfolder
    pub images_skipped: usize,

    /// Images that failed to decode or re-encode
    pub images_failed: usize,

    /// Wall-clock processing time in seconds
    pub elapsed_secs: f64,

    /// Error that aborted this video's processing, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoReport {
    #[must_use]
    pub fn new(filename: String) -> Self {
        Self {
            filename,
            frames_decoded: 0,
            frames_written: 0,
            images_processed: 0,
            images_skipped: 0,
            images_failed: 0,
            elapsed_secs: 0.0,
            error: None,
        }
    }

    /// Whether this video made it through the whole pipeline. Individual
    /// image failures do not count against the video.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Statistics for one whole batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub videos: Vec<VideoReport>,
}

impl RunReport {
    #[must_use]
    pub fn videos_failed(&self) -> usize {
        self.videos.iter().filter(|v| !v.succeeded()).count()
    }

    #[must_use]
    pub fn videos_succeeded(&self) -> usize {
        self.videos.len() - self.videos_failed()
    }

    #[must_use]
    pub fn total_frames_written(&self) -> u64 {
        self.videos.iter().map(|v| v.frames_written).sum()
    }

    #[must_use]
    pub fn total_images_processed(&self) -> usize {
        self.videos.iter().map(|v| v.images_processed).sum()
    }

    #[must_use]
    pub fn total_images_failed(&self) -> usize {
        self.videos.iter().map(|v| v.images_failed).sum()
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> CoreResult<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| CoreError::Other(format!("Failed to serialize run report: {e}")))
    }
}
