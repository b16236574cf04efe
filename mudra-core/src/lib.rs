//! Core library for preparing video-derived gesture image datasets.
//!
//! This crate turns folders of raw videos into a labeled, normalized,
//! split image corpus: it samples frames from each video at a fixed
//! stride, resizes and intensity-normalizes the extracted images in
//! place, and partitions a class-labeled image tree into train/val/test
//! pools. Video and image codecs sit behind traits so the pipeline logic
//! can be tested without ffmpeg or real image files.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mudra_core::{CoreConfig, process_videos};
//! use mudra_core::external::{ImageRsCodec, SidecarDecoder};
//! use std::path::PathBuf;
//!
//! let mut config = CoreConfig::new(
//!     PathBuf::from("/path/to/videos"),
//!     PathBuf::from("/path/to/processed"),
//! );
//! config.frame_interval = 10;
//! config.validate().unwrap();
//!
//! let files = mudra_core::find_video_files(&config.videos_dir).unwrap();
//! let report = process_videos(
//!     &SidecarDecoder,
//!     &ImageRsCodec,
//!     &config,
//!     &files,
//!     |video| println!("done: {}", video.filename),
//! ).unwrap();
//! println!("{} frames written", report.total_frames_written());
//! ```

pub mod config;
pub mod dataset;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use config::{CANONICAL_HEIGHT, CANONICAL_WIDTH, CoreConfig, DEFAULT_FRAME_INTERVAL};
pub use dataset::{GestureDataset, Sample};
pub use discovery::{find_image_files, find_video_files};
pub use error::{CoreError, CoreResult};
pub use external::{DecodedFrame, ImageCodec, ImageRsCodec, SidecarDecoder, VideoDecoder};
pub use processing::{
    ExtractionStats, ImageOutcome, SplitOutputDirs, SplitRatio, SplitSummary, extract_frames,
    normalize_image, process_videos, resize_image, split_dataset,
};
pub use reporting::{RunReport, VideoReport};
pub use utils::{format_duration, is_image_file, is_video_file};
