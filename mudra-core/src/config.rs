// ============================================================================
// mudra-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines the configuration structure and constants used
// throughout the mudra-core library. It controls the batch video pipeline:
// where videos are read from, where frame subfolders are written, and how
// frames are sampled.
//
// KEY COMPONENTS:
// - CoreConfig: Main configuration structure for the library
// - Default constants: frame sampling stride and canonical frame resolution
//
// USAGE:
// Instances of CoreConfig are created by consumers of the library (like
// mudra-cli) and passed to the process_videos function to control pipeline
// behavior.
//
// AI-ASSISTANT-INFO: Configuration structures and constants for the mudra-core library

// ---- Standard library imports ----
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Default sampling stride: every Nth decoded frame is written.
pub const DEFAULT_FRAME_INTERVAL: u32 = 30;

/// Width every extracted frame is resized to during the normalization pass.
pub const CANONICAL_WIDTH: u32 = 256;

/// Height every extracted frame is resized to during the normalization pass.
pub const CANONICAL_HEIGHT: u32 = 256;

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for the mudra-core batch pipeline.
///
/// Holds the parameters required for batch video processing. It is typically
/// created by the consumer of the library (e.g., mudra-cli) and passed to
/// the `process_videos` function.
///
/// # Examples
///
/// ```rust,no_run
/// use mudra_core::CoreConfig;
/// use std::path::PathBuf;
///
/// let mut config = CoreConfig::new(
///     PathBuf::from("/path/to/videos"),
///     PathBuf::from("/path/to/processed"),
/// );
/// config.frame_interval = 10;
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Path Configuration ----
    /// Directory containing input video files to process
    pub videos_dir: PathBuf,

    /// Base directory under which one frame subfolder per video is created
    pub output_base_dir: PathBuf,

    // ---- Sampling Settings ----
    /// Sampling stride: a decoded frame is written when its zero-based
    /// decode counter is divisible by this value. Must be at least 1.
    pub frame_interval: u32,

    // ---- Processing Options ----
    /// Whether to process videos concurrently. Per-video subfolders are
    /// disjoint by construction, so workers never share output paths.
    pub parallel: bool,
}

impl CoreConfig {
    /// Creates a configuration with default sampling settings.
    #[must_use]
    pub fn new(videos_dir: PathBuf, output_base_dir: PathBuf) -> Self {
        Self {
            videos_dir,
            output_base_dir,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            parallel: false,
        }
    }

    /// Validates the configuration before a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.frame_interval == 0 {
            return Err(CoreError::InvalidFrameInterval(self.frame_interval));
        }
        Ok(())
    }
}
