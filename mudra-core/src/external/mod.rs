// ============================================================================
// mudra-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL CODECS: Video and Image Codec Abstractions
//
// This module encapsulates interactions with external codecs: ffmpeg for
// video decoding and the image crate for image decode/encode. It provides
// abstractions through traits and concrete implementations so the pipeline
// logic (stride sampling, whitelist filtering, split partitioning) stays
// decoupled from any particular decoding library and can be unit-tested
// with fake codecs.
//
// KEY COMPONENTS:
// - VideoDecoder / FrameStream: traits for sequential video frame decode
// - SidecarDecoder: concrete implementation using ffmpeg-sidecar
// - ImageCodec: trait for image decode/encode
// - ImageRsCodec: concrete implementation using the image crate
// - Dependency checking for the ffmpeg binary
//
// AI-ASSISTANT-INFO: External codec abstractions for video and image handling

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for sequential video frame decoding
pub mod decoder;

/// Traits and implementations for image decode/encode
pub mod image_codec;

#[cfg(test)]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use decoder::{DecodedFrame, FrameStream, SidecarDecoder, SidecarStream, VideoDecoder};
pub use image_codec::{ImageCodec, ImageRsCodec};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks whether a required external command is available and executable.
///
/// Attempts to run the specified command with a `-version` argument to
/// verify that it exists. Used to check for ffmpeg before a batch run so
/// the failure surfaces once, up front, instead of once per video.
///
/// # Returns
///
/// * `Ok(())` - The command is available
/// * `Err(CoreError::DependencyNotFound)` - The command is not on PATH
/// * `Err(CoreError::CommandStart)` - The command exists but fails to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e.to_string()))
        }
    }
}
