use thiserror::Error;

/// Custom error types for mudra
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open video '{path}': {details}")]
    VideoOpen { path: String, details: String },

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, String),

    #[error("Required external tool '{0}' not found in PATH")]
    DependencyNotFound(String),

    #[error("Failed to decode image '{0}': {1}")]
    ImageDecode(String, #[source] image::ImageError),

    #[error("Failed to encode image '{0}': {1}")]
    ImageEncode(String, #[source] image::ImageError),

    #[error("Invalid split ratio: {0}")]
    InvalidSplitRatio(String),

    #[error("Frame interval must be at least 1 (got {0})")]
    InvalidFrameInterval(u32),

    #[error("No processable video files found")]
    NoFilesFound,

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Result type for mudra operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
