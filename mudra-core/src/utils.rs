//! Utility functions for file classification and formatting.
//!
//! This module provides general-purpose utility functions used throughout the
//! mudra-core library: the image and video extension whitelists, filename
//! helpers, and duration formatting.

use std::path::Path;

/// Extensions recognized as image files, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Extensions recognized as video files, matched case-insensitively.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| extensions.iter().any(|e| ext_str.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Checks whether the path names an image file by extension alone.
///
/// Files outside the whitelist are never opened as images; callers skip
/// them with a diagnostic rather than treating them as errors.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    has_extension_in(path, &IMAGE_EXTENSIONS)
}

/// Checks whether the path names a video file by extension alone.
#[must_use]
pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, &VIDEO_EXTENSIONS)
}

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Safely extracts the filename from a path with consistent error handling.
pub fn get_filename_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

/// Safely extracts the filename without extension from a path.
///
/// Used to derive the per-video frame subfolder name.
pub fn get_file_stem_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_stem()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!("Failed to get file stem for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        // Whitelisted extensions (case insensitive)
        assert!(is_image_file(Path::new("frame_0.jpg")));
        assert!(is_image_file(Path::new("frame_0.JPG")));
        assert!(is_image_file(Path::new("photo.jpeg")));
        assert!(is_image_file(Path::new("icon.Png")));
        assert!(is_image_file(Path::new("scan.bmp")));
        assert!(is_image_file(Path::new("anim.gif")));
        assert!(is_image_file(Path::new("/some/dir/frame_30.jpg")));

        // Outside the whitelist
        assert!(!is_image_file(Path::new("frame.tiff")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("clip.mp4")));
        assert!(!is_image_file(Path::new("no_extension")));
        assert!(!is_image_file(Path::new("")));
    }

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("clip.mp4")));
        assert!(is_video_file(Path::new("clip.MP4")));
        assert!(is_video_file(Path::new("recording.avi")));
        assert!(is_video_file(Path::new("take_2.mov")));
        assert!(is_video_file(Path::new("session.Mkv")));

        assert!(!is_video_file(Path::new("clip.webm")));
        assert!(!is_video_file(Path::new("frame_0.jpg")));
        assert!(!is_video_file(Path::new("clip")));
        assert!(!is_video_file(Path::new("")));
    }

    #[test]
    fn test_format_duration() {
        // Normal cases
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(60.0), "00:01:00");
        assert_eq!(format_duration(3661.0), "01:01:01");
        assert_eq!(format_duration(86399.0), "23:59:59");

        // Fractional seconds truncate
        assert_eq!(format_duration(59.9), "00:00:59");

        // Invalid inputs
        assert_eq!(format_duration(-1.0), "??:??:??");
        assert_eq!(format_duration(f64::INFINITY), "??:??:??");
        assert_eq!(format_duration(f64::NAN), "??:??:??");
    }

    #[test]
    fn test_get_filename_safe() {
        assert_eq!(
            get_filename_safe(Path::new("/path/to/clip.mp4")).unwrap(),
            "clip.mp4"
        );
        assert_eq!(get_filename_safe(Path::new("clip.mp4")).unwrap(), "clip.mp4");

        assert!(get_filename_safe(Path::new("/")).is_err());
        assert!(get_filename_safe(Path::new("")).is_err());
    }

    #[test]
    fn test_get_file_stem_safe() {
        assert_eq!(
            get_file_stem_safe(Path::new("/videos/wave_left.mp4")).unwrap(),
            "wave_left"
        );
        assert_eq!(get_file_stem_safe(Path::new("clip.tar.mp4")).unwrap(), "clip.tar");
        assert_eq!(get_file_stem_safe(Path::new("no_extension")).unwrap(), "no_extension");

        assert!(get_file_stem_safe(Path::new("/")).is_err());
        assert!(get_file_stem_safe(Path::new("")).is_err());
    }
}
