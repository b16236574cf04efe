//! File discovery module for finding videos and images to process.
//!
//! This module handles the discovery of files eligible for processing.
//! Video discovery searches the top level of the provided directory for
//! files matching the video extension whitelist; image discovery does the
//! same against the image whitelist. Neither searches subdirectories.

use crate::error::{CoreError, CoreResult};
use crate::utils::{is_image_file, is_video_file};

use std::path::{Path, PathBuf};

fn list_regular_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            path.is_file().then_some(path)
        })
        .collect();

    // Sorted so processing order is stable across runs and platforms.
    files.sort();
    Ok(files)
}

/// Finds video files eligible for processing in the specified directory.
///
/// Scans the top level of `input_dir` for files whose extension is one of
/// `{mp4, avi, mov, mkv}` (case-insensitive) and returns their paths in
/// sorted order.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths to the discovered video files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoFilesFound)` - If no whitelisted video files are found
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let files: Vec<PathBuf> = list_regular_files(input_dir)?
        .into_iter()
        .filter(|path| is_video_file(path))
        .collect();

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}

/// Lists image files in the specified directory, sorted.
///
/// Unlike video discovery, an empty result is not an error: a frame folder
/// or class folder may legitimately contain no images yet.
pub fn find_image_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    Ok(list_regular_files(dir)?
        .into_iter()
        .filter(|path| is_image_file(path))
        .collect())
}

/// Lists every regular file in the specified directory, sorted.
///
/// Used by the batch processor, which counts non-image files as skips
/// rather than filtering them out silently.
pub fn list_files(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    list_regular_files(dir)
}
