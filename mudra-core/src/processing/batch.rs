//! Batch orchestration across a folder of videos.
//!
//! For each video this creates a frame subfolder named after the video's
//! stem, extracts frames at the configured stride, then resizes and
//! normalizes every extracted image. A failure inside one video is
//! recorded in that video's report and never aborts the rest of the batch.

use crate::config::CoreConfig;
use crate::discovery;
use crate::error::CoreResult;
use crate::external::{ImageCodec, VideoDecoder};
use crate::processing::extract::extract_frames;
use crate::processing::normalize::{normalize_image, resize_image};
use crate::reporting::{RunReport, VideoReport};
use crate::utils::{get_file_stem_safe, get_filename_safe, is_image_file};

use rayon::prelude::*;

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Processes a list of video files according to the provided configuration.
///
/// This is the main entry point for the mudra-core batch pipeline. The
/// caller supplies the file list (usually from
/// [`crate::discovery::find_video_files`]) so that discovery failures can
/// be handled separately from processing failures.
///
/// The function is generic over the codec seams:
/// - `D`: [`VideoDecoder`] - sequential frame decoding
/// - `C`: [`ImageCodec`] - image decode/encode
///
/// `on_video` fires after each video completes, successful or not; the
/// CLI uses it to drive its progress display. When `config.parallel` is
/// set the videos are processed on rayon's global pool; per-video
/// subfolders are disjoint by construction, so workers never contend on
/// output paths.
///
/// # Returns
///
/// * `Ok(RunReport)` - Per-video statistics for the whole batch. Videos
///   that failed carry their error in [`VideoReport::error`].
/// * `Err(CoreError)` - Only for failures before any video is processed
///   (currently: invalid configuration).
pub fn process_videos<D, C, F>(
    decoder: &D,
    codec: &C,
    config: &CoreConfig,
    files_to_process: &[PathBuf],
    on_video: F,
) -> CoreResult<RunReport>
where
    D: VideoDecoder + Sync,
    C: ImageCodec + Sync,
    F: Fn(&VideoReport) + Sync,
{
    config.validate()?;

    let process_one = |video_path: &PathBuf| -> VideoReport {
        let report = process_single_video(decoder, codec, config, video_path);
        on_video(&report);
        report
    };

    let videos = if config.parallel {
        files_to_process.par_iter().map(process_one).collect()
    } else {
        files_to_process.iter().map(process_one).collect()
    };

    Ok(RunReport { videos })
}

fn process_single_video<D, C>(
    decoder: &D,
    codec: &C,
    config: &CoreConfig,
    video_path: &Path,
) -> VideoReport
where
    D: VideoDecoder,
    C: ImageCodec,
{
    let start = Instant::now();
    let filename =
        get_filename_safe(video_path).unwrap_or_else(|_| video_path.display().to_string());
    let mut report = VideoReport::new(filename);

    log::info!("Processing: {}", video_path.display());

    if let Err(e) = run_video_pipeline(decoder, codec, config, video_path, &mut report) {
        log::error!("Processing failed for {}: {}", video_path.display(), e);
        report.error = Some(e.to_string());
    }

    report.elapsed_secs = start.elapsed().as_secs_f64();
    report
}

fn run_video_pipeline<D, C>(
    decoder: &D,
    codec: &C,
    config: &CoreConfig,
    video_path: &Path,
    report: &mut VideoReport,
) -> CoreResult<()>
where
    D: VideoDecoder,
    C: ImageCodec,
{
    let stem = get_file_stem_safe(video_path)?;
    let frames_dir = config.output_base_dir.join(&stem);
    // Idempotent: reprocessing a video reuses its subfolder.
    std::fs::create_dir_all(&frames_dir)?;

    let stats = extract_frames(decoder, codec, video_path, &frames_dir, config.frame_interval)?;
    report.frames_decoded = stats.frames_decoded;
    report.frames_written = stats.frames_written;

    for file in discovery::list_files(&frames_dir)? {
        if !is_image_file(&file) {
            log::debug!("Skipping non-image file: {}", file.display());
            report.images_skipped += 1;
            continue;
        }

        let resized = resize_image(codec, &file);
        let normalized = normalize_image(codec, &file);
        if resized.is_failed() || normalized.is_failed() {
            report.images_failed += 1;
        } else {
            report.images_processed += 1;
        }
    }

    Ok(())
}
