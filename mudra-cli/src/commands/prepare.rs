// mudra-cli/src/commands/prepare.rs
//
// Implements the 'prepare' command: runs the batch video pipeline
// (frame extraction + image normalization) over a folder of videos.

use crate::cli::PrepareArgs;
use crate::logging::get_timestamp;

use indicatif::ProgressBar;
use owo_colors::OwoColorize;

use mudra_core::external::{ImageRsCodec, SidecarDecoder};
use mudra_core::{CoreConfig, CoreError, CoreResult, format_duration, process_videos};

use std::fs;
use std::time::Instant;

pub fn run_prepare(args: PrepareArgs) -> CoreResult<()> {
    let start = Instant::now();

    // Surface a missing ffmpeg once, up front, instead of once per video.
    mudra_core::external::check_dependency("ffmpeg")?;

    let mut config = CoreConfig::new(args.videos_dir, args.output_dir);
    config.frame_interval = args.interval;
    config.parallel = args.parallel;
    config.validate()?;
    log::debug!("Run configuration: {:?}", config);

    fs::create_dir_all(&config.output_base_dir)?;

    println!("{}", "========================================".cyan());
    println!("Mudra prepare run started: {}", chrono::Local::now());
    println!("Videos folder:  {}", config.videos_dir.display());
    println!("Output folder:  {}", config.output_base_dir.display());
    println!("Frame interval: {}", config.frame_interval);
    println!("{}", "========================================".cyan());

    let files = match mudra_core::find_video_files(&config.videos_dir) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            println!("{}", "No processable video files found in the input folder.".yellow());
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    println!("Found {} video file(s) to process.", files.len());

    let progress = ProgressBar::new(files.len() as u64);
    let on_video = |video: &mudra_core::VideoReport| {
        if let Some(error) = &video.error {
            progress.println(format!("{} {}: {}", "[FAIL]".red().bold(), video.filename, error));
        } else {
            progress.println(format!(
                "{} {}: {} frame(s) written, {} image(s) normalized",
                "[OK]".green(),
                video.filename,
                video.frames_written,
                video.images_processed
            ));
        }
        progress.inc(1);
    };

    let report = process_videos(&SidecarDecoder, &ImageRsCodec, &config, &files, on_video)?;
    progress.finish_and_clear();

    // --- Summary ---
    println!("{}", "========================================".cyan());
    println!("{}", "Processing summary:".bold());
    println!(
        "  Videos:     {} processed, {} failed",
        report.videos_succeeded().green(),
        report.videos_failed()
    );
    println!("  Frames:     {} written", report.total_frames_written());
    println!(
        "  Images:     {} normalized, {} failed",
        report.total_images_processed(),
        report.total_images_failed()
    );

    let report_path = args.report.unwrap_or_else(|| {
        config
            .output_base_dir
            .join(format!("mudra_prepare_{}.json", get_timestamp()))
    });
    report.write_json(&report_path)?;
    println!("Run report: {}", report_path.display());

    println!(
        "Total execution time: {}",
        format_duration(start.elapsed().as_secs_f64())
    );
    println!("Mudra prepare run finished: {}", chrono::Local::now());

    Ok(())
}
