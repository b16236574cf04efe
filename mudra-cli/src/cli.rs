// mudra-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use mudra_core::{DEFAULT_FRAME_INTERVAL, SplitRatio};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mudra: gesture dataset preparation tool",
    long_about = "Prepares video-derived gesture image datasets: extracts frames from \
                  raw videos, normalizes them, and splits the labeled corpus into \
                  train/val/test sets via the mudra-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts and normalizes frames from every video in a folder
    Prepare(PrepareArgs),
    /// Splits a class-labeled image tree into train/val/test pools
    Split(SplitArgs),
    /// Summarizes a class-labeled image tree
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Directory containing the source video files
    #[arg(short = 'i', long = "input", required = true, value_name = "VIDEOS_DIR")]
    pub videos_dir: PathBuf,

    /// Base directory for the per-video frame subfolders
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Sampling stride: write every Nth decoded frame
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FRAME_INTERVAL,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub interval: u32,

    /// Process videos concurrently
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Optional: where to write the JSON run report
    /// (defaults to OUTPUT_DIR/mudra_prepare_<timestamp>.json)
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Class-labeled dataset root (one subdirectory per gesture)
    #[arg(short = 'd', long = "dataset", required = true, value_name = "DATASET_DIR")]
    pub dataset_dir: PathBuf,

    /// Base directory for the train/val/test output pools
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Train,val,test fractions; must sum to 1.0
    #[arg(long, value_name = "T,V,S", default_value_t = SplitRatio::default())]
    pub ratio: SplitRatio,

    /// Seed the split shuffle for a reproducible partition
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Class-labeled dataset root (one subdirectory per gesture)
    #[arg(short = 'd', long = "dataset", required = true, value_name = "DATASET_DIR")]
    pub dataset_dir: PathBuf,

    /// Decode every image and report unreadable files
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prepare_basic_args() {
        let args = vec!["mudra", "prepare", "--input", "downloads", "--output", "processed"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Prepare(prepare_args) => {
                assert_eq!(prepare_args.videos_dir, PathBuf::from("downloads"));
                assert_eq!(prepare_args.output_dir, PathBuf::from("processed"));
                assert_eq!(prepare_args.interval, DEFAULT_FRAME_INTERVAL);
                assert!(!prepare_args.parallel);
                assert!(prepare_args.report.is_none());
            }
            _ => panic!("Expected Prepare command"),
        }
    }

    #[test]
    fn test_parse_prepare_with_options() {
        let args = vec![
            "mudra", "prepare",
            "-i", "downloads",
            "-o", "processed",
            "--interval", "10",
            "--parallel",
            "--report", "run.json",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Prepare(prepare_args) => {
                assert_eq!(prepare_args.interval, 10);
                assert!(prepare_args.parallel);
                assert_eq!(prepare_args.report, Some(PathBuf::from("run.json")));
            }
            _ => panic!("Expected Prepare command"),
        }
    }

    #[test]
    fn test_parse_prepare_rejects_zero_interval() {
        let args = vec!["mudra", "prepare", "-i", "in", "-o", "out", "--interval", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_split_args() {
        let args = vec![
            "mudra", "split",
            "--dataset", "data/gestures",
            "--output", "data/splits",
            "--ratio", "0.7,0.2,0.1",
            "--seed", "42",
        ];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Split(split_args) => {
                assert_eq!(split_args.dataset_dir, PathBuf::from("data/gestures"));
                assert_eq!(split_args.output_dir, PathBuf::from("data/splits"));
                assert_eq!(split_args.ratio, SplitRatio::new(0.7, 0.2, 0.1));
                assert_eq!(split_args.seed, Some(42));
            }
            _ => panic!("Expected Split command"),
        }
    }

    #[test]
    fn test_parse_split_defaults() {
        let args = vec!["mudra", "split", "-d", "data", "-o", "out"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Split(split_args) => {
                assert_eq!(split_args.ratio, SplitRatio::default());
                assert!(split_args.seed.is_none());
            }
            _ => panic!("Expected Split command"),
        }
    }

    #[test]
    fn test_parse_split_rejects_malformed_ratio() {
        let args = vec!["mudra", "split", "-d", "data", "-o", "out", "--ratio", "0.8,0.2"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_inspect_args() {
        let args = vec!["mudra", "inspect", "-d", "data/gestures", "--verify"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Inspect(inspect_args) => {
                assert_eq!(inspect_args.dataset_dir, PathBuf::from("data/gestures"));
                assert!(inspect_args.verify);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let args = vec!["mudra", "inspect", "-d", "data", "--verbose"];
        let cli = Cli::parse_from(args);
        assert!(cli.verbose);
    }
}
