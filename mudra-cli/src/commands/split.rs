// mudra-cli/src/commands/split.rs
//
// Implements the 'split' command: partitions a class-labeled image tree
// into train/val/test pools under one output base directory.

use crate::cli::SplitArgs;

use owo_colors::OwoColorize;

use mudra_core::{CoreResult, SplitOutputDirs, split_dataset};

pub fn run_split(args: SplitArgs) -> CoreResult<()> {
    let outputs = SplitOutputDirs::under(&args.output_dir);
    log::debug!(
        "Splitting {} with ratio {} (seed: {:?})",
        args.dataset_dir.display(),
        args.ratio,
        args.seed
    );
    let summary = split_dataset(&args.dataset_dir, &outputs, args.ratio, args.seed)?;

    println!(
        "Split {} image(s) from {} class(es):",
        summary.total.bold(),
        summary.classes
    );
    println!("  train: {:>6}  -> {}", summary.train.green(), outputs.train.display());
    println!("  val:   {:>6}  -> {}", summary.val.green(), outputs.val.display());
    println!("  test:  {:>6}  -> {}", summary.test.green(), outputs.test.display());

    if args.seed.is_none() {
        println!(
            "{}",
            "Note: unseeded shuffle; pass --seed for a reproducible partition.".yellow()
        );
    }

    Ok(())
}
