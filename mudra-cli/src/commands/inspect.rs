// mudra-cli/src/commands/inspect.rs
//
// Implements the 'inspect' command: summarizes a class-labeled image
// tree and optionally verifies that every image decodes.

use crate::cli::InspectArgs;

use owo_colors::OwoColorize;

use mudra_core::external::ImageRsCodec;
use mudra_core::{CoreResult, GestureDataset};

pub fn run_inspect(args: InspectArgs) -> CoreResult<()> {
    let dataset = GestureDataset::open(&args.dataset_dir)?;

    println!("Dataset root: {}", dataset.root().display());
    if dataset.classes().is_empty() {
        println!("{}", "No class directories found under the dataset root.".yellow());
        return Ok(());
    }

    println!(
        "{} class(es), {} image(s)",
        dataset.classes().len(),
        dataset.len()
    );
    for (label, (class, count)) in dataset
        .classes()
        .iter()
        .zip(dataset.class_counts())
        .enumerate()
    {
        println!("  [{label}] {class}: {count}");
    }

    if args.verify {
        let codec = ImageRsCodec;
        let mut unreadable = 0usize;
        for index in 0..dataset.len() {
            if let Err(e) = dataset.load(&codec, index) {
                unreadable += 1;
                println!("{} {}", "[BAD]".red().bold(), e);
            }
        }
        if unreadable == 0 {
            println!("{}", format!("All {} image(s) decoded cleanly.", dataset.len()).green());
        } else {
            println!("{}", format!("{unreadable} unreadable image(s).").red());
        }
    }

    Ok(())
}
