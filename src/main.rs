//! Command line tool converting PowerPoint decks into YAML outlines.

use anyhow::{Context, Result};
use clap::Parser;
use pptx_to_yaml::{
    pptx_to_yaml, ClassifyOrder, ConvertOptions, ImageErrorPolicy, OpenAiDescriber,
};
use std::fs;
use std::path::PathBuf;

/// Convert a PowerPoint deck into a YAML outline with described images.
#[derive(Parser, Debug)]
#[command(name = "pptx-to-yaml")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PowerPoint file (.pptx)
    input: PathBuf,

    /// Output YAML file
    output: PathBuf,

    /// What to do when describing an image fails: abort, placeholder or skip
    #[arg(long, default_value = "abort")]
    on_image_error: ImageErrorPolicy,

    /// Classify shapes by text content before their declared type
    #[arg(long)]
    text_first: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let options = ConvertOptions::builder()
        .classify_order(if args.text_first {
            ClassifyOrder::TextFirst
        } else {
            ClassifyOrder::TypeFirst
        })
        .on_image_error(args.on_image_error)
        .build();
    let describer = OpenAiDescriber::new();

    let yaml = pptx_to_yaml(&args.input, &describer, &options)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    // The output file is only touched once the whole deck converted.
    fs::write(&args.output, yaml)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
