//! leafsplit CLI
//!
//! Reorganizes a leaf disease image dataset into stratified
//! train/validation/test splits by deterministic shuffling and file copying.
//!
//! Usage: leafsplit --source leafdataset --output FireXIOS/LeafIdentifier/Dataset

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use leafsplit::utils::logging::{init_logging, LogConfig};
use leafsplit::{prepare_dataset, SplitConfig, DEFAULT_SEED};

/// Stratified train/validation/test splitting for leaf image datasets
///
/// Expects a source tree of `{species}/{HEALTHY,DISEASED}/*.{jpg,jpeg,png}`
/// and produces `{output}/{split}/{species}_{condition}/` by copying. The
/// shuffle is seeded, so re-running against an unchanged source reproduces
/// the same partition.
#[derive(Parser, Debug)]
#[command(name = "leafsplit")]
#[command(version = "0.1.0")]
#[command(about = "Stratified dataset splits for leaf disease classification", long_about = None)]
struct Cli {
    /// Source dataset root
    #[arg(short, long, default_value = "leafdataset")]
    source: PathBuf,

    /// Output directory for the split dataset
    #[arg(short, long, default_value = "FireXIOS/LeafIdentifier/Dataset")]
    output: PathBuf,

    /// Random seed for the deterministic shuffle
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Enable verbose logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    let _ = init_logging(&log_config);

    println!("{}", "=== Leaf Dataset Preparation ===".green().bold());
    println!("Source: {}", cli.source.display());
    println!("Output: {}", cli.output.display());
    println!();

    let config = SplitConfig::with_seed(cli.seed);
    let stats = prepare_dataset(&cli.source, &cli.output, &config)?;

    println!("{}", stats);
    Ok(())
}
