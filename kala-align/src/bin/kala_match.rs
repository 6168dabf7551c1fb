//! Align an estimated trajectory with ground truth by timestamp.
//!
//! Reads `traj_es.csv` and `traj_gt.csv` from a dataset directory, computes
//! (or reuses) `traj_matches.csv`, and prints a summary of the association.
//!
//! # Usage
//!
//! ```bash
//! kala-match --data-dir results/run_01
//! kala-match --data-dir results/run_01 --rematch --offset-secs -0.012
//! RUST_LOG=debug kala-match --data-dir results/run_01 --config configs/kala.toml
//! ```

use std::path::PathBuf;

use clap::Parser;

use kala_align::{KalaConfig, load_dataset, read_matches};

#[derive(Parser)]
#[command(name = "kala-match")]
#[command(about = "Match estimate and ground-truth timestamps of a trajectory dataset")]
struct Args {
    /// Dataset directory containing the trajectory CSV files
    #[arg(short, long)]
    data_dir: PathBuf,

    /// TOML config file (defaults to configs/kala.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recompute matches even if the cache file exists
    #[arg(short, long)]
    rematch: bool,

    /// Override the clock offset added to estimate timestamps (seconds)
    #[arg(long, allow_hyphen_values = true)]
    offset_secs: Option<f64>,

    /// Override the maximum time difference for a match (seconds)
    #[arg(long)]
    max_difference_secs: Option<f64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => KalaConfig::load(path)?,
        None => KalaConfig::load_default()?,
    };
    if let Some(offset) = args.offset_secs {
        config.association.offset_secs = offset;
    }
    if let Some(max_difference) = args.max_difference_secs {
        config.association.max_difference_secs = max_difference;
    }
    let association = config.association_config()?;

    println!("Dataset: {}", args.data_dir.display());
    println!(
        "Offset: {:.6} s, max difference: {:.6} s{}",
        config.association.offset_secs,
        config.association.max_difference_secs,
        if args.rematch { " (rematch)" } else { "" }
    );

    let aligned = load_dataset(&args.data_dir, &config.dataset, &association, args.rematch)?;

    let matches_path = config.dataset.matches_path(&args.data_dir);
    let matches = read_matches(&matches_path)?;
    let stats = matches.statistics(association.offset_ns);

    println!("Aligned poses: {}", aligned.len());
    println!("Matches: {}", stats.summary());
    println!("Match file: {}", matches_path.display());

    if aligned.is_empty() {
        eprintln!("Warning: no timestamps matched; check offset and max difference");
    }

    Ok(())
}
