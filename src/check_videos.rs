/*
cargo run --bin check_videos

cargo run --bin check_videos -- \
    --pairs-file videos/pairs.json \
    --repo-root .
*/

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use vidpairs::manifest::{load_pairs, missing_paths, unique_paths};

// Verify that every video referenced by the manifest exists on disk
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Manifest to check
    #[arg(long, default_value = "videos/pairs.json")]
    pairs_file: PathBuf,

    // Directory the manifest paths are relative to
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let pairs = load_pairs(&args.pairs_file)?;
    let paths = unique_paths(&pairs);
    let missing = missing_paths(&args.repo_root, &paths);

    println!("Total unique video paths: {}", paths.len());
    println!("Missing files: {}", missing.len());
    if missing.is_empty() {
        println!("\nAll video files exist!");
    } else {
        println!("\nMissing files:");
        for path in &missing {
            println!("  {path}");
        }
    }
    Ok(())
}
