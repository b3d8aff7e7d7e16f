/*
cargo run --bin generate_pairs

cargo run --bin generate_pairs -- \
    --video-root videos \
    --num-videos 6 \
    --max-pairs 8 \
    --seed 42
*/

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use vidpairs::manifest::write_pairs;
use vidpairs::pairing::{generate_pairs, GeneratorConfig};
use vidpairs::tasks::{collect_videos, group_by_task};

// CLI parameters
#[derive(Parser, Debug)]
#[command(version, about = "Generate the paired-video manifest")]
struct Args {
    // Root directory holding one subdirectory per video source
    #[arg(long, default_value = "videos")]
    video_root: PathBuf,

    // Source directory excluded from pairing (ground-truth videos)
    #[arg(long, default_value = "real")]
    excluded_dir: String,

    // A task needs exactly this many videos across sources to be paired
    #[arg(long, default_value_t = 6)]
    num_videos: usize,

    // Manifest file to overwrite
    #[arg(short, long, default_value = "videos/pairs.json")]
    output: PathBuf,

    // Keep at most this many pairs per task (omit to keep all)
    #[arg(long)]
    max_pairs: Option<usize>,

    // Fixed RNG seed for a reproducible manifest (omit for random)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let cfg = GeneratorConfig {
        video_root: args.video_root,
        excluded_dir: args.excluded_dir,
        videos_per_task: args.num_videos,
        output: args.output,
        max_pairs_per_task: args.max_pairs,
    };
    info!(
        "Scanning {} (excluding {}), {} videos per task",
        cfg.video_root.display(),
        cfg.excluded_dir,
        cfg.videos_per_task
    );

    let files = collect_videos(&cfg.video_root, &cfg.excluded_dir)?;
    info!("Found {} video files", files.len());

    let groups = group_by_task(&files);
    info!("Grouped into {} tasks", groups.len());

    let pairs = match args.seed {
        Some(seed) => generate_pairs(
            &groups,
            cfg.videos_per_task,
            cfg.max_pairs_per_task,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => generate_pairs(
            &groups,
            cfg.videos_per_task,
            cfg.max_pairs_per_task,
            &mut thread_rng(),
        ),
    };

    write_pairs(&cfg.output, &pairs)?;
    println!("Generated {} pairs at {}", pairs.len(), cfg.output.display());
    Ok(())
}
