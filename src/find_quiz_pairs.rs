/*
cargo run --bin find_quiz_pairs

cargo run --bin find_quiz_pairs -- \
    --old-pairs videos/pairs_old.json \
    --new-pairs videos/pairs.json \
    --quiz-file my_quiz.json
*/

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use log::warn;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use vidpairs::manifest::load_pairs;
use vidpairs::quiz::{
    default_quiz_indices, load_quiz_indices, match_quiz_pairs, reindexed_config,
};

/// How many matches feed the primary (paid-worker) quiz config.
const PRIMARY_QUIZ_SIZE: usize = 5;

// Relocate position-indexed quiz annotations after a manifest regeneration
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    // Manifest the quiz indices refer to
    #[arg(long, default_value = "videos/pairs_old.json")]
    old_pairs: PathBuf,

    // Freshly generated manifest to search
    #[arg(long, default_value = "videos/pairs.json")]
    new_pairs: PathBuf,

    // JSON object mapping old index to {"correct_answer": ...}
    // (omit to use the built-in curated set)
    #[arg(long)]
    quiz_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let _ = TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        eprintln!(
            "\nMake sure {} and {} exist.",
            args.new_pairs.display(),
            args.old_pairs.display()
        );
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let indices = match &args.quiz_file {
        Some(path) => load_quiz_indices(path)?,
        None => default_quiz_indices(),
    };
    let old = load_pairs(&args.old_pairs)?;
    let new = load_pairs(&args.new_pairs)?;

    println!("\n=== SEARCHING FOR OLD QUIZ PAIRS IN THE NEW MANIFEST ===\n");
    println!("Old quiz pairs:\n");
    for (&index, annotation) in &indices {
        match old.get(index) {
            Some(pair) => {
                println!("Index {index} (correct: {}):", annotation.correct_answer);
                println!("  Task: {}", pair.instruction);
                println!("  Video A: {} - {}", pair.video_a.source, pair.video_a.path);
                println!("  Video B: {} - {}", pair.video_b.source, pair.video_b.path);
                println!();
            }
            None => println!("Index {index}: not present in the old manifest\n"),
        }
    }

    let report = match_quiz_pairs(&indices, &old, &new);

    println!("\n=== MATCHES FOUND ===\n");
    for m in &report.matches {
        println!("FOUND: Old index {} -> New index {}", m.old_index, m.new_index);
        println!("   Task: {}", m.instruction);
        println!("   Correct answer: {}", m.correct_answer);
        println!();
    }
    for index in &report.unmatched {
        println!("NOT FOUND: Old index {index}");
    }

    if !report.matches.is_empty() {
        println!("\n=== NEW QUIZ CONFIG ===\n");
        let primary = reindexed_config(&report.matches, Some(PRIMARY_QUIZ_SIZE));
        println!(
            "Primary quiz (first {PRIMARY_QUIZ_SIZE}):\n{}\n",
            serde_json::to_string_pretty(&primary)?
        );
        let sanity = reindexed_config(&report.matches, None);
        println!(
            "Sanity check pairs (all found):\n{}",
            serde_json::to_string_pretty(&sanity)?
        );
    }

    println!("\n=== SUMMARY ===");
    println!("Total old quiz pairs: {}", indices.len());
    println!("Matches found: {}", report.matches.len());
    println!("Missing pairs: {}", report.unmatched.len());
    if report.matches.len() < indices.len() {
        warn!("Not all quiz pairs were found; select replacements manually");
    }
    Ok(())
}
