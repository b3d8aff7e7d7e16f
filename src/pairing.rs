use std::path::PathBuf;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::manifest::{Pair, VideoRef};
use crate::tasks::TaskGroups;

/// Knobs the generator used to keep as constants edited in source.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub video_root: PathBuf,
    pub excluded_dir: String,
    /// A task must have exactly this many videos across all sources to be
    /// eligible for pairing.
    pub videos_per_task: usize,
    pub output: PathBuf,
    /// Keep at most this many pairs per task after shuffling (None = all).
    pub max_pairs_per_task: Option<usize>,
}

/// All unordered pairwise combinations (i < j): exhaustive and
/// duplicate-free, C(n,2) for n videos.
pub fn pair_combinations(videos: &[VideoRef]) -> Vec<(VideoRef, VideoRef)> {
    let mut combinations = Vec::new();
    for i in 0..videos.len() {
        for j in (i + 1)..videos.len() {
            combinations.push((videos[i].clone(), videos[j].clone()));
        }
    }
    combinations
}

/// Shuffle the combinations and keep the first `limit`, i.e. a uniform
/// random sample without replacement. `None` keeps everything.
pub fn sample_pairs<R: Rng>(
    videos: &[VideoRef],
    limit: Option<usize>,
    rng: &mut R,
) -> Vec<(VideoRef, VideoRef)> {
    let mut combinations = pair_combinations(videos);
    combinations.shuffle(rng);
    if let Some(limit) = limit {
        combinations.truncate(limit);
    }
    combinations
}

/// Build the manifest: for every task with exactly `videos_per_task` videos,
/// emit its sampled combinations tagged with the task name. Tasks with any
/// other count are skipped with a warning.
pub fn generate_pairs<R: Rng>(
    groups: &TaskGroups,
    videos_per_task: usize,
    max_pairs_per_task: Option<usize>,
    rng: &mut R,
) -> Vec<Pair> {
    let mut manifest = Vec::new();
    for (task, videos) in groups.iter() {
        if videos.len() != videos_per_task {
            warn!(
                "Skipping task {task}: has {} videos, expected {videos_per_task}",
                videos.len()
            );
            continue;
        }
        for (video_a, video_b) in sample_pairs(videos, max_pairs_per_task, rng) {
            manifest.push(Pair {
                instruction: task.to_string(),
                video_a,
                video_b,
            });
        }
    }
    manifest
}
