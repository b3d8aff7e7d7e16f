use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One video file referenced by a pair. Identity is the repo-relative `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    pub path: String,
    pub source: String,
}

/// One comparison instance: two videos of the same instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub instruction: String,
    #[serde(rename = "videoA")]
    pub video_a: VideoRef,
    #[serde(rename = "videoB")]
    pub video_b: VideoRef,
}

/// Hand-assigned judgment for a quiz pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectAnswer {
    Left,
    Right,
    Same,
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CorrectAnswer::Left => "left",
            CorrectAnswer::Right => "right",
            CorrectAnswer::Same => "same",
        };
        f.write_str(s)
    }
}

/// Annotation keyed to a manifest position. Fragile to reordering, which is
/// exactly what `find_quiz_pairs` repairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnnotation {
    pub correct_answer: CorrectAnswer,
}

pub fn load_pairs(path: &Path) -> Result<Vec<Pair>> {
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))
}

/// Overwrite `path` with the manifest as pretty-printed JSON.
pub fn write_pairs(path: &Path, pairs: &[Pair]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, pairs)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// All distinct paths referenced by either side of any pair, in
/// first-reference order. Shared paths count once.
pub fn unique_paths(pairs: &[Pair]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for pair in pairs {
        for p in [&pair.video_a.path, &pair.video_b.path] {
            if seen.insert(p.clone()) {
                paths.push(p.clone());
            }
        }
    }
    paths
}

/// Paths from `paths` that do not exist relative to `repo_root`.
pub fn missing_paths<'a, I>(repo_root: &Path, paths: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    paths
        .into_iter()
        .filter(|p| !repo_root.join(p).exists())
        .cloned()
        .collect()
}
