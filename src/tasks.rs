use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::manifest::VideoRef;

pub const VIDEO_EXT: &str = "mp4";

/// Videos grouped by task name, keys in first-seen order.
#[derive(Debug, Default)]
pub struct TaskGroups {
    order: Vec<String>,
    groups: HashMap<String, Vec<VideoRef>>,
}

impl TaskGroups {
    pub fn insert(&mut self, task: String, video: VideoRef) {
        if !self.groups.contains_key(&task) {
            self.order.push(task.clone());
        }
        self.groups.entry(task).or_default().push(video);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[VideoRef])> {
        self.order
            .iter()
            .map(|task| (task.as_str(), self.groups[task].as_slice()))
    }

    pub fn get(&self, task: &str) -> Option<&[VideoRef]> {
        self.groups.get(task).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Group `(path, source)` tuples by the task name derived from the filename
/// stem, e.g. `videos/a/test_open_drawer_1.mp4` -> `test_open_drawer_1`.
pub fn group_by_task(files: &[(String, String)]) -> TaskGroups {
    let mut groups = TaskGroups::default();
    for (path, source) in files {
        let task = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path.as_str())
            .to_string();
        groups.insert(
            task,
            VideoRef {
                path: path.clone(),
                source: source.clone(),
            },
        );
    }
    groups
}

/// Scan the video root and return `(repo-relative path, source dir)` for
/// every video file outside the excluded category. Directories and files are
/// visited in name order so the pre-shuffle pair order is reproducible.
pub fn collect_videos(video_root: &Path, excluded_dir: &str) -> Result<Vec<(String, String)>> {
    let root_name = video_root
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned);

    let mut dirs = Vec::new();
    let entries = fs::read_dir(video_root)
        .with_context(|| format!("reading video root {}", video_root.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != excluded_dir {
            dirs.push(name);
        }
    }
    dirs.sort();

    let mut files = Vec::new();
    for dir in &dirs {
        let mut names = Vec::new();
        let entries = fs::read_dir(video_root.join(dir))
            .with_context(|| format!("reading {}", video_root.join(dir).display()))?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if Path::new(&name).extension().and_then(|e| e.to_str()) == Some(VIDEO_EXT) {
                names.push(name);
            }
        }
        names.sort();

        for name in names {
            let rel = match &root_name {
                Some(root) => format!("{root}/{dir}/{name}"),
                None => format!("{dir}/{name}"),
            };
            files.push((rel, dir.clone()));
        }
    }
    Ok(files)
}
