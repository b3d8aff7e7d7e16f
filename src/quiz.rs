use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::manifest::{CorrectAnswer, Pair, QuizAnnotation};

/// Annotations keyed by position in the old manifest. `BTreeMap` keeps the
/// entries in ascending index order.
pub type QuizIndices = BTreeMap<usize, QuizAnnotation>;

/// One old quiz entry relocated in the new manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizMatch {
    pub old_index: usize,
    pub new_index: usize,
    pub correct_answer: CorrectAnswer,
    pub instruction: String,
}

/// Result of searching every annotated old index in the new manifest.
#[derive(Debug, Default)]
pub struct MatchReport {
    pub matches: Vec<QuizMatch>,
    pub unmatched: Vec<usize>,
}

/// The hand-curated quiz annotations from the original manifest revision.
pub fn default_quiz_indices() -> QuizIndices {
    let answers = [
        (1, CorrectAnswer::Left),
        (7, CorrectAnswer::Same),
        (22, CorrectAnswer::Left),
        (360, CorrectAnswer::Right),
        (420, CorrectAnswer::Left),
        (1099, CorrectAnswer::Left),
        (1653, CorrectAnswer::Left),
        (3092, CorrectAnswer::Right),
        (3200, CorrectAnswer::Left),
        (3700, CorrectAnswer::Same),
    ];
    answers
        .into_iter()
        .map(|(index, correct_answer)| (index, QuizAnnotation { correct_answer }))
        .collect()
}

pub fn load_quiz_indices(path: &Path) -> Result<QuizIndices> {
    let file = File::open(path).with_context(|| format!("reading {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))
}

/// First position in `manifest` equal to `pair` on instruction and both
/// video paths. Order-sensitive: a swapped-side pair does not match.
pub fn find_pair(manifest: &[Pair], pair: &Pair) -> Option<usize> {
    manifest.iter().position(|candidate| {
        candidate.instruction == pair.instruction
            && candidate.video_a.path == pair.video_a.path
            && candidate.video_b.path == pair.video_b.path
    })
}

/// Locate every annotated old pair in the new manifest. Old indices that
/// fall outside the old manifest count as unmatched.
pub fn match_quiz_pairs(indices: &QuizIndices, old: &[Pair], new: &[Pair]) -> MatchReport {
    let mut report = MatchReport::default();
    for (&old_index, annotation) in indices {
        let Some(old_pair) = old.get(old_index) else {
            report.unmatched.push(old_index);
            continue;
        };
        match find_pair(new, old_pair) {
            Some(new_index) => report.matches.push(QuizMatch {
                old_index,
                new_index,
                correct_answer: annotation.correct_answer,
                instruction: old_pair.instruction.clone(),
            }),
            None => report.unmatched.push(old_index),
        }
    }
    report
}

/// Re-keyed quiz config: new index -> recorded answer. `limit` caps the
/// number of matches taken, in match order.
pub fn reindexed_config(matches: &[QuizMatch], limit: Option<usize>) -> QuizIndices {
    let take = limit.unwrap_or(matches.len());
    matches
        .iter()
        .take(take)
        .map(|m| {
            (
                m.new_index,
                QuizAnnotation {
                    correct_answer: m.correct_answer,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::VideoRef;

    fn pair(instruction: &str, path_a: &str, path_b: &str) -> Pair {
        Pair {
            instruction: instruction.to_string(),
            video_a: VideoRef {
                path: path_a.to_string(),
                source: "a".to_string(),
            },
            video_b: VideoRef {
                path: path_b.to_string(),
                source: "b".to_string(),
            },
        }
    }

    fn filler(i: usize) -> Pair {
        pair(
            &format!("filler_{i}"),
            &format!("videos/a/filler_{i}.mp4"),
            &format!("videos/b/filler_{i}.mp4"),
        )
    }

    #[test]
    fn find_pair_requires_all_three_fields_equal() {
        let target = pair("pick_cup", "videos/a/pick_cup.mp4", "videos/b/pick_cup.mp4");
        let manifest = vec![
            pair("pick_cup", "videos/a/pick_cup.mp4", "videos/c/pick_cup.mp4"),
            pair("place_cup", "videos/a/pick_cup.mp4", "videos/b/pick_cup.mp4"),
            target.clone(),
        ];
        assert_eq!(find_pair(&manifest, &target), Some(2));
    }

    #[test]
    fn swapped_sides_do_not_match() {
        let target = pair("pick_cup", "videos/a/pick_cup.mp4", "videos/b/pick_cup.mp4");
        let swapped = vec![pair(
            "pick_cup",
            "videos/b/pick_cup.mp4",
            "videos/a/pick_cup.mp4",
        )];
        assert_eq!(find_pair(&swapped, &target), None);
    }

    #[test]
    fn first_matching_position_wins() {
        let target = pair("pick_cup", "videos/a/pick_cup.mp4", "videos/b/pick_cup.mp4");
        let manifest = vec![filler(0), target.clone(), target.clone()];
        assert_eq!(find_pair(&manifest, &target), Some(1));
    }

    #[test]
    fn old_index_7_relocated_to_new_index_42() {
        let target = pair("pick_cup", "videos/a/pick_cup.mp4", "videos/b/pick_cup.mp4");

        let mut old = Vec::new();
        for i in 0..8 {
            old.push(if i == 7 { target.clone() } else { filler(i) });
        }
        let mut new = Vec::new();
        for i in 0..50 {
            new.push(if i == 42 { target.clone() } else { filler(i) });
        }

        let mut indices = QuizIndices::new();
        indices.insert(
            7,
            QuizAnnotation {
                correct_answer: CorrectAnswer::Same,
            },
        );

        let report = match_quiz_pairs(&indices, &old, &new);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].old_index, 7);
        assert_eq!(report.matches[0].new_index, 42);
        assert!(report.unmatched.is_empty());

        let config = reindexed_config(&report.matches, None);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["42"]["correct_answer"], "same");
    }

    #[test]
    fn out_of_range_old_index_counts_as_unmatched() {
        let old = vec![filler(0)];
        let new = vec![filler(0)];
        let mut indices = QuizIndices::new();
        indices.insert(
            5,
            QuizAnnotation {
                correct_answer: CorrectAnswer::Left,
            },
        );
        let report = match_quiz_pairs(&indices, &old, &new);
        assert!(report.matches.is_empty());
        assert_eq!(report.unmatched, vec![5]);
    }

    #[test]
    fn primary_config_is_capped_at_five_matches() {
        let matches: Vec<QuizMatch> = (0..8)
            .map(|i| QuizMatch {
                old_index: i,
                new_index: 100 + i,
                correct_answer: CorrectAnswer::Left,
                instruction: format!("task_{i}"),
            })
            .collect();
        assert_eq!(reindexed_config(&matches, Some(5)).len(), 5);
        assert_eq!(reindexed_config(&matches, None).len(), 8);
    }

    #[test]
    fn default_quiz_indices_cover_the_ten_curated_positions() {
        let indices = default_quiz_indices();
        assert_eq!(indices.len(), 10);
        assert_eq!(
            indices[&7].correct_answer,
            CorrectAnswer::Same
        );
        assert_eq!(indices[&3092].correct_answer, CorrectAnswer::Right);
    }
}
