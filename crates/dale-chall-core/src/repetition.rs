//! Repeated difficult word handling.
//!
//! A difficult word only burdens the reader the first time it shows up. For
//! every word value (compared case-insensitively) that has a difficult
//! occurrence and appears more than once, the first occurrence stays
//! difficult and every later one becomes easy.

use std::collections::HashMap;

/// Reclassify repeated difficult words.
///
/// `easy[i]` is the initial verdict for `words[i]`. Decisions are computed
/// for every distinct value first and applied afterwards, so the result does
/// not depend on iteration order. Applying it twice gives the same result.
/// Positions missing from `easy` count as difficult.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn normalize_repetitions(words: &[String], easy: &[bool]) -> Vec<bool> {
    let mut occurrences: HashMap<String, Vec<usize>> = HashMap::new();
    for (pos, word) in words.iter().enumerate() {
        occurrences.entry(word.to_lowercase()).or_default().push(pos);
    }

    let is_easy = |pos: usize| easy.get(pos).copied().unwrap_or(false);

    // Phase 1: decide.
    let mut decisions: Vec<(usize, bool)> = Vec::new();
    for positions in occurrences.values() {
        if positions.len() < 2 || positions.iter().all(|&pos| is_easy(pos)) {
            continue;
        }
        for (nth, &pos) in positions.iter().enumerate() {
            decisions.push((pos, nth != 0));
        }
    }

    // Phase 2: apply.
    let mut result: Vec<bool> = (0..words.len()).map(is_easy).collect();
    let mut reclassified = 0usize;
    for (pos, verdict) in decisions {
        if result[pos] != verdict {
            reclassified += 1;
        }
        result[pos] = verdict;
    }

    tracing::debug!(reclassified, "repetition pass complete");
    result
}

/// Words split into easy and difficult lists, each in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Words counted as easy.
    pub easy: Vec<String>,
    /// Words counted as difficult.
    pub difficult: Vec<String>,
}

impl Partition {
    /// Build a partition from words and their verdicts.
    pub fn from_flags(words: &[String], easy: &[bool]) -> Self {
        let mut partition = Self::default();
        for (word, &is_easy) in words.iter().zip(easy) {
            if is_easy {
                partition.easy.push(word.clone());
            } else {
                partition.difficult.push(word.clone());
            }
        }
        partition
    }
}
