use super::positions::Positions;
use std::collections::BTreeSet;

/// Result of scoring one submitted selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: usize,
    pub wrong: usize,
    pub decoy_hit: bool,
}

/// Partitions every selected index into exactly one bucket: raccoon,
/// wolf, or empty cell.
pub fn evaluate(selected: &BTreeSet<usize>, positions: &Positions) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for index in selected {
        if positions.decoys.contains(index) {
            evaluation.decoy_hit = true;
        } else if positions.targets.contains(index) {
            evaluation.correct += 1;
        } else {
            evaluation.wrong += 1;
        }
    }

    evaluation
}

impl Evaluation {
    /// Exact match: every wolf found and nothing else picked. Selecting a
    /// decoy or an empty cell lands in another bucket, so checking the
    /// correct count against the target count also rules out
    /// over-selection.
    pub fn is_exact_match(&self, target_count: usize) -> bool {
        !self.decoy_hit && self.wrong == 0 && self.correct == target_count
    }
}
