use std::collections::HashMap;

use tracing::trace;

/// Per-learner running score for every item answered in the current session.
///
/// Items that were never answered have no entry and read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerformanceLedger {
    scores: HashMap<String, i64>,
}

impl PerformanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net corrects minus incorrects for `item`, zero when unseen.
    pub fn score(&self, item: &str) -> i64 {
        self.scores.get(item).copied().unwrap_or(0)
    }

    /// Apply the outcome of one answered question to `item`.
    pub fn record_answer(&mut self, item: &str, is_correct: bool) {
        let delta = if is_correct { 1 } else { -1 };
        let score = self.scores.entry(item.to_string()).or_insert(0);
        *score += delta;
        trace!(item, score = *score, is_correct, "ledger updated");
    }

    /// Number of distinct items answered at least once.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.scores
            .iter()
            .map(|(item, score)| (item.as_str(), *score))
    }

    /// Forget everything; used when the learner restarts or switches quiz.
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

/// Record one answer for `item` in `ledger`.
pub fn record_answer(ledger: &mut PerformanceLedger, item: &str, is_correct: bool) {
    ledger.record_answer(item, is_correct);
}
