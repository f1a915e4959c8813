use super::weight::score_weight;
use crate::error::{QuizError, Result};
use crate::ledger::PerformanceLedger;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

/// Trait for different item selection strategies
pub trait ItemSelector {
    /// Pick the next item to ask from `candidates`
    fn select<'a>(
        &self,
        candidates: &'a [String],
        ledger: &PerformanceLedger,
        rng: &mut dyn RngCore,
    ) -> Result<&'a str>;
}

/// Uniform selection that ignores the ledger
pub struct UniformSelector;

impl ItemSelector for UniformSelector {
    fn select<'a>(
        &self,
        candidates: &'a [String],
        _ledger: &PerformanceLedger,
        rng: &mut dyn RngCore,
    ) -> Result<&'a str> {
        candidates
            .choose(rng)
            .map(String::as_str)
            .ok_or(QuizError::EmptyCandidateSet)
    }
}

/// Selection weighted toward items the learner keeps missing
pub struct AdaptiveSelector;

impl ItemSelector for AdaptiveSelector {
    fn select<'a>(
        &self,
        candidates: &'a [String],
        ledger: &PerformanceLedger,
        rng: &mut dyn RngCore,
    ) -> Result<&'a str> {
        draw_next_item(candidates, ledger, rng)
    }
}

/// Sampling weight of every candidate, in candidate order
pub fn weights(candidates: &[String], ledger: &PerformanceLedger) -> Vec<f64> {
    candidates
        .iter()
        .map(|item| score_weight(ledger.score(item)))
        .collect()
}

/// Categorical distribution over `candidates` derived from their scores.
///
/// The last entry takes up floating-point slack so the vector sums to 1.
pub fn probabilities(candidates: &[String], ledger: &PerformanceLedger) -> Result<Vec<f64>> {
    if candidates.is_empty() {
        return Err(QuizError::EmptyCandidateSet);
    }

    let weights = weights(candidates, ledger);
    let total: f64 = weights.iter().sum();
    let mut probas: Vec<f64> = weights.iter().map(|w| w / total).collect();

    let head: f64 = probas[..probas.len() - 1].iter().sum();
    if let Some(last) = probas.last_mut() {
        let adjusted = 1.0 - head;
        if adjusted > 0.0 {
            *last = adjusted;
        }
    }

    Ok(probas)
}

/// Draw one candidate from the distribution given by [`probabilities`].
pub fn draw_next_item<'a, R: Rng + ?Sized>(
    candidates: &'a [String],
    ledger: &PerformanceLedger,
    rng: &mut R,
) -> Result<&'a str> {
    let distribution = WeightedIndex::new(probabilities(candidates, ledger)?)?;
    let item = candidates[distribution.sample(rng)].as_str();
    debug!(item, score = ledger.score(item), "drew next item");
    Ok(item)
}
