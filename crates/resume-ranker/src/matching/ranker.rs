use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::EngineConfig;
use super::domain::{Candidate, ScoreResult};
use super::rules::score_candidate;

/// Score every candidate and order the results by descending score.
///
/// Ties keep their input order: each result carries its input position into the sort key,
/// so the guarantee does not depend on the sort algorithm.
pub(crate) fn rank_candidates(
    candidates: &[Candidate],
    required: &[String],
    config: &EngineConfig,
) -> Vec<ScoreResult> {
    #[cfg(feature = "parallel")]
    let iter = candidates.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = candidates.iter();

    let mut scored: Vec<(usize, ScoreResult)> = iter
        .enumerate()
        .map(|(position, candidate)| (position, score_candidate(candidate, required, config).0))
        .collect();

    scored.sort_by(|(left_pos, left), (right_pos, right)| {
        right
            .score
            .partial_cmp(&left.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left_pos.cmp(right_pos))
    });

    scored.into_iter().map(|(_, result)| result).collect()
}
