//! Deterministic skill matching: normalization, extraction, scoring and ranking.
//!
//! Every function here is pure over its inputs. The same candidates and required skills
//! always produce the same scores in the same order.

mod config;
pub mod domain;
pub mod extractor;
pub mod normalizer;
mod ranker;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{
    EngineConfig, ScoringWeights, DENSITY_DIVISOR, DENSITY_WEIGHT, EXPERIENCE_WEIGHT,
    SKILL_WEIGHT, SNIPPET_WORD_LIMIT, YEARS_CAP,
};
pub use domain::{
    Candidate, CandidateId, RequiredSkills, ScoreBreakdown, ScoreResult, SourceDocument,
};
pub use extractor::{
    count_occurrences, extract_skills, KeywordVocabulary, MatchStrategy, UnknownMatchStrategy,
    DEFAULT_KEYWORDS,
};
pub use normalizer::normalize_skill;

use std::collections::BTreeSet;

use tracing::debug;

/// Stateless engine applying one [`EngineConfig`] to candidates.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score a single candidate against the required skills.
    pub fn score(&self, candidate: &Candidate, required: &RequiredSkills) -> ScoreResult {
        let required = rules::prepare_required(required.iter());
        rules::score_candidate(candidate, &required, &self.config).0
    }

    /// Component values behind [`ScoringEngine::score`].
    pub fn breakdown(&self, candidate: &Candidate, required: &RequiredSkills) -> ScoreBreakdown {
        let required = rules::prepare_required(required.iter());
        rules::score_candidate(candidate, &required, &self.config).1
    }

    /// Infer the skills mentioned in free text using this engine's vocabulary and strategy.
    pub fn extract(&self, text: &str, required: &RequiredSkills) -> BTreeSet<String> {
        extract_skills(
            text,
            required.iter(),
            &self.config.vocabulary,
            self.config.strategy,
        )
    }

    /// Rank candidates by descending score, keeping input order among equal scores.
    pub fn rank<S>(&self, candidates: &[Candidate], required: &[S]) -> Vec<ScoreResult>
    where
        S: AsRef<str>,
    {
        let required = rules::prepare_required(required.iter().map(|skill| skill.as_ref()));
        debug!(
            candidates = candidates.len(),
            required_skills = required.len(),
            strategy = %self.config.strategy,
            "ranking candidates"
        );
        ranker::rank_candidates(candidates, &required, &self.config)
    }
}
