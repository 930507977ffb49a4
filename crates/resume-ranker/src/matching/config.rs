use serde::{Deserialize, Serialize};

use super::extractor::{KeywordVocabulary, MatchStrategy};

/// Share of the score driven by required-skill coverage.
pub const SKILL_WEIGHT: f64 = 0.7;
/// Share of the score driven by how often matched skills are mentioned.
pub const DENSITY_WEIGHT: f64 = 0.2;
/// Share of the score driven by the largest "N years" mention.
pub const EXPERIENCE_WEIGHT: f64 = 0.1;
/// Mentions per required skill that saturate the density signal.
pub const DENSITY_DIVISOR: f64 = 3.0;
/// Years of experience that saturate the experience signal.
pub const YEARS_CAP: f64 = 10.0;
/// Words kept in the evidence snippet.
pub const SNIPPET_WORD_LIMIT: usize = 40;

/// Weights applied to the three score components before clamping to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub density: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: SKILL_WEIGHT,
            density: DENSITY_WEIGHT,
            experience: EXPERIENCE_WEIGHT,
        }
    }
}

/// Tunables for the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub vocabulary: KeywordVocabulary,
    #[serde(default)]
    pub strategy: MatchStrategy,
}

impl EngineConfig {
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: KeywordVocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }
}
