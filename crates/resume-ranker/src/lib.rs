//! Explainable resume ranking: a deterministic scoring engine plus the thin screening layer
//! that feeds it job requirements and candidate profiles.

pub mod config;
pub mod error;
pub mod matching;
pub mod screening;
pub mod telemetry;

pub use matching::{
    Candidate, CandidateId, EngineConfig, KeywordVocabulary, MatchStrategy, RequiredSkills,
    ScoreResult, ScoringEngine,
};
