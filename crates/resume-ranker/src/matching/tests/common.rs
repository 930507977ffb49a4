use crate::matching::{Candidate, EngineConfig, RequiredSkills, ScoringEngine, ScoringWeights};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(EngineConfig::default())
}

/// Engine that only rewards skill coverage, so scores land on exact fractions.
pub(super) fn coverage_only_engine() -> ScoringEngine {
    ScoringEngine::new(EngineConfig {
        weights: ScoringWeights {
            skills: 1.0,
            density: 0.0,
            experience: 0.0,
        },
        ..EngineConfig::default()
    })
}

pub(super) fn required(skills: &[&str]) -> RequiredSkills {
    skills.iter().collect()
}

pub(super) fn candidate(id: &str, skills: &[&str], notes: &str) -> Candidate {
    Candidate::new(id, format!("Candidate {id}"))
        .with_skills(skills)
        .with_notes(notes)
}

pub(super) fn ids(results: &[crate::matching::ScoreResult]) -> Vec<&str> {
    results.iter().map(|result| result.id.as_str()).collect()
}
