use std::collections::BTreeSet;

use super::common::*;
use crate::matching::{
    Candidate, EngineConfig, KeywordVocabulary, MatchStrategy, RequiredSkills, ScoringEngine,
    EXPERIENCE_WEIGHT,
};
use proptest::prelude::*;

#[test]
fn declared_and_extracted_skills_both_count() {
    let engine = engine();
    let candidate = candidate("a", &["python"], "5 years experience, used SQL daily");

    let result = engine.score(&candidate, &required(&["python", "sql"]));

    assert_eq!(result.matched_skills, vec!["python", "sql"]);
    assert!(result.missing_skills.is_empty());
    assert!(result.score >= 0.7);

    let expected = 0.7 + 0.2 * (1.0 / 6.0) + 0.1 * 0.5;
    assert!((result.score - expected).abs() < 1e-9, "score {}", result.score);
}

#[test]
fn oversized_tenure_saturates_experience() {
    let engine = engine();
    let candidate = candidate("v", &[], "Veteran with 10000000000 years of python");

    let breakdown = engine.breakdown(&candidate, &required(&["python"]));

    assert_eq!(breakdown.experience, 1.0);
    let expected = 0.7 + 0.2 * (1.0 / 3.0) + 0.1;
    assert!((breakdown.total - expected).abs() < 1e-9, "score {}", breakdown.total);
}

#[test]
fn empty_profile_scores_zero() {
    let engine = engine();
    let candidate = candidate("b", &[], "");

    let result = engine.score(&candidate, &required(&["react"]));

    assert!(result.matched_skills.is_empty());
    assert_eq!(result.missing_skills, vec!["react"]);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.notes_snippet, "");
}

#[test]
fn extraction_from_notes_ignores_case() {
    let engine = engine();
    let candidate = candidate("c", &[], "Built APIs with PYTHON and Django");

    let result = engine.score(&candidate, &required(&["python"]));

    assert_eq!(result.matched_skills, vec!["python"]);
}

#[test]
fn empty_requirements_never_reward_skill_coverage() {
    let engine = engine();
    let candidate = candidate("d", &["rust", "go"], "Rust for 12 years, rust everywhere");

    let breakdown = engine.breakdown(&candidate, &RequiredSkills::new());
    let result = engine.score(&candidate, &RequiredSkills::new());

    assert_eq!(breakdown.skill_coverage, 0.0);
    assert_eq!(breakdown.keyword_density, 0.0);
    assert_eq!(breakdown.experience, 1.0);
    assert!(result.score <= EXPERIENCE_WEIGHT);
    assert!(result.matched_skills.is_empty());
    assert!(result.missing_skills.is_empty());
}

#[test]
fn matched_and_missing_follow_required_order() {
    let engine = engine();
    let candidate = candidate("e", &["docker"], "Terraform modules and some docker");

    let result = engine.score(
        &candidate,
        &required(&["kubernetes", "docker", "aws", "terraform"]),
    );

    assert_eq!(result.matched_skills, vec!["docker", "terraform"]);
    assert_eq!(result.missing_skills, vec!["kubernetes", "aws"]);
}

#[test]
fn density_saturates_through_the_final_clamp() {
    let engine = engine();
    let notes = "sql ".repeat(30);
    let candidate = candidate("f", &[], &notes);

    let breakdown = engine.breakdown(&candidate, &required(&["sql"]));
    let result = engine.score(&candidate, &required(&["sql"]));

    assert_eq!(breakdown.keyword_density, 10.0);
    assert_eq!(result.score, 1.0);
}

#[test]
fn token_boundary_strategy_avoids_cross_contamination() {
    let substring = engine();
    let boundary = ScoringEngine::new(
        EngineConfig::default().with_strategy(MatchStrategy::TokenBoundary),
    );
    let candidate = candidate("g", &[], "Senior JavaScript developer");
    let skills = required(&["java"]);

    assert_eq!(
        substring.score(&candidate, &skills).matched_skills,
        vec!["java"]
    );
    assert_eq!(
        boundary.score(&candidate, &skills).missing_skills,
        vec!["java"]
    );
}

#[test]
fn vocabulary_override_changes_inferred_skills() {
    let engine = ScoringEngine::new(
        EngineConfig::default().with_vocabulary(KeywordVocabulary::new(["elixir"])),
    );

    let inferred = engine.extract("Elixir and React on the side", &RequiredSkills::new());

    assert_eq!(inferred, BTreeSet::from(["elixir".to_string()]));
}

#[test]
fn scoring_does_not_mutate_inputs() {
    let engine = engine();
    let candidate = candidate("h", &["Python"], "Python, 3 years");
    let snapshot = candidate.clone();
    let skills = required(&["python"]);

    let _ = engine.score(&candidate, &skills);

    assert_eq!(candidate, snapshot);
    assert_eq!(skills, required(&["python"]));
}

#[test]
fn declared_skills_are_compared_case_insensitively() {
    let engine = engine();
    let mut candidate = Candidate::new("i", "Legacy import");
    candidate.skills = vec!["PostgreSQL".to_string()];

    let result = engine.score(&candidate, &required(&["postgresql"]));

    assert_eq!(result.matched_skills, vec!["postgresql"]);
}

proptest! {
    #[test]
    fn score_is_bounded_and_skills_partition_requirements(
        raw_required in prop::collection::vec("[A-Za-z+#. ]{0,8}", 0..6),
        declared in prop::collection::vec("[a-z+#.]{1,8}", 0..6),
        notes in ".{0,200}",
    ) {
        let engine = engine();
        let skills: RequiredSkills = raw_required.iter().collect();
        let candidate = Candidate::new("p", "Property")
            .with_skills(&declared)
            .with_notes(notes);

        let result = engine.score(&candidate, &skills);

        prop_assert!((0.0..=1.0).contains(&result.score));

        let matched: BTreeSet<&str> = result.matched_skills.iter().map(String::as_str).collect();
        let missing: BTreeSet<&str> = result.missing_skills.iter().map(String::as_str).collect();
        let expected: BTreeSet<&str> = skills.iter().collect();
        prop_assert!(matched.is_disjoint(&missing));
        prop_assert_eq!(matched.union(&missing).copied().collect::<BTreeSet<_>>(), expected);
    }
}
