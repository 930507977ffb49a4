use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::config::{EngineConfig, DENSITY_DIVISOR, SNIPPET_WORD_LIMIT, YEARS_CAP};
use super::domain::{Candidate, ScoreBreakdown, ScoreResult};
use super::extractor::{count_occurrences, extract_skills};

static YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s+years?").expect("invalid years-of-experience regex"));

/// Lower-case, trim and deduplicate required skills while keeping their order.
pub(crate) fn prepare_required<'a, I>(required: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut prepared: Vec<String> = Vec::new();
    for raw in required {
        let skill = raw.trim().to_lowercase();
        if !skill.is_empty() && !prepared.contains(&skill) {
            prepared.push(skill);
        }
    }
    prepared
}

pub(crate) fn score_candidate(
    candidate: &Candidate,
    required: &[String],
    config: &EngineConfig,
) -> (ScoreResult, ScoreBreakdown) {
    let mut declared: BTreeSet<String> = candidate
        .skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .collect();
    declared.extend(extract_skills(
        &candidate.notes,
        required.iter().map(String::as_str),
        &config.vocabulary,
        config.strategy,
    ));

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| declared.contains(skill));

    let text = candidate.notes.to_lowercase();
    let skill_coverage = if required.is_empty() {
        0.0
    } else {
        matched.len() as f64 / required.len() as f64
    };
    let keyword_density = if required.is_empty() {
        0.0
    } else {
        let mentions: usize = matched
            .iter()
            .map(|skill| count_occurrences(&text, skill, config.strategy))
            .sum();
        mentions as f64 / (required.len() as f64 * DENSITY_DIVISOR)
    };
    let experience = estimate_years(&text);

    let weights = config.weights;
    let total = (skill_coverage * weights.skills
        + keyword_density * weights.density
        + experience * weights.experience)
        .clamp(0.0, 1.0);

    let result = ScoreResult {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        score: total,
        matched_skills: matched,
        missing_skills: missing,
        notes_snippet: summarize_notes(&candidate.notes),
    };
    let breakdown = ScoreBreakdown {
        skill_coverage,
        keyword_density,
        experience,
        total,
    };

    (result, breakdown)
}

/// Largest "N year(s)" mention scaled to `[0, 1]`. Numbers too large for `u64` saturate.
pub(crate) fn estimate_years(text: &str) -> f64 {
    let max_years = YEARS_PATTERN
        .captures_iter(&text.to_lowercase())
        .filter_map(|captures| captures.get(1))
        .map(|digits| digits.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .max()
        .unwrap_or(0);

    (max_years as f64 / YEARS_CAP).min(1.0)
}

/// First words of the notes, whitespace-collapsed, for display next to a result.
pub(crate) fn summarize_notes(notes: &str) -> String {
    notes
        .split_whitespace()
        .take(SNIPPET_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ")
}
