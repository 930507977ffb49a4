use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::normalizer::normalize_skill;

/// Identifier wrapper for candidates admitted to a screening pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Metadata for the uploaded artifact a candidate was created from. Never read by scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub received_at: DateTime<Utc>,
}

/// Candidate profile as supplied by the data-entry layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceDocument>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CandidateId(id.into()),
            name: name.into(),
            notes: String::new(),
            skills: Vec::new(),
            source: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for skill in skills {
            self.add_skill(skill.as_ref());
        }
        self
    }

    /// Attach a declared skill. Blank or duplicate tokens are ignored.
    pub fn add_skill(&mut self, raw: &str) -> bool {
        let skill = normalize_skill(raw);
        if skill.is_empty() || self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|existing| existing != skill);
        self.skills.len() != before
    }
}

/// Ordered-unique set of normalized skill tokens demanded by a job.
///
/// Insertion order is preserved for display; membership is case-insensitive because every
/// entry passes through [`normalize_skill`] on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RequiredSkills {
    skills: Vec<String>,
}

impl RequiredSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and append a skill, returning `false` when it was blank or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let skill = normalize_skill(raw);
        if skill.is_empty() || self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|existing| existing != skill);
        self.skills.len() != before
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|existing| existing == skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RequiredSkills {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut skills = Self::new();
        for raw in iter {
            skills.insert(raw.as_ref());
        }
        skills
    }
}

impl From<Vec<String>> for RequiredSkills {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<RequiredSkills> for Vec<String> {
    fn from(value: RequiredSkills) -> Self {
        value.skills
    }
}

/// Ranked, explainable match outcome for a single candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub id: CandidateId,
    pub name: String,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub notes_snippet: String,
}

impl ScoreResult {
    /// Score rendered as a whole percentage for presentation.
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Component values behind a score, kept for audits and tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_coverage: f64,
    pub keyword_density: f64,
    pub experience: f64,
    pub total: f64,
}
