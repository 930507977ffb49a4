use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalizer::normalize_skill;

/// Technology keywords recognized in free text even when the job does not ask for them.
pub const DEFAULT_KEYWORDS: [&str; 40] = [
    "react",
    "vue",
    "angular",
    "node",
    "express",
    "python",
    "django",
    "flask",
    "fastapi",
    "java",
    "spring",
    "kotlin",
    "swift",
    "go",
    "rust",
    "php",
    "laravel",
    "ruby",
    "rails",
    "sql",
    "postgres",
    "mysql",
    "mongodb",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "terraform",
    "graphql",
    "rest",
    "html",
    "css",
    "tailwind",
    "typescript",
    "javascript",
    "pandas",
    "numpy",
    "pytorch",
    "tensorflow",
];

/// How a skill token has to appear in text to count as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Plain substring containment. "java" is found inside "javascript".
    #[default]
    Substring,
    /// Containment where the neighbouring characters are not ASCII alphanumeric.
    TokenBoundary,
}

impl MatchStrategy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::TokenBoundary => "token_boundary",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a strategy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match strategy '{0}' (expected substring or token_boundary)")]
pub struct UnknownMatchStrategy(pub String);

impl FromStr for MatchStrategy {
    type Err = UnknownMatchStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(Self::Substring),
            "token_boundary" | "boundary" | "token" => Ok(Self::TokenBoundary),
            _ => Err(UnknownMatchStrategy(value.to_string())),
        }
    }
}

/// Injectable keyword list scanned by the extractor alongside the required skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordVocabulary {
    keywords: Vec<String>,
}

impl KeywordVocabulary {
    /// Build a vocabulary from raw tokens; entries are normalized and deduplicated.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::empty().with_keywords(keywords)
    }

    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in keywords {
            let keyword = normalize_skill(raw.as_ref());
            if !keyword.is_empty() && !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for KeywordVocabulary {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
        }
    }
}

/// Infer skills mentioned in `text`.
///
/// `required` must already be normalized. Containment is checked against the lower-cased
/// text only; the haystack is not normalized.
pub fn extract_skills<'a, I>(
    text: &str,
    required: I,
    vocabulary: &'a KeywordVocabulary,
    strategy: MatchStrategy,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let haystack = text.to_lowercase();
    let mut found = BTreeSet::new();

    for skill in required.into_iter().chain(vocabulary.iter()) {
        if contains(&haystack, skill, strategy) {
            found.insert(skill.to_string());
        }
    }

    found
}

/// Count non-overlapping occurrences of `needle` in an already lower-cased `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str, strategy: MatchStrategy) -> usize {
    if needle.is_empty() {
        return 0;
    }

    match strategy {
        MatchStrategy::Substring => haystack.matches(needle).count(),
        MatchStrategy::TokenBoundary => haystack
            .match_indices(needle)
            .filter(|(start, _)| on_boundary(haystack, *start, needle.len()))
            .count(),
    }
}

fn contains(haystack: &str, needle: &str, strategy: MatchStrategy) -> bool {
    if needle.is_empty() {
        return false;
    }

    match strategy {
        MatchStrategy::Substring => haystack.contains(needle),
        MatchStrategy::TokenBoundary => count_occurrences(haystack, needle, strategy) > 0,
    }
}

fn on_boundary(haystack: &str, start: usize, len: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[start + len..].chars().next();
    !before.is_some_and(|ch| ch.is_ascii_alphanumeric())
        && !after.is_some_and(|ch| ch.is_ascii_alphanumeric())
}
